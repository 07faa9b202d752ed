// Configuration module
// Settings file loading and the built-in chart of accounts

mod settings;

pub use settings::{ChartConfig, Settings};
