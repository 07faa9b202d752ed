//! QIF Ledger CLI
//!
//! Command-line interface for recording emailed transactions in QIF ledger files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- inbox.csv
//! cargo run -- --config ledger.toml inbox.csv
//! cargo run -- --config ledger.toml --output-dir /srv/books inbox.csv
//! cargo run -- --init-config ledger.toml
//! RUST_LOG=debug cargo run -- inbox.csv
//! ```
//!
//! The program reads messages from the inbox file, appends transactions to
//! `<output>/transactions/*.qif`, notes to `<output>/miscellaneous.txt`, audit
//! entries to `<output>/logs/`, and prints a run summary to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success (individual rejected messages do not change the exit code)
//! - 1: Error (invalid settings, inbox not readable, etc.)

use qif_ledger::cli;
use qif_ledger::config::Settings;
use qif_ledger::pipeline::Pipeline;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    if let Some(path) = &args.init_config {
        if let Err(e) = Settings::default().write_new(path) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        println!("Wrote default settings to {}", path.display());
        return;
    }

    let mut settings = match &args.config {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => Settings::default(),
    };
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }

    let pipeline = Pipeline::from_settings(&settings).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    // clap guarantees an input file unless --init-config was given
    let Some(input) = args.input_file else {
        eprintln!("Error: no inbox file given");
        process::exit(1);
    };

    let mut output = std::io::stdout();
    if let Err(e) = pipeline.run(&input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
