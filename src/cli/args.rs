use clap::Parser;
use std::path::PathBuf;

/// Record emailed transactions in QIF ledger files
#[derive(Parser, Debug)]
#[command(name = "qif-ledger")]
#[command(about = "Record emailed transactions in QIF ledger files", long_about = None)]
pub struct CliArgs {
    /// Inbox CSV file with `date,message` columns
    #[arg(
        value_name = "INPUT",
        required_unless_present = "init_config",
        help = "Path to the inbox CSV file"
    )]
    pub input_file: Option<PathBuf>,

    /// Settings file (TOML); built-in defaults when omitted
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the configured output directory
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long = "init-config", value_name = "FILE", conflicts_with = "config")]
    pub init_config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::input_only(&["program", "inbox.csv"], Some("inbox.csv"), None, None)]
    #[case::with_config(
        &["program", "--config", "ledger.toml", "inbox.csv"],
        Some("inbox.csv"),
        Some("ledger.toml"),
        None
    )]
    #[case::short_flags(
        &["program", "-c", "ledger.toml", "-o", "/tmp/out", "inbox.csv"],
        Some("inbox.csv"),
        Some("ledger.toml"),
        Some("/tmp/out")
    )]
    fn test_args_parsing(
        #[case] args: &[&str],
        #[case] input: Option<&str>,
        #[case] config: Option<&str>,
        #[case] output_dir: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, input.map(PathBuf::from));
        assert_eq!(parsed.config, config.map(PathBuf::from));
        assert_eq!(parsed.output_dir, output_dir.map(PathBuf::from));
        assert_eq!(parsed.init_config, None);
    }

    #[test]
    fn test_init_config_without_input() {
        let parsed = CliArgs::try_parse_from(["program", "--init-config", "ledger.toml"]).unwrap();
        assert_eq!(parsed.init_config, Some(PathBuf::from("ledger.toml")));
        assert_eq!(parsed.input_file, None);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::init_with_config(&["program", "--init-config", "a.toml", "--config", "b.toml"])]
    #[case::unknown_flag(&["program", "--verbose", "inbox.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
