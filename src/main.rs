use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tbank_statement_rs::errors::{StatementExtractError, StatementResult};
use tbank_statement_rs::{ExtractorBuilder, ExtractorConfig};

/// Extract transactions from a TBank PDF statement into JSON.
#[derive(Parser, Debug)]
#[command(name = "tbank-extract", version, about)]
struct Cli {
    /// Path to the statement PDF
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the JSON array
    #[arg(long)]
    output: Option<PathBuf>,

    /// Substring that opens the transaction region
    #[arg(long)]
    start_marker: Option<String>,

    /// Substring that closes the transaction region
    #[arg(long)]
    end_marker: Option<String>,

    /// Noise keyword; lines containing one are discarded.
    /// Repeatable; replaces the default set when given
    #[arg(long = "ignore", value_name = "KEYWORD")]
    ignore_keywords: Vec<String>,

    /// How many records to preview on stdout
    #[arg(long, default_value_t = 5)]
    preview: usize,
}

impl Cli {
    fn into_config(self) -> (ExtractorConfig, usize) {
        let mut config = ExtractorConfig::default();

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(start_marker) = self.start_marker {
            config.start_marker = start_marker;
        }
        if let Some(end_marker) = self.end_marker {
            config.end_marker = end_marker;
        }
        if !self.ignore_keywords.is_empty() {
            config.ignore_keywords = self.ignore_keywords;
        }

        (config, self.preview)
    }
}

fn run(config: ExtractorConfig, preview: usize) -> StatementResult<()> {
    let output_path = config.output_path.clone();

    let transactions = ExtractorBuilder::new().config(config).extract()?;

    let json = serde_json::to_string_pretty(&transactions)
        .map_err(|e| StatementExtractError::WriteOutputFailed(e.to_string()))?;
    fs::write(&output_path, json)
        .map_err(|e| StatementExtractError::WriteOutputFailed(e.to_string()))?;

    println!(
        "Extracted {} transactions to {}",
        transactions.len(),
        output_path.display()
    );
    for (i, transaction) in transactions.iter().take(preview).enumerate() {
        println!(
            "{}. '{}' | {}",
            i + 1,
            transaction.description,
            transaction.card_number
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (config, preview) = Cli::parse().into_config();
    match run(config, preview) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_map_to_config_defaults() {
        let cli = Cli::parse_from(["tbank-extract"]);
        let (config, preview) = cli.into_config();

        assert_eq!(config.input_path, PathBuf::from("input.pdf"));
        assert_eq!(config.output_path, PathBuf::from("output.json"));
        assert_eq!(config.start_marker, "Движение средств за период");
        assert_eq!(preview, 5);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "tbank-extract",
            "--input",
            "october.pdf",
            "--output",
            "october.json",
            "--start-marker",
            "BEGIN",
            "--end-marker",
            "END",
            "--ignore",
            "шум",
            "--ignore",
            "noise",
            "--preview",
            "0",
        ]);
        let (config, preview) = cli.into_config();

        assert_eq!(config.input_path, PathBuf::from("october.pdf"));
        assert_eq!(config.output_path, PathBuf::from("october.json"));
        assert_eq!(config.start_marker, "BEGIN");
        assert_eq!(config.end_marker, "END");
        assert_eq!(config.ignore_keywords, vec!["шум", "noise"]);
        assert_eq!(preview, 0);
    }

    #[test]
    fn test_cli_keeps_default_noise_set_when_not_given() {
        let cli = Cli::parse_from(["tbank-extract", "--input", "x.pdf"]);
        let (config, _) = cli.into_config();
        assert_eq!(config.ignore_keywords.len(), 5);
    }
}
