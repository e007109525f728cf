use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Markers, filters and paths that define one extraction run.
///
/// The defaults reproduce the fixed TBank account statement layout: the
/// transaction table sits between the "Движение средств" header and the
/// "Пополнения:" totals block, interleaved with bank boilerplate lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Substring that opens the capturable region (the line itself is excluded)
    pub start_marker: String,
    /// Substring that closes the capturable region (the line itself is excluded)
    pub end_marker: String,
    /// Any captured line containing one of these substrings is discarded
    pub ignore_keywords: Vec<String>,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            start_marker: "Движение средств за период".to_string(),
            end_marker: "Пополнения:".to_string(),
            ignore_keywords: ["АО «ТБанк»", "БИК", "ИНН", "КПП", "лицензия"]
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
            input_path: PathBuf::from("input.pdf"),
            output_path: PathBuf::from("output.json"),
        }
    }
}
