use std::path::PathBuf;

use crate::config::ExtractorConfig;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::document;
use crate::errors::StatementExtractError;
use crate::extract::merge::merge_lines;
use crate::extract::record::RecordParser;
use crate::extract::region::RegionSelector;
use crate::types::Transaction;

/// Builder for one extraction run.
///
/// Input can be page texts (tests, pre-extracted documents), a raw text blob,
/// or a PDF path; with none of those set the configured default input path is
/// read, matching the original tool's fixed file name.
pub struct ExtractorBuilder {
    pages: Option<Vec<String>>,
    content: Option<String>,
    filepath: Option<PathBuf>,
    config: ExtractorConfig,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        ExtractorBuilder {
            pages: None,
            content: None,
            filepath: None,
            config: ExtractorConfig::default(),
            sink: Box::new(LogSink),
        }
    }
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use already-extracted page texts, bypassing the document reader.
    pub fn pages(mut self, pages: Vec<String>) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Use a raw text blob, treated as a single page.
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Read and extract the given PDF document.
    pub fn filepath(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default log-based warning sink.
    pub fn diagnostics(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the three extraction stages and return the structured records.
    ///
    /// Lines that fail the record grammar (or carry calendar-invalid values)
    /// go to the diagnostic sink and are skipped; only input I/O failures
    /// surface as errors.
    pub fn extract(self) -> Result<Vec<Transaction>, StatementExtractError> {
        let ExtractorBuilder {
            pages,
            content,
            filepath,
            config,
            sink,
        } = self;

        let pages = match (pages, content) {
            (Some(pages), _) => pages,
            (None, Some(content)) => vec![content],
            (None, None) => {
                let path = filepath.unwrap_or_else(|| config.input_path.clone());
                document::page_texts(&path)?
            }
        };

        let buffer = RegionSelector::from_config(&config).select(&pages);

        let mut transactions = Vec::new();
        for line in merge_lines(&buffer) {
            let Some(captures) = RecordParser::parse(&line) else {
                sink.unparsed(&line);
                continue;
            };
            match Transaction::try_from(captures) {
                Ok(transaction) => transactions.push(transaction),
                Err(_) => sink.unparsed(&line),
            }
        }

        Ok(transactions)
    }
}
