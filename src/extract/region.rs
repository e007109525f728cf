use crate::config::ExtractorConfig;

/// Selects the line range lying between the start and end markers.
///
/// Marker detection is substring containment, not full-line equality, and the
/// marker lines themselves are excluded. The capture flag survives page
/// boundaries; a repeated start marker simply re-arms it, and a missing end
/// marker leaves the region open to the end of input.
pub struct RegionSelector<'a> {
    start_marker: &'a str,
    end_marker: &'a str,
    ignore_keywords: &'a [String],
}

impl<'a> RegionSelector<'a> {
    pub fn from_config(config: &'a ExtractorConfig) -> Self {
        RegionSelector {
            start_marker: &config.start_marker,
            end_marker: &config.end_marker,
            ignore_keywords: &config.ignore_keywords,
        }
    }

    /// Scan page texts in order and collect the trimmed in-region lines,
    /// dropping any line containing a noise keyword.
    pub fn select(&self, pages: &[String]) -> Vec<String> {
        let mut capture = false;
        let mut buffer = Vec::new();

        for page in pages {
            for line in page.lines() {
                if line.contains(self.start_marker) {
                    capture = true;
                    continue;
                }
                if line.contains(self.end_marker) {
                    capture = false;
                    continue;
                }
                if !capture {
                    continue;
                }
                if self
                    .ignore_keywords
                    .iter()
                    .any(|keyword| line.contains(keyword.as_str()))
                {
                    continue;
                }
                buffer.push(line.trim().to_string());
            }
        }

        buffer
    }
}
