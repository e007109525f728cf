use regex::Regex;
use std::sync::LazyLock;

static DATE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}").expect("valid date prefix regex"));

/// Reassemble physical lines into logical records.
///
/// A line opening with a `DD.MM.YYYY` token starts a new record; anything else
/// is a wrapped continuation and is space-joined onto the current record.
/// Lines seen before the first dated line have no record to attach to and are
/// dropped. The final in-progress record is flushed at end of input.
pub fn merge_lines(buffer: &[String]) -> Vec<String> {
    let mut merged = Vec::new();
    let mut current = String::new();

    for line in buffer {
        if DATE_PREFIX_REGEX.is_match(line) {
            if !current.is_empty() {
                merged.push(current.trim().to_string());
            }
            current = line.clone();
        } else if !current.is_empty() {
            current.push(' ');
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        merged.push(current.trim().to_string());
    }

    merged
}
