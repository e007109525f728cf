use super::types::CardNumber;
use regex::Regex;
use std::sync::LazyLock;

// Trailing page boilerplate: a page number followed by the repeated table
// header, glued onto the description by the line merger.
static GARBAGE_TAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+\d+\s+Дата и время.*$").expect("valid garbage tail regex"));

// Card references introduced by a preposition, checked in this order; the
// first pattern that matches wins.
static STRICT_CARD_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)на\s+(\d{4})\b",
        r"(?i)по\s+(\d{4})\b",
        r"(?i)для\s+(\d{4})\b",
        r"(?i)с\s+(\d{4})\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid strict card regex"))
    .collect()
});

static LOOSE_CARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("valid loose card regex"));

static TIME_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}:\d{2}\b").expect("valid time token regex"));

static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize a raw description and pull the referenced card number out of it.
///
/// Steps run in fixed priority order: strip the garbage tail, find the card
/// number (preposition-guided first, then any standalone 4-digit word), remove
/// every word-bounded occurrence of that number, drop standalone `HH:MM`
/// tokens, and collapse whitespace. When no 4-digit candidate exists the card
/// comes back as [`CardNumber::Unknown`].
pub fn clean_description(raw: &str) -> (String, CardNumber) {
    let mut desc = GARBAGE_TAIL_REGEX.replace(raw.trim(), "").into_owned();

    let mut card = CardNumber::Unknown;
    for regex in STRICT_CARD_REGEXES.iter() {
        if let Some(caps) = regex.captures(&desc) {
            card = CardNumber::Known(caps[1].to_string());
            break;
        }
    }

    if card == CardNumber::Unknown {
        if let Some(caps) = LOOSE_CARD_REGEX.captures(&desc) {
            card = CardNumber::Known(caps[1].to_string());
        }
    }

    if let CardNumber::Known(number) = &card {
        let number_regex =
            Regex::new(&format!(r"\b{number}\b")).expect("valid card number regex");
        desc = number_regex.replace_all(&desc, "").into_owned();
    }

    desc = TIME_TOKEN_REGEX.replace_all(&desc, "").into_owned();
    let desc = WHITESPACE_RUN_REGEX
        .replace_all(&desc, " ")
        .trim()
        .to_string();

    (desc, card)
}
