use regex::Regex;
use std::sync::LazyLock;

/// Raw capture groups of one merged statement line, prior to typed conversion.
///
/// Times are optional in both timestamp columns; the description is everything
/// after the second amount, untouched. Card extraction happens later, in the
/// description cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCaptures {
    pub date1: String,
    pub time1: Option<String>,
    pub date2: String,
    pub time2: Option<String>,
    pub amount1: String,
    pub amount2: String,
    pub description: String,
}

static RECORD_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date1>\d{2}\.\d{2}\.\d{4})(?:\s+(?P<time1>\d{2}:\d{2}))?\s+(?P<date2>\d{2}\.\d{2}\.\d{4})(?:\s+(?P<time2>\d{2}:\d{2}))?\s+(?P<amount1>[+-]?\d{1,3}(?: \d{3})*(?:[.,]\d+)?\s*₽)\s+(?P<amount2>[+-]?\d{1,3}(?: \d{3})*(?:[.,]\d+)?\s*₽)\s+(?P<description>.+)$",
    )
    .expect("valid record line regex")
});

/// Matches merged lines against the fixed positional statement grammar:
/// `date1 [time1] date2 [time2] amount1 amount2 description`.
pub struct RecordParser;

impl RecordParser {
    /// Match one merged line. Returns `None` when the line does not fit the
    /// grammar; the caller decides how to report it.
    pub fn parse(line: &str) -> Option<RecordCaptures> {
        let caps = RECORD_LINE_REGEX.captures(line)?;
        Some(RecordCaptures {
            date1: caps["date1"].to_string(),
            time1: caps.name("time1").map(|m| m.as_str().to_string()),
            date2: caps["date2"].to_string(),
            time2: caps.name("time2").map(|m| m.as_str().to_string()),
            amount1: caps["amount1"].to_string(),
            amount2: caps["amount2"].to_string(),
            description: caps["description"].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_line_with_times() {
        let captures = RecordParser::parse(
            "01.01.2024 12:00 02.01.2024 13:30 -1 234,56 ₽ -1 234,56 ₽ Оплата в магазине",
        )
        .unwrap();

        assert_eq!(captures.date1, "01.01.2024");
        assert_eq!(captures.time1.as_deref(), Some("12:00"));
        assert_eq!(captures.date2, "02.01.2024");
        assert_eq!(captures.time2.as_deref(), Some("13:30"));
        assert_eq!(captures.amount1, "-1 234,56 ₽");
        assert_eq!(captures.amount2, "-1 234,56 ₽");
        assert_eq!(captures.description, "Оплата в магазине");
    }

    #[test]
    fn test_line_without_times() {
        let captures =
            RecordParser::parse("01.01.2024 02.01.2024 -100 ₽ -100 ₽ Перевод").unwrap();

        assert_eq!(captures.time1, None);
        assert_eq!(captures.time2, None);
        assert_eq!(captures.amount1, "-100 ₽");
        assert_eq!(captures.description, "Перевод");
    }

    #[test]
    fn test_mixed_times() {
        // operation stamped, settlement date-only
        let captures =
            RecordParser::parse("01.01.2024 09:15 02.01.2024 +500 ₽ +500 ₽ Возврат").unwrap();

        assert_eq!(captures.time1.as_deref(), Some("09:15"));
        assert_eq!(captures.time2, None);
    }

    #[rstest]
    #[case("-100 ₽")]
    #[case("+100 ₽")]
    #[case("100 ₽")]
    #[case("1 000 000 ₽")]
    #[case("1 234,56 ₽")]
    #[case("1 234.56 ₽")]
    #[case("0,5 ₽")]
    fn test_amount_token_shapes(#[case] amount: &str) {
        let line = format!("01.01.2024 02.01.2024 {amount} {amount} Оплата");
        let captures = RecordParser::parse(&line).unwrap();
        assert_eq!(captures.amount1, amount);
        assert_eq!(captures.amount2, amount);
    }

    #[rstest]
    #[case("")]
    #[case("не строка таблицы")]
    #[case("01.01.2024 02.01.2024 -100 ₽ Оплата")] // one amount missing
    #[case("01.01.2024 -100 ₽ -100 ₽ Оплата")] // one date missing
    #[case("01.01.2024 02.01.2024 -100 ₽ -100 ₽")] // empty description
    #[case("01.01.2024 02.01.2024 100 RUB 100 RUB Оплата")] // wrong currency suffix
    fn test_non_matching_lines(#[case] line: &str) {
        assert_eq!(RecordParser::parse(line), None);
    }

    #[test]
    fn test_description_captured_to_end_of_line() {
        let captures = RecordParser::parse(
            "01.01.2024 02.01.2024 -100 ₽ -100 ₽ Оплата по карте 1234 16:45 хвост",
        )
        .unwrap();
        assert_eq!(captures.description, "Оплата по карте 1234 16:45 хвост");
    }

    #[test]
    fn test_parse_is_pure() {
        let line = "01.01.2024 12:00 01.01.2024 12:00 -100 ₽ -100 ₽ Оплата";
        assert_eq!(RecordParser::parse(line), RecordParser::parse(line));
    }
}
