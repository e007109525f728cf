use crate::errors::StatementExtractError;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Timestamp column of a statement row: a `DD.MM.YYYY` date plus an optional
/// `HH:MM` time.
///
/// The settlement column frequently carries no time, so both shapes must
/// round-trip through the same text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementDateTime {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl StatementDateTime {
    /// Build from the already-separated date and time tokens of a matched line.
    pub fn parse(date: &str, time: Option<&str>) -> Result<Self, StatementExtractError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%d.%m.%Y")
            .map_err(|_| StatementExtractError::DateInvalidFormat)?;

        let time = match time {
            Some(t) => Some(
                NaiveTime::parse_from_str(t.trim(), "%H:%M")
                    .map_err(|_| StatementExtractError::DateInvalidFormat)?,
            ),
            None => None,
        };

        Ok(StatementDateTime { date, time })
    }
}

impl FromStr for StatementDateTime {
    type Err = StatementExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let date = parts
            .next()
            .ok_or(StatementExtractError::DateInvalidFormat)?;
        let time = parts.next();

        if parts.next().is_some() {
            return Err(StatementExtractError::DateInvalidFormat);
        }

        Self::parse(date, time)
    }
}

impl fmt::Display for StatementDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%d.%m.%Y"))?;
        if let Some(time) = self.time {
            write!(f, " {}", time.format("%H:%M"))?;
        }
        Ok(())
    }
}

impl Serialize for StatementDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatementDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monetary column in the statement's locale format: optional sign, space
/// thousands separators, decimal comma or dot, `₽` suffix.
///
/// Keeps the verbatim source token for output alongside the parsed value, so
/// serialization is byte-compatible with the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    raw: String,
    value: Decimal,
}

impl Amount {
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Amount {
    type Err = StatementExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let normalized = raw
            .trim_end_matches('₽')
            .trim()
            .replace(' ', "")
            .replace(',', ".");

        let value = Decimal::from_str(&normalized)
            .map_err(|_| StatementExtractError::AmountInvalidFormat)?;

        Ok(Amount {
            raw: raw.to_string(),
            value,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Card number referenced by a transaction description, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardNumber {
    Known(String),
    Unknown,
}

/// Placeholder emitted when no card number could be identified.
pub const UNKNOWN_CARD: &str = "unknown";

impl CardNumber {
    pub fn as_str(&self) -> &str {
        match self {
            CardNumber::Known(number) => number,
            CardNumber::Unknown => UNKNOWN_CARD,
        }
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CardNumber {
    fn from(value: String) -> Self {
        if value == UNKNOWN_CARD {
            CardNumber::Unknown
        } else {
            CardNumber::Known(value)
        }
    }
}

impl Serialize for CardNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.into())
    }
}
