//! Month key representation
//!
//! Every piece of ledger data belongs to exactly one calendar month,
//! identified by a "YYYY-MM" key. Keys order chronologically, so the
//! document's month map stays sorted.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month identifying one ledger partition (e.g. "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let key = MonthKey::parse("2025-01").unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 1);
    }

    #[test]
    fn test_parse_unpadded() {
        // A lenient parse, but Display always re-pads
        let key = MonthKey::parse("2025-1").unwrap();
        assert_eq!(key.to_string(), "2025-01");
    }

    #[test]
    fn test_parse_rejects_bad_month() {
        assert_eq!(
            MonthKey::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert!(MonthKey::parse("2025").is_err());
        assert!(MonthKey::parse("2025-01-01").is_err());
        assert!(MonthKey::parse("jan 2025").is_err());
    }

    #[test]
    fn test_display() {
        let key = MonthKey::new(2025, 3).unwrap();
        assert_eq!(key.to_string(), "2025-03");
    }

    #[test]
    fn test_ordering() {
        let dec = MonthKey::new(2024, 12).unwrap();
        let jan = MonthKey::new(2025, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let key = MonthKey::new(2025, 1).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_current_is_valid() {
        let key = MonthKey::current();
        assert!((1..=12).contains(&key.month()));
    }
}
