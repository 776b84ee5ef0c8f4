//! Expense identifiers
//!
//! An `ExpenseId` wraps the creation instant in Unix milliseconds. The
//! `IdGenerator` keeps ids strictly increasing even when several expenses
//! are created within the same millisecond.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "exp-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Parse an ID from a string, with or without the `exp-` prefix
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        s.parse()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Hands out strictly increasing, time-derived expense ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the generator so that new ids sort after every existing one
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a ExpenseId>) -> Self {
        Self {
            last: existing.into_iter().map(|id| id.0).max(),
        }
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> ExpenseId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading
    pub fn next_at(&mut self, now_millis: i64) -> ExpenseId {
        let millis = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(millis);
        ExpenseId(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseId::from_millis(1_700_000_000_000);
        assert_eq!(id.to_string(), "exp-1700000000000");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!(
            ExpenseId::parse("exp-1700000000000").unwrap(),
            ExpenseId::from_millis(1_700_000_000_000)
        );
        assert_eq!(
            ExpenseId::parse("42").unwrap(),
            ExpenseId::from_millis(42)
        );
        assert!(ExpenseId::parse("exp-abc").is_err());
    }

    #[test]
    fn test_id_serialization_is_numeric() {
        let id = ExpenseId::from_millis(1234);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1234");
        let back: ExpenseId = serde_json::from_str("1234").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_generator_follows_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(100), ExpenseId::from_millis(100));
        assert_eq!(ids.next_at(250), ExpenseId::from_millis(250));
    }

    #[test]
    fn test_generator_same_millisecond_stays_unique() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(100);
        let b = ids.next_at(100);
        let c = ids.next_at(99);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_generator_seeded_from_existing() {
        let existing = [ExpenseId::from_millis(500), ExpenseId::from_millis(900)];
        let mut ids = IdGenerator::seeded(existing.iter());
        assert_eq!(ids.next_at(300), ExpenseId::from_millis(901));
    }

    #[test]
    fn test_wall_clock_ids_increase() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
    }
}
