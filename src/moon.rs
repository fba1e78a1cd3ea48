//! Full-moon reference table.
//!
//! A [`MoonTable`] owns the `(date, name)` events it was built from and keeps
//! them grouped by calendar year, each year sorted by date. Lookups never
//! mutate the table, so one instance can be shared freely between threads.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::{LunarError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoonEvent {
    pub date: NaiveDate,
    pub name: String,
}

impl MoonEvent {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Parses an ISO `YYYY-MM-DD` date paired with a moon name.
    pub fn parse(date: &str, name: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|e| {
            LunarError::InvalidMoonDate {
                date: date.trim().to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::new(date, name.trim()))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl fmt::Display for MoonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date.format("%B %-d, %Y"), self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoonTable {
    by_year: BTreeMap<i32, Vec<MoonEvent>>,
    len: usize,
}

impl MoonTable {
    pub fn new(events: impl IntoIterator<Item = MoonEvent>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<MoonEvent>> = BTreeMap::new();
        let mut len = 0;
        for event in events {
            by_year.entry(event.year()).or_default().push(event);
            len += 1;
        }
        // Stable sort keeps table order for duplicate dates.
        for events in by_year.values_mut() {
            events.sort_by_key(|e| e.date);
        }
        Self { by_year, len }
    }

    /// Builds a table from static `(date, name)` pairs, dropping any pair
    /// whose date does not parse.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let events = pairs.iter().filter_map(|(date, name)| {
            match MoonEvent::parse(date, name) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!("Skipping moon table entry {:?}: {}", date, e);
                    None
                }
            }
        });
        Self::new(events)
    }

    /// Parses one `YYYY-MM-DD,Name` entry per line. Blank lines and lines
    /// starting with `#` are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (date, name) = trimmed.split_once(',').ok_or_else(|| LunarError::TableParse {
                line,
                reason: "expected `YYYY-MM-DD,Name`".to_string(),
            })?;
            if name.trim().is_empty() {
                return Err(LunarError::TableParse {
                    line,
                    reason: "missing moon name".to_string(),
                });
            }
            let event = MoonEvent::parse(date, name).map_err(|e| LunarError::TableParse {
                line,
                reason: e.to_string(),
            })?;
            events.push(event);
        }
        Ok(Self::new(events))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = Self::parse(&text)?;
        debug!(
            "Loaded {} moon events from {} ({:?}..={:?})",
            table.len(),
            path.display(),
            table.first_year(),
            table.last_year()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first_year(&self) -> Option<i32> {
        self.by_year.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.by_year.keys().next_back().copied()
    }

    pub fn events_in_year(&self, year: i32) -> &[MoonEvent] {
        self.by_year.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Chronologically last event of `year`.
    pub fn last_in_year(&self, year: i32) -> Option<&MoonEvent> {
        self.events_in_year(year).last()
    }

    /// Chronologically first event of `year`.
    pub fn first_in_year(&self, year: i32) -> Option<&MoonEvent> {
        self.events_in_year(year).first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoonEvent> {
        self.by_year.values().flatten()
    }
}

impl FromIterator<MoonEvent> for MoonTable {
    fn from_iter<I: IntoIterator<Item = MoonEvent>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_groups_and_sorts_by_year() {
        let table = MoonTable::from_pairs(&[
            ("2024-02-24", "Snow Moon"),
            ("2023-12-26", "Cold Moon"),
            ("2024-01-25", "Wolf Moon"),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.first_year(), Some(2023));
        assert_eq!(table.last_year(), Some(2024));
        assert_eq!(table.first_in_year(2024).unwrap().name, "Wolf Moon");
        assert_eq!(table.last_in_year(2024).unwrap().name, "Snow Moon");
        assert_eq!(table.last_in_year(2023).unwrap().date, ymd(2023, 12, 26));
        assert!(table.events_in_year(2025).is_empty());
    }

    #[test]
    fn test_from_pairs_skips_bad_dates() {
        let table = MoonTable::from_pairs(&[("2023-02-30", "Nope"), ("2023-01-06", "Wolf Moon")]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_text() {
        let text = "# full moons\n2023-01-06, Wolf Moon\n\n2023-10-28,Hunter's Moon\n";
        let table = MoonTable::parse(text).unwrap();
        assert_eq!(table.len(), 2);
        let names: Vec<_> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Wolf Moon", "Hunter's Moon"]);
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = MoonTable::parse("2023-01-06,Wolf Moon\nnot a line\n").unwrap_err();
        assert!(matches!(err, LunarError::TableParse { line: 2, .. }));

        let err = MoonTable::parse("\n\n2023-13-01,Bad Moon\n").unwrap_err();
        assert!(matches!(err, LunarError::TableParse { line: 3, .. }));

        let err = MoonTable::parse("2023-01-06,  \n").unwrap_err();
        assert!(matches!(err, LunarError::TableParse { line: 1, .. }));
    }

    #[test]
    fn test_single_entry_parse_error_has_no_line() {
        let err = MoonEvent::parse("2023-02-30", "Snow Moon").unwrap_err();
        assert!(matches!(err, LunarError::InvalidMoonDate { ref date, .. } if date == "2023-02-30"));
        assert!(err.to_string().starts_with("Invalid moon date \"2023-02-30\""));
    }

    #[test]
    fn test_display() {
        let event = MoonEvent::new(ymd(2023, 1, 6), "Wolf Moon");
        assert_eq!(event.to_string(), "January 6, 2023 (Wolf Moon)");
    }

    #[test]
    fn test_load_missing_file() {
        let err = MoonTable::load("/definitely/not/here/moons.csv").unwrap_err();
        assert!(matches!(err, LunarError::Io(_)));
    }
}
