//! End-to-end lunar birthday calculation.
//!
//! Validation of the birth date happens here, before any anniversary is
//! generated. "Today" is always passed in by the caller.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::anniversary::anniversaries;
use crate::error::{LunarError, Result};
use crate::matcher::find_closest;
use crate::moon::{MoonEvent, MoonTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(LunarError::InvalidDate { year, month, day })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %-d, %Y"))
    }
}

/// The full moon matched to one anniversary year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LunarBirthday {
    pub year: i32,
    pub moon: Option<MoonEvent>,
}

impl LunarBirthday {
    pub fn date(&self) -> Option<NaiveDate> {
        self.moon.as_ref().map(|m| m.date)
    }

    pub fn name(&self) -> Option<&str> {
        self.moon.as_ref().map(|m| m.name.as_str())
    }
}

/// Rejects birth dates in the future or before the table's first year.
pub fn validate(table: &MoonTable, birth: BirthDate, today: NaiveDate) -> Result<()> {
    if birth.date() > today {
        return Err(LunarError::FutureBirthDate(birth.date()));
    }
    let first_year = table.first_year().ok_or(LunarError::EmptyTable)?;
    if birth.year() < first_year {
        return Err(LunarError::BeforeDataCoverage { first_year });
    }
    Ok(())
}

/// Last year of a calculation, rejecting spans chrono cannot represent.
fn end_year(current_year: i32, future_years: u32) -> Result<i32> {
    i32::try_from(future_years)
        .ok()
        .and_then(|years| current_year.checked_add(years))
        .filter(|&year| NaiveDate::from_ymd_opt(year, 12, 31).is_some())
        .ok_or(LunarError::FutureYearsOutOfRange {
            current_year,
            future_years,
        })
}

/// Matches a full moon to every anniversary from the birth year through
/// `future_years` past the current year, in ascending year order.
pub fn calculate(
    table: &MoonTable,
    birth: BirthDate,
    today: NaiveDate,
    future_years: u32,
) -> Result<Vec<LunarBirthday>> {
    validate(table, birth, today)?;

    let start_year = birth.year();
    let end_year = end_year(today.year(), future_years)?;
    debug!("Calculating lunar birthdays for {} over {}..={}", birth, start_year, end_year);

    let results: Vec<LunarBirthday> = anniversaries(birth.month(), birth.day(), start_year, end_year)?
        .map(|target| LunarBirthday {
            year: target.year,
            moon: find_closest(table, target.date).cloned(),
        })
        .collect();

    let gaps = results.iter().filter(|r| r.moon.is_none()).count();
    info!("Calculated {} lunar birthdays for {} ({} without data)", results.len(), birth, gaps);
    Ok(results)
}
