use chrono::NaiveDate;
use tracing::warn;

use crate::error::{LunarError, Result};

/// A birth anniversary in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnniversaryTarget {
    pub year: i32,
    pub date: NaiveDate,
}

/// Lazily yields one [`AnniversaryTarget`] per year of an inclusive range.
#[derive(Debug, Clone)]
pub struct Anniversaries {
    month: u32,
    day: u32,
    next_year: i32,
    end_year: i32,
}

/// Anniversaries of `month`/`day` for every year in `start_year..=end_year`.
///
/// A February 29 birthday falls back to February 28 in common years. Any
/// other date that does not exist in a year is skipped for that year.
pub fn anniversaries(month: u32, day: u32, start_year: i32, end_year: i32) -> Result<Anniversaries> {
    if start_year > end_year {
        return Err(LunarError::InvalidYearRange {
            start: start_year,
            end: end_year,
        });
    }
    Ok(Anniversaries {
        month,
        day,
        next_year: start_year,
        end_year,
    })
}

/// The anniversary of `month`/`day` in `year`, if one exists.
pub fn anniversary_in(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

impl Iterator for Anniversaries {
    type Item = AnniversaryTarget;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_year <= self.end_year {
            let year = self.next_year;
            match year.checked_add(1) {
                Some(next) => self.next_year = next,
                // i32::MAX is the last year; pull the end below it.
                None => self.end_year = year - 1,
            }
            match anniversary_in(self.month, self.day, year) {
                Some(date) => return Some(AnniversaryTarget { year, date }),
                None => warn!(
                    "Could not create valid anniversary date {}/{} for {}",
                    self.month, self.day, year
                ),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (i64::from(self.end_year) - i64::from(self.next_year) + 1).max(0);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (0, Some(remaining))
    }
}
