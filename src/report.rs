use std::fmt;

use chrono::NaiveDate;

use crate::calendar::{BirthDate, LunarBirthday};

/// Lunar birthdays split around the current year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub birth: BirthDate,
    pub current_year: i32,
    pub past: Vec<LunarBirthday>,
    pub current: Option<LunarBirthday>,
    pub future: Vec<LunarBirthday>,
}

impl Timeline {
    pub fn new(birth: BirthDate, current_year: i32, mut results: Vec<LunarBirthday>) -> Self {
        results.sort_by_key(|r| r.year);
        let mut past = Vec::new();
        let mut current = None;
        let mut future = Vec::new();
        for result in results {
            match result.year.cmp(&current_year) {
                std::cmp::Ordering::Less => past.push(result),
                std::cmp::Ordering::Equal => current = Some(result),
                std::cmp::Ordering::Greater => future.push(result),
            }
        }
        Self {
            birth,
            current_year,
            past,
            current,
            future,
        }
    }

    pub fn len(&self) -> usize {
        self.past.len() + usize::from(self.current.is_some()) + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One output line, e.g. `2023: January 6, 2023 (Wolf Moon)`.
pub fn format_line(result: &LunarBirthday) -> String {
    match &result.moon {
        Some(moon) => format!("{}: {}", result.year, moon),
        None => format!("{}: No full moon data available or close enough.", result.year),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lunar birthdays for {}", self.birth)?;
        writeln!(f)?;
        writeln!(f, "Current year ({}):", self.current_year)?;
        match &self.current {
            Some(result) => writeln!(f, "  {}", format_line(result))?,
            None => writeln!(
                f,
                "  No lunar birthday calculation available for {}. Check data source.",
                self.current_year
            )?,
        }
        if !self.past.is_empty() {
            writeln!(f)?;
            writeln!(f, "Past:")?;
            for result in &self.past {
                writeln!(f, "  {}", format_line(result))?;
            }
        }
        if !self.future.is_empty() {
            writeln!(f)?;
            writeln!(f, "Future:")?;
            for result in &self.future {
                writeln!(f, "  {}", format_line(result))?;
            }
        }
        Ok(())
    }
}
