//! Nearest full moon to a date.
//!
//! The search window is the target's calendar year plus the last event of the
//! previous year and the first event of the next year, since an anniversary
//! near a year boundary can sit closer to a moon on the other side of it.
//! Candidates are visited in chronological order and only a strictly smaller
//! distance replaces the current best, so the earliest date wins ties.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::moon::{MoonEvent, MoonTable};

/// Absolute distance between two dates, taken at midnight, in milliseconds.
pub fn distance_millis(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_milliseconds().abs()
}

/// Closest event of `table` to `target`, or `None` when neither the target's
/// year nor its neighbouring years have any data.
pub fn find_closest(table: &MoonTable, target: NaiveDate) -> Option<&MoonEvent> {
    let year = target.year();
    let in_year = table.events_in_year(year);
    if in_year.is_empty() {
        warn!("No full moon data found for year {}", year);
    }

    let candidates = table
        .last_in_year(year - 1)
        .into_iter()
        .chain(in_year)
        .chain(table.first_in_year(year + 1));
    closest(candidates, target)
}

/// Same search as [`find_closest`] over an unindexed, possibly unsorted slice.
pub fn find_closest_in(events: &[MoonEvent], target: NaiveDate) -> Option<&MoonEvent> {
    let year = target.year();
    let mut in_year: Vec<&MoonEvent> = events.iter().filter(|e| e.year() == year).collect();
    if in_year.is_empty() {
        warn!("No full moon data found for year {}", year);
    }
    in_year.sort_by_key(|e| e.date);

    // max_by_key keeps the last of equal dates, min_by_key the first.
    let prev = events.iter().filter(|e| e.year() == year - 1).max_by_key(|e| e.date);
    let next = events.iter().filter(|e| e.year() == year + 1).min_by_key(|e| e.date);

    closest(prev.into_iter().chain(in_year).chain(next), target)
}

fn closest<'a>(candidates: impl Iterator<Item = &'a MoonEvent>, target: NaiveDate) -> Option<&'a MoonEvent> {
    let mut best: Option<(&MoonEvent, i64)> = None;
    for moon in candidates {
        let diff = distance_millis(target, moon.date);
        match best {
            Some((_, min)) if diff >= min => {}
            _ => best = Some((moon, diff)),
        }
    }
    best.map(|(moon, _)| moon)
}
