//! Lunar birthdays: the full moon closest to each anniversary of a birth date.
//!
//! Full moons come from a reference [`MoonTable`] rather than from any lunar
//! ephemeris. The pure pieces are [`anniversaries`] and [`find_closest`];
//! [`calculate`] ties them together for one birth date and
//! [`LunarBirthdayService`] shares a table between many requests.

pub mod anniversary;
pub mod calendar;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod moon;
pub mod report;
pub mod service;

pub use anniversary::{anniversaries, anniversary_in, Anniversaries, AnniversaryTarget};
pub use calendar::{calculate, validate, BirthDate, LunarBirthday};
pub use config::{CalculatorConfig, DEFAULT_FUTURE_YEARS, MAX_FUTURE_YEARS};
pub use data::BUILTIN_TABLE;
pub use error::{LunarError, Result};
pub use matcher::{distance_millis, find_closest, find_closest_in};
pub use moon::{MoonEvent, MoonTable};
pub use report::{format_date, format_line, Timeline};
pub use service::{LunarBirthdayService, Metrics};
