use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, LunarError>;

// Error handling for requests and moon tables
#[derive(Debug, thiserror::Error)]
pub enum LunarError {
    #[error("Invalid date: {month}/{day}/{year} is not a real date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Date of birth {0} cannot be in the future")]
    FutureBirthDate(NaiveDate),

    #[error("Calculations are only supported from year {first_year} due to available moon data")]
    BeforeDataCoverage { first_year: i32 },

    #[error("Moon table contains no entries")]
    EmptyTable,

    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Cannot look {future_years} years past {current_year}: year out of range")]
    FutureYearsOutOfRange { current_year: i32, future_years: u32 },

    #[error("Invalid moon date {date:?}: {reason}")]
    InvalidMoonDate { date: String, reason: String },

    #[error("Moon table line {line}: {reason}")]
    TableParse { line: usize, reason: String },

    #[error("Failed to read moon table: {0}")]
    Io(#[from] std::io::Error),
}
