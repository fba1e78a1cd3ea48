use std::num::NonZeroUsize;

/// Years past the current one that a calculation covers.
pub const DEFAULT_FUTURE_YEARS: u32 = 10;

/// Upper bound accepted for `future_years` on the command line.
pub const MAX_FUTURE_YEARS: u32 = 1000;

const DEFAULT_CACHE_CAPACITY: usize = 128;

// Configuration for lunar birthday calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub future_years: u32,
    pub cache_capacity: NonZeroUsize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            future_years: DEFAULT_FUTURE_YEARS,
            cache_capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_future_years(mut self, future_years: u32) -> Self {
        self.future_years = future_years;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}
