//! Shareable calculator over one moon table.
//!
//! Results are cached per `(birth date, today)` in an LRU. The table itself is
//! never written, so concurrent calculations only contend on the cache lock.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};
use lru::LruCache;
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::debug;

use crate::calendar::{calculate, BirthDate, LunarBirthday};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::moon::MoonTable;
use crate::report::Timeline;

type CacheKey = (BirthDate, NaiveDate);

#[derive(Debug, Default)]
pub struct Metrics {
    calculations: AtomicU64,
    calculation_time: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    data_gaps: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_calculation(&self, duration: Duration, gaps: usize) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
        self.calculation_time.fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.data_gaps.fetch_add(gaps as u64, Ordering::Relaxed);
    }

    fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn calculations(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn data_gaps(&self) -> u64 {
        self.data_gaps.load(Ordering::Relaxed)
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits() as f64;
        let total = hits + self.cache_misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "Calculations: {}\n\
             Calculation Time: {}µs\n\
             Years Without Data: {}\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculations(),
            self.calculation_time.load(Ordering::Relaxed),
            self.data_gaps(),
            self.cache_hits(),
            self.cache_misses(),
            self.cache_hit_rate() * 100.0
        )
    }
}

pub struct LunarBirthdayService {
    table: Arc<MoonTable>,
    config: CalculatorConfig,
    cache: Mutex<LruCache<CacheKey, Arc<Vec<LunarBirthday>>>>,
    metrics: Arc<Metrics>,
}

impl LunarBirthdayService {
    pub fn new(table: Arc<MoonTable>, config: CalculatorConfig) -> Self {
        Self {
            table,
            config,
            cache: Mutex::new(LruCache::new(config.cache_capacity)),
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn table(&self) -> &MoonTable {
        &self.table
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    pub fn cache_capacity(&self) -> NonZeroUsize {
        self.cache.lock().cap()
    }

    /// Lunar birthdays for `birth`, served from the cache when possible.
    pub fn calculate(&self, birth: BirthDate, today: NaiveDate) -> Result<Arc<Vec<LunarBirthday>>> {
        let key = (birth, today);
        if let Some(results) = self.cache.lock().get(&key).cloned() {
            self.metrics.record_cache_hit();
            debug!("Cache hit for {} as of {}", birth, today);
            return Ok(results);
        }
        self.metrics.record_cache_miss();

        // The lock is released while calculating.
        let start = Instant::now();
        let results = Arc::new(calculate(&self.table, birth, today, self.config.future_years)?);
        let gaps = results.iter().filter(|r| r.moon.is_none()).count();
        self.metrics.record_calculation(start.elapsed(), gaps);

        self.cache.lock().put(key, Arc::clone(&results));
        Ok(results)
    }

    pub fn timeline(&self, birth: BirthDate, today: NaiveDate) -> Result<Timeline> {
        let results = self.calculate(birth, today)?;
        Ok(Timeline::new(birth, today.year(), results.as_ref().clone()))
    }

    /// Calculates every birth date in parallel; output order follows input order.
    pub fn calculate_batch(
        &self,
        births: &[BirthDate],
        today: NaiveDate,
    ) -> Vec<Result<Arc<Vec<LunarBirthday>>>> {
        births.par_iter().map(|birth| self.calculate(*birth, today)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BUILTIN_TABLE;
    use crate::error::LunarError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> LunarBirthdayService {
        LunarBirthdayService::new(Arc::new(BUILTIN_TABLE.clone()), CalculatorConfig::default())
    }

    #[test]
    fn test_cache_returns_same_results() {
        let service = service();
        let birth = BirthDate::new(1990, 1, 20).unwrap();
        let today = ymd(2026, 10, 19);

        let first = service.calculate(birth, today).unwrap();
        let second = service.calculate(birth, today).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let metrics = service.metrics();
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.cache_hits(), 1);
        assert_eq!(metrics.calculations(), 1);
        assert!(metrics.data_gaps() > 0);
        assert!((metrics.cache_hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_different_today_is_a_different_entry() {
        let service = service();
        let birth = BirthDate::new(2023, 6, 1).unwrap();
        let a = service.calculate(birth, ymd(2025, 1, 1)).unwrap();
        let b = service.calculate(birth, ymd(2026, 1, 1)).unwrap();
        assert_eq!(a.len() + 1, b.len());
        assert_eq!(service.metrics().cache_misses(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let service = service();
        let birth = BirthDate::new(1980, 1, 1).unwrap();
        for _ in 0..2 {
            let err = service.calculate(birth, ymd(2026, 1, 1)).unwrap_err();
            assert!(matches!(err, LunarError::BeforeDataCoverage { .. }));
        }
        assert_eq!(service.metrics().cache_misses(), 2);
        assert_eq!(service.metrics().calculations(), 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let service = service();
        let today = ymd(2026, 10, 19);
        let births = vec![
            BirthDate::new(1990, 1, 20).unwrap(),
            BirthDate::new(1970, 1, 1).unwrap(),
            BirthDate::new(2024, 2, 29).unwrap(),
        ];
        let results = service.calculate_batch(&births, today);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().first().unwrap().year, 1990);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().first().unwrap().year, 2024);
        assert_eq!(results[2].as_ref().unwrap().len(), 2036 - 2024 + 1);
    }

    #[test]
    fn test_timeline() {
        let service = LunarBirthdayService::new(
            Arc::new(BUILTIN_TABLE.clone()),
            CalculatorConfig::default().with_future_years(2),
        );
        let timeline = service
            .timeline(BirthDate::new(2023, 1, 20).unwrap(), ymd(2025, 3, 1))
            .unwrap();
        assert_eq!(timeline.past.len(), 2);
        assert_eq!(timeline.current.as_ref().and_then(|r| r.name()), Some("Wolf Moon"));
        assert_eq!(timeline.future.len(), 2);
    }

    #[test]
    fn test_cache_capacity_from_config() {
        let config = CalculatorConfig::default().with_cache_capacity(NonZeroUsize::new(2).unwrap());
        let service = LunarBirthdayService::new(Arc::new(MoonTable::default()), config);
        assert_eq!(service.cache_capacity().get(), 2);
    }
}
