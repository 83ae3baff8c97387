//! Analyzer — folds a batch of [`LogRecord`] values into [`Statistics`].
//!
//! All counters live in an [`Accumulator`] that is threaded through the fold
//! explicitly. Accumulators can be merged, so a split/reduce over the input
//! produces the same result as one sequential pass. The percentile is only
//! computed in [`Accumulator::finish`] because it needs the full multiset of
//! sizes.

use crate::filter::FilterCriteria;
use crate::types::LogRecord;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use thiserror::Error;

/// Percentile reported as `p95_response_size`.
pub const RESPONSE_SIZE_PERCENTILE: u32 = 95;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Nothing survived parsing and filtering.
    #[error("no log records to analyze")]
    NoRecords,
}

/// Aggregate view of one run. Read-only once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Path, glob, or URL the records came from. Set by the caller.
    pub source: String,
    /// Requested lower bound, for display only.
    pub range_start: Option<NaiveDateTime>,
    /// Requested upper bound, for display only.
    pub range_end: Option<NaiveDateTime>,
    pub total_requests: u64,
    pub resource_counts: HashMap<String, u64>,
    pub status_counts: HashMap<u16, u64>,
    pub average_response_size: f64,
    /// Nearest-rank 95th percentile of response sizes.
    pub p95_response_size: u64,
    pub min_response_size: u64,
    pub zero_response_count: u64,
}

impl Statistics {
    /// Attach the source descriptor and the requested range.
    pub fn labelled(mut self, source: impl Into<String>, criteria: &FilterCriteria) -> Self {
        self.source = source.into();
        self.range_start = criteria.from;
        self.range_end = criteria.to;
        self
    }

    /// Resources by descending request count, ties broken by name.
    pub fn top_resources(&self) -> Vec<(&str, u64)> {
        let mut resources: Vec<_> = self
            .resource_counts
            .iter()
            .map(|(resource, count)| (resource.as_str(), *count))
            .collect();
        resources.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        resources
    }

    /// Status codes in ascending order.
    pub fn status_breakdown(&self) -> Vec<(u16, u64)> {
        let mut statuses: Vec<_> = self
            .status_counts
            .iter()
            .map(|(status, count)| (*status, *count))
            .collect();
        statuses.sort_unstable();
        statuses
    }
}

/// Running totals for a (possibly partial) slice of the input.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    resource_counts: HashMap<String, u64>,
    status_counts: HashMap<u16, u64>,
    sizes: Vec<u64>,
    total_size: u128,
    min_size: Option<u64>,
    zero_count: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &LogRecord) {
        *self
            .resource_counts
            .entry(record.resource.clone())
            .or_default() += 1;
        *self.status_counts.entry(record.status).or_default() += 1;

        let size = record.response_size;
        self.sizes.push(size);
        self.total_size += u128::from(size);
        self.min_size = Some(self.min_size.map_or(size, |min| min.min(size)));
        if size == 0 {
            self.zero_count += 1;
        }
    }

    /// Fold step: `records.iter().fold(Accumulator::new(), Accumulator::push)`.
    pub fn push(mut self, record: &LogRecord) -> Self {
        self.observe(record);
        self
    }

    /// Combine two partial accumulators.
    pub fn merge(mut self, other: Accumulator) -> Self {
        for (resource, count) in other.resource_counts {
            *self.resource_counts.entry(resource).or_default() += count;
        }
        for (status, count) in other.status_counts {
            *self.status_counts.entry(status).or_default() += count;
        }
        self.sizes.extend(other.sizes);
        self.total_size += other.total_size;
        self.min_size = match (self.min_size, other.min_size) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.zero_count += other.zero_count;
        self
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Produce the final statistics. Source and range are left blank; see
    /// [`Statistics::labelled`].
    pub fn finish(mut self) -> Result<Statistics, AnalysisError> {
        let Some(min_response_size) = self.min_size else {
            return Err(AnalysisError::NoRecords);
        };
        let p95_response_size = nearest_rank(&mut self.sizes, RESPONSE_SIZE_PERCENTILE)
            .ok_or(AnalysisError::NoRecords)?;
        let total_requests = self.sizes.len() as u64;

        Ok(Statistics {
            source: String::new(),
            range_start: None,
            range_end: None,
            total_requests,
            resource_counts: self.resource_counts,
            status_counts: self.status_counts,
            average_response_size: self.total_size as f64 / total_requests as f64,
            p95_response_size,
            min_response_size,
            zero_response_count: self.zero_count,
        })
    }
}

/// Aggregate `records` in one pass. Fails with [`AnalysisError::NoRecords`]
/// on empty input instead of dividing by zero.
pub fn analyze<'a, I>(records: I) -> Result<Statistics, AnalysisError>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records
        .into_iter()
        .fold(Accumulator::new(), Accumulator::push)
        .finish()
}

/// Nearest-rank percentile: the value at zero-based index
/// `ceil(p/100 * n) - 1` of the ascending order, clamped to the slice.
/// Percentiles above 100 select the maximum. Returns `None` for empty input.
/// Reorders `values`.
pub fn nearest_rank(values: &mut [u64], percentile: u32) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as u64;
    // Integer ceil avoids 0.95 * n landing just above a whole number.
    let rank = (u64::from(percentile) * n).div_ceil(100).clamp(1, n);
    let idx = (rank - 1) as usize;
    let (_, value, _) = values.select_nth_unstable(idx);
    Some(*value)
}
