//! Half-open minute intervals and the sorted-merge primitive.
//!
//! Every timeline the pipeline passes between stages is produced by
//! [`merge_intervals`]: sorted by start, with no two entries overlapping or
//! touching.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Minutes in the fixed `[0, 1440)` day.
pub const DAY_MINUTES: i64 = 24 * 60;

/// A half-open `[start, end)` range in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// The whole day, `[0, 1440)`.
    pub const DAY: Interval = Interval {
        start: 0,
        end: DAY_MINUTES,
    };

    /// Build an interval without validation.
    pub const fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// Build an interval, rejecting `start > end` and bounds outside the day.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` when `0 <= start <= end <= 1440` does not hold.
    pub fn checked(start: i64, end: i64) -> Result<Self> {
        if start < 0 || end > DAY_MINUTES || start > end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Interval { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Zero-length (or inverted) intervals cover no time.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Intersect with `window`. Returns `None` when nothing of `self` remains.
    pub fn clip(&self, window: Interval) -> Option<Interval> {
        let clipped = Interval {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// Merge intervals into the minimal sorted, non-overlapping set covering the same time.
///
/// Touching intervals (`a.end == b.start`) are merged into one. Empty intervals
/// are dropped. Input order does not matter.
pub fn merge_intervals<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().filter(|iv| !iv.is_empty()).collect();

    if sorted.is_empty() {
        return Vec::new();
    }

    sorted.sort_unstable_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
