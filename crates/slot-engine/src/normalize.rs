//! Per-person normalization: busy intervals plus active window into one
//! full-day unavailable timeline.

use crate::interval::{merge_intervals, Interval, DAY_MINUTES};

/// Build a person's unavailable timeline over `[0, 1440)`.
///
/// Time before `active.start` and from `active.end` onward is always unavailable.
/// Busy intervals are clipped to the active window first, so anything entirely
/// outside it contributes nothing.
///
/// The active window must already be validated (`start <= end`).
pub fn normalize_person(busy: &[Interval], active: Interval) -> Vec<Interval> {
    let seed = [
        Interval::new(0, active.start),
        Interval::new(active.end, DAY_MINUTES),
    ];

    let clipped = busy.iter().filter_map(|iv| iv.clip(active));

    merge_intervals(seed.into_iter().chain(clipped))
}
