//! Invert a merged unavailable timeline into free slots over the day.
//!
//! Walks the timeline with a cursor starting at midnight and emits the gaps
//! between consecutive unavailable blocks, plus a trailing gap up to 24:00.

use crate::interval::{Interval, DAY_MINUTES};

/// Compute free slots within `[0, 1440)` from a sorted, merged unavailable timeline.
///
/// An empty timeline yields the single slot `[0, 1440)`.
pub fn complement(unavailable: &[Interval]) -> Vec<Interval> {
    let mut free = Vec::with_capacity(unavailable.len() + 1);
    let mut cursor = 0;

    for busy in unavailable {
        if cursor < busy.start {
            free.push(Interval::new(cursor, busy.start));
        }
        cursor = cursor.max(busy.end);
    }

    if cursor < DAY_MINUTES {
        free.push(Interval::new(cursor, DAY_MINUTES));
    }

    free
}
