//! Restrict free slots to the group's shared active window and drop the short ones.

use crate::interval::Interval;

/// Intersection of all active windows: `[max start, min end)`.
///
/// Returns `None` when the windows have no common time. An empty group shares
/// the whole day.
pub fn shared_active_window(actives: &[Interval]) -> Option<Interval> {
    let shared = actives.iter().fold(Interval::DAY, |acc, a| Interval {
        start: acc.start.max(a.start),
        end: acc.end.min(a.end),
    });

    (!shared.is_empty()).then_some(shared)
}

/// Clip each free slot to the shared active window and keep those lasting at
/// least `min_duration` minutes.
///
/// Zero-length clipped slots are always dropped, even when `min_duration` is 0.
/// Output keeps the ascending order of `free`.
pub fn filter_slots(free: &[Interval], actives: &[Interval], min_duration: i64) -> Vec<Interval> {
    let Some(shared) = shared_active_window(actives) else {
        return Vec::new();
    };

    free.iter()
        .filter_map(|slot| slot.clip(shared))
        .filter(|slot| slot.duration_minutes() >= min_duration)
        .collect()
}
