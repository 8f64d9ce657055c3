//! Group scheduling entry points.
//!
//! Validates a request at the boundary, then runs the four pipeline stages in
//! order: normalize each person, aggregate, complement, filter. Each stage
//! returns a fresh timeline; nothing is mutated after it is produced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::complement::complement;
use crate::error::{Result, SlotError};
use crate::filter::{filter_slots, shared_active_window};
use crate::interval::Interval;
use crate::normalize::normalize_person;

/// One group member: their busy intervals and daily active window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Raw busy intervals. May be unsorted, overlapping, or outside `active`.
    pub busy: Vec<Interval>,
    pub active: Interval,
}

/// Every intermediate stage of one group computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAvailability {
    /// Union of all members' unavailable time (sorted, merged).
    pub unavailable: Vec<Interval>,
    /// Gaps in `unavailable` over the whole day, before any filtering.
    pub free: Vec<Interval>,
    /// Intersection of all active windows, `None` if it is empty.
    pub shared_window: Option<Interval>,
    /// Free slots clipped to `shared_window` and at least `min_duration` long.
    pub slots: Vec<Interval>,
    pub min_duration: i64,
}

/// Find every window in which the whole group is free for at least `min_duration` minutes.
///
/// `per_person_busy[i]` and `per_person_active[i]` describe the same person.
/// Zero-length busy intervals are accepted and ignored.
///
/// # Errors
/// - `SlotError::MismatchedPersonCount` if the two slices differ in length.
/// - `SlotError::NegativeDuration` if `min_duration < 0`.
/// - `SlotError::InvalidActiveWindow` if an active window starts after it ends.
/// - `SlotError::InvalidInterval` if any bound lies outside `[0, 1440]`, or a busy
///   interval starts after it ends.
pub fn find_common_free_slots(
    per_person_busy: &[Vec<Interval>],
    per_person_active: &[Interval],
    min_duration: i64,
) -> Result<Vec<Interval>> {
    analyze(per_person_busy, per_person_active, min_duration).map(|report| report.slots)
}

/// [`find_common_free_slots`] over a slice of [`Person`].
pub fn find_common_free_slots_for(people: &[Person], min_duration: i64) -> Result<Vec<Interval>> {
    analyze_group(people, min_duration).map(|report| report.slots)
}

/// The earliest common slot of at least `min_duration` minutes, if any.
pub fn find_first_common_slot(people: &[Person], min_duration: i64) -> Result<Option<Interval>> {
    Ok(find_common_free_slots_for(people, min_duration)?
        .into_iter()
        .next())
}

/// Run the full pipeline and keep every intermediate timeline.
pub fn analyze_group(people: &[Person], min_duration: i64) -> Result<GroupAvailability> {
    let busy: Vec<&[Interval]> = people.iter().map(|p| p.busy.as_slice()).collect();
    let actives: Vec<Interval> = people.iter().map(|p| p.active).collect();
    analyze(&busy, &actives, min_duration)
}

fn analyze<B>(busy: &[B], actives: &[Interval], min_duration: i64) -> Result<GroupAvailability>
where
    B: AsRef<[Interval]> + Sync,
{
    validate(busy, actives, min_duration)?;

    let per_person = normalize_all(busy, actives);
    let unavailable = aggregate(per_person);
    debug!(
        people = actives.len(),
        blocks = unavailable.len(),
        "aggregated unavailable timeline"
    );

    let free = complement(&unavailable);
    let shared_window = shared_active_window(actives);
    let slots = filter_slots(&free, actives, min_duration);
    debug!(
        free = free.len(),
        kept = slots.len(),
        min_duration,
        "filtered free slots"
    );

    Ok(GroupAvailability {
        unavailable,
        free,
        shared_window,
        slots,
        min_duration,
    })
}

fn validate<B>(busy: &[B], actives: &[Interval], min_duration: i64) -> Result<()>
where
    B: AsRef<[Interval]>,
{
    if busy.len() != actives.len() {
        return Err(SlotError::MismatchedPersonCount {
            busy: busy.len(),
            active: actives.len(),
        });
    }

    if min_duration < 0 {
        return Err(SlotError::NegativeDuration(min_duration));
    }

    for (person, active) in actives.iter().enumerate() {
        if active.start > active.end {
            return Err(SlotError::InvalidActiveWindow {
                person,
                start: active.start,
                end: active.end,
            });
        }
        Interval::checked(active.start, active.end)?;
    }

    for iv in busy.iter().flat_map(|b| b.as_ref()) {
        Interval::checked(iv.start, iv.end)?;
    }

    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn normalize_all<B>(busy: &[B], actives: &[Interval]) -> Vec<Vec<Interval>>
where
    B: AsRef<[Interval]> + Sync,
{
    busy.iter()
        .zip(actives)
        .map(|(b, &active)| normalize_person(b.as_ref(), active))
        .collect()
}

#[cfg(feature = "parallel")]
fn normalize_all<B>(busy: &[B], actives: &[Interval]) -> Vec<Vec<Interval>>
where
    B: AsRef<[Interval]> + Sync,
{
    use rayon::prelude::*;

    busy.par_iter()
        .zip(actives.par_iter())
        .map(|(b, &active)| normalize_person(b.as_ref(), active))
        .collect()
}
