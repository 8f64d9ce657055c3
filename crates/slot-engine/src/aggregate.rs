//! Union of every person's unavailable timeline.

use crate::interval::{merge_intervals, Interval};

/// Concatenate all timelines and merge them into one global unavailable timeline.
///
/// Zero timelines yield an empty result: with nobody in the group, nobody is busy.
pub fn aggregate<I>(timelines: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Vec<Interval>>,
{
    merge_intervals(timelines.into_iter().flatten())
}
