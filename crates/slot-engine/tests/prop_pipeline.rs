//! Property-based tests for the merge primitive and the scheduling pipeline.
//!
//! These hold for any valid group, not just the hand-written scenarios in
//! `schedule_tests.rs`.

use proptest::prelude::*;
use slot_engine::aggregate::aggregate;
use slot_engine::complement::complement;
use slot_engine::normalize::normalize_person;
use slot_engine::{find_common_free_slots, merge_intervals, Interval, DAY_MINUTES};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any valid interval within the day, including zero-length ones.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0..=DAY_MINUTES, 0..=DAY_MINUTES).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..12)
}

/// A group as parallel busy/active vectors.
fn arb_group() -> impl Strategy<Value = (Vec<Vec<Interval>>, Vec<Interval>)> {
    prop::collection::vec((arb_intervals(), arb_interval()), 0..5)
        .prop_map(|people| people.into_iter().unzip())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn covers(timeline: &[Interval], minute: i64) -> bool {
    timeline.iter().any(|iv| iv.start <= minute && minute < iv.end)
}

fn is_canonical(timeline: &[Interval]) -> bool {
    timeline.iter().all(|iv| iv.start < iv.end)
        && timeline.windows(2).all(|w| w[0].end < w[1].start)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // -----------------------------------------------------------------------
    // Merge primitive
    // -----------------------------------------------------------------------

    #[test]
    fn merge_output_is_sorted_and_separated(intervals in arb_intervals()) {
        let merged = merge_intervals(intervals);
        prop_assert!(is_canonical(&merged), "not canonical: {:?}", merged);
    }

    #[test]
    fn merge_is_idempotent(intervals in arb_intervals()) {
        let once = merge_intervals(intervals);
        let twice = merge_intervals(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_ignores_input_order(
        (original, shuffled) in arb_intervals()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(merge_intervals(original), merge_intervals(shuffled));
    }

    #[test]
    fn merge_covers_exactly_the_same_minutes(intervals in arb_intervals()) {
        let merged = merge_intervals(intervals.clone());
        for minute in 0..DAY_MINUTES {
            prop_assert_eq!(covers(&intervals, minute), covers(&merged, minute));
        }
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    #[test]
    fn complement_of_complement_restores_unavailable((busy, actives) in arb_group()) {
        let unavailable = aggregate(
            busy.iter().zip(&actives).map(|(b, &a)| normalize_person(b, a)),
        );
        let free = complement(&unavailable);
        prop_assert!(is_canonical(&free));
        prop_assert_eq!(complement(&free), unavailable);
    }

    // -----------------------------------------------------------------------
    // Full pipeline
    // -----------------------------------------------------------------------

    #[test]
    fn zero_people_get_the_whole_day_if_it_is_long_enough(duration in 0..=2 * DAY_MINUTES) {
        let none: Vec<Vec<Interval>> = Vec::new();
        let slots = find_common_free_slots(&none, &[], duration).unwrap();
        if duration <= DAY_MINUTES {
            prop_assert_eq!(slots, vec![Interval::DAY]);
        } else {
            prop_assert!(slots.is_empty());
        }
    }

    #[test]
    fn slots_are_free_for_everyone_and_long_enough(
        (busy, actives) in arb_group(),
        duration in 0..300i64,
    ) {
        let slots = find_common_free_slots(&busy, &actives, duration).unwrap();

        prop_assert!(is_canonical(&slots));
        for slot in &slots {
            prop_assert!(slot.duration_minutes() >= duration);
            for (person_busy, active) in busy.iter().zip(&actives) {
                prop_assert!(active.start <= slot.start && slot.end <= active.end);
                for b in person_busy.iter().filter(|b| !b.is_empty()) {
                    prop_assert!(b.end <= slot.start || slot.end <= b.start,
                        "slot {:?} overlaps busy {:?}", slot, b);
                }
            }
        }
    }

    #[test]
    fn raising_duration_never_adds_slots(
        (busy, actives) in arb_group(),
        d1 in 0..200i64,
        extra in 1..200i64,
    ) {
        let short = find_common_free_slots(&busy, &actives, d1).unwrap();
        let long = find_common_free_slots(&busy, &actives, d1 + extra).unwrap();

        prop_assert!(long.len() <= short.len());
        for slot in &long {
            prop_assert!(
                short.iter().any(|s| s.start <= slot.start && slot.end <= s.end),
                "{:?} missing from shorter-duration result {:?}", slot, short
            );
        }
    }
}
