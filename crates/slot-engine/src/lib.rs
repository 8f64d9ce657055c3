//! # slot-engine
//!
//! Finds every time window in which all members of a group are free at once.
//!
//! Each person brings a list of busy intervals and a daily active window. Times
//! are minutes from midnight within the fixed day `[0, 1440)`, and all intervals
//! are half-open.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_common_free_slots, Interval};
//!
//! let busy = vec![vec![Interval::new(600, 660)], vec![]];
//! let active = vec![Interval::new(540, 720), Interval::new(570, 1020)];
//!
//! let slots = find_common_free_slots(&busy, &active, 30).unwrap();
//! assert_eq!(slots, vec![Interval::new(570, 600), Interval::new(660, 720)]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` and the sorted-merge primitive
//! - [`normalize`] — one person's busy time + active window → unavailable timeline
//! - [`aggregate`] — union of all unavailable timelines
//! - [`complement`] — unavailable timeline → free slots over the day
//! - [`filter`] — shared active window and minimum duration
//! - [`schedule`] — validated entry points composing the stages
//! - [`clock`] — `"HH:MM"` text ↔ minutes
//! - [`error`] — Error types

pub mod aggregate;
pub mod clock;
pub mod complement;
pub mod error;
pub mod filter;
pub mod interval;
pub mod normalize;
pub mod schedule;

pub use clock::{format_clock, parse_clock, parse_range};
pub use error::SlotError;
pub use interval::{merge_intervals, Interval, DAY_MINUTES};
pub use schedule::{
    analyze_group, find_common_free_slots, find_common_free_slots_for, find_first_common_slot,
    GroupAvailability, Person,
};
