//! Text and JSON rendering of results.

use serde::Serialize;
use slot_engine::clock::format_range;
use slot_engine::{format_clock, GroupAvailability, Interval};

pub const NO_SLOTS: &str = "No common free slots.";

#[derive(Debug, Serialize)]
struct ClockSlot {
    start: String,
    end: String,
}

impl From<&Interval> for ClockSlot {
    fn from(iv: &Interval) -> Self {
        ClockSlot {
            start: format_clock(iv.start),
            end: format_clock(iv.end),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClockReport {
    shared_window: Option<ClockSlot>,
    unavailable: Vec<ClockSlot>,
    free: Vec<ClockSlot>,
    slots: Vec<ClockSlot>,
    min_duration: i64,
}

fn clock_slots(intervals: &[Interval]) -> Vec<ClockSlot> {
    intervals.iter().map(ClockSlot::from).collect()
}

/// One `[HH:MM, HH:MM]` per line, or [`NO_SLOTS`].
pub fn slots_text(slots: &[Interval], min_duration: i64) -> String {
    if slots.is_empty() {
        return format!("{}\n", NO_SLOTS);
    }

    let mut out = format!("Available common slots (>= {} min):\n", min_duration);
    for slot in slots {
        out.push_str(&format_range(slot));
        out.push('\n');
    }
    out
}

pub fn slots_json(slots: &[Interval]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&clock_slots(slots)).map(|s| s + "\n")
}

pub fn report_text(report: &GroupAvailability) -> String {
    let mut out = String::new();

    match &report.shared_window {
        Some(window) => out.push_str(&format!("Shared active window: {}\n", format_range(window))),
        None => out.push_str("Shared active window: none\n"),
    }

    for (title, timeline) in [
        ("Unavailable", &report.unavailable),
        ("Free", &report.free),
    ] {
        out.push_str(&format!("{}:\n", title));
        for iv in timeline {
            out.push_str(&format!("  {}\n", format_range(iv)));
        }
    }

    out.push_str(&slots_text(&report.slots, report.min_duration));
    out
}

pub fn report_json(report: &GroupAvailability) -> serde_json::Result<String> {
    let clock = ClockReport {
        shared_window: report.shared_window.as_ref().map(ClockSlot::from),
        unavailable: clock_slots(&report.unavailable),
        free: clock_slots(&report.free),
        slots: clock_slots(&report.slots),
        min_duration: report.min_duration,
    };
    serde_json::to_string_pretty(&clock).map(|s| s + "\n")
}
