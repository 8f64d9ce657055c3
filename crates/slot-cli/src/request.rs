//! JSON request format with `"HH:MM"` clock strings.
//!
//! ```json
//! {
//!   "people": [
//!     { "busy": [["7:00", "8:30"], ["12:00", "13:00"]], "active": ["9:00", "19:00"] }
//!   ],
//!   "duration": 30
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use slot_engine::{parse_clock, Interval, Person};

/// A `[start, end]` pair of clock strings.
type ClockRange = (String, String);

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub people: Vec<PersonEntry>,
    /// Minimum meeting length in minutes. `--duration` takes precedence.
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonEntry {
    #[serde(default)]
    pub busy: Vec<ClockRange>,
    pub active: ClockRange,
}

impl Request {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse request JSON")
    }

    /// Convert every clock string to minutes.
    ///
    /// Only the text is checked here; interval bounds and ordering are
    /// validated by the engine so its error taxonomy reaches the user intact.
    pub fn people(&self) -> Result<Vec<Person>> {
        self.people
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let busy = entry
                    .busy
                    .iter()
                    .map(to_interval)
                    .collect::<Result<Vec<_>>>()
                    .with_context(|| format!("Invalid busy interval for person {}", index))?;
                let active = to_interval(&entry.active)
                    .with_context(|| format!("Invalid active window for person {}", index))?;
                Ok(Person { busy, active })
            })
            .collect()
    }
}

fn to_interval((start, end): &ClockRange) -> Result<Interval> {
    Ok(Interval::new(parse_clock(start)?, parse_clock(end)?))
}
