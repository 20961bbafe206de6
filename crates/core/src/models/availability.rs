use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::slots::{BlockedSpan, DayWindow, time_to_minute};

/// A configured break within a working day, e.g. lunch. Stored alongside the
/// day row as a loosely-typed list; validated at the API boundary but
/// tolerated unsorted and overlapping by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One weekday's booking window for a shop. `day_of_week` runs 0 (Sunday)
/// through 6 (Saturday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
}

impl DayAvailability {
    /// Projects the configured day onto the resolver's minute-of-day window.
    pub fn to_window(&self) -> DayWindow {
        DayWindow {
            start: time_to_minute(self.start_time),
            end: time_to_minute(self.end_time),
            is_active: self.is_active,
            breaks: self
                .breaks
                .iter()
                .map(|b| BlockedSpan::new(time_to_minute(b.start), time_to_minute(b.end)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub days: Vec<DayAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub days: Vec<DayAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    /// Valid start times as "HH:MM", ascending.
    pub slots: Vec<String>,
}
