//! # Availability Resolver
//!
//! This module computes the set of valid start times for a new booking,
//! given a service duration, the shop's operating window for the requested
//! weekday, configured breaks, and the barber's existing appointments.
//!
//! ## Algorithm
//!
//! The resolver works in four steps:
//!
//! 1. Generate candidate start times by stepping through the operating
//!    window at a fixed granularity
//! 2. Drop candidates whose service span would run past closing time
//! 3. Drop candidates whose span overlaps any blocked interval (existing
//!    appointments and configured breaks, merged without distinction)
//! 4. For same-day requests, drop candidates starting at or before
//!    `now + cutoff`
//!
//! All spans are half-open `[start, end)`: a candidate ending exactly when a
//! blocked interval begins (or vice versa) does not conflict, matching usual
//! calendar semantics.
//!
//! The function is pure: it performs no I/O and never reads the system
//! clock. The current time is an explicit parameter, which keeps identical
//! inputs yielding identical outputs and makes the cutoff rule testable.
//! "No slots available" is an ordinary empty result, not an error; malformed
//! windows (end at or before start) also resolve to an empty list rather
//! than failing, since callers treat missing availability as a normal state.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Step size, in minutes, between generated candidate start times.
pub const SLOT_GRANULARITY_MINUTES: u32 = 30;

/// Minimum lead time, in minutes, required for a same-day booking.
pub const SAME_DAY_CUTOFF_MINUTES: u32 = 5;

/// Duration assumed for an existing appointment whose recorded duration is
/// missing or non-positive. An unknown-duration appointment must still
/// occupy time; treating it as zero-length would silently free a booked slot.
pub const FALLBACK_APPOINTMENT_MINUTES: u32 = 30;

/// One day's operating window for a shop, in minutes from midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub start: u32,
    pub end: u32,
    pub is_active: bool,
    /// Breaks within the window (e.g. lunch). Not required to be sorted or
    /// non-overlapping; the overlap test handles arbitrary lists.
    pub breaks: Vec<BlockedSpan>,
}

/// A half-open `[start, end)` interval in minutes from midnight during which
/// no booking may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedSpan {
    pub start: u32,
    pub end: u32,
}

impl BlockedSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test covering all four cases: either interval
    /// starting inside, ending inside, or fully containing the other.
    fn overlaps(&self, start: u32, end: u32) -> bool {
        start < self.end && end > self.start
    }
}

/// An existing appointment's occupancy, as stored at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSpan {
    /// Start time in minutes from midnight.
    pub start: u32,
    /// Duration snapshot in minutes. `None` or non-positive values fall back
    /// to [`FALLBACK_APPOINTMENT_MINUTES`].
    pub duration: Option<u32>,
}

impl BookedSpan {
    pub fn new(start: u32, duration: Option<u32>) -> Self {
        Self { start, duration }
    }

    fn blocked(&self) -> BlockedSpan {
        let duration = match self.duration {
            Some(d) if d > 0 => d,
            _ => FALLBACK_APPOINTMENT_MINUTES,
        };
        BlockedSpan::new(self.start, self.start + duration)
    }
}

/// Resolver parameters that rarely change between calls.
///
/// The defaults match the booking surface: a 30-minute grid and a 5-minute
/// margin against booking a slot that is about to begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    pub granularity_minutes: u32,
    pub cutoff_minutes: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            granularity_minutes: SLOT_GRANULARITY_MINUTES,
            cutoff_minutes: SAME_DAY_CUTOFF_MINUTES,
        }
    }
}

/// Computes the valid start times for a new booking.
///
/// # Arguments
///
/// * `service_duration` - Duration of the requested service in minutes
/// * `window` - The shop's operating window for the requested date's
///   weekday, or `None` when no availability row exists for that weekday
/// * `booked` - Existing appointments for the same barber and date,
///   restricted to statuses that occupy time (pending, confirmed)
/// * `requested_date` - The calendar date being booked
/// * `now` - The current time, injected by the caller
/// * `policy` - Grid granularity and same-day cutoff
///
/// # Returns
///
/// Start times in minutes from midnight, strictly ascending with no
/// duplicates. An empty vector means no availability, which is an expected
/// outcome rather than an error. Defensively returns empty for non-positive
/// service durations, inverted windows, and zero granularity.
pub fn available_slots(
    service_duration: u32,
    window: Option<&DayWindow>,
    booked: &[BookedSpan],
    requested_date: NaiveDate,
    now: NaiveDateTime,
    policy: SlotPolicy,
) -> Vec<u32> {
    // STEP 1: Validate the window. A closed weekday resolves to no slots,
    // full stop, regardless of every other input.
    let Some(window) = window else {
        return Vec::new();
    };
    if !window.is_active
        || window.end <= window.start
        || service_duration == 0
        || policy.granularity_minutes == 0
    {
        return Vec::new();
    }

    // STEP 2: Collect blocked intervals from appointments and breaks. The
    // two sources are merged without distinction.
    let mut blocked: Vec<BlockedSpan> = booked.iter().map(BookedSpan::blocked).collect();
    blocked.extend(window.breaks.iter().copied());

    // STEP 3: Same-day requests reject candidates starting at or before
    // `now + cutoff`; future dates are unconstrained.
    let cutoff = if requested_date == now.date() {
        Some(now.time().num_seconds_from_midnight() / 60 + policy.cutoff_minutes)
    } else {
        None
    };

    // STEP 4: Walk the candidate grid and keep survivors. The grid is
    // generated in ascending order, so the result needs no sorting.
    let mut slots = Vec::new();
    let mut candidate = window.start;
    while candidate < window.end {
        let candidate_end = candidate + service_duration;

        // The service must fit entirely before closing.
        let fits = candidate_end <= window.end;
        let free = !blocked.iter().any(|b| b.overlaps(candidate, candidate_end));
        let reachable = cutoff.is_none_or(|c| candidate > c);

        if fits && free && reachable {
            slots.push(candidate);
        }
        candidate += policy.granularity_minutes;
    }

    slots
}

/// Converts minutes from midnight to a wall-clock time.
///
/// Returns `None` for values of 24h or beyond, which cannot occur for slots
/// produced by [`available_slots`] from a window within a single day.
pub fn minute_to_time(minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
}

/// Converts a wall-clock time to minutes from midnight, dropping seconds.
pub fn time_to_minute(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
