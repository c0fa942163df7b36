//! Conference day layout.
//!
//! The layout fixes when the day starts, when lunch runs, and the window in
//! which the closing networking event may start. Session capacities and the
//! longest admissible talk are derived from it.
//!
//! # Time Model
//! Layout bounds are whole hours on a 24-hour clock. Everything derived
//! from them is in minutes. Talk times are relative to their session start;
//! day-clock minutes are relative to midnight.

use serde::Serialize;

use crate::error::LayoutError;
use crate::models::SessionKind;

/// Default day start (09:00).
pub const DAY_START_HOUR: u32 = 9;
/// Default lunch start (12:00).
pub const LUNCH_START_HOUR: u32 = 12;
/// Default lunch end (13:00).
pub const LUNCH_END_HOUR: u32 = 13;
/// Earliest networking event start (16:00).
pub const NETWORKING_START_HOUR_MIN: u32 = 16;
/// Latest networking event start (17:00).
pub const NETWORKING_START_HOUR_MAX: u32 = 17;

/// Immutable day layout shared by a schedule and all of its sessions.
///
/// Built once (usually via [`Default`]) and passed explicitly into
/// [`Schedule::new`](crate::models::Schedule::new),
/// [`Track::new`](crate::models::Track::new) and
/// [`Session::new`](crate::models::Session::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    day_start_hour: u32,
    lunch_start_hour: u32,
    lunch_end_hour: u32,
    networking_start_hour_min: u32,
    networking_start_hour_max: u32,
}

impl DayLayout {
    /// Creates a layout, checking that the hours are in day order.
    ///
    /// Requires `day_start < lunch_start <= lunch_end < networking_min
    /// <= networking_max <= 24`.
    pub fn new(
        day_start_hour: u32,
        lunch_start_hour: u32,
        lunch_end_hour: u32,
        networking_start_hour_min: u32,
        networking_start_hour_max: u32,
    ) -> Result<Self, LayoutError> {
        if networking_start_hour_max > 24 {
            return Err(LayoutError::HourOutOfRange {
                hour: networking_start_hour_max,
            });
        }
        let ordered = day_start_hour < lunch_start_hour
            && lunch_start_hour <= lunch_end_hour
            && lunch_end_hour < networking_start_hour_min
            && networking_start_hour_min <= networking_start_hour_max;
        if !ordered {
            return Err(LayoutError::OutOfOrder {
                day_start: day_start_hour,
                lunch_start: lunch_start_hour,
                lunch_end: lunch_end_hour,
                networking_min: networking_start_hour_min,
                networking_max: networking_start_hour_max,
            });
        }
        Ok(Self {
            day_start_hour,
            lunch_start_hour,
            lunch_end_hour,
            networking_start_hour_min,
            networking_start_hour_max,
        })
    }

    /// Hour the morning session starts.
    #[inline]
    pub fn day_start_hour(&self) -> u32 {
        self.day_start_hour
    }

    /// Hour lunch starts (end of the morning session).
    #[inline]
    pub fn lunch_start_hour(&self) -> u32 {
        self.lunch_start_hour
    }

    /// Hour lunch ends (start of the afternoon session).
    #[inline]
    pub fn lunch_end_hour(&self) -> u32 {
        self.lunch_end_hour
    }

    /// Hours available before lunch.
    #[inline]
    pub fn hours_before_lunch(&self) -> u32 {
        self.lunch_start_hour - self.day_start_hour
    }

    /// Hours available after lunch, up to the latest networking start.
    #[inline]
    pub fn hours_after_lunch(&self) -> u32 {
        self.networking_start_hour_max - self.lunch_end_hour
    }

    /// Morning session capacity (minutes).
    #[inline]
    pub fn morning_capacity(&self) -> u32 {
        self.hours_before_lunch() * 60
    }

    /// Afternoon session capacity (minutes).
    #[inline]
    pub fn afternoon_capacity(&self) -> u32 {
        self.hours_after_lunch() * 60
    }

    /// Capacity of one full track (minutes).
    #[inline]
    pub fn track_capacity(&self) -> u32 {
        self.morning_capacity() + self.afternoon_capacity()
    }

    /// Longest admissible talk: it must fit into either session.
    #[inline]
    pub fn max_talk_duration(&self) -> u32 {
        60 * self.hours_before_lunch().min(self.hours_after_lunch())
    }

    /// Capacity of the given session kind (minutes).
    pub fn capacity(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Morning => self.morning_capacity(),
            SessionKind::Afternoon => self.afternoon_capacity(),
        }
    }

    /// Day-clock hour at which the given session kind starts.
    pub fn session_start_hour(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Morning => self.day_start_hour,
            SessionKind::Afternoon => self.lunch_end_hour,
        }
    }

    /// Permitted networking start range as day-clock minutes `(earliest, latest)`.
    pub fn networking_window(&self) -> (u32, u32) {
        (
            self.networking_start_hour_min * 60,
            self.networking_start_hour_max * 60,
        )
    }
}

impl Default for DayLayout {
    fn default() -> Self {
        Self {
            day_start_hour: DAY_START_HOUR,
            lunch_start_hour: LUNCH_START_HOUR,
            lunch_end_hour: LUNCH_END_HOUR,
            networking_start_hour_min: NETWORKING_START_HOUR_MIN,
            networking_start_hour_max: NETWORKING_START_HOUR_MAX,
        }
    }
}
