//! Track model: one parallel lane of the conference day.

use serde::Serialize;
use tracing::trace;

use super::{Session, SessionKind, Talk};
use crate::config::DayLayout;
use crate::format::minutes_to_friendly_time;

/// A track: a morning and an afternoon session under a stable number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    number: u32,
    morning: Session,
    afternoon: Session,
}

impl Track {
    /// Creates an empty track. Numbers are 1-based and assigned by the schedule.
    pub fn new(number: u32, layout: &DayLayout) -> Self {
        Self {
            number,
            morning: Session::morning(layout),
            afternoon: Session::afternoon(layout),
        }
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn morning(&self) -> &Session {
        &self.morning
    }

    pub fn afternoon(&self) -> &Session {
        &self.afternoon
    }

    /// Session of the given kind.
    pub fn session(&self, kind: SessionKind) -> &Session {
        match kind {
            SessionKind::Morning => &self.morning,
            SessionKind::Afternoon => &self.afternoon,
        }
    }

    pub fn session_mut(&mut self, kind: SessionKind) -> &mut Session {
        match kind {
            SessionKind::Morning => &mut self.morning,
            SessionKind::Afternoon => &mut self.afternoon,
        }
    }

    /// Morning then afternoon.
    pub fn sessions(&self) -> [&Session; 2] {
        [&self.morning, &self.afternoon]
    }

    /// Sequential placement: morning first, then afternoon.
    ///
    /// Each session is only tried while it reports space. Returns the talk
    /// in `Err` if neither accepts it.
    pub fn add_talk(&mut self, talk: Talk) -> Result<(), Talk> {
        let talk = if self.morning.has_space() {
            match self.morning.add_talk(talk) {
                Ok(()) => {
                    trace!(track = self.number, session = %SessionKind::Morning, "placed talk");
                    return Ok(());
                }
                Err(talk) => talk,
            }
        } else {
            talk
        };

        if self.afternoon.has_space() {
            self.afternoon.add_talk(talk)?;
            trace!(track = self.number, session = %SessionKind::Afternoon, "placed talk");
            return Ok(());
        }
        Err(talk)
    }

    /// Unused minutes across both sessions.
    pub fn wasted_time(&self) -> u32 {
        self.morning.wasted_time() + self.afternoon.wasted_time()
    }

    /// Minutes occupied across both sessions.
    pub fn used_time(&self) -> u32 {
        self.morning.used_time() + self.afternoon.used_time()
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    /// The chronologically last talk in this track.
    pub fn latest_talk(&self) -> Option<&Talk> {
        self.afternoon
            .last_talk()
            .or_else(|| self.morning.last_talk())
    }

    /// Day-clock minute at which the last talk ends, if any.
    pub fn latest_end_clock(&self) -> Option<u32> {
        let session = if self.afternoon.is_empty() {
            &self.morning
        } else {
            &self.afternoon
        };
        let end = session.last_talk()?.end_time()?;
        Some(session.start_hour() * 60 + end)
    }

    /// Renders the track with the given networking start (day-clock minutes).
    ///
    /// The afternoon block is omitted when the afternoon is empty.
    pub fn render(&self, layout: &DayLayout, closing_minute: u32) -> String {
        let mut lines = vec![format!("Track {}", self.number), String::new()];
        if !self.morning.is_empty() {
            lines.push(self.morning.to_string());
        }
        lines.push(format!(
            "{} Lunch",
            minutes_to_friendly_time(0, layout.lunch_start_hour())
        ));
        if !self.afternoon.is_empty() {
            lines.push(self.afternoon.to_string());
        }
        lines.push(format!(
            "{} Networking Event",
            minutes_to_friendly_time(closing_minute, 0)
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> DayLayout {
        DayLayout::default()
    }

    #[test]
    fn test_adding_talks_fills_morning_first() {
        let mut track = Track::new(1, &layout());
        for i in 1..=6 {
            assert!(track.add_talk(Talk::new(format!("Talk {i}"), 60)).is_ok());
        }

        assert_eq!(track.morning().talks()[0].title(), "Talk 1");
        assert_eq!(track.morning().talks().last().unwrap().title(), "Talk 3");
        assert_eq!(track.afternoon().talks()[0].title(), "Talk 4");
        assert_eq!(track.afternoon().talks().last().unwrap().title(), "Talk 6");
        assert_eq!(track.wasted_time(), 60);
        assert_eq!(track.used_time(), 360);
    }

    #[test]
    fn test_falls_back_to_afternoon_when_morning_too_short() {
        let mut track = Track::new(1, &layout());
        track.add_talk(Talk::new("Long", 150)).unwrap();
        track.add_talk(Talk::new("Medium", 60)).unwrap();
        assert_eq!(track.morning().talks().len(), 1);
        assert_eq!(track.afternoon().talks()[0].title(), "Medium");
    }

    #[test]
    fn test_full_track_returns_talk() {
        let mut track = Track::new(3, &layout());
        track.add_talk(Talk::new("Morning", 180)).unwrap();
        track.add_talk(Talk::new("Afternoon", 240)).unwrap();
        let rejected = track.add_talk(Talk::new("Extra", 5)).unwrap_err();
        assert_eq!(rejected.title(), "Extra");
        assert_eq!(track.wasted_time(), 0);
    }

    #[test]
    fn test_latest_talk() {
        let mut track = Track::new(1, &layout());
        assert!(track.latest_talk().is_none());
        assert!(track.latest_end_clock().is_none());

        track.add_talk(Talk::new("Morning", 60)).unwrap();
        assert_eq!(track.latest_talk().unwrap().title(), "Morning");
        assert_eq!(track.latest_end_clock(), Some(10 * 60));

        track.session_mut(SessionKind::Afternoon)
            .add_talk(Talk::new("Afternoon", 45))
            .unwrap();
        assert_eq!(track.latest_talk().unwrap().title(), "Afternoon");
        assert_eq!(track.latest_end_clock(), Some(13 * 60 + 45));
    }

    #[test]
    fn test_render_omits_empty_afternoon() {
        let mut track = Track::new(1, &layout());
        track.add_talk(Talk::new("Quick One", 5)).unwrap();
        assert_eq!(
            track.render(&layout(), 16 * 60),
            "Track 1\n\n09:00AM Quick One lightning\n12:00PM Lunch\n04:00PM Networking Event"
        );
    }

    #[test]
    fn test_render_full_day() {
        let mut track = Track::new(2, &layout());
        track.add_talk(Talk::new("Keynote", 180)).unwrap();
        track.add_talk(Talk::new("Workshop", 240)).unwrap();
        assert_eq!(
            track.render(&layout(), 17 * 60),
            "Track 2\n\n09:00AM Keynote 180min\n12:00PM Lunch\n01:00PM Workshop 240min\n05:00PM Networking Event"
        );
    }
}
