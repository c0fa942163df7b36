//! Session (bin) model.
//!
//! A session is a fixed-capacity block of the day holding talks packed
//! back to back from its start. Talks are only ever appended.

use std::fmt;

use serde::Serialize;

use super::Talk;
use crate::config::DayLayout;

/// Which half of the day a session covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Day start to lunch start.
    Morning,
    /// Lunch end to the latest networking start.
    Afternoon,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Morning => write!(f, "morning"),
            SessionKind::Afternoon => write!(f, "afternoon"),
        }
    }
}

/// A fixed-capacity session of contiguously packed talks.
///
/// # Invariants
/// - `used_time + wasted_time == total_time`
/// - `talks[0].start_time == 0` and each talk starts where the previous ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    kind: SessionKind,
    start_hour: u32,
    total_time: u32,
    talks: Vec<Talk>,
    used_time: u32,
    wasted_time: u32,
}

impl Session {
    /// Creates an empty session sized by the layout.
    pub fn new(kind: SessionKind, layout: &DayLayout) -> Self {
        let total_time = layout.capacity(kind);
        Self {
            kind,
            start_hour: layout.session_start_hour(kind),
            total_time,
            talks: Vec::new(),
            used_time: 0,
            wasted_time: total_time,
        }
    }

    /// Creates an empty morning session.
    pub fn morning(layout: &DayLayout) -> Self {
        Self::new(SessionKind::Morning, layout)
    }

    /// Creates an empty afternoon session.
    pub fn afternoon(layout: &DayLayout) -> Self {
        Self::new(SessionKind::Afternoon, layout)
    }

    #[inline]
    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Day-clock hour this session starts at.
    #[inline]
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Capacity (minutes).
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    /// Minutes occupied by talks.
    #[inline]
    pub fn used_time(&self) -> u32 {
        self.used_time
    }

    /// Minutes left unused.
    #[inline]
    pub fn wasted_time(&self) -> u32 {
        self.wasted_time
    }

    /// Talks in chronological order.
    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    /// Last talk placed, if any.
    pub fn last_talk(&self) -> Option<&Talk> {
        self.talks.last()
    }

    /// Coarse admission check: any capacity left at all.
    #[inline]
    pub fn has_space(&self) -> bool {
        self.used_time < self.total_time
    }

    /// Offset at which the next talk would start.
    fn next_start(&self) -> u32 {
        self.talks
            .last()
            .and_then(Talk::end_time)
            .unwrap_or(0)
    }

    /// Whether a talk of `duration` minutes would be accepted.
    #[inline]
    pub fn fits(&self, duration: u32) -> bool {
        self.next_start() + duration <= self.total_time
    }

    /// Appends the talk if it fits.
    ///
    /// On success the talk is placed at the current end of the session. If
    /// it does not fit, the session is left unchanged and the talk is
    /// returned untouched in `Err`.
    pub fn add_talk(&mut self, mut talk: Talk) -> Result<(), Talk> {
        if !self.fits(talk.duration()) {
            return Err(talk);
        }
        talk.start_at(self.next_start());
        self.use_time(talk.duration());
        self.talks.push(talk);
        Ok(())
    }

    fn use_time(&mut self, duration: u32) {
        self.used_time += duration;
        self.wasted_time -= duration;
    }
}

impl fmt::Display for Session {
    /// Newline-joined talk renderings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, talk) in self.talks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", talk.render(self.start_hour))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> DayLayout {
        DayLayout::default()
    }

    fn assert_contiguous(session: &Session) {
        let mut expected_start = 0;
        for talk in session.talks() {
            assert_eq!(talk.start_time(), Some(expected_start));
            expected_start = talk.end_time().unwrap();
        }
        assert_eq!(
            session.used_time() + session.wasted_time(),
            session.total_time()
        );
    }

    #[test]
    fn test_morning_session_adding_talks() {
        let mut session = Session::morning(&layout());
        assert!(session.add_talk(Talk::new("Talk 1", 60)).is_ok());
        assert!(session.add_talk(Talk::new("Talk 2", 60)).is_ok());
        assert!(session.add_talk(Talk::new("Talk 3", 60)).is_ok());
        // Full: even a lightning talk is rejected
        assert!(session.add_talk(Talk::new("Talk 4", 5)).is_err());

        let times: Vec<_> = session
            .talks()
            .iter()
            .map(|t| (t.start_time().unwrap(), t.end_time().unwrap()))
            .collect();
        assert_eq!(times, vec![(0, 60), (60, 120), (120, 180)]);
    }

    #[test]
    fn test_afternoon_session_adding_talks() {
        let mut session = Session::afternoon(&layout());
        for i in 1..=4 {
            assert!(session.add_talk(Talk::new(format!("Talk {i}"), 60)).is_ok());
        }
        assert!(session.add_talk(Talk::new("Talk 5", 5)).is_err());
        assert_eq!(session.talks()[3].start_time(), Some(180));
        assert_eq!(session.talks()[3].end_time(), Some(240));
        assert!(!session.has_space());
    }

    #[test]
    fn test_wasted_time_calculation() {
        let mut session = Session::morning(&layout());
        assert_eq!(session.wasted_time(), 180);
        session.add_talk(Talk::new("Talk 1", 60)).unwrap();
        assert_eq!(session.wasted_time(), 120);
        session.add_talk(Talk::new("Talk 2", 45)).unwrap();
        assert_eq!(session.wasted_time(), 75);
        assert_eq!(session.used_time(), 105);
    }

    #[test]
    fn test_rejected_talk_is_returned_untouched() {
        let mut session = Session::morning(&layout());
        session.add_talk(Talk::new("Long", 150)).unwrap();
        let before = session.clone();

        let rejected = session.add_talk(Talk::new("Too Long", 60)).unwrap_err();
        assert_eq!(rejected.title(), "Too Long");
        assert!(!rejected.is_placed());
        assert_eq!(session, before);
    }

    #[test]
    fn test_has_space_is_coarse() {
        let mut session = Session::morning(&layout());
        session.add_talk(Talk::new("Long", 175)).unwrap();
        assert!(session.has_space());
        assert!(!session.fits(30));
        assert!(session.fits(5));
    }

    #[test]
    fn test_display() {
        let mut session = Session::afternoon(&layout());
        session.add_talk(Talk::new("First", 30)).unwrap();
        session.add_talk(Talk::new("Second", 5)).unwrap();
        assert_eq!(
            session.to_string(),
            "01:00PM First 30min\n01:30PM Second lightning"
        );
        assert_eq!(Session::morning(&layout()).to_string(), "");
    }

    proptest! {
        #[test]
        fn prop_session_invariants(durations in prop::collection::vec(1u32..=180, 0..40), morning in any::<bool>()) {
            let kind = if morning { SessionKind::Morning } else { SessionKind::Afternoon };
            let mut session = Session::new(kind, &layout());
            for (i, d) in durations.into_iter().enumerate() {
                let before = session.clone();
                if session.add_talk(Talk::new(format!("T{i}"), d)).is_err() {
                    prop_assert_eq!(&session, &before);
                }
                prop_assert_eq!(session.used_time() + session.wasted_time(), session.total_time());
            }
            prop_assert_eq!(session.total_time(), if morning { 180 } else { 240 });
            assert_contiguous(&session);
        }
    }
}
