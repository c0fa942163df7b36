//! Schedule (solution) model.
//!
//! A schedule owns the tracks produced by packing a talk set. It records
//! the packing policy it was built with so that repacking (e.g. during
//! permutation search) reproduces the same behaviour.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::{Talk, Track};
use crate::config::DayLayout;
use crate::error::PackingError;
use crate::scheduler::{bfd, sequential};
use crate::validation::validate_talks;

/// How best-fit selection chooses between morning and afternoon candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Best morning and best afternoon are tracked separately; the afternoon
    /// wins only when it belongs to a strictly earlier track.
    #[default]
    Balanced,
    /// The single least-waste session wins, mornings visited first.
    PreferMornings,
}

/// Packing algorithm used by [`Schedule::add_talks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Packing {
    /// Best-Fit-Decreasing with the given tie-break.
    BestFitDecreasing(TieBreak),
    /// Talks in input order, each into the current track or a new one.
    FirstFit,
}

impl Default for Packing {
    fn default() -> Self {
        Packing::BestFitDecreasing(TieBreak::default())
    }
}

/// A conference schedule: tracks numbered `1..=N` in creation order.
///
/// `Clone` produces a fully independent copy (every track, session and
/// talk is owned), which is what search uses to snapshot the best schedule.
///
/// # Example
///
/// ```
/// use u_tracks::config::DayLayout;
/// use u_tracks::models::{Schedule, Talk};
///
/// let talks = (0..14).map(|i| Talk::new(format!("Talk {i}"), 60));
/// let mut schedule = Schedule::new(DayLayout::default());
/// schedule.add_talks(talks).unwrap();
///
/// assert_eq!(schedule.track_count(), 2);
/// assert_eq!(schedule.wasted_time(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    layout: DayLayout,
    packing: Packing,
    tracks: Vec<Track>,
    next_track_number: u32,
}

impl Schedule {
    /// Creates an empty schedule with the default packing policy.
    pub fn new(layout: DayLayout) -> Self {
        Self {
            layout,
            packing: Packing::default(),
            tracks: Vec::new(),
            next_track_number: 1,
        }
    }

    /// Sets the packing policy.
    pub fn with_packing(mut self, packing: Packing) -> Self {
        self.packing = packing;
        self
    }

    /// Shorthand for best-fit-decreasing with the given tie-break.
    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        self.with_packing(Packing::BestFitDecreasing(tie_break))
    }

    pub fn layout(&self) -> &DayLayout {
        &self.layout
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of talks placed across all tracks.
    pub fn talk_count(&self) -> usize {
        self.tracks
            .iter()
            .flat_map(Track::sessions)
            .map(|s| s.talks().len())
            .sum()
    }

    /// Replaces the schedule's contents with a packing of `talks`.
    ///
    /// Any previous tracks are discarded and numbering restarts at 1, so
    /// calling this twice with the same talks gives the same schedule. On
    /// error the schedule is left empty.
    pub fn add_talks<I>(&mut self, talks: I) -> Result<(), PackingError>
    where
        I: IntoIterator<Item = Talk>,
    {
        let talks: Vec<Talk> = talks.into_iter().collect();
        self.reset();
        validate_talks(&talks, &self.layout).map_err(PackingError::InvalidInput)?;

        let result = match self.packing {
            Packing::BestFitDecreasing(tie_break) => bfd::pack(self, talks, tie_break),
            Packing::FirstFit => sequential::pack(self, talks),
        };
        match &result {
            Ok(()) => debug!(
                tracks = self.tracks.len(),
                wasted = self.wasted_time(),
                packing = ?self.packing,
                "packed talks"
            ),
            Err(err) => {
                warn!(error = %err, "packing failed; discarding partial schedule");
                self.reset();
            }
        }
        result
    }

    /// Appends a new empty track and returns its index.
    pub(crate) fn create_track(&mut self) -> usize {
        let track = Track::new(self.next_track_number, &self.layout);
        debug!(track = self.next_track_number, "created track");
        self.next_track_number += 1;
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    pub(crate) fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    fn reset(&mut self) {
        self.tracks.clear();
        self.next_track_number = 1;
    }

    /// Unused minutes across all tracks.
    pub fn wasted_time(&self) -> u32 {
        self.tracks.iter().map(Track::wasted_time).sum()
    }

    /// Minutes occupied across all tracks.
    pub fn used_time(&self) -> u32 {
        self.tracks.iter().map(Track::used_time).sum()
    }

    /// The track-latest talk with the greatest end time (first on ties).
    pub fn latest_talk(&self) -> Option<&Talk> {
        self.tracks
            .iter()
            .filter_map(Track::latest_talk)
            .fold(None, |best: Option<&Talk>, talk| match best {
                Some(best) if best.end_time() >= talk.end_time() => Some(best),
                _ => Some(talk),
            })
    }

    /// Day-clock minute at which the shared networking event starts.
    ///
    /// The latest talk end across all tracks, clamped into the layout's
    /// networking window.
    pub fn closing_time(&self) -> u32 {
        let (earliest, latest) = self.layout.networking_window();
        self.tracks
            .iter()
            .filter_map(Track::latest_end_clock)
            .max()
            .map_or(earliest, |end| end.clamp(earliest, latest))
    }
}

impl fmt::Display for Schedule {
    /// Blank-line-separated track renderings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let closing = self.closing_time();
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", track.render(&self.layout, closing))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionKind;

    fn sixty_minute_talks() -> Vec<Talk> {
        let mut talks = Vec::new();
        for track in 1..=2 {
            for i in 1..=7 {
                talks.push(Talk::new(format!("Talk {i}, Track {track}"), 60));
            }
        }
        talks
    }

    #[test]
    fn test_fourteen_hour_talks_fill_two_tracks() {
        for tie_break in [TieBreak::Balanced, TieBreak::PreferMornings] {
            let mut schedule = Schedule::new(DayLayout::default()).with_tie_break(tie_break);
            schedule.add_talks(sixty_minute_talks()).unwrap();

            assert_eq!(schedule.track_count(), 2, "{tie_break:?}");
            for track in schedule.tracks() {
                assert_eq!(track.wasted_time(), 0);
            }
        }
    }

    #[test]
    fn test_balanced_fills_tracks_front_to_back() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks(sixty_minute_talks()).unwrap();

        let tracks = schedule.tracks();
        assert_eq!(tracks[0].morning().talks()[0].title(), "Talk 1, Track 1");
        assert_eq!(
            tracks[0].afternoon().talks().last().unwrap().title(),
            "Talk 7, Track 1"
        );
        assert_eq!(tracks[1].morning().talks()[0].title(), "Talk 1, Track 2");
        assert_eq!(
            tracks[1].afternoon().talks().last().unwrap().title(),
            "Talk 7, Track 2"
        );
    }

    #[test]
    fn test_first_fit_matches_input_order() {
        let mut schedule = Schedule::new(DayLayout::default()).with_packing(Packing::FirstFit);
        schedule.add_talks(sixty_minute_talks()).unwrap();

        assert_eq!(schedule.track_count(), 2);
        assert_eq!(
            schedule.tracks()[1].morning().talks()[0].title(),
            "Talk 1, Track 2"
        );
    }

    #[test]
    fn test_full_session_talks() {
        let talks = [180, 180, 240, 240]
            .into_iter()
            .enumerate()
            .map(|(i, d)| Talk::new(format!("T{i}"), d));
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks(talks).unwrap();

        assert_eq!(schedule.track_count(), 2);
        for track in schedule.tracks() {
            assert_eq!(track.morning().talks().len(), 1);
            assert_eq!(track.morning().talks()[0].duration(), 180);
            assert_eq!(track.afternoon().talks().len(), 1);
            assert_eq!(track.afternoon().talks()[0].duration(), 240);
            assert_eq!(track.wasted_time(), 0);
        }
    }

    #[test]
    fn test_single_lightning_talk() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks([Talk::new("Quick One", 5)]).unwrap();

        assert_eq!(schedule.track_count(), 1);
        let track = &schedule.tracks()[0];
        assert_eq!(track.session(SessionKind::Morning).wasted_time(), 175);
        assert_eq!(track.session(SessionKind::Afternoon).wasted_time(), 240);
        assert!(track.afternoon().is_empty());
        assert_eq!(
            schedule.to_string(),
            "Track 1\n\n09:00AM Quick One lightning\n12:00PM Lunch\n04:00PM Networking Event"
        );
    }

    #[test]
    fn test_empty_input() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks(Vec::new()).unwrap();
        assert_eq!(schedule.track_count(), 0);
        assert!(schedule.latest_talk().is_none());
        assert_eq!(schedule.closing_time(), 16 * 60);
        assert_eq!(schedule.to_string(), "");
    }

    #[test]
    fn test_add_talks_is_idempotent() {
        let talks: Vec<Talk> = [90, 30, 45, 120, 5, 60, 60, 15]
            .into_iter()
            .enumerate()
            .map(|(i, d)| Talk::new(format!("T{i}"), d))
            .collect();
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks(talks.clone()).unwrap();
        let first = schedule.clone();
        schedule.add_talks(talks).unwrap();

        assert_eq!(schedule, first);
        assert_eq!(schedule.tracks()[0].number(), 1);
    }

    #[test]
    fn test_invalid_talks_rejected_before_packing() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks([Talk::new("Fine", 30)]).unwrap();

        let err = schedule
            .add_talks([Talk::new("Instant", 0), Talk::new("Marathon", 300)])
            .unwrap_err();
        match err {
            PackingError::InvalidInput(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(schedule.track_count(), 0);
    }

    #[test]
    fn test_latest_talk_and_closing_time() {
        let mut schedule = Schedule::new(DayLayout::default()).with_packing(Packing::FirstFit);
        schedule
            .add_talks([
                Talk::new("Morning", 180),
                Talk::new("Afternoon", 200),
                Talk::new("Second Track", 180),
                Talk::new("Short Afternoon", 30),
            ])
            .unwrap();

        assert_eq!(schedule.latest_talk().unwrap().title(), "Afternoon");
        // 13:00 + 200min = 16:20
        assert_eq!(schedule.closing_time(), 16 * 60 + 20);
        assert!(schedule
            .to_string()
            .ends_with("04:20PM Networking Event"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks([Talk::new("A", 60)]).unwrap();
        let snapshot = schedule.clone();

        schedule.add_talks([Talk::new("B", 30), Talk::new("C", 30)]).unwrap();
        assert_eq!(snapshot.talk_count(), 1);
        assert_eq!(snapshot.tracks()[0].morning().talks()[0].title(), "A");
        assert_eq!(schedule.talk_count(), 2);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut schedule = Schedule::new(DayLayout::default());
        schedule.add_talks([Talk::new("A", 60)]).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();

        assert_eq!(json["packing"]["best_fit_decreasing"], "balanced");
        assert_eq!(json["tracks"][0]["number"], 1);
        assert_eq!(json["tracks"][0]["morning"]["talks"][0]["title"], "A");
    }
}
