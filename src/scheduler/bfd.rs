//! Best-Fit-Decreasing session packing.
//!
//! # Algorithm
//!
//! 1. Pre-create `ceil(total minutes / track capacity)` tracks.
//! 2. Stable-sort talks by decreasing duration.
//! 3. For each talk, select the session with the least waste after
//!    placement (per [`TieBreak`]). If none fits, open one track and retry.
//! 4. Commit through [`Session::add_talk`](crate::models::Session::add_talk).
//!
//! # Complexity
//! O(n log n + n * t) where n = talks, t = tracks.
//!
//! # Reference
//! Johnson (1974), "Fast Algorithms for Bin Packing"; Coffman et al. (2013),
//! "Bin Packing Approximation Algorithms: Survey and Classification"

use tracing::{trace, warn};

use crate::config::DayLayout;
use crate::error::PackingError;
use crate::models::{Schedule, SessionKind, Talk, TieBreak, Track};

/// A session addressed by track index and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSlot {
    /// Index into the schedule's track list.
    pub track_index: usize,
    /// Morning or afternoon.
    pub kind: SessionKind,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    waste_after: u32,
    track_index: usize,
}

/// Lower bound on the number of tracks needed for `total_minutes` of talks.
pub fn estimate_track_count(total_minutes: u32, layout: &DayLayout) -> usize {
    total_minutes.div_ceil(layout.track_capacity()) as usize
}

/// Selects the best-fitting session for a talk of `duration` minutes.
///
/// Only sessions with at least `duration` minutes of waste are eligible.
/// Returns `None` when no session in `tracks` can take the talk.
pub fn select_session(tracks: &[Track], duration: u32, tie_break: TieBreak) -> Option<SessionSlot> {
    match tie_break {
        TieBreak::Balanced => select_balanced(tracks, duration),
        TieBreak::PreferMornings => select_least_waste(tracks, duration),
    }
}

fn waste_after(track: &Track, kind: SessionKind, duration: u32) -> Option<u32> {
    track.session(kind).wasted_time().checked_sub(duration)
}

fn keep_better(best: &mut Option<Candidate>, candidate: Candidate) {
    if best.map_or(true, |b| candidate.waste_after < b.waste_after) {
        *best = Some(candidate);
    }
}

fn select_balanced(tracks: &[Track], duration: u32) -> Option<SessionSlot> {
    let mut best_morning: Option<Candidate> = None;
    let mut best_afternoon: Option<Candidate> = None;

    for (track_index, track) in tracks.iter().enumerate() {
        if let Some(waste_after) = waste_after(track, SessionKind::Morning, duration) {
            keep_better(&mut best_morning, Candidate { waste_after, track_index });
        }
        if let Some(waste_after) = waste_after(track, SessionKind::Afternoon, duration) {
            keep_better(&mut best_afternoon, Candidate { waste_after, track_index });
        }
    }

    let morning = |c: Candidate| SessionSlot {
        track_index: c.track_index,
        kind: SessionKind::Morning,
    };
    let afternoon = |c: Candidate| SessionSlot {
        track_index: c.track_index,
        kind: SessionKind::Afternoon,
    };

    match (best_morning, best_afternoon) {
        (Some(m), Some(a)) => {
            if tracks[a.track_index].number() < tracks[m.track_index].number() {
                Some(afternoon(a))
            } else {
                Some(morning(m))
            }
        }
        (Some(m), None) => Some(morning(m)),
        (None, Some(a)) => Some(afternoon(a)),
        (None, None) => None,
    }
}

fn select_least_waste(tracks: &[Track], duration: u32) -> Option<SessionSlot> {
    let mut best: Option<(u32, SessionSlot)> = None;

    for (track_index, track) in tracks.iter().enumerate() {
        for kind in [SessionKind::Morning, SessionKind::Afternoon] {
            let Some(waste) = waste_after(track, kind, duration) else {
                continue;
            };
            if best.map_or(true, |(best_waste, _)| waste < best_waste) {
                best = Some((waste, SessionSlot { track_index, kind }));
            }
        }
    }

    best.map(|(_, slot)| slot)
}

/// Packs `talks` into `schedule`, which must have no tracks yet.
pub(crate) fn pack(
    schedule: &mut Schedule,
    mut talks: Vec<Talk>,
    tie_break: TieBreak,
) -> Result<(), PackingError> {
    let total: u32 = talks.iter().map(Talk::duration).sum();
    for _ in 0..estimate_track_count(total, schedule.layout()) {
        schedule.create_track();
    }

    talks.sort_by(|a, b| b.duration().cmp(&a.duration()));

    for talk in talks {
        let slot = match select_session(schedule.tracks(), talk.duration(), tie_break) {
            Some(slot) => slot,
            None => {
                schedule.create_track();
                select_session(schedule.tracks(), talk.duration(), tie_break).ok_or_else(
                    || {
                        warn!(title = talk.title(), duration = talk.duration(), "no session fits talk");
                        PackingError::NoFit {
                            title: talk.title().to_string(),
                            duration: talk.duration(),
                        }
                    },
                )?
            }
        };
        commit(schedule, slot, talk)?;
    }
    Ok(())
}

fn commit(schedule: &mut Schedule, slot: SessionSlot, talk: Talk) -> Result<(), PackingError> {
    let track = &mut schedule.tracks_mut()[slot.track_index];
    let number = track.number();
    let duration = talk.duration();

    match track.session_mut(slot.kind).add_talk(talk) {
        Ok(()) => {
            trace!(track = number, session = %slot.kind, duration, "placed talk");
            Ok(())
        }
        Err(talk) => Err(PackingError::CommitRejected {
            track: number,
            kind: slot.kind,
            title: talk.title().to_string(),
            duration,
        }),
    }
}
