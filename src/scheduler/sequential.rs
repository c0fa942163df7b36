//! Sequential first-fit packing.
//!
//! # Algorithm
//!
//! Talks are taken in input order. Each goes into the current track via
//! [`Track::add_talk`](crate::models::Track::add_talk) (morning, then
//! afternoon); when the current track rejects it a new track becomes
//! current. Earlier tracks are never revisited.
//!
//! Fast and order-sensitive, so mainly useful as a baseline and as the
//! packer for permutation search.

use tracing::warn;

use crate::error::PackingError;
use crate::models::{Schedule, Talk};

/// Packs `talks` into `schedule` in the given order.
pub(crate) fn pack(schedule: &mut Schedule, talks: Vec<Talk>) -> Result<(), PackingError> {
    let mut current: Option<usize> = None;

    for talk in talks {
        let mut talk = talk;
        let mut index = match current {
            Some(index) => index,
            None => schedule.create_track(),
        };

        loop {
            let track = &mut schedule.tracks_mut()[index];
            let fresh = track.is_empty();
            match track.add_talk(talk) {
                Ok(()) => break,
                Err(rejected) if fresh => {
                    warn!(title = rejected.title(), duration = rejected.duration(), "empty track rejected talk");
                    return Err(PackingError::NoFit {
                        title: rejected.title().to_string(),
                        duration: rejected.duration(),
                    });
                }
                Err(rejected) => {
                    talk = rejected;
                    index = schedule.create_track();
                }
            }
        }
        current = Some(index);
    }
    Ok(())
}
