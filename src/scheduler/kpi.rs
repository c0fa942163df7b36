//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Track count | Tracks in the schedule |
//! | Lower bound | ceil(total talk minutes / track capacity) |
//! | Wasted minutes | Sum of unused session capacity |
//! | Utilization | Used minutes / total capacity |
//! | Empty afternoons | Tracks whose afternoon holds no talks |

use std::collections::BTreeMap;

use serde::Serialize;

use super::bfd::estimate_track_count;
use crate::models::Schedule;

/// Schedule performance indicators.
///
/// All time values are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Number of tracks used.
    pub track_count: usize,
    /// Capacity-based lower bound on the track count.
    pub lower_bound_tracks: usize,
    /// Number of talks placed.
    pub talk_count: usize,
    /// Minutes occupied by talks.
    pub used_minutes: u32,
    /// Minutes left idle across all sessions.
    pub wasted_minutes: u32,
    /// Fraction of capacity used (0.0..1.0). 1.0 for an empty schedule.
    pub utilization: f64,
    /// Wasted minutes per track number.
    pub wasted_by_track: BTreeMap<u32, u32>,
    /// Tracks with nothing scheduled after lunch.
    pub empty_afternoons: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a packed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let used = schedule.used_time();
        let wasted = schedule.wasted_time();
        let capacity = used + wasted;

        let utilization = if capacity == 0 {
            1.0
        } else {
            used as f64 / capacity as f64
        };

        let wasted_by_track = schedule
            .tracks()
            .iter()
            .map(|t| (t.number(), t.wasted_time()))
            .collect();

        let empty_afternoons = schedule
            .tracks()
            .iter()
            .filter(|t| t.afternoon().is_empty())
            .count();

        Self {
            track_count: schedule.track_count(),
            lower_bound_tracks: estimate_track_count(used, schedule.layout()),
            talk_count: schedule.talk_count(),
            used_minutes: used,
            wasted_minutes: wasted,
            utilization,
            wasted_by_track,
            empty_afternoons,
        }
    }

    /// Whether the schedule uses no more tracks than the capacity bound.
    pub fn is_at_lower_bound(&self) -> bool {
        self.track_count <= self.lower_bound_tracks
    }
}
