//! Conference track packing.
//!
//! Assigns timed talks to the fewest parallel tracks, each a fixed-length
//! morning session and a fixed-length afternoon session, keeping idle time
//! inside sessions low. Exact packing is NP-hard; this crate uses
//! Best-Fit-Decreasing with two selectable tie-break policies, plus a
//! sequential baseline and a permutation search.
//!
//! # Modules
//!
//! - **`config`**: `DayLayout`, the fixed day shape and derived capacities
//! - **`models`**: `Talk`, `Session`, `Track`, `Schedule`
//! - **`scheduler`**: BFD engine, sequential packer, permutation search, KPIs
//! - **`validation`**: talk-set checks run before packing
//! - **`input`** / **`format`**: line-oriented reading and clock rendering
//! - **`error`**: error types
//!
//! # Example
//!
//! ```
//! use u_tracks::config::DayLayout;
//! use u_tracks::models::{Schedule, Talk, TieBreak};
//!
//! let talks: Vec<Talk> = ["Keynote 60min", "Rust in Production 45min", "Fast Builds lightning"]
//!     .iter()
//!     .map(|line| line.parse().unwrap())
//!     .collect();
//!
//! let mut schedule = Schedule::new(DayLayout::default()).with_tie_break(TieBreak::Balanced);
//! schedule.add_talks(talks).unwrap();
//! assert_eq!(schedule.track_count(), 1);
//! assert!(schedule.to_string().starts_with("Track 1\n\n09:00AM Keynote 60min"));
//! ```
//!
//! # References
//!
//! - Johnson (1974), "Fast Algorithms for Bin Packing"
//! - Coffman et al. (2013), "Bin Packing Approximation Algorithms: Survey and Classification"

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
