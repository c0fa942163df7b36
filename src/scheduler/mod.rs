//! Packing algorithms and schedule evaluation.
//!
//! # Algorithms
//!
//! - **`bfd`**: Best-Fit-Decreasing over all sessions with two tie-break
//!   policies. The default packer.
//! - **`sequential`**: first-fit in input order, current track only.
//! - **`search`**: permutation search over input orderings, keeping a
//!   deep-copied best schedule.
//!
//! Both packers run through [`Schedule::add_talks`](crate::models::Schedule::add_talks),
//! selected by [`Packing`](crate::models::Packing).
//!
//! # KPI
//!
//! `ScheduleKpi` summarises track count against its lower bound, idle
//! minutes and utilization.
//!
//! # References
//!
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//!   Packing: A Survey"
//! - Martello & Toth (1990), "Knapsack Problems", Ch. 8

pub mod bfd;
mod kpi;
mod search;
pub(crate) mod sequential;

pub use bfd::{estimate_track_count, select_session, SessionSlot};
pub use kpi::ScheduleKpi;
pub use search::{PermutationSearch, SearchOutcome, DEFAULT_MAX_PERMUTATIONS};
