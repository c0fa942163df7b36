//! Conference domain models.
//!
//! Provides the data types packed by the schedulers.
//!
//! # Bin-Packing Mappings
//!
//! | u-tracks | Bin packing |
//! |----------|-------------|
//! | Talk | Item (size = duration) |
//! | Session | Bin (capacity = session length) |
//! | Track | Pair of bins opened together |
//! | Schedule | Packing solution |

mod schedule;
mod session;
mod talk;
mod track;

pub use schedule::{Packing, Schedule, TieBreak};
pub use session::{Session, SessionKind};
pub use talk::{Talk, LIGHTNING_DURATION};
pub use track::Track;
