//! Error types.
//!
//! Parse errors are data problems the caller can recover from per line.
//! Packing errors other than [`PackingError::InvalidInput`] mean the packer
//! disagreed with itself and the whole operation is abandoned.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::SessionKind;
use crate::validation::ValidationError;

/// A talk description line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The line has no separate duration token.
    #[error("invalid talk format: {line:?}")]
    TooFewTokens { line: String },

    /// The duration token is neither `lightning` nor `<int>min`.
    #[error("invalid duration {token:?} for talk: {line:?}")]
    InvalidDuration { line: String, token: String },

    /// The duration parsed to zero minutes.
    #[error("talk has zero duration: {line:?}")]
    ZeroDuration { line: String },

    /// The duration does not fit into any session.
    #[error("talk exceeds maximum duration: {line:?} (maximum is {max} mins)")]
    ExceedsMaximum { line: String, duration: u32, max: u32 },
}

/// Packing could not produce a schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackingError {
    /// The talk set failed validation before packing started.
    #[error("invalid talk set: {} problem(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),

    /// No session could take the talk, even in a freshly created track.
    #[error("no session fits talk {title:?} ({duration}min) after opening a new track")]
    NoFit { title: String, duration: u32 },

    /// The selected session rejected the talk on commit.
    #[error("track {track} {kind} session rejected selected talk {title:?} ({duration}min)")]
    CommitRejected {
        track: u32,
        kind: SessionKind,
        title: String,
        duration: u32,
    },
}

/// A day layout with hours out of order or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("hour {hour} is past the end of the day")]
    HourOutOfRange { hour: u32 },

    #[error(
        "layout hours out of order: day start {day_start}, lunch {lunch_start}-{lunch_end}, networking {networking_min}-{networking_max}"
    )]
    OutOfOrder {
        day_start: u32,
        lunch_start: u32,
        lunch_end: u32,
        networking_min: u32,
        networking_max: u32,
    },
}

/// Reading talks from a source failed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line failed to parse. `line` is 1-based.
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
}
