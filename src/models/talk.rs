//! Talk model.
//!
//! A talk is one item to pack: a title and a duration. Its start time is
//! unset until a session accepts it.

use std::str::FromStr;

use serde::Serialize;

use crate::config::DayLayout;
use crate::error::FormatError;
use crate::format::minutes_to_friendly_time;

/// Duration of a lightning talk (minutes).
pub const LIGHTNING_DURATION: u32 = 5;

const LIGHTNING_TOKEN: &str = "lightning";
const MINUTES_SUFFIX: &str = "min";

/// A single conference talk.
///
/// # Time Representation
/// `start_time` and `end_time` are minutes relative to the start of the
/// session holding the talk, not day-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talk {
    title: String,
    duration: u32,
    start_time: Option<u32>,
}

impl Talk {
    /// Creates an unplaced talk.
    ///
    /// The duration is not checked here; [`validate_talks`](crate::validation::validate_talks)
    /// rejects out-of-range durations before packing.
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
            start_time: None,
        }
    }

    /// Parses `"<title> <duration>"` where the duration is `lightning` or `<int>min`.
    ///
    /// Tokens are whitespace-separated; the title is rejoined with single spaces.
    pub fn parse_with_max(text: &str, max_duration: u32) -> Result<Self, FormatError> {
        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        let token = match tokens.pop() {
            Some(token) if !tokens.is_empty() => token,
            _ => {
                return Err(FormatError::TooFewTokens {
                    line: text.to_string(),
                })
            }
        };

        let duration = parse_duration(token).ok_or_else(|| FormatError::InvalidDuration {
            line: text.to_string(),
            token: token.to_string(),
        })?;
        if duration == 0 {
            return Err(FormatError::ZeroDuration {
                line: text.to_string(),
            });
        }
        if duration > max_duration {
            return Err(FormatError::ExceedsMaximum {
                line: text.to_string(),
                duration,
                max: max_duration,
            });
        }

        Ok(Self::new(tokens.join(" "), duration))
    }

    /// Places the talk at `minutes` from its session start.
    pub fn start_at(&mut self, minutes: u32) -> &mut Self {
        self.start_time = Some(minutes);
        self
    }

    /// Talk title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration (minutes).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Start offset within its session, if placed.
    #[inline]
    pub fn start_time(&self) -> Option<u32> {
        self.start_time
    }

    /// End offset within its session, if placed.
    #[inline]
    pub fn end_time(&self) -> Option<u32> {
        self.start_time.map(|start| start + self.duration)
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.start_time.is_some()
    }

    /// `lightning` for 5-minute talks, otherwise `<n>min`.
    pub fn friendly_duration(&self) -> String {
        if self.duration == LIGHTNING_DURATION {
            LIGHTNING_TOKEN.to_string()
        } else {
            format!("{}{MINUTES_SUFFIX}", self.duration)
        }
    }

    /// Renders `"<start> <title> <duration>"` against the session's start hour.
    ///
    /// An unplaced talk renders as if it started at the session start.
    pub fn render(&self, session_start_hour: u32) -> String {
        format!(
            "{} {} {}",
            minutes_to_friendly_time(self.start_time.unwrap_or(0), session_start_hour),
            self.title,
            self.friendly_duration()
        )
    }
}

impl FromStr for Talk {
    type Err = FormatError;

    /// Parses against the default day layout's maximum duration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_max(s, DayLayout::default().max_talk_duration())
    }
}

fn parse_duration(token: &str) -> Option<u32> {
    if token == LIGHTNING_TOKEN {
        return Some(LIGHTNING_DURATION);
    }
    token.strip_suffix(MINUTES_SUFFIX)?.parse().ok()
}
