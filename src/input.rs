//! Reading talk lists.
//!
//! One talk per line in the `"<title> <duration>"` form accepted by
//! [`Talk::parse_with_max`]. Lines are trimmed and blank lines skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::DayLayout;
use crate::error::InputError;
use crate::models::Talk;

/// Parses every non-blank line of `reader` into a talk.
///
/// Stops at the first malformed line; the error carries its 1-based number.
pub fn read_talks<R: BufRead>(reader: R, layout: &DayLayout) -> Result<Vec<Talk>, InputError> {
    let max = layout.max_talk_duration();
    let mut talks = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let talk = Talk::parse_with_max(trimmed, max).map_err(|source| InputError::Format {
            line: i + 1,
            source,
        })?;
        talks.push(talk);
    }

    debug!(count = talks.len(), "read talks");
    Ok(talks)
}

/// Reads talks from a UTF-8 text file.
pub fn read_talks_from_file(path: impl AsRef<Path>, layout: &DayLayout) -> Result<Vec<Talk>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_talks(BufReader::new(file), layout)
}
