/*!
 * Millisecond-precision timestamps for the timed-lyrics notation.
 *
 * Two textual encodings appear in lyrics files: the line-tag form used
 * inside `[...]` prefixes and the word-tag form used inside `<...>`
 * brackets. Both share the same `M:SS.mmm` shape; formatting always
 * produces the canonical zero-padded `mm:ss.mmm` form.
 */

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;

// Minutes are one or more digits (no 59-minute cap), seconds exactly two,
// milliseconds exactly three.
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^(\d+):(\d{2})\.(\d{3})$").unwrap()
});

/// A non-negative timestamp with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeCode(u64);

impl TimeCode {
    /// Create a timecode from a raw millisecond count
    pub fn from_millis(ms: u64) -> Self {
        TimeCode(ms)
    }

    /// Total milliseconds
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Parse the line-tag form, e.g. `1:02.345` or `01:02.345`
    ///
    /// Fails with `MalformedTimeCode` on wrong digit counts, non-numeric
    /// characters or missing separators.
    pub fn parse_simple(text: &str) -> Result<Self, ParseError> {
        Self::parse_shaped(text)
    }

    /// Parse the interior of a `<mm:ss.mmm>` word tag
    ///
    /// The grammar is currently identical to the line-tag form; the two
    /// entry points are kept separate because the formats come from
    /// different positions in the notation and may diverge.
    pub fn parse_bracketed(text: &str) -> Result<Self, ParseError> {
        Self::parse_shaped(text)
    }

    fn parse_shaped(text: &str) -> Result<Self, ParseError> {
        let caps = TIMECODE_REGEX
            .captures(text)
            .ok_or_else(|| ParseError::MalformedTimeCode(text.to_string()))?;

        let field = |idx: usize| -> Result<u64, ParseError> {
            caps.get(idx)
                .map(|m| m.as_str())
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| ParseError::MalformedTimeCode(text.to_string()))
        };

        let minutes = field(1)?;
        let seconds = field(2)?;
        let millis = field(3)?;

        if seconds >= 60 {
            return Err(ParseError::MalformedTimeCode(text.to_string()));
        }

        Ok(TimeCode(minutes * 60_000 + seconds * 1_000 + millis))
    }
}

// Canonical form: minutes zero-padded to at least 2 digits but never
// wrapped, so values past an hour render as e.g. "75:00.000".
impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 60_000;
        let seconds = (self.0 / 1_000) % 60;
        let millis = self.0 % 1_000;
        write!(f, "{:02}:{:02}.{:03}", minutes, seconds, millis)
    }
}

impl From<u64> for TimeCode {
    fn from(ms: u64) -> Self {
        TimeCode(ms)
    }
}
