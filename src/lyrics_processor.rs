/*!
 * Timed-lyrics model, parser and serializer.
 *
 * The persisted notation is an extended LRC dialect: an optional
 * `[mm:ss.mmm]` line prefix giving the line's start time, followed by
 * either space-separated bare words or a timed run where `<mm:ss.mmm>`
 * tags bracket word start/end times. Parsing is tolerant: a malformed
 * line is logged and dropped, and the rest of the document still loads.
 */

use std::fmt;
use log::{debug, warn};

use crate::errors::ParseError;
use crate::timecode::TimeCode;

/// Voice channel a line belongs to.
///
/// Declared for forward compatibility with multi-voice notations; no
/// current format revision carries a voice marker, so the parser leaves
/// every line on the primary voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    /// Lead voice (the only value the parser produces today)
    #[default]
    Primary,
    /// Second lead voice
    Secondary,
    /// Background voice
    Background,
}

/// One lyric token with optional start/end timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word text, free of spaces and tag brackets
    pub text: String,
    /// When the word starts being sung
    pub start: Option<TimeCode>,
    /// When the word stops being sung
    pub end: Option<TimeCode>,
}

impl Word {
    /// Create an untimed word
    pub fn new<S: Into<String>>(text: S) -> Self {
        Word {
            text: text.into(),
            start: None,
            end: None,
        }
    }

    /// Create a word with both marks set
    pub fn timed<S: Into<String>>(text: S, start: TimeCode, end: TimeCode) -> Self {
        Word {
            text: text.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether both marks are recorded
    pub fn is_fully_timed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// One lyric line: its ordered words, optional start/end times and voice tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Ordered words; never empty for a retained line
    pub words: Vec<Word>,
    /// Line start time, from the `[...]` prefix or the first mark
    pub line_start: Option<TimeCode>,
    /// Line end time, set when the alignment session closes the line
    pub line_end: Option<TimeCode>,
    /// Voice channel tag (currently always primary)
    pub voice: Voice,
}

impl Line {
    /// Create a line from words and an optional start tag
    pub fn new(words: Vec<Word>, line_start: Option<TimeCode>) -> Self {
        Line {
            words,
            line_start,
            line_end: None,
            voice: Voice::default(),
        }
    }

    /// Number of words on the line
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// The full parsed lyric file: ordered lines plus source metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Ordered lines, malformed and empty input lines already dropped
    pub lines: Vec<Line>,
    /// Name of the source the text was loaded from
    pub source_name: String,
}

impl Document {
    /// Create an empty document
    pub fn new<S: Into<String>>(source_name: S) -> Self {
        Document {
            lines: Vec::new(),
            source_name: source_name.into(),
        }
    }

    /// Parse raw lyrics text into a document.
    ///
    /// Never fails for the document as a whole: blank lines and
    /// empty-body placeholders are dropped silently, malformed lines are
    /// logged and dropped, and everything else loads. A partially
    /// malformed file is a valid, expected outcome.
    pub fn parse(text: &str, source_name: &str) -> Self {
        let mut lines = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }

            match parse_line(raw) {
                Ok(line) if line.words.is_empty() => {
                    debug!("Line {}: no words after tokenization, dropped", idx + 1);
                }
                Ok(line) => {
                    report_inverted_marks(idx + 1, &line);
                    lines.push(line);
                }
                Err(ParseError::EmptyLine) => {
                    debug!("Line {}: empty body after header, dropped", idx + 1);
                }
                Err(e) => {
                    warn!("Line {}: {} - dropped", idx + 1, e);
                }
            }
        }

        Document {
            lines,
            source_name: source_name.to_string(),
        }
    }

    /// Serialize the document back to lyrics text.
    ///
    /// Deterministic: one output line per line in original order, joined
    /// by newline. Fully timed words are written `<start>word<end>` with
    /// no surrounding space; words missing a mark are written bare with a
    /// single trailing space; trailing whitespace is trimmed per line.
    /// Output of this serializer round-trips byte-identically through
    /// `parse`; arbitrary hand-written input may not (the plain/timed
    /// spacing asymmetry is a property of the notation, not a defect).
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(line_to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total word count across all lines
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(Line::word_count).sum()
    }

    /// Count of words that have both marks recorded
    pub fn timed_word_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|ln| ln.words.iter())
            .filter(|w| w.is_fully_timed())
            .count()
    }

    /// Whether the document holds no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lyrics Document")?;
        writeln!(f, "Source: {}", self.source_name)?;
        writeln!(f, "Lines: {}", self.lines.len())?;
        writeln!(f, "Words: {} ({} timed)", self.word_count(), self.timed_word_count())?;
        Ok(())
    }
}

/// Parse one non-blank input line into a Line.
///
/// `EmptyLine` marks the recognized skip case (empty or single-space
/// body after the `]` header); other errors mean the line is malformed.
fn parse_line(raw: &str) -> Result<Line, ParseError> {
    let (line_start, body) = match raw.find(']') {
        Some(idx) => {
            let header = &raw[..idx];
            let body = &raw[idx + 1..];
            if body.is_empty() || body == " " {
                return Err(ParseError::EmptyLine);
            }
            let tag = header
                .strip_prefix('[')
                .ok_or_else(|| ParseError::MalformedTimeCode(header.to_string()))?;
            (Some(TimeCode::parse_simple(tag)?), body)
        }
        None => (None, raw),
    };

    // Presence of '>' selects timed mode for the whole body; the two
    // tokenizations are mutually exclusive.
    let words = if body.contains('>') {
        tokenize_timed(body)?
    } else {
        tokenize_plain(body)
    };

    Ok(Line::new(words, line_start))
}

/// Split an untimed body on whitespace into bare words
fn tokenize_plain(body: &str) -> Vec<Word> {
    body.split_whitespace().map(Word::new).collect()
}

/// One lexed piece of a timed body
enum Segment {
    Tag(TimeCode),
    Text(String),
}

/// Lex a timed body into alternating tags and text runs.
///
/// Spaces separate text runs and are dropped; tags and text may also sit
/// directly adjacent, which is how the serializer writes fully timed
/// words.
fn lex_timed(body: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                let mut tag = String::new();
                loop {
                    match chars.next() {
                        Some('>') => break,
                        Some('<') | None => {
                            return Err(ParseError::MalformedWordTiming(format!(
                                "unterminated tag <{}",
                                tag
                            )));
                        }
                        Some(ch) => tag.push(ch),
                    }
                }
                let tc = TimeCode::parse_bracketed(&tag).map_err(|_| {
                    ParseError::MalformedWordTiming(format!("bad timecode in tag <{}>", tag))
                })?;
                segments.push(Segment::Tag(tc));
            }
            '>' => {
                return Err(ParseError::MalformedWordTiming(
                    "stray '>' outside a tag".to_string(),
                ));
            }
            ' ' => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
            }
            _ => text.push(c),
        }
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    Ok(segments)
}

/// Assemble lexed segments into words.
///
/// Tags accumulated between two text runs attach by position: with a
/// single tag the boundary is shared (it ends the previous word and
/// starts the next); with two tags the first ends the previous word and
/// the second starts the next. A tag never closes a word that has no
/// start mark. Trailing tags close the last word. Anything else in the
/// tag arithmetic is malformed and drops the whole line.
fn tokenize_timed(body: &str) -> Result<Vec<Word>, ParseError> {
    let mut words: Vec<Word> = Vec::new();
    let mut pending: Vec<TimeCode> = Vec::new();

    for segment in lex_timed(body)? {
        match segment {
            Segment::Tag(tc) => pending.push(tc),
            Segment::Text(text) => {
                let start = attach_boundary(&mut words, std::mem::take(&mut pending))?;
                words.push(Word {
                    text,
                    start,
                    end: None,
                });
            }
        }
    }

    if !pending.is_empty() {
        match words.last_mut() {
            Some(last) if last.start.is_some() && last.end.is_none() => {
                if pending.len() > 1 {
                    return Err(ParseError::MalformedWordTiming(format!(
                        "{} trailing tags after the last word",
                        pending.len()
                    )));
                }
                last.end = Some(pending[0]);
            }
            Some(_) => {
                return Err(ParseError::MalformedWordTiming(
                    "trailing tag after an unopened word".to_string(),
                ));
            }
            // A body of tags with no words at all; the empty line is
            // dropped by the caller.
            None => {}
        }
    }

    Ok(words)
}

/// Apply boundary tags preceding a new word; returns the word's start mark
fn attach_boundary(
    words: &mut [Word],
    tags: Vec<TimeCode>,
) -> Result<Option<TimeCode>, ParseError> {
    let open_prev = words
        .last_mut()
        .filter(|w| w.start.is_some() && w.end.is_none());

    match (tags.len(), open_prev) {
        (0, _) => Ok(None),
        (1, None) => Ok(Some(tags[0])),
        (1, Some(prev)) => {
            // Shared boundary: one tag both ends the previous word and
            // starts this one.
            prev.end = Some(tags[0]);
            Ok(Some(tags[0]))
        }
        (2, Some(prev)) => {
            prev.end = Some(tags[0]);
            Ok(Some(tags[1]))
        }
        (2, None) => Err(ParseError::MalformedWordTiming(
            "tag pair with no open word to close".to_string(),
        )),
        (n, _) => Err(ParseError::MalformedWordTiming(format!(
            "{} consecutive tags before a word",
            n
        ))),
    }
}

/// Serialize one line; line_end has no notation and is not persisted
fn line_to_text(line: &Line) -> String {
    let mut out = String::new();
    if let Some(start) = line.line_start {
        out.push_str(&format!("[{}]", start));
    }
    for word in &line.words {
        match (word.start, word.end) {
            (Some(start), Some(end)) => {
                out.push_str(&format!("<{}>{}<{}>", start, word.text, end));
            }
            _ => {
                out.push_str(&word.text);
                out.push(' ');
            }
        }
    }
    out.trim_end().to_string()
}

/// Log words whose end precedes their start; the model keeps them as-is
/// (already-serialized data relies on the lenient format) but the
/// violation is never swallowed silently.
fn report_inverted_marks(line_no: usize, line: &Line) {
    for word in &line.words {
        if let (Some(start), Some(end)) = (word.start, word.end) {
            if end < start {
                warn!(
                    "Line {}: word {:?} ends at {} before it starts at {}",
                    line_no, word.text, end, start
                );
            }
        }
    }
}
