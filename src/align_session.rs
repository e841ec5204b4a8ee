/*!
 * Interactive word-timing session.
 *
 * An `AlignSession` owns the live document for one load → align → save
 * cycle and applies the two externally-triggered mark events against a
 * (line, word) cursor. The playback collaborator supplies the clock
 * sample; rendering reads the document snapshot and cursor back out.
 * Data flows one way: the session mutates the model and reports what
 * happened through `MarkOutcome`, it never holds view state.
 */

use log::{debug, info};

use crate::errors::SessionError;
use crate::lyrics_processor::Document;
use crate::timecode::TimeCode;

/// Source of the current playback position.
///
/// The session treats each sample as an opaque, instantaneous value; it
/// never polls or schedules anything itself.
pub trait PlaybackClock {
    /// Current playback position
    fn position(&self) -> TimeCode;
}

/// Which of the two mark events the collaborator delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// Record the word's start time
    Start,
    /// Record the word's end time and advance
    End,
}

/// Manual cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One word to the left, crossing to the previous line at a line start
    Prev,
    /// One word to the right, crossing to the next line at a line end
    Next,
}

/// The (line, word) position currently being aligned.
///
/// Transient session state, always clamped to valid indices; never
/// persisted with the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Index into the document's lines
    pub line: usize,
    /// Index into the line's words
    pub word: usize,
}

/// What a mark operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// A mark was recorded; the cursor did not move
    Marked,
    /// End mark recorded, cursor advanced within the same line
    AdvancedWord,
    /// End mark recorded, line closed, cursor moved to the next line
    AdvancedLine,
    /// End mark recorded on the last word of the last line; the session
    /// is complete and the caller should persist
    Completed,
    /// The session was already complete; nothing was mutated
    AlreadyComplete,
}

/// One interactive alignment session over a document
#[derive(Debug)]
pub struct AlignSession {
    document: Document,
    cursor: Cursor,
    complete: bool,
}

impl AlignSession {
    /// Start a session at the first word of the first line
    pub fn new(document: Document) -> Self {
        AlignSession {
            document,
            cursor: Cursor::default(),
            complete: false,
        }
    }

    /// Snapshot of the document for rendering or serialization
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the session, handing the document back
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the last word of the last line has been end-marked
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Record a start mark for the word under the cursor.
    ///
    /// If the cursor is on the first word of its line the line start is
    /// stamped too. The cursor does not advance, so a start mark can be
    /// re-issued to correct the time before the matching end mark.
    pub fn mark_start(&mut self, now: TimeCode) -> Result<MarkOutcome, SessionError> {
        if self.document.is_empty() {
            return Err(SessionError::NoActiveWord);
        }
        if self.complete {
            return Ok(MarkOutcome::AlreadyComplete);
        }

        let line = &mut self.document.lines[self.cursor.line];
        line.words[self.cursor.word].start = Some(now);
        if self.cursor.word == 0 {
            line.line_start = Some(now);
        }
        debug!(
            "start mark {} at line {} word {}",
            now, self.cursor.line, self.cursor.word
        );
        Ok(MarkOutcome::Marked)
    }

    /// Record an end mark for the word under the cursor and advance.
    ///
    /// Closing the last word of a line stamps the line end and moves to
    /// the first word of the next line; closing the last word of the
    /// last line completes the session. Calling this on a completed
    /// session is a no-op, not an error. The mark value is accepted
    /// as-is even if it precedes the word's start mark; ordering is
    /// checked offline by validation, not at mark time.
    pub fn mark_end(&mut self, now: TimeCode) -> Result<MarkOutcome, SessionError> {
        if self.document.is_empty() {
            return Err(SessionError::NoActiveWord);
        }
        if self.complete {
            return Ok(MarkOutcome::AlreadyComplete);
        }

        let last_line = self.document.lines.len() - 1;
        let line = &mut self.document.lines[self.cursor.line];
        line.words[self.cursor.word].end = Some(now);

        if self.cursor.word + 1 < line.words.len() {
            self.cursor.word += 1;
            return Ok(MarkOutcome::AdvancedWord);
        }

        line.line_end = Some(now);
        if self.cursor.line == last_line {
            self.complete = true;
            info!("alignment complete: all {} lines timed", self.document.lines.len());
            return Ok(MarkOutcome::Completed);
        }

        self.cursor.line += 1;
        self.cursor.word = 0;
        Ok(MarkOutcome::AdvancedLine)
    }

    /// Move the cursor one word, crossing line boundaries, clamped at the
    /// document's first and last word. Never touches timestamps.
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.document.is_empty() {
            return;
        }
        match direction {
            Direction::Prev => {
                if self.cursor.word > 0 {
                    self.cursor.word -= 1;
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.word = self.document.lines[self.cursor.line].words.len() - 1;
                }
            }
            Direction::Next => {
                let line_words = self.document.lines[self.cursor.line].words.len();
                if self.cursor.word + 1 < line_words {
                    self.cursor.word += 1;
                } else if self.cursor.line + 1 < self.document.lines.len() {
                    self.cursor.line += 1;
                    self.cursor.word = 0;
                }
            }
        }
    }

    /// Jump to an absolute (line, word) position, clamped to valid
    /// indices. Re-opens a completed session for corrections.
    pub fn jump_to(&mut self, line: usize, word: usize) {
        if self.document.is_empty() {
            return;
        }
        let line = line.min(self.document.lines.len() - 1);
        let word = word.min(self.document.lines[line].words.len() - 1);
        self.cursor = Cursor { line, word };
        self.complete = false;
    }

    /// Replace the document wholesale, keeping the alignment position by
    /// index, not content identity.
    ///
    /// This is the reload-from-editor path: the previous model is
    /// discarded entirely (replacement, not merge) and the cursor is
    /// clamped into the new document.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.complete = false;
        if self.document.is_empty() {
            self.cursor = Cursor::default();
            return;
        }
        let line = self.cursor.line.min(self.document.lines.len() - 1);
        let word = self.cursor.word.min(self.document.lines[line].words.len() - 1);
        self.cursor = Cursor { line, word };
    }
}
