/*!
 * Session controller: wires the parser, the alignment session and the
 * filesystem together for one load → align → save cycle.
 *
 * The controller owns the session and the source path; the playback
 * collaborator is only ever sampled through the `PlaybackClock` trait
 * when a mark event arrives. Persistence stays here, not in the
 * session: on completion the aligned text is written next to the source
 * with the extension replaced by `.elrc`.
 */

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::align_session::{AlignSession, Cursor, Direction, MarkKind, MarkOutcome, PlaybackClock};
use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::lyrics_processor::Document;
use crate::timecode::TimeCode;

/// Orchestrates one alignment session over a lyrics file
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Running session, None before the first load
    session: Option<AlignSession>,
    // @field: Path the document was loaded from
    source_path: Option<PathBuf>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Controller {
            config,
            session: None,
            source_path: None,
        })
    }

    /// Load a lyrics file and start a fresh session at the first word.
    ///
    /// Any previous document is discarded wholesale; this is the
    /// load-new-source path, not the reload path.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = FileManager::read_to_string(path)?;
        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let document = Document::parse(&text, &source_name);
        if document.is_empty() {
            warn!("No usable lines in {}", source_name);
        }
        info!(
            "Loaded {}: {} lines, {} words",
            source_name,
            document.lines.len(),
            document.word_count()
        );

        self.session = Some(AlignSession::new(document));
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Re-parse edited text into the running session, restoring the
    /// alignment position by index
    pub fn reload_text(&mut self, text: &str) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| anyhow!("No session loaded"))?;
        let source_name = session.document().source_name.clone();
        session.replace_document(Document::parse(text, &source_name));
        Ok(())
    }

    /// Apply a mark event at the clock's current position.
    ///
    /// When an end mark completes the session and autosave is enabled,
    /// the aligned text is written out before returning.
    pub fn mark(&mut self, kind: MarkKind, clock: &dyn PlaybackClock) -> Result<MarkOutcome> {
        let now = clock.position();
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| anyhow!("No session loaded"))?;

        let outcome = match kind {
            MarkKind::Start => session.mark_start(now)?,
            MarkKind::End => session.mark_end(now)?,
        };

        if outcome == MarkOutcome::Completed && self.config.autosave_on_complete {
            let saved = self.save()?;
            info!("Alignment saved to {:?}", saved);
        }
        Ok(outcome)
    }

    /// Move the cursor one word without touching timestamps
    pub fn move_cursor(&mut self, direction: Direction) {
        if let Some(session) = self.session.as_mut() {
            session.move_cursor(direction);
        }
    }

    /// Jump the cursor to a word and return where playback should seek:
    /// the word's start mark minus the configured pre-roll, floored at
    /// zero. Untimed words give no seek target.
    pub fn jump_to(&mut self, line: usize, word: usize) -> Option<TimeCode> {
        let session = self.session.as_mut()?;
        session.jump_to(line, word);
        let cursor = session.cursor();
        let start = session.document().lines[cursor.line].words[cursor.word].start?;
        Some(TimeCode::from_millis(
            start.millis().saturating_sub(self.config.preroll_ms),
        ))
    }

    /// Serialize the current document and write it to the `.elrc` path
    /// derived from the source file
    pub fn save(&self) -> Result<PathBuf> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| anyhow!("No session loaded"))?;
        let source = self
            .source_path
            .as_ref()
            .ok_or_else(|| anyhow!("No source path to derive output from"))?;

        let output = FileManager::elrc_output_path(source);
        FileManager::write_to_file(&output, &session.document().to_text())?;
        Ok(output)
    }

    /// Document snapshot for rendering; None before the first load
    pub fn document(&self) -> Option<&Document> {
        self.session.as_ref().map(AlignSession::document)
    }

    /// Current cursor; None before the first load
    pub fn cursor(&self) -> Option<Cursor> {
        self.session.as_ref().map(AlignSession::cursor)
    }

    /// Whether the running session has been completed
    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_some_and(AlignSession::is_complete)
    }
}
