/*!
 * # Lyralign - word-level lyrics alignment core
 *
 * A Rust library for parsing, editing and serializing word-and-line
 * timed lyrics (an extended LRC dialect).
 *
 * ## Features
 *
 * - Parse timed-lyrics text into a structured document, tolerating
 *   malformed and partially-aligned lines
 * - Record word start/end marks from a live playback position during an
 *   interactive alignment session
 * - Navigate the alignment cursor across words and lines
 * - Serialize the document back to canonical text and save it as
 *   `.elrc` next to the source
 * - Advisory validation of recorded timings
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: millisecond timestamps and their two textual encodings
 * - `lyrics_processor`: the Word/Line/Document model, parser and
 *   serializer
 * - `align_session`: the interactive timing mutator and cursor
 * - `validation`: offline timing checks
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `app_controller`: the load → align → save orchestration
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod align_session;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod lyrics_processor;
pub mod timecode;
pub mod validation;

// Re-export main types for easier usage
pub use align_session::{AlignSession, Cursor, Direction, MarkKind, MarkOutcome, PlaybackClock};
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ParseError, SessionError};
pub use lyrics_processor::{Document, Line, Voice, Word};
pub use timecode::TimeCode;
