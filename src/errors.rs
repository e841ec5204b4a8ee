/*!
 * Error types for the lyralign application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing timed-lyrics text
#[derive(Error, Debug)]
pub enum ParseError {
    /// Text does not match either timestamp grammar
    #[error("malformed timecode: {0:?}")]
    MalformedTimeCode(String),

    /// Timed-mode token is missing a separator or has a malformed tag group
    #[error("malformed word timing: {0}")]
    MalformedWordTiming(String),

    /// Line body is empty after the `]` header - a recognized skip, not a failure
    #[error("empty line body")]
    EmptyLine,
}

/// Errors that can occur during an alignment session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The cursor has no word to point at (document has zero lines)
    #[error("no active word to mark")]
    NoActiveWord,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from lyrics parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from an alignment session
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
