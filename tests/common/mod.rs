/*!
 * Common test utilities for the lyralign test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use lyralign::lyrics_processor::Document;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample untimed lyrics text: three plain lines
pub fn sample_plain_text() -> &'static str {
    "Hello darkness my old friend\nI've come to talk with you again\nBecause a vision softly creeping"
}

/// Sample lyrics text mixing untimed, line-tagged and word-timed lines
pub fn sample_mixed_text() -> &'static str {
    "[00:01.000]<00:01.000>Hello<00:01.500><00:01.500>world<00:02.000>\nplain words only\n[00:05.000]tagged but untimed"
}

/// Creates a sample lyrics file for testing
pub fn create_test_lyrics(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_plain_text())
}

/// Parses the plain sample into a fresh document
pub fn sample_document() -> Document {
    Document::parse(sample_plain_text(), "sample.lrc")
}
