/*!
 * Advisory timing checks for a parsed document.
 *
 * The parser and the alignment session are deliberately permissive:
 * inverted marks are accepted at mark time because already-serialized
 * files rely on the lenient format. This module surfaces those issues
 * offline without mutating anything:
 * - a word's end mark preceding its start mark
 * - a line start tag disagreeing with its first word's start mark
 * - a word starting before the previous word on the line has ended
 */

use std::fmt;

use crate::lyrics_processor::Document;

/// Result of timing validation for a single line
#[derive(Debug, Clone)]
pub struct LineTimingResult {
    /// Index of the line in the document
    pub line_index: usize,
    /// Whether the line passed validation
    pub passed: bool,
    /// Issues found
    pub issues: Vec<TimingIssue>,
}

impl LineTimingResult {
    /// Create a passing result
    pub fn passed(line_index: usize) -> Self {
        Self {
            line_index,
            passed: true,
            issues: vec![],
        }
    }

    /// Create a failing result
    pub fn failed(line_index: usize, issues: Vec<TimingIssue>) -> Self {
        Self {
            line_index,
            passed: false,
            issues,
        }
    }
}

/// Types of timing issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingIssue {
    /// A word's end mark precedes its start mark
    EndBeforeStart {
        word_index: usize,
        start_ms: u64,
        end_ms: u64,
    },
    /// The line start tag differs from the first word's start mark
    LineStartMismatch {
        line_start_ms: u64,
        first_word_start_ms: u64,
    },
    /// A word starts before the previous word on the line has ended
    WordOverlap {
        word_index: usize,
        overlap_ms: u64,
    },
}

impl fmt::Display for TimingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingIssue::EndBeforeStart {
                word_index,
                start_ms,
                end_ms,
            } => {
                write!(
                    f,
                    "Word {} ends at {}ms before its start at {}ms",
                    word_index, end_ms, start_ms
                )
            }
            TimingIssue::LineStartMismatch {
                line_start_ms,
                first_word_start_ms,
            } => {
                write!(
                    f,
                    "Line start tag {}ms disagrees with first word start {}ms",
                    line_start_ms, first_word_start_ms
                )
            }
            TimingIssue::WordOverlap {
                word_index,
                overlap_ms,
            } => {
                write!(
                    f,
                    "Word {} overlaps the previous word by {}ms",
                    word_index, overlap_ms
                )
            }
        }
    }
}

/// Check every line of a document, returning one result per line
pub fn validate_document(document: &Document) -> Vec<LineTimingResult> {
    document
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let mut issues = Vec::new();

            for (word_idx, word) in line.words.iter().enumerate() {
                if let (Some(start), Some(end)) = (word.start, word.end) {
                    if end < start {
                        issues.push(TimingIssue::EndBeforeStart {
                            word_index: word_idx,
                            start_ms: start.millis(),
                            end_ms: end.millis(),
                        });
                    }
                }
                if word_idx > 0 {
                    let prev = &line.words[word_idx - 1];
                    if let (Some(prev_end), Some(start)) = (prev.end, word.start) {
                        if start < prev_end {
                            issues.push(TimingIssue::WordOverlap {
                                word_index: word_idx,
                                overlap_ms: prev_end.millis() - start.millis(),
                            });
                        }
                    }
                }
            }

            if let (Some(line_start), Some(first_start)) = (
                line.line_start,
                line.words.first().and_then(|w| w.start),
            ) {
                if line_start != first_start {
                    issues.push(TimingIssue::LineStartMismatch {
                        line_start_ms: line_start.millis(),
                        first_word_start_ms: first_start.millis(),
                    });
                }
            }

            if issues.is_empty() {
                LineTimingResult::passed(idx)
            } else {
                LineTimingResult::failed(idx, issues)
            }
        })
        .collect()
}

/// Total number of issues across all line results
pub fn issue_count(results: &[LineTimingResult]) -> usize {
    results.iter().map(|r| r.issues.len()).sum()
}
