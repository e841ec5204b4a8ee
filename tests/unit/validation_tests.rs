/*!
 * Tests for advisory timing validation
 */

use lyralign::lyrics_processor::{Document, Line, Word};
use lyralign::timecode::TimeCode;
use lyralign::validation::{self, TimingIssue};

fn ms(v: u64) -> TimeCode {
    TimeCode::from_millis(v)
}

fn doc_with(lines: Vec<Line>) -> Document {
    Document {
        lines,
        source_name: "test.lrc".to_string(),
    }
}

/// Test a consistent document passes every line
#[test]
fn test_validate_withConsistentTimings_shouldPassAllLines() {
    let doc = Document::parse(
        "[00:01.000]<00:01.000>Hello<00:01.500><00:01.500>world<00:02.000>",
        "test.lrc",
    );

    let results = validation::validate_document(&doc);
    assert_eq!(results.len(), 1);
    assert!(results[0].passed);
    assert_eq!(validation::issue_count(&results), 0);
}

/// Test an inverted word is reported with its indices and times
#[test]
fn test_validate_withEndBeforeStart_shouldReportIssue() {
    let line = Line::new(vec![Word::timed("bad", ms(2_000), ms(1_000))], None);
    let results = validation::validate_document(&doc_with(vec![line]));

    assert!(!results[0].passed);
    assert_eq!(
        results[0].issues,
        vec![TimingIssue::EndBeforeStart {
            word_index: 0,
            start_ms: 2_000,
            end_ms: 1_000,
        }]
    );
}

/// Test a line tag disagreeing with the first word's start is reported
#[test]
fn test_validate_withLineStartMismatch_shouldReportIssue() {
    let line = Line::new(
        vec![Word::timed("word", ms(1_500), ms(2_000))],
        Some(ms(1_000)),
    );
    let results = validation::validate_document(&doc_with(vec![line]));

    assert_eq!(
        results[0].issues,
        vec![TimingIssue::LineStartMismatch {
            line_start_ms: 1_000,
            first_word_start_ms: 1_500,
        }]
    );
}

/// Test overlapping words are reported; a shared boundary is not overlap
#[test]
fn test_validate_withWordOverlap_shouldReportOnlyRealOverlap() {
    let shared = Line::new(
        vec![
            Word::timed("a", ms(0), ms(500)),
            Word::timed("b", ms(500), ms(900)),
        ],
        Some(ms(0)),
    );
    let overlapping = Line::new(
        vec![
            Word::timed("c", ms(0), ms(500)),
            Word::timed("d", ms(300), ms(900)),
        ],
        Some(ms(0)),
    );
    let results = validation::validate_document(&doc_with(vec![shared, overlapping]));

    assert!(results[0].passed);
    assert!(!results[1].passed);
    assert_eq!(
        results[1].issues,
        vec![TimingIssue::WordOverlap {
            word_index: 1,
            overlap_ms: 200,
        }]
    );
}

/// Test untimed words raise nothing
#[test]
fn test_validate_withUntimedWords_shouldPass() {
    let doc = Document::parse("no timings at all here", "test.lrc");
    let results = validation::validate_document(&doc);
    assert!(results.iter().all(|r| r.passed));
}

/// Test issue display strings carry the offending values
#[test]
fn test_issue_display_withEndBeforeStart_shouldNameTimes() {
    let issue = TimingIssue::EndBeforeStart {
        word_index: 3,
        start_ms: 2_000,
        end_ms: 1_000,
    };
    let text = issue.to_string();
    assert!(text.contains("Word 3"));
    assert!(text.contains("1000ms"));
    assert!(text.contains("2000ms"));
}
