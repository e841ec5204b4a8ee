/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use lyralign::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_lyrics(&temp_dir.path().to_path_buf(), "test_file_exists.lrc")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.lrc"));
}

/// Test the `.elrc` output path replaces the source extension
#[test]
fn test_elrc_output_path_withLrcSource_shouldReplaceExtension() {
    let output = FileManager::elrc_output_path(Path::new("/music/song.lrc"));
    assert_eq!(output, Path::new("/music/song.elrc"));
}

/// Test an extensionless source gains the `.elrc` extension
#[test]
fn test_elrc_output_path_withNoExtension_shouldAppendExtension() {
    let output = FileManager::elrc_output_path(Path::new("/music/song"));
    assert_eq!(output, Path::new("/music/song.elrc"));
}

/// Test lyrics-file detection by extension, case-insensitively
#[test]
fn test_is_lyrics_file_withKnownExtensions_shouldDetect() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let lrc = common::create_test_file(&dir, "a.lrc", "words")?;
    let elrc = common::create_test_file(&dir, "b.ELRC", "words")?;
    let txt = common::create_test_file(&dir, "c.txt", "words")?;
    let other = common::create_test_file(&dir, "d.mp3", "not lyrics")?;

    assert!(FileManager::is_lyrics_file(&lrc));
    assert!(FileManager::is_lyrics_file(&elrc));
    assert!(FileManager::is_lyrics_file(&txt));
    assert!(!FileManager::is_lyrics_file(&other));

    Ok(())
}

/// Test directory scanning finds only lyrics files, recursively
#[test]
fn test_find_lyrics_files_withMixedTree_shouldReturnOnlyLyrics() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let nested = dir.join("nested");
    std::fs::create_dir(&nested)?;

    common::create_test_file(&dir, "top.lrc", "words")?;
    common::create_test_file(&nested, "deep.elrc", "words")?;
    common::create_test_file(&dir, "skip.json", "{}")?;

    let mut found = FileManager::find_lyrics_files(temp_dir.path())?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("top.lrc")));
    assert!(found.iter().any(|p| p.ends_with("deep.elrc")));

    Ok(())
}

/// Test write then read round trip, with parent directories created
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("deep").join("out.elrc");

    FileManager::write_to_file(&target, "[00:01.000]hello")?;
    let read_back = FileManager::read_to_string(&target)?;

    assert_eq!(read_back, "[00:01.000]hello");
    Ok(())
}
