/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use subtitler::file_utils::{FileManager, FileType};
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    // Create a temporary test file
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "test_file_exists.tmp",
        "test content",
    )?;

    // Test that file_exists works correctly
    assert!(FileManager::file_exists(test_file.to_str().unwrap()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists returns true for existing directories
#[test]
fn test_dir_exists_withExistingDir_shouldReturnTrue() -> Result<()> {
    // Use the current directory which definitely exists
    let current_dir = ".";

    // Test that dir_exists works correctly
    assert!(FileManager::dir_exists(current_dir));

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    // Create a temporary directory for testing
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("test_subdir");

    // Ensure the subdirectory exists (should create it)
    FileManager::ensure_dir(test_subdir.to_str().unwrap())?;

    assert!(test_subdir.exists());
    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test reading and writing strings through the manager
#[test]
fn test_read_write_withRoundTrip_shouldPreserveContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("roundtrip.srt");

    // Parent directories are created on demand
    FileManager::write_to_file(&target, "1\n00:00:01,000 --> 00:00:02,000\nHello\n")?;
    let content = FileManager::read_to_string(&target)?;

    assert_eq!(content, "1\n00:00:01,000 --> 00:00:02,000\nHello\n");

    Ok(())
}

/// Test that read_to_string reports missing files as errors
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    assert!(FileManager::read_to_string("missing_file_54321.srt").is_err());
}

/// Test finding subtitle files recursively by extension
#[test]
fn test_find_files_withNestedSrtFiles_shouldFindAllOfThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let nested = dir.join("season1");
    FileManager::ensure_dir(&nested)?;

    common::create_test_subtitle(&dir, "movie.srt")?;
    common::create_test_subtitle(&nested, "episode.SRT")?;
    common::create_test_file(&dir, "notes.txt", "not a subtitle")?;

    let mut found = FileManager::find_files(&dir, "srt")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("movie.srt")));
    assert!(found.iter().any(|p| p.ends_with("episode.SRT")));

    Ok(())
}

/// Test file type detection by extension
#[test]
fn test_detect_file_type_withSrtExtension_shouldDetectSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_file = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "test.srt")?;

    let file_type = FileManager::detect_file_type(&subtitle_file)?;

    assert_eq!(file_type, FileType::Subtitle);
    Ok(())
}

/// Test file type detection by content sniffing when the extension is absent
#[test]
fn test_detect_file_type_withoutExtension_shouldSniffContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let sniffed = common::create_test_file(
        &dir,
        "subtitle_without_extension",
        "1\n00:00:01,000 --> 00:00:04,000\nSniff me\n",
    )?;
    let plain = common::create_test_file(&dir, "plain_without_extension", "just some text")?;

    assert_eq!(FileManager::detect_file_type(&sniffed)?, FileType::Subtitle);
    assert_eq!(FileManager::detect_file_type(&plain)?, FileType::Unknown);

    Ok(())
}

/// Test that detection of a missing file is an error
#[test]
fn test_detect_file_type_withMissingFile_shouldFail() {
    assert!(FileManager::detect_file_type("missing_file_98765.srt").is_err());
}
