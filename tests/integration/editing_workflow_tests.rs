/*!
 * End-to-end tests covering open, edit, save and reopen flows
 */

use anyhow::Result;
use subtitler::document::SubtitleDocument;
use subtitler::srt_codec;
use subtitler::subtitle::Timestamp;
use crate::common;

/// Test a full editing session: open a file, insert and edit cues, save,
/// and verify the persisted result parses back to the same sequence
#[test]
fn test_editing_session_withInsertEditSave_shouldPersistConsistentFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_file = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "movie.srt")?;

    let mut document = SubtitleDocument::open(&subtitle_file)?;
    assert_eq!(document.len(), 3);

    // Insert a cue after the first one; it inherits the predecessor timing
    let seeded_start = document.cues()[0].start;
    document.insert_cue(1);
    assert_eq!(document.cues()[1].start, seeded_start);

    document.set_caption(1, "Inserted caption");
    document.set_start(1, Timestamp::new(0, 0, 4, 500));
    document.set_end(1, Timestamp::new(0, 0, 4, 900));

    // Indices stay contiguous through all edits
    let indices: Vec<usize> = document.cues().iter().map(|sub| sub.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);

    document.save()?;

    let reopened = SubtitleDocument::open(&subtitle_file)?;
    assert_eq!(reopened.cues(), document.cues());
    assert_eq!(reopened.cues()[1].caption, "Inserted caption");
    Ok(())
}

/// Test that removing a cue and undoing the removal round-trips through
/// a save in both states
#[test]
fn test_editing_session_withRemoveUndoSave_shouldPersistEachState() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_file = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "movie.srt")?;

    let mut document = SubtitleDocument::open(&subtitle_file)?;
    let removed = document.remove_cue(1);
    assert_eq!(removed.caption, "It contains multiple entries.");

    document.save()?;
    let after_removal = SubtitleDocument::open(&subtitle_file)?;
    assert_eq!(after_removal.len(), 2);

    document.undo();
    document.save()?;
    let after_undo = SubtitleDocument::open(&subtitle_file)?;
    assert_eq!(after_undo.len(), 3);
    assert_eq!(after_undo.cues()[1].caption, "It contains multiple entries.");
    Ok(())
}

/// Test that the serialized form of an opened file is stable
#[test]
fn test_open_then_to_text_withCanonicalFile_shouldMatchSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_file = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "movie.srt")?;

    let document = SubtitleDocument::open(&subtitle_file)?;
    let source = std::fs::read_to_string(&subtitle_file)?;

    assert_eq!(document.to_text(), source);

    // A second decode of the serialized text yields the same cues
    let reparsed = srt_codec::parse(&document.to_text())?;
    assert_eq!(reparsed, document.cues().to_vec());
    Ok(())
}
