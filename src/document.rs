// Allow dead code - editing operations are for library consumers
#![allow(dead_code)]

use log::debug;
use std::mem;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::srt_codec;
use crate::subtitle::{Subtitle, SubtitleTrack, Timestamp};

// @module: Document lifecycle and editing operations

// @const: Default cap on undo snapshots when no config is supplied
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// An open subtitle file and its edit history.
///
/// Owns the live cue sequence and provides the editing operations a UI
/// shell drives: seeded insertion, removal, per-field edits, and undo/redo
/// over full sequence snapshots. All operations are synchronous; the
/// document is owned by a single caller and has no interior locking.
#[derive(Debug)]
pub struct SubtitleDocument {
    // @field: Live cue sequence
    track: SubtitleTrack,

    // @field: Backing file, if the document has been opened or saved
    path: Option<PathBuf>,

    // @field: Snapshots available to undo, oldest first
    undo_stack: Vec<SubtitleTrack>,

    // @field: Snapshots available to redo
    redo_stack: Vec<SubtitleTrack>,

    // @field: Cap on undo snapshots; oldest are dropped beyond it
    history_limit: usize,

    // @field: Whether the document differs from its file
    dirty: bool,
}

impl Default for SubtitleDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtitleDocument {
    /// Creates an empty, unsaved document
    pub fn new() -> Self {
        SubtitleDocument {
            track: SubtitleTrack::new(),
            path: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            dirty: false,
        }
    }

    /// Sets the undo history cap, dropping oldest snapshots if needed
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit.max(1);
        self
    }

    /// Builds a document from SRT text without touching the filesystem
    pub fn from_text(text: &str) -> Result<Self, AppError> {
        let subs = srt_codec::parse(text)?;
        let mut document = Self::new();
        document.track = SubtitleTrack::from(subs);
        Ok(document)
    }

    /// Opens an SRT file, mapping read failures and parse failures into
    /// the application error type for user-facing display
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = FileManager::read_to_string(path).map_err(|e| AppError::File(e.to_string()))?;

        let mut document = Self::from_text(&text)?;
        document.path = Some(path.to_path_buf());
        debug!("Opened {:?} with {} cues", path, document.len());
        Ok(document)
    }

    /// Backing file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The cue sequence
    pub fn cues(&self) -> &[Subtitle] {
        self.track.as_slice()
    }

    /// Number of cues in the document
    pub fn len(&self) -> usize {
        self.track.len()
    }

    /// Whether the document holds no cues
    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    /// Whether the document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Serializes the document to SRT text
    pub fn to_text(&self) -> String {
        srt_codec::serialize(self.track.as_slice())
    }

    /// Writes the document back to its file
    pub fn save(&mut self) -> Result<(), AppError> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| AppError::File("Document has no file path; use save_as".to_string()))?;
        self.save_as(path)
    }

    /// Writes the document to the given path and adopts it as the backing file
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        FileManager::write_to_file(path, &self.to_text())
            .map_err(|e| AppError::File(e.to_string()))?;

        self.path = Some(path.to_path_buf());
        self.dirty = false;
        debug!("Saved {} cues to {:?}", self.len(), path);
        Ok(())
    }

    /// Inserts a new cue at the given 0-based position and returns it.
    ///
    /// The cue is seeded with the predecessor's timestamps, or zero
    /// timestamps when inserted at the head. Indices are renumbered to
    /// `1..=N` afterwards.
    ///
    /// Panics if `position > len()`.
    pub fn insert_cue(&mut self, position: usize) -> &Subtitle {
        self.checkpoint();

        let mut sub = Subtitle::new(position + 1);
        if position > 0 {
            if let Some(prev) = self.track.get(position - 1) {
                sub.start = prev.start;
                sub.end = prev.end;
            }
        }

        self.track.insert(position, sub);
        &self.track[position]
    }

    /// Removes and returns the cue at the given 0-based position,
    /// renumbering the remainder.
    ///
    /// Panics if `position >= len()`.
    pub fn remove_cue(&mut self, position: usize) -> Subtitle {
        self.checkpoint();
        self.track.remove(position)
    }

    /// Replaces the caption of the cue at the given position.
    ///
    /// Panics if `position >= len()`.
    pub fn set_caption<S: Into<String>>(&mut self, position: usize, caption: S) {
        self.checkpoint();
        self.track[position].caption = caption.into();
    }

    /// Replaces the starting timestamp of the cue at the given position.
    ///
    /// Panics if `position >= len()`.
    pub fn set_start(&mut self, position: usize, start: Timestamp) {
        self.checkpoint();
        self.track[position].start = start;
    }

    /// Replaces the ending timestamp of the cue at the given position.
    ///
    /// Panics if `position >= len()`.
    pub fn set_end(&mut self, position: usize, end: Timestamp) {
        self.checkpoint();
        self.track[position].end = end;
    }

    /// Rewrites every cue's index to its 1-based position.
    ///
    /// Parsing preserves whatever indices the source text carried, so a
    /// freshly opened file can hold gaps or duplicates; this restores the
    /// contiguous numbering editing operations maintain.
    pub fn renumber(&mut self) {
        self.checkpoint();
        self.track.reindex();
    }

    /// Whether an undo snapshot is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo snapshot is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Restores the most recent undo snapshot. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                let current = mem::replace(&mut self.track, snapshot);
                self.redo_stack.push(current);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Reapplies the most recently undone snapshot. Returns false when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                let current = mem::replace(&mut self.track, snapshot);
                self.undo_stack.push(current);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Records the current sequence as an undo snapshot before a mutation.
    /// Any pending redo history becomes unreachable and is discarded.
    fn checkpoint(&mut self) {
        self.undo_stack.push(self.track.clone());
        if self.undo_stack.len() > self.history_limit {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.dirty = true;
    }
}
