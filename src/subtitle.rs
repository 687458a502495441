// Allow dead code - the cue model is for library consumers
#![allow(dead_code)]

use std::fmt;
use uuid::Uuid;

// @module: Subtitle data model and track indexing

/// A single point in time within a subtitle file.
///
/// Fields are plain integers with no range enforcement; the parser accepts
/// whatever integers the source text carries (minutes of 75 included) and
/// the display clamps nothing. Hours wider than two digits render at
/// natural width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp {
    // @field: Hours component
    pub hours: i32,

    // @field: Minutes component
    pub minutes: i32,

    // @field: Seconds component
    pub seconds: i32,

    // @field: Milliseconds component
    pub millis: i32,
}

impl Timestamp {
    /// Creates a new timestamp from its four components
    pub fn new(hours: i32, minutes: i32, seconds: i32, millis: i32) -> Self {
        Timestamp {
            hours,
            minutes,
            seconds,
            millis,
        }
    }
}

impl fmt::Display for Timestamp {
    /// Formats the timestamp as zero-padded `HH:MM:SS,mmm`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

// @struct: Single subtitle cue
#[derive(Debug, Clone)]
pub struct Subtitle {
    // @field: Opaque identity, stable across reordering and renumbering
    id: Uuid,

    // @field: 1-based display order; mutable, not an identity key
    pub index: usize,

    // @field: When the cue appears
    pub start: Timestamp,

    // @field: When the cue disappears
    pub end: Timestamp,

    // @field: Caption text, possibly empty or multi-line
    pub caption: String,
}

impl Subtitle {
    /// Creates a cue with zero timestamps and an empty caption
    pub fn new(index: usize) -> Self {
        Subtitle {
            id: Uuid::new_v4(),
            index,
            start: Timestamp::default(),
            end: Timestamp::default(),
            caption: String::new(),
        }
    }

    /// Creates a fully populated cue
    pub fn with_parts(index: usize, start: Timestamp, end: Timestamp, caption: String) -> Self {
        Subtitle {
            id: Uuid::new_v4(),
            index,
            start,
            end,
            caption,
        }
    }

    /// Identity assigned at creation. Survives cloning, renumbering and
    /// undo/redo snapshots; two cues with equal fields still have distinct
    /// identities.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Field-wise equality over index, timestamps and caption. Identity is
/// excluded so a parsed round-trip compares equal to its source cues.
impl PartialEq for Subtitle {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.start == other.start
            && self.end == other.end
            && self.caption == other.caption
    }
}

impl Eq for Subtitle {}

impl fmt::Display for Subtitle {
    /// Formats the cue as its SRT block: index line, timestamp line, caption
    /// lines when the caption is not blank, and a terminating newline. The
    /// caption line is omitted entirely (not even an empty line) when the
    /// caption trims to nothing.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.start, self.end)?;
        if !self.caption.trim().is_empty() {
            writeln!(f, "{}", self.caption)?;
        }
        Ok(())
    }
}

/// Ordered sequence of cues that keeps display indices contiguous.
///
/// Every mutation renumbers indices to exactly `1..=N` in sequence order.
/// Renumbering walks the whole sequence; fine at subtitle-file sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleTrack {
    subs: Vec<Subtitle>,
}

impl SubtitleTrack {
    /// Creates an empty track
    pub fn new() -> Self {
        SubtitleTrack { subs: Vec::new() }
    }

    /// Number of cues in the track
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Whether the track holds no cues
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Cue at the given 0-based position, if any
    pub fn get(&self, position: usize) -> Option<&Subtitle> {
        self.subs.get(position)
    }

    /// Mutable cue at the given 0-based position, if any
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Subtitle> {
        self.subs.get_mut(position)
    }

    /// Iterator over the cues in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Subtitle> {
        self.subs.iter()
    }

    /// The cues as a slice
    pub fn as_slice(&self) -> &[Subtitle] {
        &self.subs
    }

    /// Consumes the track, returning the underlying cues
    pub fn into_vec(self) -> Vec<Subtitle> {
        self.subs
    }

    /// Inserts a cue at the given 0-based position and renumbers the track.
    ///
    /// Panics if `position > len()`, like `Vec::insert`.
    pub fn insert(&mut self, position: usize, sub: Subtitle) {
        self.subs.insert(position, sub);
        self.reindex();
    }

    /// Removes and returns the cue at the given 0-based position, then
    /// renumbers the track.
    ///
    /// Panics if `position >= len()`, like `Vec::remove`.
    pub fn remove(&mut self, position: usize) -> Subtitle {
        let removed = self.subs.remove(position);
        self.reindex();
        removed
    }

    /// Rewrites every cue's index to its 1-based position in the sequence
    pub fn reindex(&mut self) {
        for (position, sub) in self.subs.iter_mut().enumerate() {
            sub.index = position + 1;
        }
    }
}

impl std::ops::Index<usize> for SubtitleTrack {
    type Output = Subtitle;

    fn index(&self, position: usize) -> &Subtitle {
        &self.subs[position]
    }
}

impl std::ops::IndexMut<usize> for SubtitleTrack {
    fn index_mut(&mut self, position: usize) -> &mut Subtitle {
        &mut self.subs[position]
    }
}

impl From<Vec<Subtitle>> for SubtitleTrack {
    fn from(subs: Vec<Subtitle>) -> Self {
        SubtitleTrack { subs }
    }
}

impl<'a> IntoIterator for &'a SubtitleTrack {
    type Item = &'a Subtitle;
    type IntoIter = std::slice::Iter<'a, Subtitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.subs.iter()
    }
}
