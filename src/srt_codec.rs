use crate::errors::{ParseError, TimestampKind};
use crate::subtitle::{Subtitle, Timestamp};

// @module: SRT text codec - parsing and serialization

// @const: Zero-width code points stripped during normalization
const ZERO_WIDTH_SPACE: char = '\u{200B}';
const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';

/// Parses the text of a .srt file into an ordered list of cues.
///
/// Pure and stateless; every call produces a fresh sequence. The first
/// malformed block aborts the parse with an error carrying the 1-based
/// line number within the original input. Duplicate or out-of-order cue
/// indices in the source are preserved as parsed; only non-positive or
/// non-numeric index lines are rejected.
pub fn parse(text: &str) -> Result<Vec<Subtitle>, ParseError> {
    let mut subs = Vec::new();
    // Tracks the current line in the file being parsed, to report to the
    // user where a parsing error occurred.
    let mut line_number = 1;

    // After normalization the input can be split on two newlines.
    for block_text in normalize(text).split("\n\n") {
        // Captions may be followed by excessive empty lines which need to
        // be trimmed off.
        let block = block_text.trim();
        if block.is_empty() {
            continue;
        }
        let (sub, lines_consumed) = parse_block(block, line_number)?;
        subs.push(sub);
        line_number += lines_consumed;
    }

    Ok(subs)
}

/// Serializes cues back to SRT text.
///
/// Each cue formats independently as its block; blocks are joined with a
/// single newline, producing one blank line between cues. Cues whose
/// caption is blank serialize without any caption line, so whitespace-only
/// captions do not round-trip byte-for-byte. Never fails.
pub fn serialize(subs: &[Subtitle]) -> String {
    subs.iter()
        .map(|sub| sub.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trims every line and rejoins with single newlines.
///
/// Cues in an SRT file are separated by an empty line, so in theory the
/// text splits on two newline characters. The empty lines may however
/// carry stray whitespace or carriage returns, and captions pasted from
/// other editors can carry zero-width code points. Trimming each line and
/// dropping U+200B/U+FEFF first makes the two-newline split deterministic.
fn normalize(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            line.trim()
                .chars()
                .filter(|c| *c != ZERO_WIDTH_SPACE && *c != ZERO_WIDTH_NO_BREAK_SPACE)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses one trimmed block into a cue, returning it together with the
/// number of input lines the block accounted for.
fn parse_block(block: &str, line_number: usize) -> Result<(Subtitle, usize), ParseError> {
    let lines: Vec<&str> = block.split('\n').collect();

    let index = match lines[0].parse::<usize>() {
        Ok(index) if index > 0 => index,
        _ => {
            return Err(ParseError::InvalidIndex {
                line: line_number,
                text: block.to_string(),
            });
        }
    };

    // A block with no second line reports the same shape error as a
    // malformed separator would.
    let timestamp_line = lines.get(1).copied().unwrap_or("");
    let (start, end) = parse_timestamp_pair(timestamp_line, line_number + 1)?;

    let caption_lines = lines.get(2..).unwrap_or(&[]);
    let num_caption_lines = caption_lines.len();
    let caption = caption_lines.join("\n");

    // 2 for the index and timestamp lines, plus the caption lines, and 1
    // for the blank separator line.
    let lines_consumed = 2 + num_caption_lines + 1;

    Ok((
        Subtitle::with_parts(index, start, end, caption),
        lines_consumed,
    ))
}

/// Splits a timestamp line on the literal ` --> ` separator and decodes
/// both sides.
fn parse_timestamp_pair(
    text: &str,
    line_number: usize,
) -> Result<(Timestamp, Timestamp), ParseError> {
    let timestamps: Vec<&str> = text.split(" --> ").collect();

    if timestamps.len() != 2 {
        return Err(ParseError::InvalidTimestamps { line: line_number });
    }

    let start = parse_timestamp(timestamps[0], line_number, TimestampKind::Starting)?;
    let end = parse_timestamp(timestamps[1], line_number, TimestampKind::Ending)?;
    Ok((start, end))
}

/// Decodes a single `HH:MM:SS,mmm` timestamp.
///
/// Only the shape and integer-ness of the four fields are checked; values
/// outside their nominal ranges pass through untouched.
fn parse_timestamp(
    text: &str,
    line: usize,
    kind: TimestampKind,
) -> Result<Timestamp, ParseError> {
    let time_and_millis: Vec<&str> = text.split(',').collect();
    if time_and_millis.len() != 2 {
        return Err(ParseError::InvalidTimestampFormat { line, kind });
    }

    let clock: Vec<&str> = time_and_millis[0].split(':').collect();
    if clock.len() != 3 {
        return Err(ParseError::InvalidTimestampFormat { line, kind });
    }

    let hours = clock[0]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidTimestampHours { line, kind })?;

    let minutes = clock[1]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidTimestampMinutes { line, kind })?;

    let seconds = clock[2]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidTimestampSeconds { line, kind })?;

    let millis = time_and_millis[1]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidTimestampMilliseconds { line, kind })?;

    Ok(Timestamp::new(hours, minutes, seconds, millis))
}
