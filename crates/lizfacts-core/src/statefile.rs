//! # State File Module
//!
//! Bounded reading of the election state file.
//!
//! The state file is externally owned: the LizardFS election process writes
//! it, this crate only reads it. One collection cycle performs exactly one
//! capped open+read and extracts the first line, so it can neither hang nor
//! observe anything beyond the role token.

use std::io::Read;
use std::path::Path;

/// Well-known location of the master election state file.
pub const STATE_FILE_PATH: &str = "/etc/lizardfs/.mfsmaster_personality";

/// Byte cap for a single state-file read.
///
/// The longest valid payload is `SHADOW\r\n` (8 bytes); a first line
/// truncated at the cap can never validate, so the cap bounds the read
/// without changing any observable result.
pub const READ_BYTE_CAP: u64 = 256;

/// Read the first line of the file at `path`, with exactly one trailing
/// line terminator stripped.
///
/// Returns `None` for every "no content" condition: the file cannot be
/// opened (absent, unreadable, a directory), it is empty, or its first line
/// is not valid UTF-8. No cause is distinguished; the caller cannot tell a
/// missing file from an unreadable one, and is not meant to.
///
/// The file handle is released before this function returns, on every exit
/// path.
#[must_use]
pub fn read_first_line(path: &Path) -> Option<String> {
    let file = std::fs::File::open(path).ok()?;
    let mut raw = Vec::new();
    file.take(READ_BYTE_CAP).read_to_end(&mut raw).ok()?;
    if raw.is_empty() {
        // Zero bytes: there is no first line to read.
        return None;
    }
    let line = match raw.iter().position(|&b| b == b'\n') {
        Some(newline) => &raw[..=newline],
        None => raw.as_slice(),
    };
    String::from_utf8(strip_line_terminator(line).to_vec()).ok()
}

/// Strip exactly one trailing `\r\n`, `\n`, or `\r`, and nothing else.
///
/// Interior terminators and other whitespace are preserved, so
/// `"MASTER "` stays `"MASTER "` and `"MASTER\r\r"` becomes `"MASTER\r"`.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    if let Some(rest) = line.strip_suffix(b"\r\n") {
        rest
    } else if let Some(rest) = line.strip_suffix(b"\n") {
        rest
    } else if let Some(rest) = line.strip_suffix(b"\r") {
        rest
    } else {
        line
    }
}

// =============================================================================
// TESTS
// =============================================================================
