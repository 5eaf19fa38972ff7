//! Reading URL lists from files and standard input.
//!
//! Inputs that are not UTF-8 fall back to GBK and then windows-1252.

use encoding_rs::{GBK, UTF_8, WINDOWS_1252};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::core::constants::files::STDIN_MARKER;
use crate::core::error::{Result, UrlSiftError};

/// Split text into URL lines: trimmed, blank lines dropped, order kept.
///
/// # Examples
/// ```
/// use urlsift::input::parse_lines;
///
/// assert_eq!(
///     parse_lines("  http://a.com \r\n\n\thttp://b.com\n   \n"),
///     vec!["http://a.com", "http://b.com"]
/// );
/// ```
pub fn parse_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Decode raw input bytes.
///
/// UTF-8 (with or without BOM) is tried first, then GBK, then
/// windows-1252, which accepts any byte sequence.
fn decode(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }

    if let Some(text) = GBK.decode_without_bom_handling_and_without_replacement(bytes) {
        debug!("input is not valid UTF-8, decoded as {}", GBK.name());
        return text.into_owned();
    }

    debug!("input is neither UTF-8 nor GBK, decoded as {}", WINDOWS_1252.name());
    WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned()
}

/// Read one input file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(UrlSiftError::FileNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode(&bytes))
}

/// Read everything from a reader, typically stdin.
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}

/// Gather the text of all inputs in order.
///
/// An empty list, or the entry `-`, reads standard input.
pub fn read_sources<S: AsRef<str>>(sources: &[S]) -> Result<String> {
    if sources.is_empty() {
        return read_from(io::stdin().lock());
    }

    let mut combined = String::new();
    for source in sources {
        let source = source.as_ref();
        let text = if source == STDIN_MARKER {
            read_from(io::stdin().lock())?
        } else {
            read_file(source)?
        };
        combined.push_str(&text);
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
    }
    Ok(combined)
}
