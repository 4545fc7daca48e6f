//! Primary-header reader for FITS files.
//!
//! A header is a sequence of 2880-byte blocks of 80-character ASCII cards,
//! terminated by an `END` card. Only the primary header is read; the
//! payload is never touched.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use frames_core::constants::{CATEGORY_KEYWORD, CLASSIFIABLE_EXTENSIONS};
use frames_core::errors::{FramesError, FramesResult};
use frames_core::traits::CategoryClassifier;

pub const BLOCK_SIZE: usize = 2880;
pub const CARD_SIZE: usize = 80;

/// Upper bound on header blocks read before giving up on finding `END`.
const MAX_HEADER_BLOCKS: usize = 256;

/// Classifies static files by their `HIERARCH ESO PRO CATG` keyword.
#[derive(Debug, Clone, Default)]
pub struct FitsHeaderClassifier;

impl FitsHeaderClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl CategoryClassifier for FitsHeaderClassifier {
    fn accepts(&self, file_name: &str) -> bool {
        CLASSIFIABLE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
    }

    fn classify(&self, path: &Path) -> FramesResult<Option<String>> {
        read_header_value(path, CATEGORY_KEYWORD)
    }
}

/// Value of `keyword` in the primary header of `path`, if present.
pub fn read_header_value(path: &Path, keyword: &str) -> FramesResult<Option<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let wanted = normalize_key(keyword);
    let mut block = [0u8; BLOCK_SIZE];

    for _ in 0..MAX_HEADER_BLOCKS {
        reader.read_exact(&mut block).map_err(|e| {
            FramesError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: truncated FITS header: {e}", path.display()),
            ))
        })?;
        for raw in block.chunks(CARD_SIZE) {
            let card = String::from_utf8_lossy(raw);
            if card.trim_end() == "END" {
                return Ok(None);
            }
            if let Some((key, value)) = split_card(&card) {
                if normalize_key(key) == wanted {
                    return Ok(Some(parse_value(value)));
                }
            }
        }
    }

    Err(FramesError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("{}: no END card in the first {MAX_HEADER_BLOCKS} header blocks", path.display()),
    )))
}

/// Split a card into keyword and raw value. Cards without a value
/// indicator (COMMENT, HISTORY, blank) yield `None`.
fn split_card(card: &str) -> Option<(&str, &str)> {
    if card.starts_with("HIERARCH") {
        let eq = card.find('=')?;
        return Some((&card[..eq], &card[eq + 1..]));
    }
    if card.get(8..10) == Some("= ") {
        return Some((&card[..8], &card[10..]));
    }
    None
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a raw value: quoted strings (with `''` escapes, trailing blanks
/// dropped) or a bare token before any `/` comment.
fn parse_value(raw: &str) -> String {
    let raw = raw.trim_start();
    if let Some(rest) = raw.strip_prefix('\'') {
        let mut out = String::new();
        let mut chars = rest.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    break;
                }
            } else {
                out.push(c);
            }
        }
        return out.trim_end().to_string();
    }
    raw.split('/').next().unwrap_or_default().trim().to_string()
}
