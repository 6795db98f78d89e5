//! Caesar cipher and a length-prefixed list codec over it.
//!
//! Wire form of a list: each item as `{len}#{encrypted}` back to back, with
//! `len` counted in characters. The prefix makes any content safe, `#` and
//! digits included.

use thiserror::Error;

pub const DEFAULT_SHIFT: i32 = 3;

/// Malformed codec input. Positions are character offsets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("no '#' after length prefix starting at {at}")]
    MissingDelimiter { at: usize },

    #[error("invalid length prefix {text:?} at {at}")]
    InvalidLength { at: usize, text: String },

    #[error("item at {at} wants {expected} characters but only {available} remain")]
    Truncated {
        at: usize,
        expected: usize,
        available: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaesarCodec {
    shift: i32,
}

impl Default for CaesarCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

impl CaesarCodec {
    pub fn new(shift: i32) -> Self {
        Self {
            shift: shift.rem_euclid(26),
        }
    }

    pub fn shift(&self) -> i32 {
        self.shift
    }

    fn rotate(c: char, by: i32) -> char {
        let base = match c {
            'a'..='z' => b'a',
            'A'..='Z' => b'A',
            _ => return c,
        };
        let offset = (c as u8 - base) as i32;
        (base + (offset + by).rem_euclid(26) as u8) as char
    }

    /// Rotate ASCII letters forward; everything else passes through.
    pub fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| Self::rotate(c, self.shift)).collect()
    }

    pub fn decrypt(&self, text: &str) -> String {
        text.chars().map(|c| Self::rotate(c, -self.shift)).collect()
    }

    pub fn encode<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(|s| {
                let s = s.as_ref();
                format!("{}#{}", s.chars().count(), self.encrypt(s))
            })
            .collect()
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<String>, CodecError> {
        let chars: Vec<char> = encoded.chars().collect();
        let mut items = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let hash = chars[i..]
                .iter()
                .position(|&c| c == '#')
                .map(|p| i + p)
                .ok_or(CodecError::MissingDelimiter { at: i })?;

            let prefix: String = chars[i..hash].iter().collect();
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CodecError::InvalidLength { at: i, text: prefix });
            }
            let len: usize = prefix
                .parse()
                .map_err(|_| CodecError::InvalidLength { at: i, text: prefix.clone() })?;

            let start = hash + 1;
            let available = chars.len() - start;
            if len > available {
                return Err(CodecError::Truncated {
                    at: start,
                    expected: len,
                    available,
                });
            }

            let body: String = chars[start..start + len].iter().collect();
            items.push(self.decrypt(&body));
            i = start + len;
        }
        Ok(items)
    }
}
