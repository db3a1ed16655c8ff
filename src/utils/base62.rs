//! Base62 short-code codec.
//!
//! Maps store-assigned identifiers to compact alphanumeric codes and back.
//! The alphabet is digits first, then uppercase, then lowercase, so `0`
//! encodes as `"0"`, `61` as `"z"` and `62` as `"10"`.

use thiserror::Error;

/// Symbols in digit-value order.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Longest code a `u64` can produce (`62^11 > u64::MAX`).
const MAX_CODE_LEN: usize = 11;

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base62Error {
    #[error("short code is empty")]
    Empty,

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code exceeds the identifier range")]
    Overflow,
}

/// Encodes an identifier as the shortest base62 string.
///
/// # Examples
///
/// ```
/// use tinylink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_CODE_LEN];
    let mut pos = MAX_CODE_LEN;
    while id > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(id % BASE) as usize];
        id /= BASE;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 string back to its identifier.
///
/// Unlike a lenient decoder, symbols outside `[0-9A-Za-z]` are rejected
/// rather than counted as zero, so a malformed code never resolves to some
/// other record.
///
/// # Errors
///
/// - [`Base62Error::Empty`] for an empty input
/// - [`Base62Error::InvalidCharacter`] for any symbol outside the alphabet
/// - [`Base62Error::Overflow`] when the value does not fit in a `u64`
pub fn decode(code: &str) -> Result<u64, Base62Error> {
    if code.is_empty() {
        return Err(Base62Error::Empty);
    }

    code.chars().enumerate().try_fold(0u64, |num, (position, c)| {
        let digit = digit_value(c).ok_or(Base62Error::InvalidCharacter {
            character: c,
            position,
        })?;

        num.checked_mul(BASE)
            .and_then(|n| n.checked_add(digit))
            .ok_or(Base62Error::Overflow)
    })
}

fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'A'..='Z' => Some(c as u64 - 'A' as u64 + 10),
        'a'..='z' => Some(c as u64 - 'a' as u64 + 36),
        _ => None,
    }
}
