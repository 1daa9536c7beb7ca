//! Text encoding used by the host's font renderer.
//!
//! The host prints strings in its own 8-bit charset terminated by [`EOS`].
//! Only the subset of characters the party screen prints is mapped; anything
//! else renders as a dash.

use arrayvec::ArrayVec;
use std::fmt;

/// String terminator.
pub const EOS: u8 = 0xFF;

const SPACE: u8 = 0x00;
const DASH: u8 = 0xAE;

/// Encode one ASCII character.
pub const fn encode_char(c: u8) -> u8 {
    match c {
        b'a'..=b'z' => c - b'a' + 0xD5,
        b'A'..=b'Z' => c - b'A' + 0xBB,
        b'0'..=b'9' => c - b'0' + 0xA1,
        b' ' => SPACE,
        b'!' => 0xAB,
        b'?' => 0xAC,
        b'.' => 0xAD,
        b'-' | b'_' => DASH,
        b':' => 0xF0,
        b'>' => 0x86,
        b'<' => 0x85,
        b')' => 0x5D,
        b'(' => 0x5C,
        b',' => 0x35,
        b'+' => 0x2E,
        b'&' => 0x2D,
        b'/' => 0xBA,
        _ => DASH,
    }
}

/// Decode one encoded byte back to ASCII, `None` for unmapped bytes.
pub const fn decode_char(b: u8) -> Option<char> {
    let c = match b {
        0xD5..=0xEE => (b - 0xD5 + b'a') as char,
        0xBB..=0xD4 => (b - 0xBB + b'A') as char,
        0xA1..=0xAA => (b - 0xA1 + b'0') as char,
        SPACE => ' ',
        0xAB => '!',
        0xAC => '?',
        0xAD => '.',
        DASH => '-',
        0xF0 => ':',
        0x86 => '>',
        0x85 => '<',
        0x5D => ')',
        0x5C => '(',
        0x35 => ',',
        0x2E => '+',
        0x2D => '&',
        0xBA => '/',
        _ => return None,
    };
    Some(c)
}

/// Encoded string with inline capacity `CAP`, always terminated.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PkString<const CAP: usize>(ArrayVec<u8, CAP>);

impl<const CAP: usize> PkString<CAP> {
    /// Encode `text`, truncating so the terminator always fits.
    pub fn encode(text: &str) -> Self {
        let mut buf = ArrayVec::new();
        for c in text.bytes().take(CAP.saturating_sub(1)) {
            buf.push(encode_char(c));
        }
        if CAP > 0 {
            buf.push(EOS);
        }
        PkString(buf)
    }

    /// Copy an already encoded buffer up to its terminator.
    pub fn from_raw(raw: &[u8]) -> Self {
        let mut buf = ArrayVec::new();
        for &b in raw
            .iter()
            .take_while(|&&b| b != EOS)
            .take(CAP.saturating_sub(1))
        {
            buf.push(b);
        }
        if CAP > 0 {
            buf.push(EOS);
        }
        PkString(buf)
    }

    /// Encoded bytes including the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of characters before the terminator.
    pub fn char_len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Copy into a fixed C buffer, padding with terminators.
    pub fn to_array<const N: usize>(&self) -> [u8; N] {
        let mut out = [EOS; N];
        for (dst, src) in out.iter_mut().zip(self.0.iter().take(N.saturating_sub(1))) {
            *dst = *src;
        }
        out
    }

    /// Render as ASCII, mapping unknown bytes to `?`.
    pub fn decode(&self) -> String {
        self.0
            .iter()
            .take_while(|&&b| b != EOS)
            .map(|&b| decode_char(b).unwrap_or('?'))
            .collect()
    }
}

impl<const CAP: usize> fmt::Debug for PkString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.decode())
    }
}

impl<const CAP: usize> fmt::Display for PkString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}
