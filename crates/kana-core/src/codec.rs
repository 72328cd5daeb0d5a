//! Code-unit buffers ⇄ codepoint sequences.
//!
//! UTF-16 surrogate pairs are always decoded as one codepoint. A lone
//! surrogate survives a UTF-16 round trip unchanged; it cannot be represented
//! in UTF-8 and is written there as U+FFFD.

use std::fmt::Debug;

use crate::Codepoint;

const REPLACEMENT: char = '\u{FFFD}';

/// A code-unit encoding the engine can read and write.
pub trait Encoding {
    type Unit: Copy + Default + Debug + PartialEq;

    fn decode(units: &[Self::Unit]) -> Vec<Codepoint>;

    /// Number of units `cp` occupies once encoded.
    fn encoded_len(cp: Codepoint) -> usize;

    fn encode_one(cp: Codepoint, out: &mut Vec<Self::Unit>);

    fn encode(cps: &[Codepoint], out: &mut Vec<Self::Unit>) {
        out.reserve(cps.iter().map(|&cp| Self::encoded_len(cp)).sum());
        for &cp in cps {
            Self::encode_one(cp, out);
        }
    }
}

pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    fn decode(units: &[u16]) -> Vec<Codepoint> {
        char::decode_utf16(units.iter().copied())
            .map(|r| match r {
                Ok(c) => Codepoint::from(c),
                Err(e) => Codepoint::new(u32::from(e.unpaired_surrogate())),
            })
            .collect()
    }

    fn encoded_len(cp: Codepoint) -> usize {
        if cp.is_astral() {
            2
        } else {
            1
        }
    }

    fn encode_one(cp: Codepoint, out: &mut Vec<u16>) {
        match cp.to_char() {
            Some(c) => {
                let mut buf = [0u16; 2];
                out.extend_from_slice(c.encode_utf16(&mut buf));
            }
            // lone surrogate, always in the BMP
            None => out.push(cp.value() as u16),
        }
    }
}

pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;

    /// Malformed byte sequences decode to U+FFFD.
    fn decode(units: &[u8]) -> Vec<Codepoint> {
        String::from_utf8_lossy(units)
            .chars()
            .map(Codepoint::from)
            .collect()
    }

    fn encoded_len(cp: Codepoint) -> usize {
        cp.to_char().unwrap_or(REPLACEMENT).len_utf8()
    }

    fn encode_one(cp: Codepoint, out: &mut Vec<u8>) {
        let mut buf = [0u8; 4];
        let c = cp.to_char().unwrap_or(REPLACEMENT);
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
}

pub struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    fn decode(units: &[u32]) -> Vec<Codepoint> {
        units.iter().map(|&u| Codepoint::new(u)).collect()
    }

    fn encoded_len(_cp: Codepoint) -> usize {
        1
    }

    fn encode_one(cp: Codepoint, out: &mut Vec<u32>) {
        out.push(cp.value());
    }
}

/// Total encoded length of `cps` in encoding `E`.
pub fn encoded_len<E: Encoding>(cps: &[Codepoint]) -> usize {
    cps.iter().map(|&cp| E::encoded_len(cp)).sum()
}
