use std::fmt;

use crate::codec::{Encoding, Utf16};
use crate::engine::Transform;
use crate::tables::{case, kana};
use crate::unicode::{self, Category};
use crate::{Codepoint, ConversionRequest, ConvertTarget};

/// A decoded string that conversions are applied to eagerly.
///
/// ```
/// use kana_core::{ConvertTarget, UcsStr};
///
/// let s = UcsStr::from_str("吾輩は猫である").katakana().narrow(ConvertTarget::ALL);
/// assert_eq!(s.to_string(), "吾輩ﾊ猫ﾃﾞｱﾙ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UcsStr {
    cps: Vec<Codepoint>,
}

impl UcsStr {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self {
            cps: s.chars().map(Codepoint::from).collect(),
        }
    }

    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            cps: Utf16::decode(units),
        }
    }

    pub fn from_codepoints(cps: Vec<Codepoint>) -> Self {
        Self { cps }
    }

    fn step(self, t: Transform) -> Self {
        Self {
            cps: t.apply(&self.cps),
        }
    }

    pub fn upper_case(self) -> Self {
        self.step(Transform::UpperCase)
    }

    pub fn lower_case(self) -> Self {
        self.step(Transform::LowerCase)
    }

    pub fn hiragana(self) -> Self {
        self.step(Transform::Hiragana)
    }

    pub fn katakana(self) -> Self {
        self.step(Transform::Katakana)
    }

    pub fn wide(self, target: ConvertTarget) -> Self {
        self.step(Transform::Wide(target))
    }

    pub fn narrow(self, target: ConvertTarget) -> Self {
        self.step(Transform::Narrow(target))
    }

    pub fn apply(self, request: &ConversionRequest) -> Self {
        Self {
            cps: request.run(self.cps),
        }
    }

    pub fn codepoints(&self) -> &[Codepoint] {
        &self.cps
    }

    pub fn to_utf16(&self) -> Vec<u16> {
        let mut out = Vec::new();
        Utf16::encode(&self.cps, &mut out);
        out
    }

    /// Length in codepoints.
    pub fn len(&self) -> usize {
        self.cps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cps.is_empty()
    }
}

impl fmt::Display for UcsStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cps.iter().try_for_each(|cp| write!(f, "{cp}"))
    }
}

impl From<&str> for UcsStr {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Single-character shortcuts over the tables.
pub trait CharExt {
    fn to_hiragana(self) -> char;
    fn to_katakana(self) -> char;
    fn to_upper_case(self) -> char;
    fn to_lower_case(self) -> char;
    fn is_hiragana(self) -> bool;
    fn is_katakana(self) -> bool;
    fn classify(self) -> Category;
}

fn map_char(c: char, f: fn(Codepoint) -> Codepoint) -> char {
    f(Codepoint::from(c)).to_char().unwrap_or(c)
}

impl CharExt for char {
    fn to_hiragana(self) -> char {
        map_char(self, kana::to_hiragana)
    }

    fn to_katakana(self) -> char {
        map_char(self, kana::to_katakana)
    }

    fn to_upper_case(self) -> char {
        map_char(self, case::to_upper_case)
    }

    fn to_lower_case(self) -> char {
        map_char(self, case::to_lower_case)
    }

    fn is_hiragana(self) -> bool {
        unicode::is_hiragana(self.into())
    }

    fn is_katakana(self) -> bool {
        unicode::is_katakana(self.into())
    }

    fn classify(self) -> Category {
        unicode::classify(self.into())
    }
}
