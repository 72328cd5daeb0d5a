use std::fmt;

use tracing::debug_span;

use crate::codec::Encoding;
use crate::tables::{case, kana, width};
use crate::{Codepoint, ConvertTarget};

/// One conversion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    UpperCase,
    LowerCase,
    Hiragana,
    Katakana,
    Wide(ConvertTarget),
    Narrow(ConvertTarget),
}

impl Transform {
    pub fn name(self) -> &'static str {
        match self {
            Transform::UpperCase => "upper",
            Transform::LowerCase => "lower",
            Transform::Hiragana => "hiragana",
            Transform::Katakana => "katakana",
            Transform::Wide(_) => "wide",
            Transform::Narrow(_) => "narrow",
        }
    }

    /// Run this step over a complete codepoint sequence.
    pub fn apply(self, input: &[Codepoint]) -> Vec<Codepoint> {
        let _span = debug_span!("transform", step = self.name(), len = input.len()).entered();
        match self {
            Transform::UpperCase => map_each(input, case::to_upper_case),
            Transform::LowerCase => map_each(input, case::to_lower_case),
            Transform::Hiragana => map_each(input, kana::to_hiragana),
            Transform::Katakana => map_each(input, kana::to_katakana),
            Transform::Wide(target) => widen(input, target),
            Transform::Narrow(target) => narrow(input, target),
        }
    }

    /// Upper bound on output code units per input code unit in encoding `E`.
    ///
    /// Narrowing splits a voiced letter in two and never lengthens a single
    /// letter, so it at most doubles in every encoding. Widening merges
    /// letters but turns one-unit ASCII into U+FF01..U+FF5E, three bytes in
    /// UTF-8.
    pub fn max_unit_growth<E: Encoding>(self) -> usize {
        match self {
            Transform::Narrow(_) => 2,
            Transform::Wide(_) => E::encoded_len(Codepoint::new(0xFF01)),
            _ => 1,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Wide(t) | Transform::Narrow(t) if *t != ConvertTarget::ALL => {
                write!(f, "{}:{}", self.name(), t)
            }
            _ => f.write_str(self.name()),
        }
    }
}

fn map_each(input: &[Codepoint], f: fn(Codepoint) -> Codepoint) -> Vec<Codepoint> {
    input.iter().map(|&cp| f(cp)).collect()
}

/// Each codepoint looks one ahead so a half-width letter can swallow the
/// voicing mark after it. A mark that does not combine is left in place and
/// widened on its own on the next iteration.
fn widen(input: &[Codepoint], target: ConvertTarget) -> Vec<Codepoint> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let r = width::to_wide_in(input[i], input.get(i + 1).copied(), target);
        out.push(r.result);
        i += if r.consumed_mark { 2 } else { 1 };
    }
    out
}

fn narrow(input: &[Codepoint], target: ConvertTarget) -> Vec<Codepoint> {
    let mut out = Vec::with_capacity(input.len());
    for &cp in input {
        let r = width::to_narrow_in(cp, target);
        out.push(r.result);
        out.extend(r.mark);
    }
    out
}
