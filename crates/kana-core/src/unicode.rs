//! Character-level Unicode classification for Japanese text.
//!
//! Every predicate is total: anything outside the ranges below is simply
//! `false`, and [`classify`] reports [`Category::Other`].

use serde::Serialize;

use crate::{Codepoint, ConvertTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Narrow,
    Wide,
}

/// What a codepoint is, as far as width/kana/case conversion cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "width", rename_all = "snake_case")]
pub enum Category {
    Number(Width),
    Alphabet(Width),
    /// Printable ASCII punctuation and space, plus their full-width forms
    /// (U+3000 counts as the wide space).
    AsciiSymbol(Width),
    Hiragana,
    Katakana(Width),
    /// Japanese punctuation such as 、。「」・ and their half-width forms.
    JisSymbol(Width),
    VoicedSoundMark(Width),
    SemiVoicedSoundMark(Width),
    Other,
}

impl Category {
    pub fn width(self) -> Option<Width> {
        match self {
            Category::Number(w)
            | Category::Alphabet(w)
            | Category::AsciiSymbol(w)
            | Category::Katakana(w)
            | Category::JisSymbol(w)
            | Category::VoicedSoundMark(w)
            | Category::SemiVoicedSoundMark(w) => Some(w),
            Category::Hiragana | Category::Other => None,
        }
    }

    /// The [`ConvertTarget`] group that gates width conversion of this category.
    /// Hiragana has no half-width form and so belongs to no group.
    pub fn target(self) -> Option<ConvertTarget> {
        match self {
            Category::Number(_) => Some(ConvertTarget::NUMBER),
            Category::Alphabet(_) => Some(ConvertTarget::ALPHABET),
            Category::AsciiSymbol(_) | Category::JisSymbol(_) => Some(ConvertTarget::SYMBOL),
            Category::Katakana(_)
            | Category::VoicedSoundMark(_)
            | Category::SemiVoicedSoundMark(_) => Some(ConvertTarget::KATAKANA),
            Category::Hiragana | Category::Other => None,
        }
    }
}

const IDEOGRAPHIC_SPACE: u32 = 0x3000;

pub fn classify(cp: Codepoint) -> Category {
    let w = |narrow: bool| if narrow { Width::Narrow } else { Width::Wide };
    if is_number(cp) {
        Category::Number(w(is_narrow_number(cp)))
    } else if is_alphabet(cp) {
        Category::Alphabet(w(is_narrow_alphabet(cp)))
    } else if is_ascii_symbol(cp) {
        Category::AsciiSymbol(w(is_narrow_ascii_symbol(cp)))
    } else if is_hiragana(cp) {
        Category::Hiragana
    } else if is_katakana(cp) {
        Category::Katakana(w(is_narrow_katakana(cp)))
    } else if is_jis_symbol(cp) {
        Category::JisSymbol(w(is_narrow_jis_symbol(cp)))
    } else if is_voiced_sound_mark(cp) {
        Category::VoicedSoundMark(w(cp.value() == 0xFF9E))
    } else if is_semi_voiced_sound_mark(cp) {
        Category::SemiVoicedSoundMark(w(cp.value() == 0xFF9F))
    } else {
        Category::Other
    }
}

// --- ASCII ---

pub fn is_ascii(cp: Codepoint) -> bool {
    is_narrow_ascii(cp) || is_wide_ascii(cp)
}

pub fn is_narrow_ascii(cp: Codepoint) -> bool {
    cp.value() <= 0x7F
}

/// Full-width forms of printable ASCII (U+FF01..U+FF5E) and the ideographic space.
pub fn is_wide_ascii(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF01..=0xFF5E | IDEOGRAPHIC_SPACE)
}

pub fn is_lower_case(cp: Codepoint) -> bool {
    is_narrow_lower_case(cp) || is_wide_lower_case(cp)
}

pub fn is_narrow_lower_case(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x61..=0x7A)
}

pub fn is_wide_lower_case(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF41..=0xFF5A)
}

pub fn is_upper_case(cp: Codepoint) -> bool {
    is_narrow_upper_case(cp) || is_wide_upper_case(cp)
}

pub fn is_narrow_upper_case(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x41..=0x5A)
}

pub fn is_wide_upper_case(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF21..=0xFF3A)
}

pub fn is_alphabet(cp: Codepoint) -> bool {
    is_lower_case(cp) || is_upper_case(cp)
}

fn is_narrow_alphabet(cp: Codepoint) -> bool {
    is_narrow_lower_case(cp) || is_narrow_upper_case(cp)
}

pub fn is_number(cp: Codepoint) -> bool {
    is_narrow_number(cp) || is_wide_number(cp)
}

pub fn is_narrow_number(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x30..=0x39)
}

pub fn is_wide_number(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF10..=0xFF19)
}

pub fn is_ascii_symbol(cp: Codepoint) -> bool {
    is_narrow_ascii_symbol(cp) || is_wide_ascii_symbol(cp)
}

/// Space and printable ASCII punctuation.
pub fn is_narrow_ascii_symbol(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x20..=0x7E) && !is_narrow_alphabet(cp) && !is_narrow_number(cp)
}

pub fn is_wide_ascii_symbol(cp: Codepoint) -> bool {
    is_wide_ascii(cp) && !is_wide_number(cp) && !is_wide_lower_case(cp) && !is_wide_upper_case(cp)
}

// --- Kana ---

/// Assigned hiragana letters (U+3041..U+3096) and the iteration marks ゝゞ.
/// The voicing marks U+3099..U+309C and the digraph ゟ are classified
/// separately.
pub fn is_hiragana(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x3041..=0x3096 | 0x309D..=0x309E)
}

pub fn is_katakana(cp: Codepoint) -> bool {
    is_wide_katakana(cp) || is_narrow_katakana(cp)
}

/// Katakana letters, ー, the iteration marks ヽヾ and the small phonetic
/// extensions (U+31F0..U+31FF). ゠・ヿ are JIS symbols.
pub fn is_wide_katakana(cp: Codepoint) -> bool {
    matches!(cp.value(), 0x30A1..=0x30FA | 0x30FC..=0x30FE | 0x31F0..=0x31FF)
}

/// Half-width ｦ..ﾝ including ｰ. The half-width voicing marks are not letters.
pub fn is_narrow_katakana(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF66..=0xFF9D)
}

pub fn is_jis_symbol(cp: Codepoint) -> bool {
    is_wide_jis_symbol(cp) || is_narrow_jis_symbol(cp)
}

pub fn is_wide_jis_symbol(cp: Codepoint) -> bool {
    matches!(
        cp.value(),
        0x3001..=0x3003 | 0x300C..=0x300D | 0x309F | 0x30A0 | 0x30FB | 0x30FF
    )
}

/// ｡｢｣､･
pub fn is_narrow_jis_symbol(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF61..=0xFF65)
}

/// ﾞ, ゛ and the combining U+3099.
pub fn is_voiced_sound_mark(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF9E | 0x309B | 0x3099)
}

/// ﾟ, ゜ and the combining U+309A.
pub fn is_semi_voiced_sound_mark(cp: Codepoint) -> bool {
    matches!(cp.value(), 0xFF9F | 0x309C | 0x309A)
}
