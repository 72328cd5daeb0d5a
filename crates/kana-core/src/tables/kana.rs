//! Hiragana ⇄ katakana.
//!
//! The two blocks line up at a fixed distance for every letter that exists in
//! both. Katakana-only letters (ヷヸヹヺ, ー, the small phonetic extensions)
//! map to themselves.

use crate::unicode::is_wide_katakana;
use crate::Codepoint;

const KANA_DISTANCE: i32 = 0x30A1 - 0x3041;

fn has_katakana_pair(v: u32) -> bool {
    matches!(v, 0x3041..=0x3096 | 0x309D..=0x309E)
}

fn has_hiragana_pair(v: u32) -> bool {
    matches!(v, 0x30A1..=0x30F6 | 0x30FD..=0x30FE)
}

pub fn to_hiragana(cp: Codepoint) -> Codepoint {
    if has_hiragana_pair(cp.value()) {
        cp.offset(-KANA_DISTANCE)
    } else {
        cp
    }
}

pub fn to_katakana(cp: Codepoint) -> Codepoint {
    if has_katakana_pair(cp.value()) {
        cp.offset(KANA_DISTANCE)
    } else {
        cp
    }
}

/// `true` only when [`to_hiragana`] would change `cp`. Hiragana input is
/// `false` (nothing to do), as are katakana without a hiragana counterpart.
pub fn can_convert_to_hiragana(cp: Codepoint) -> bool {
    has_hiragana_pair(cp.value())
}

pub fn can_convert_to_katakana(cp: Codepoint) -> bool {
    has_katakana_pair(cp.value())
}

/// Full-width katakana with no hiragana counterpart.
pub fn katakana_without_hiragana() -> impl Iterator<Item = Codepoint> {
    (0x30A0..=0x31FF)
        .map(Codepoint::new)
        .filter(|&cp| is_wide_katakana(cp) && !can_convert_to_hiragana(cp))
}
