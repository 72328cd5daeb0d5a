//! Single-codepoint helpers. Codepoints cross the boundary as `u32`; a value
//! of `0` stands for "no character" in the width results.

use kana_core::tables::{case, kana, width};
use kana_core::unicode;
use kana_core::Codepoint;

macro_rules! ffi_predicates {
    ($($name:ident => $f:path),* $(,)?) => {
        $(
            #[no_mangle]
            pub extern "C" fn $name(c: u32) -> bool {
                $f(Codepoint::new(c))
            }
        )*
    };
}

macro_rules! ffi_mappings {
    ($($name:ident => $f:path),* $(,)?) => {
        $(
            #[no_mangle]
            pub extern "C" fn $name(c: u32) -> u32 {
                $f(Codepoint::new(c)).value()
            }
        )*
    };
}

ffi_predicates! {
    kana_is_ascii => unicode::is_ascii,
    kana_is_wide_ascii => unicode::is_wide_ascii,
    kana_is_narrow_ascii => unicode::is_narrow_ascii,
    kana_is_lower_case => unicode::is_lower_case,
    kana_is_wide_lower_case => unicode::is_wide_lower_case,
    kana_is_narrow_lower_case => unicode::is_narrow_lower_case,
    kana_is_upper_case => unicode::is_upper_case,
    kana_is_wide_upper_case => unicode::is_wide_upper_case,
    kana_is_narrow_upper_case => unicode::is_narrow_upper_case,
    kana_is_ascii_symbol => unicode::is_ascii_symbol,
    kana_is_wide_ascii_symbol => unicode::is_wide_ascii_symbol,
    kana_is_narrow_ascii_symbol => unicode::is_narrow_ascii_symbol,
    kana_is_number => unicode::is_number,
    kana_is_wide_number => unicode::is_wide_number,
    kana_is_narrow_number => unicode::is_narrow_number,
    kana_is_hiragana => unicode::is_hiragana,
    kana_is_katakana => unicode::is_katakana,
    kana_is_wide_katakana => unicode::is_wide_katakana,
    kana_is_narrow_katakana => unicode::is_narrow_katakana,
    kana_is_jis_symbol => unicode::is_jis_symbol,
    kana_is_wide_jis_symbol => unicode::is_wide_jis_symbol,
    kana_is_narrow_jis_symbol => unicode::is_narrow_jis_symbol,
    kana_can_convert_hiragana => kana::can_convert_to_hiragana,
}

ffi_mappings! {
    kana_convert_to_lower_case => case::to_lower_case,
    kana_convert_to_upper_case => case::to_upper_case,
    kana_convert_to_hiragana => kana::to_hiragana,
    kana_convert_to_katakana => kana::to_katakana,
}

#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct KanaWideResult {
    pub result: u32,
    /// Non-zero when `pending` was folded into `result`.
    pub consumed_mark: u8,
}

#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct KanaNarrowResult {
    pub result: u32,
    /// Trailing half-width voicing mark, or 0.
    pub mark: u32,
}

#[no_mangle]
pub extern "C" fn kana_convert_to_wide(c: u32, pending: u32) -> KanaWideResult {
    let pending = (pending != 0).then(|| Codepoint::new(pending));
    let r = width::to_wide(Codepoint::new(c), pending);
    KanaWideResult {
        result: r.result.value(),
        consumed_mark: u8::from(r.consumed_mark),
    }
}

#[no_mangle]
pub extern "C" fn kana_convert_to_narrow(c: u32) -> KanaNarrowResult {
    let r = width::to_narrow(Codepoint::new(c));
    KanaNarrowResult {
        result: r.result.value(),
        mark: r.mark.map_or(0, Codepoint::value),
    }
}
