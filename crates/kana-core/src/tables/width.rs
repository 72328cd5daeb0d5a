//! Half-width ⇄ full-width mapping.
//!
//! ASCII maps by a fixed offset (plus space ⇄ U+3000). Katakana follows the
//! JIS X 0201 half-width set: the voiced and semi-voiced full-width letters
//! have no half-width form of their own and are written as base letter + ﾞ/ﾟ.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::unicode::classify;
use crate::{Codepoint, ConvertTarget};

const WIDE_ASCII_OFFSET: u32 = 0xFF01 - 0x21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Dakuten (ﾞ)
    Voiced,
    /// Handakuten (ﾟ)
    SemiVoiced,
}

impl Mark {
    pub const fn narrow(self) -> Codepoint {
        match self {
            Mark::Voiced => Codepoint::new(0xFF9E),
            Mark::SemiVoiced => Codepoint::new(0xFF9F),
        }
    }

    pub fn from_narrow(cp: Codepoint) -> Option<Mark> {
        match cp.value() {
            0xFF9E => Some(Mark::Voiced),
            0xFF9F => Some(Mark::SemiVoiced),
            _ => None,
        }
    }
}

/// One row of the width table. `mark` is set for full-width letters that
/// decompose into `narrow` followed by a half-width voicing mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub narrow: Codepoint,
    pub wide: Codepoint,
    pub mark: Option<Mark>,
}

const fn entry(narrow: char, wide: char, mark: Option<Mark>) -> MappingEntry {
    MappingEntry {
        narrow: Codepoint::new(narrow as u32),
        wide: Codepoint::new(wide as u32),
        mark,
    }
}

const fn plain(narrow: char, wide: char) -> MappingEntry {
    entry(narrow, wide, None)
}

const fn voiced(narrow: char, wide: char) -> MappingEntry {
    entry(narrow, wide, Some(Mark::Voiced))
}

const fn semi(narrow: char, wide: char) -> MappingEntry {
    entry(narrow, wide, Some(Mark::SemiVoiced))
}

#[rustfmt::skip]
static KANA_ENTRIES: &[MappingEntry] = &[
    plain('｡', '。'), plain('｢', '「'), plain('｣', '」'), plain('､', '、'), plain('･', '・'),
    plain('ｦ', 'ヲ'),
    plain('ｧ', 'ァ'), plain('ｨ', 'ィ'), plain('ｩ', 'ゥ'), plain('ｪ', 'ェ'), plain('ｫ', 'ォ'),
    plain('ｬ', 'ャ'), plain('ｭ', 'ュ'), plain('ｮ', 'ョ'), plain('ｯ', 'ッ'), plain('ｰ', 'ー'),
    plain('ｱ', 'ア'), plain('ｲ', 'イ'), plain('ｳ', 'ウ'), plain('ｴ', 'エ'), plain('ｵ', 'オ'),
    plain('ｶ', 'カ'), plain('ｷ', 'キ'), plain('ｸ', 'ク'), plain('ｹ', 'ケ'), plain('ｺ', 'コ'),
    plain('ｻ', 'サ'), plain('ｼ', 'シ'), plain('ｽ', 'ス'), plain('ｾ', 'セ'), plain('ｿ', 'ソ'),
    plain('ﾀ', 'タ'), plain('ﾁ', 'チ'), plain('ﾂ', 'ツ'), plain('ﾃ', 'テ'), plain('ﾄ', 'ト'),
    plain('ﾅ', 'ナ'), plain('ﾆ', 'ニ'), plain('ﾇ', 'ヌ'), plain('ﾈ', 'ネ'), plain('ﾉ', 'ノ'),
    plain('ﾊ', 'ハ'), plain('ﾋ', 'ヒ'), plain('ﾌ', 'フ'), plain('ﾍ', 'ヘ'), plain('ﾎ', 'ホ'),
    plain('ﾏ', 'マ'), plain('ﾐ', 'ミ'), plain('ﾑ', 'ム'), plain('ﾒ', 'メ'), plain('ﾓ', 'モ'),
    plain('ﾔ', 'ヤ'), plain('ﾕ', 'ユ'), plain('ﾖ', 'ヨ'),
    plain('ﾗ', 'ラ'), plain('ﾘ', 'リ'), plain('ﾙ', 'ル'), plain('ﾚ', 'レ'), plain('ﾛ', 'ロ'),
    plain('ﾜ', 'ワ'), plain('ﾝ', 'ン'),
    plain('ﾞ', '゛'), plain('ﾟ', '゜'),

    voiced('ｳ', 'ヴ'),
    voiced('ｶ', 'ガ'), voiced('ｷ', 'ギ'), voiced('ｸ', 'グ'), voiced('ｹ', 'ゲ'), voiced('ｺ', 'ゴ'),
    voiced('ｻ', 'ザ'), voiced('ｼ', 'ジ'), voiced('ｽ', 'ズ'), voiced('ｾ', 'ゼ'), voiced('ｿ', 'ゾ'),
    voiced('ﾀ', 'ダ'), voiced('ﾁ', 'ヂ'), voiced('ﾂ', 'ヅ'), voiced('ﾃ', 'デ'), voiced('ﾄ', 'ド'),
    voiced('ﾊ', 'バ'), voiced('ﾋ', 'ビ'), voiced('ﾌ', 'ブ'), voiced('ﾍ', 'ベ'), voiced('ﾎ', 'ボ'),
    voiced('ﾜ', 'ヷ'), voiced('ｦ', 'ヺ'),

    semi('ﾊ', 'パ'), semi('ﾋ', 'ピ'), semi('ﾌ', 'プ'), semi('ﾍ', 'ペ'), semi('ﾎ', 'ポ'),
];

/// Combining marks have no half-width form of their own; narrowing folds them
/// into the spacing half-width marks. Widening never produces them.
#[rustfmt::skip]
static NARROW_ONLY: &[(Codepoint, Codepoint)] = &[
    (Codepoint::new(0x3099), Codepoint::new(0xFF9E)),
    (Codepoint::new(0x309A), Codepoint::new(0xFF9F)),
];

/// Indexed view of the width mapping, built once on first use.
pub struct WidthTable {
    wide: HashMap<(Codepoint, Option<Mark>), Codepoint>,
    narrow: HashMap<Codepoint, (Codepoint, Option<Mark>)>,
}

impl WidthTable {
    pub fn global() -> &'static WidthTable {
        static INSTANCE: OnceLock<WidthTable> = OnceLock::new();
        INSTANCE.get_or_init(WidthTable::build)
    }

    fn build() -> WidthTable {
        let ascii = (0x21..=0x7E)
            .map(|n| MappingEntry {
                narrow: Codepoint::new(n),
                wide: Codepoint::new(n + WIDE_ASCII_OFFSET),
                mark: None,
            })
            .chain(std::iter::once(plain(' ', '\u{3000}')));

        let mut wide = HashMap::new();
        let mut narrow = HashMap::new();
        for e in ascii.chain(KANA_ENTRIES.iter().copied()) {
            wide.insert((e.narrow, e.mark), e.wide);
            narrow.insert(e.wide, (e.narrow, e.mark));
        }
        for &(from, to) in NARROW_ONLY {
            narrow.insert(from, (to, None));
        }
        WidthTable { wide, narrow }
    }

    pub fn entries() -> impl Iterator<Item = &'static MappingEntry> {
        KANA_ENTRIES.iter()
    }

    pub fn wide_of(&self, narrow: Codepoint, mark: Option<Mark>) -> Option<Codepoint> {
        self.wide.get(&(narrow, mark)).copied()
    }

    pub fn narrow_of(&self, wide: Codepoint) -> Option<(Codepoint, Option<Mark>)> {
        self.narrow.get(&wide).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideResult {
    pub result: Codepoint,
    /// `true` when the pending mark was folded into `result` and must be
    /// skipped by the caller.
    pub consumed_mark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrowResult {
    pub result: Codepoint,
    /// Half-width voicing mark to emit right after `result`.
    pub mark: Option<Codepoint>,
}

/// Widen `cp`, composing it with `pending` (the codepoint that follows it)
/// when that is a half-width voicing mark the letter accepts.
pub fn to_wide(cp: Codepoint, pending: Option<Codepoint>) -> WideResult {
    let table = WidthTable::global();
    let Some(base) = table.wide_of(cp, None) else {
        return WideResult {
            result: cp,
            consumed_mark: false,
        };
    };
    if let Some(mark) = pending.and_then(Mark::from_narrow) {
        if let Some(composed) = table.wide_of(cp, Some(mark)) {
            return WideResult {
                result: composed,
                consumed_mark: true,
            };
        }
    }
    WideResult {
        result: base,
        consumed_mark: false,
    }
}

/// Narrow `cp`, splitting voiced letters into base + mark.
pub fn to_narrow(cp: Codepoint) -> NarrowResult {
    match WidthTable::global().narrow_of(cp) {
        Some((result, mark)) => NarrowResult {
            result,
            mark: mark.map(Mark::narrow),
        },
        None => NarrowResult {
            result: cp,
            mark: None,
        },
    }
}

fn in_target(cp: Codepoint, target: ConvertTarget) -> bool {
    classify(cp)
        .target()
        .is_some_and(|group| target.contains(group))
}

/// [`to_wide`] limited to the groups in `target`; everything else passes through.
pub fn to_wide_in(cp: Codepoint, pending: Option<Codepoint>, target: ConvertTarget) -> WideResult {
    if in_target(cp, target) {
        to_wide(cp, pending)
    } else {
        WideResult {
            result: cp,
            consumed_mark: false,
        }
    }
}

/// [`to_narrow`] limited to the groups in `target`; everything else passes through.
pub fn to_narrow_in(cp: Codepoint, target: ConvertTarget) -> NarrowResult {
    if in_target(cp, target) {
        to_narrow(cp)
    } else {
        NarrowResult {
            result: cp,
            mark: None,
        }
    }
}
