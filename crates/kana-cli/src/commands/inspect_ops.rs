use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use kana_core::tables::width;
use kana_core::unicode::{self, Category};
use kana_core::Codepoint;

#[derive(Debug, Serialize)]
pub struct CharReport {
    pub char: String,
    pub codepoint: String,
    pub category: Category,
    /// Terminal columns, `None` for control characters.
    pub display_width: Option<usize>,
    pub narrow: String,
    pub wide: String,
}

pub fn inspect_char(c: char) -> CharReport {
    let cp = Codepoint::from(c);
    let narrowed = width::to_narrow(cp);
    let mut narrow = narrowed.result.to_string();
    if let Some(mark) = narrowed.mark {
        narrow.push_str(&mark.to_string());
    }
    CharReport {
        char: c.to_string(),
        codepoint: format!("U+{:04X}", cp.value()),
        category: unicode::classify(cp),
        display_width: c.width(),
        narrow,
        wide: width::to_wide(cp, None).result.to_string(),
    }
}

pub fn inspect(text: &str) -> Vec<CharReport> {
    text.chars().map(inspect_char).collect()
}

pub fn inspect_cmd(text: &str, json: bool) {
    let reports = inspect(text);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&reports), "JSON serialization failed: {}")
        );
        return;
    }
    for r in &reports {
        let cols = r
            .display_width
            .map_or_else(|| "-".to_string(), |w| w.to_string());
        println!(
            "{}\t{}\t{:?}\tcols={}\tnarrow={}\twide={}",
            r.char, r.codepoint, r.category, cols, r.narrow, r.wide
        );
    }
}
