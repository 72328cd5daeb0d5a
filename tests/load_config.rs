//! Runs in its own process: `kana_settings_load_config` installs the
//! process-global settings.

use std::ffi::CString;
use std::fs;

use kana_engine::ffi::*;

const CUSTOM: &str = r#"
[defaults]
narrow = ["all"]
wide = ["all"]

[presets.kana_key]
description = "Half-width katakana"
steps = [{ kind = "katakana" }, { kind = "narrow", targets = ["katakana"] }]
"#;

fn run_preset(name: &str, input: &str) -> (i32, String) {
    let name = CString::new(name).unwrap();
    let src: Vec<u16> = input.encode_utf16().collect();
    let mut out = vec![0u16; src.len() * 2 + 1];
    let mut written = 0u32;
    let status = kana_convert_preset_for_utf16(
        name.as_ptr(),
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        &mut written,
    );
    let text = if status == KANA_OK {
        String::from_utf16(&out[..written as usize]).unwrap()
    } else {
        String::new()
    };
    (status, text)
}

#[test]
fn load_config_then_run_custom_preset() {
    let dir = tempfile::tempdir().unwrap();

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[defaults]\nnarrow = [\"kanji\"]\nwide = [\"all\"]\n").unwrap();
    let bad = CString::new(bad.to_str().unwrap()).unwrap();
    assert_eq!(kana_settings_load_config(bad.as_ptr()), KANA_ERR_CONFIG);

    let good = dir.path().join("settings.toml");
    fs::write(&good, CUSTOM).unwrap();
    let good = CString::new(good.to_str().unwrap()).unwrap();
    assert_eq!(kana_settings_load_config(good.as_ptr()), KANA_OK);

    assert_eq!(run_preset("kana_key", "がっこう１"), (KANA_OK, "ｶﾞｯｺｳ１".to_string()));
    assert_eq!(run_preset("halfwidth", "ア").0, KANA_ERR_UNKNOWN_PRESET);

    // the first successful load wins
    assert_eq!(kana_settings_load_config(good.as_ptr()), KANA_ERR_CONFIG);
}
