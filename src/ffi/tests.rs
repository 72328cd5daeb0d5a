use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Mimic the .NET binding: 2x input for narrow, plus one terminator slot.
fn call_named(
    f: extern "C" fn(*const u16, u32, *mut u16, u32) -> u32,
    input: &str,
) -> String {
    let src = utf16(input);
    let mut out = vec![0u16; src.len() + 1];
    let n = f(src.as_ptr(), src.len() as u32, out.as_mut_ptr(), out.len() as u32);
    assert_ne!(n, KANA_CONVERT_FAILED);
    assert_eq!(out[n as usize], 0, "terminator");
    String::from_utf16(&out[..n as usize]).unwrap()
}

fn call_width(
    f: extern "C" fn(*const u16, u32, *mut u16, u32, u32) -> u32,
    input: &str,
    target: u32,
) -> String {
    let src = utf16(input);
    let mut out = vec![0u16; src.len() * 2 + 1];
    let n = f(
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        target,
    );
    assert_ne!(n, KANA_CONVERT_FAILED);
    String::from_utf16(&out[..n as usize]).unwrap()
}

#[test]
fn test_named_entry_points() {
    assert_eq!(call_named(to_upper_case_for_utf16, "abcｄｅｆ"), "ABCＤＥＦ");
    assert_eq!(call_named(to_lower_case_for_utf16, "ABCＤＥＦ"), "abcｄｅｆ");
    assert_eq!(
        call_named(to_hiragana_for_utf16, "吾輩ハ😺猫デアル😺"),
        "吾輩は😺猫である😺"
    );
    assert_eq!(
        call_named(to_katakana_for_utf16, "ちたたぷ　とてとて"),
        "チタタプ　トテトテ"
    );
}

#[test]
fn test_width_entry_points() {
    let all = kana_core::ConvertTarget::ALL.bits();
    assert_eq!(
        call_width(to_narrow_for_utf16, "チタタプ　トテトテＦｏｏｏｏ！！！１１！", all),
        "ﾁﾀﾀﾌﾟ ﾄﾃﾄﾃFoooo!!!11!"
    );
    assert_eq!(
        call_width(to_wide_for_utf16, "吾輩ﾊ😺猫ﾃﾞｱﾙ😺", all),
        "吾輩ハ😺猫デアル😺"
    );
    let no_kana = 0b0111;
    assert_eq!(
        call_width(to_narrow_for_utf16, "デ１", no_kana),
        "デ1"
    );
}

#[test]
fn test_overflow_reports_required_and_leaves_buffer() {
    let src = utf16("ガギ");
    let mut out = [0x5555u16; 4];
    let mut written = 0u32;
    let status = kana_convert_for_utf16(
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        KANA_KIND_NARROW,
        0b1111,
        &mut written,
    );
    assert_eq!(status, KANA_ERR_OVERFLOW);
    // four half-width units plus the terminator
    assert_eq!(written, 5);
    assert!(out.iter().all(|&u| u == 0x5555));

    let n = to_narrow_for_utf16(src.as_ptr(), 2, out.as_mut_ptr(), 4, 0b1111);
    assert_eq!(n, KANA_CONVERT_FAILED);
}

#[test]
fn test_zero_capacity_reports_required() {
    let src = utf16("a");
    let mut written = 0u32;
    let status = kana_convert_for_utf16(
        src.as_ptr(),
        1,
        ptr::null_mut(),
        0,
        KANA_KIND_UPPER_CASE,
        0,
        &mut written,
    );
    assert_eq!(status, KANA_ERR_OVERFLOW);
    assert_eq!(written, 2);
}

#[test]
fn test_argument_errors() {
    let mut out = [0u16; 8];
    let status = kana_convert_for_utf16(
        ptr::null(),
        3,
        out.as_mut_ptr(),
        8,
        KANA_KIND_UPPER_CASE,
        0,
        ptr::null_mut(),
    );
    assert_eq!(status, KANA_ERR_NULL);

    let src = utf16("a");
    let status = kana_convert_for_utf16(
        src.as_ptr(),
        1,
        out.as_mut_ptr(),
        8,
        42,
        0,
        ptr::null_mut(),
    );
    assert_eq!(status, KANA_ERR_UNKNOWN_KIND);

    let status = kana_convert_for_utf16(
        src.as_ptr(),
        1,
        out.as_mut_ptr(),
        8,
        KANA_KIND_WIDE,
        1 << 7,
        ptr::null_mut(),
    );
    assert_eq!(status, KANA_ERR_INVALID_TARGET);
}

#[test]
fn test_empty_input_with_null_pointer() {
    let mut out = [0xFFFFu16; 1];
    let mut written = 7u32;
    let status = kana_convert_for_utf16(
        ptr::null(),
        0,
        out.as_mut_ptr(),
        1,
        KANA_KIND_NARROW,
        0b1111,
        &mut written,
    );
    assert_eq!(status, KANA_OK);
    assert_eq!(written, 0);
    assert_eq!(out[0], 0);
}

#[test]
fn test_utf8_entry_point() {
    let src = "ﾌｼﾞｻﾝｺﾎﾟｫ".as_bytes();
    let mut out = vec![0u8; 64];
    let mut written = 0u32;
    let status = kana_convert_for_utf8(
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        KANA_KIND_WIDE,
        0b1111,
        &mut written,
    );
    assert_eq!(status, KANA_OK);
    assert_eq!(
        std::str::from_utf8(&out[..written as usize]).unwrap(),
        "フジサンコポォ"
    );
    assert_eq!(out[written as usize], 0);
}

#[test]
fn test_preset_entry_point() {
    let src = utf16("がっこう　Ｎｏ．１");
    let mut out = vec![0u16; src.len() * 2 + 1];
    let mut written = 0u32;
    let name = CString::new("ascii").unwrap();
    let status = kana_convert_preset_for_utf16(
        name.as_ptr(),
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        &mut written,
    );
    assert_eq!(status, KANA_OK);
    assert_eq!(
        String::from_utf16(&out[..written as usize]).unwrap(),
        "がっこう No.1"
    );

    let missing = CString::new("no-such-preset").unwrap();
    let status = kana_convert_preset_for_utf16(
        missing.as_ptr(),
        src.as_ptr(),
        src.len() as u32,
        out.as_mut_ptr(),
        out.len() as u32,
        &mut written,
    );
    assert_eq!(status, KANA_ERR_UNKNOWN_PRESET);
}

#[test]
fn test_char_predicates() {
    assert!(kana_is_ascii('a' as u32));
    assert!(kana_is_wide_ascii('ｗ' as u32));
    assert!(!kana_is_narrow_ascii('ｱ' as u32));
    assert!(kana_is_wide_upper_case('Ｗ' as u32));
    assert!(kana_is_narrow_ascii_symbol('@' as u32));
    assert!(!kana_is_wide_ascii_symbol('@' as u32));
    assert!(kana_is_wide_number('０' as u32));
    assert!(kana_is_hiragana('あ' as u32));
    assert!(kana_is_narrow_katakana('ｻ' as u32));
    assert!(!kana_is_wide_katakana('ｶ' as u32));
    assert!(kana_is_jis_symbol('ゟ' as u32));
    assert!(kana_is_narrow_jis_symbol('･' as u32));
    assert!(kana_can_convert_hiragana('ワ' as u32));
    assert!(!kana_can_convert_hiragana('ヷ' as u32));
}

#[test]
fn test_char_mappings() {
    assert_eq!(kana_convert_to_hiragana('ア' as u32), 'あ' as u32);
    assert_eq!(kana_convert_to_katakana('あ' as u32), 'ア' as u32);
    assert_eq!(kana_convert_to_hiragana('ｱ' as u32), 'ｱ' as u32);
    assert_eq!(kana_convert_to_katakana('漢' as u32), '漢' as u32);
    assert_eq!(kana_convert_to_lower_case('A' as u32), 'a' as u32);
    assert_eq!(kana_convert_to_upper_case('0' as u32), '0' as u32);
}

#[test]
fn test_width_results() {
    assert_eq!(
        kana_convert_to_wide('ｱ' as u32, 0),
        KanaWideResult {
            result: 'ア' as u32,
            consumed_mark: 0
        }
    );
    assert_eq!(
        kana_convert_to_wide('ｶ' as u32, 'ﾞ' as u32),
        KanaWideResult {
            result: 'ガ' as u32,
            consumed_mark: 1
        }
    );
    assert_eq!(
        kana_convert_to_wide('ｶ' as u32, 'ﾟ' as u32),
        KanaWideResult {
            result: 'カ' as u32,
            consumed_mark: 0
        }
    );
    assert_eq!(
        kana_convert_to_narrow('パ' as u32),
        KanaNarrowResult {
            result: 'ﾊ' as u32,
            mark: 'ﾟ' as u32
        }
    );
    assert_eq!(
        kana_convert_to_narrow('あ' as u32),
        KanaNarrowResult {
            result: 'あ' as u32,
            mark: 0
        }
    );
}

#[test]
fn test_version() {
    let v = unsafe { CStr::from_ptr(kana_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_settings_load_rejects_missing_file() {
    let path = CString::new("/nonexistent/kana-settings.toml").unwrap();
    assert_eq!(kana_settings_load_config(path.as_ptr()), KANA_ERR_CONFIG);
    assert_eq!(kana_settings_load_config(ptr::null()), KANA_ERR_NULL);
}
