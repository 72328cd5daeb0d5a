use std::ffi::c_char;

use tracing::debug;

use kana_core::codec::{Encoding, Utf16, Utf8};
use kana_core::engine::{self, ConvertError};
use kana_core::{ConversionRequest, ConvertTarget, Transform};

use super::ffi_guard;

// --- Status codes ---

pub const KANA_OK: i32 = 0;
pub const KANA_ERR_NULL: i32 = -1;
pub const KANA_ERR_OVERFLOW: i32 = -2;
pub const KANA_ERR_UNKNOWN_KIND: i32 = -3;
pub const KANA_ERR_INVALID_TARGET: i32 = -4;
pub const KANA_ERR_CONFIG: i32 = -5;
pub const KANA_ERR_UNKNOWN_PRESET: i32 = -6;

/// Returned by the `to_*_for_utf16` entry points when nothing was written.
pub const KANA_CONVERT_FAILED: u32 = u32::MAX;

// --- Transform kinds (same order as the bindings' RequestType) ---

pub const KANA_KIND_UPPER_CASE: u32 = 0;
pub const KANA_KIND_LOWER_CASE: u32 = 1;
pub const KANA_KIND_KATAKANA: u32 = 2;
pub const KANA_KIND_HIRAGANA: u32 = 3;
pub const KANA_KIND_WIDE: u32 = 4;
pub const KANA_KIND_NARROW: u32 = 5;

pub(crate) fn transform_from_abi(kind: u32, target: u32) -> Result<Transform, i32> {
    let target = ConvertTarget::from_bits(target).ok_or(KANA_ERR_INVALID_TARGET)?;
    match kind {
        KANA_KIND_UPPER_CASE => Ok(Transform::UpperCase),
        KANA_KIND_LOWER_CASE => Ok(Transform::LowerCase),
        KANA_KIND_KATAKANA => Ok(Transform::Katakana),
        KANA_KIND_HIRAGANA => Ok(Transform::Hiragana),
        KANA_KIND_WIDE => Ok(Transform::Wide(target)),
        KANA_KIND_NARROW => Ok(Transform::Narrow(target)),
        _ => Err(KANA_ERR_UNKNOWN_KIND),
    }
}

/// Convert into `out` and write a NUL unit right after the text. On overflow
/// `out` is untouched and the error holds the capacity needed, terminator
/// included.
fn convert_terminated<E: Encoding>(
    input: &[E::Unit],
    request: &ConversionRequest,
    out: &mut [E::Unit],
) -> Result<usize, usize> {
    let Some(text_cap) = out.len().checked_sub(1) else {
        return Err(engine::required_capacity::<E>(input, request) + 1);
    };
    match engine::convert::<E>(input, request, &mut out[..text_cap]) {
        Ok(n) => {
            out[n] = <E::Unit as Default>::default();
            Ok(n)
        }
        Err(ConvertError::BufferTooSmall { required, .. }) => Err(required + 1),
    }
}

fn convert_entry<E: Encoding>(
    input: *const E::Unit,
    input_len: u32,
    out: *mut E::Unit,
    out_cap: u32,
    request: &ConversionRequest,
    written: *mut u32,
) -> i32 {
    ffi_guard!(KANA_ERR_NULL;
        slice: input = (input, input_len),
        slice_mut: out = (out, out_cap),
    );
    let (status, count) = match convert_terminated::<E>(input, request, out) {
        Ok(n) => (KANA_OK, n),
        Err(required) => {
            debug!(required, capacity = out_cap, "ffi output buffer too small");
            (KANA_ERR_OVERFLOW, required)
        }
    };
    if !written.is_null() {
        unsafe { *written = u32::try_from(count).unwrap_or(u32::MAX) };
    }
    status
}

/// Generic UTF-16 entry point. `written` receives the units written (without
/// the terminator) on success, or the capacity required on
/// [`KANA_ERR_OVERFLOW`].
#[no_mangle]
pub extern "C" fn kana_convert_for_utf16(
    input: *const u16,
    input_len: u32,
    out: *mut u16,
    out_cap: u32,
    kind: u32,
    convert_target: u32,
    written: *mut u32,
) -> i32 {
    match transform_from_abi(kind, convert_target) {
        Ok(t) => convert_entry::<Utf16>(
            input,
            input_len,
            out,
            out_cap,
            &ConversionRequest::new().then(t),
            written,
        ),
        Err(status) => status,
    }
}

/// UTF-8 twin of [`kana_convert_for_utf16`]; lengths are in bytes.
#[no_mangle]
pub extern "C" fn kana_convert_for_utf8(
    input: *const u8,
    input_len: u32,
    out: *mut u8,
    out_cap: u32,
    kind: u32,
    convert_target: u32,
    written: *mut u32,
) -> i32 {
    match transform_from_abi(kind, convert_target) {
        Ok(t) => convert_entry::<Utf8>(
            input,
            input_len,
            out,
            out_cap,
            &ConversionRequest::new().then(t),
            written,
        ),
        Err(status) => status,
    }
}

/// Run a named preset from the loaded settings.
#[no_mangle]
pub extern "C" fn kana_convert_preset_for_utf16(
    preset: *const c_char,
    input: *const u16,
    input_len: u32,
    out: *mut u16,
    out_cap: u32,
    written: *mut u32,
) -> i32 {
    ffi_guard!(KANA_ERR_NULL;
        str: name = preset,
    );
    match kana_core::settings::settings().preset(name) {
        Ok(p) => convert_entry::<Utf16>(input, input_len, out, out_cap, &p.request, written),
        Err(e) => {
            debug!("{e}");
            KANA_ERR_UNKNOWN_PRESET
        }
    }
}

// --- Single-step UTF-16 entry points used by the .NET binding ---

fn single_step_utf16(
    target: *const u16,
    target_size: u32,
    result: *mut u16,
    result_size: u32,
    kind: u32,
    convert_target: u32,
) -> u32 {
    let mut written = 0u32;
    match kana_convert_for_utf16(
        target,
        target_size,
        result,
        result_size,
        kind,
        convert_target,
        &mut written,
    ) {
        KANA_OK => written,
        _ => KANA_CONVERT_FAILED,
    }
}

macro_rules! utf16_entry {
    ($name:ident, $kind:expr) => {
        #[no_mangle]
        pub extern "C" fn $name(
            target: *const u16,
            target_size: u32,
            result: *mut u16,
            result_size: u32,
        ) -> u32 {
            single_step_utf16(target, target_size, result, result_size, $kind, 0)
        }
    };
    (with_target $name:ident, $kind:expr) => {
        #[no_mangle]
        pub extern "C" fn $name(
            target: *const u16,
            target_size: u32,
            result: *mut u16,
            result_size: u32,
            convert_target: u32,
        ) -> u32 {
            single_step_utf16(target, target_size, result, result_size, $kind, convert_target)
        }
    };
}

utf16_entry!(to_upper_case_for_utf16, KANA_KIND_UPPER_CASE);
utf16_entry!(to_lower_case_for_utf16, KANA_KIND_LOWER_CASE);
utf16_entry!(to_hiragana_for_utf16, KANA_KIND_HIRAGANA);
utf16_entry!(to_katakana_for_utf16, KANA_KIND_KATAKANA);
utf16_entry!(with_target to_wide_for_utf16, KANA_KIND_WIDE);
utf16_entry!(with_target to_narrow_for_utf16, KANA_KIND_NARROW);
