//! FFI layer – the C ABI the .NET and JVM bindings load.
//!
//! `convert` holds the buffer-in/buffer-out string entry points; `chars`
//! holds the single-codepoint helpers behind the bindings' utility classes.
//! Shared pointer helpers and the guard macro live here.

use std::ffi::{c_char, CStr};
use std::path::Path;
use std::slice;

pub mod chars;
pub mod convert;

#[cfg(test)]
mod tests;

pub use chars::*;
pub use convert::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Borrow `len` elements at `ptr`. A null pointer is accepted only for an
/// empty slice.
pub(crate) unsafe fn raw_slice<'a, T>(ptr: *const T, len: u32) -> Option<&'a [T]> {
    if len == 0 {
        return Some(Default::default());
    }
    if ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts(ptr, len as usize))
}

pub(crate) unsafe fn raw_slice_mut<'a, T>(ptr: *mut T, len: u32) -> Option<&'a mut [T]> {
    if len == 0 {
        return Some(Default::default());
    }
    if ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts_mut(ptr, len as usize))
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macros (crate-internal)
// ---------------------------------------------------------------------------

/// Validate FFI arguments and bind them as safe Rust values, returning
/// `$on_err` from the **calling** function if any check fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`], bind as `$name`. |
/// | `slice: $name = ($ptr, $len)` | Borrow `$len` units at `$ptr` as `&[T]`. |
/// | `slice_mut: $name = ($ptr, $len)` | Borrow `$len` units at `$ptr` as `&mut [T]`. |
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; slice: $name:ident = ($ptr:expr, $len:expr) , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::raw_slice($ptr, $len) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; slice_mut: $name:ident = ($ptr:expr, $len:expr) , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::raw_slice_mut($ptr, $len) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Install the JSONL trace subscriber (no-op unless built with `trace`).
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn kana_init_tracing(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}

/// Load a settings TOML file. Must be called before the first conversion
/// that uses a preset.
#[no_mangle]
pub extern "C" fn kana_settings_load_config(path: *const c_char) -> i32 {
    ffi_guard!(KANA_ERR_NULL;
        str: path_str = path,
    );
    let content = match std::fs::read_to_string(path_str) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("settings read failed: {path_str}: {e}");
            return KANA_ERR_CONFIG;
        }
    };
    match kana_core::settings::init_custom(content) {
        Ok(()) => KANA_OK,
        Err(e) => {
            tracing::debug!("settings rejected: {e}");
            KANA_ERR_CONFIG
        }
    }
}
