use std::ffi::{c_char, c_int, CString};
use std::ptr;

use shobdo_core::{logical_to_visual, visual_to_logical, Direction, GlyphMatcher};

use super::ffi_guard;

/// Hand a Rust string to C. Strings with an interior NUL cannot be
/// represented and come back as null.
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Convert legacy glyph text to Unicode Bengali. Free the result with
/// [`shobdo_string_free`].
#[no_mangle]
pub extern "C" fn shobdo_visual_to_logical(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = text,
    );
    into_c_string(visual_to_logical(text))
}

/// Convert Unicode Bengali to legacy glyph text. Free the result with
/// [`shobdo_string_free`].
#[no_mangle]
pub extern "C" fn shobdo_logical_to_visual(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = text,
    );
    into_c_string(logical_to_visual(text))
}

#[no_mangle]
pub extern "C" fn shobdo_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

/// Install a custom glyph table before the first conversion in that
/// direction. `direction`: 0 = legacy→Unicode, 1 = Unicode→legacy.
///
/// Returns 0 on success and -1 on a bad argument, an invalid table, or a
/// table that is already in use.
#[no_mangle]
pub extern "C" fn shobdo_table_init_custom(direction: u8, toml: *const c_char) -> c_int {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    let direction = match direction {
        0 => Direction::LegacyToUnicode,
        1 => Direction::UnicodeToLegacy,
        _ => return -1,
    };
    match GlyphMatcher::init_custom(direction, toml_str.to_owned()) {
        Ok(()) => 0,
        Err(e) => {
            tracing::warn!(?direction, error = %e, "custom glyph table rejected");
            -1
        }
    }
}
