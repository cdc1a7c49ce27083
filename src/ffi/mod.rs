//! C ABI. Every function accepts null pointers and returns null (or an error
//! code) instead of dereferencing them.

use std::ffi::{c_char, CStr};
use std::path::Path;

pub mod convert;


pub use convert::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Bind `$name` to the `&str` behind `$ptr`, returning `$on_err` from the
/// calling function if the pointer is null or not UTF-8.
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text = input,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            tracing::debug!(arg = stringify!($name), "rejected null or non-UTF-8 argument");
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

#[no_mangle]
pub extern "C" fn shobdo_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn shobdo_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
