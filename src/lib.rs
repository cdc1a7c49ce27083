// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Bijoy ↔ Unicode Bengali transliteration engine.
//!
//! Rust callers use the re-exported [`shobdo_core`] API; C callers link the
//! static or dynamic library and use the `shobdo_*` symbols in [`ffi`].

pub mod ffi;
mod trace_init;

pub use shobdo_core::{
    classify, convert, glyph_map, logical_to_visual, visual_to_logical, CharacterClass,
    Direction, GlyphMapError, GlyphMatcher,
};
pub use trace_init::init_tracing;
