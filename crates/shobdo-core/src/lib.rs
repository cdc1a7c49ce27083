//! Transliteration between the Bijoy legacy glyph encoding (visual order,
//! Windows-1252 code points) and logical-order Unicode Bengali.

pub mod classify;
pub mod convert;
pub mod glyph_map;

pub use classify::CharacterClass;
pub use convert::{logical_to_visual, visual_to_logical};
pub use glyph_map::{Direction, GlyphMapError, GlyphMatcher, GlyphToken};
