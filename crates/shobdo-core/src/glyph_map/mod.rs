//! Legacy ↔ Unicode glyph tables.
//!
//! Each direction is a hand-authored TOML table compiled once into a
//! leftmost-longest multi-pattern matcher. A custom table may replace the
//! default before first use (font variants of the legacy encoding); after
//! that the tables are immutable for the lifetime of the process.

mod config;
mod matcher;
mod table;

pub use config::{parse_glyph_toml, GlyphMapError};
pub use matcher::{GlyphMatcher, GlyphToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LegacyToUnicode,
    UnicodeToLegacy,
}

impl Direction {
    pub fn default_toml(self) -> &'static str {
        match self {
            Direction::LegacyToUnicode => table::DEFAULT_LEGACY_TO_UNICODE_TOML,
            Direction::UnicodeToLegacy => table::DEFAULT_UNICODE_TO_LEGACY_TOML,
        }
    }
}

/// Returns the embedded default table TOML for `direction`.
pub fn default_toml(direction: Direction) -> &'static str {
    direction.default_toml()
}
