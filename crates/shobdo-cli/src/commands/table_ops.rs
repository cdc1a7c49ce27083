use std::fs;
use std::io;

use shobdo_core::glyph_map::{self, parse_glyph_toml};
use shobdo_core::{Direction, GlyphMapError, GlyphMatcher};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Table(#[from] GlyphMapError),
}

/// Read a table file and check that it parses and compiles.
pub fn load_table(path: &str) -> Result<String, TableError> {
    let content = fs::read_to_string(path).map_err(|source| TableError::Read {
        path: path.to_string(),
        source,
    })?;
    GlyphMatcher::from_toml(&content)?;
    Ok(content)
}

/// Make the table at `path` the one used for `direction` in this process.
pub fn install_table(direction: Direction, path: &str) -> Result<(), TableError> {
    let content = load_table(path)?;
    GlyphMatcher::init_custom(direction, content)?;
    tracing::info!(?direction, path, "custom glyph table installed");
    Ok(())
}

pub fn table_export(direction: Direction) {
    print!("{}", glyph_map::default_toml(direction));
}

pub fn table_validate(file: &str) {
    let content = die!(load_table(file), "Error: {}");
    let map = die!(parse_glyph_toml(&content), "Error: {}");
    let longest = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    println!("OK: {} mappings, longest key {} chars", map.len(), longest);
}
