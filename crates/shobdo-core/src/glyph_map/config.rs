use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct GlyphTableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphMapError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key in [mappings]")]
    EmptyKey,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("failed to compile glyph matcher: {0}")]
    Build(String),
    #[error("glyph table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<glyph, replacement>`.
pub fn parse_glyph_toml(toml_str: &str) -> Result<BTreeMap<String, String>, GlyphMapError> {
    let config: GlyphTableConfig =
        toml::from_str(toml_str).map_err(|e| GlyphMapError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(GlyphMapError::Empty);
    }

    for (key, value) in &config.mappings {
        // An empty pattern would match at every position.
        if key.is_empty() {
            return Err(GlyphMapError::EmptyKey);
        }
        if value.is_empty() {
            return Err(GlyphMapError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
