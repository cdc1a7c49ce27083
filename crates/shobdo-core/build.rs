const TABLES: &[(&str, &str)] = &[
    (
        "src/glyph_map/default_legacy_to_unicode.toml",
        include_str!("src/glyph_map/default_legacy_to_unicode.toml"),
    ),
    (
        "src/glyph_map/default_unicode_to_legacy.toml",
        include_str!("src/glyph_map/default_unicode_to_legacy.toml"),
    ),
];

fn main() {
    for (path, content) in TABLES {
        println!("cargo:rerun-if-changed={path}");
        check_glyph_table(path, content);
    }
}

/// An embedded table must be valid TOML with a non-empty `[mappings]` table
/// of non-empty string keys and values.
fn check_glyph_table(path: &str, content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    let Some(mappings) = value.get("mappings").and_then(toml::Value::as_table) else {
        panic!("{path} has no [mappings] table");
    };
    if mappings.is_empty() {
        panic!("{path} has an empty [mappings] table");
    }
    for (key, v) in mappings {
        if key.is_empty() || v.as_str().map_or(true, str::is_empty) {
            panic!("{path}: invalid mapping for key {key:?}");
        }
    }
}
