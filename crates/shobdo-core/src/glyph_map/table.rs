pub(super) const DEFAULT_LEGACY_TO_UNICODE_TOML: &str =
    include_str!("default_legacy_to_unicode.toml");

pub(super) const DEFAULT_UNICODE_TO_LEGACY_TOML: &str =
    include_str!("default_unicode_to_legacy.toml");
