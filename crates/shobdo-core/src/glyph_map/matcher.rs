use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};
use tracing::debug;

use super::config::{parse_glyph_toml, GlyphMapError};
use super::Direction;
use crate::classify::{CharacterClass, HASANT, RA};

static CUSTOM_LEGACY_TO_UNICODE: OnceLock<String> = OnceLock::new();
static CUSTOM_UNICODE_TO_LEGACY: OnceLock<String> = OnceLock::new();

static LEGACY_TO_UNICODE: OnceLock<GlyphMatcher> = OnceLock::new();
static UNICODE_TO_LEGACY: OnceLock<GlyphMatcher> = OnceLock::new();

fn custom_slot(direction: Direction) -> &'static OnceLock<String> {
    match direction {
        Direction::LegacyToUnicode => &CUSTOM_LEGACY_TO_UNICODE,
        Direction::UnicodeToLegacy => &CUSTOM_UNICODE_TO_LEGACY,
    }
}

fn instance_slot(direction: Direction) -> &'static OnceLock<GlyphMatcher> {
    match direction {
        Direction::LegacyToUnicode => &LEGACY_TO_UNICODE,
        Direction::UnicodeToLegacy => &UNICODE_TO_LEGACY,
    }
}

/// A matched span of input, or a single unmatched character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphToken<'a> {
    pub source: &'a str,
    /// `None` for literal pass-through characters.
    pub replacement: Option<&'a str>,
    /// Class of the replacement when it is a single character, else `Other`.
    pub class: CharacterClass,
}

impl<'a> GlyphToken<'a> {
    fn mapped(source: &'a str, replacement: &'a str) -> Self {
        let mut chars = replacement.chars();
        let class = match (chars.next(), chars.next()) {
            (Some(c), None) => CharacterClass::of(Some(c)),
            _ => CharacterClass::Other,
        };
        Self {
            source,
            replacement: Some(replacement),
            class,
        }
    }

    fn literal(source: &'a str) -> Self {
        Self {
            source,
            replacement: None,
            class: CharacterClass::Other,
        }
    }

    /// Text this token contributes to the output.
    pub fn output(&self) -> &'a str {
        self.replacement.unwrap_or(self.source)
    }

    pub fn is_pre_kar(&self) -> bool {
        self.class == CharacterClass::PreKar
    }

    pub fn is_kar(&self) -> bool {
        self.class.is_kar()
    }

    /// A subjoined sign: "্র", "্য", or the vocalic-r sign "ৃ".
    pub fn is_fola(&self) -> bool {
        let Some(r) = self.replacement else {
            return false;
        };
        let mut chars = r.chars();
        match (chars.next(), chars.next()) {
            (Some(HASANT), Some(_)) => true,
            (Some('ৃ'), None) => true,
            _ => false,
        }
    }

    /// "র্" drawn as a reph.
    pub fn is_ref(&self) -> bool {
        let Some(r) = self.replacement else {
            return false;
        };
        let mut chars = r.chars();
        chars.next() == Some(RA) && chars.next() == Some(HASANT) && chars.next().is_none()
    }

    pub fn is_chandrabindu(&self) -> bool {
        self.class == CharacterClass::Chandrabindu
    }

    /// The replacement, when it is exactly the character `c`.
    pub fn replaces_with(&self, c: char) -> bool {
        let Some(r) = self.replacement else {
            return false;
        };
        let mut chars = r.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

/// Leftmost-longest matcher over one glyph table.
pub struct GlyphMatcher {
    automaton: AhoCorasick,
    /// Sorted by key; pattern ids index into this.
    entries: Vec<(String, String)>,
    custom: bool,
}

impl GlyphMatcher {
    /// Compile a matcher from a TOML table.
    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphMapError> {
        let map = parse_glyph_toml(toml_str)?;
        let entries: Vec<(String, String)> = map.into_iter().collect();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(entries.iter().map(|(k, _)| k.as_str()))
            .map_err(|e| GlyphMapError::Build(e.to_string()))?;
        Ok(Self {
            automaton,
            entries,
            custom: false,
        })
    }

    /// Set a custom table for `direction` before its first `global()` call.
    ///
    /// On success the custom matcher is installed immediately. Fails with
    /// `AlreadyInitialized` if a matcher for `direction` was already built
    /// from another table, including by a `global()` call on another thread
    /// while this one runs.
    pub fn init_custom(direction: Direction, toml_content: String) -> Result<(), GlyphMapError> {
        let mut matcher = GlyphMatcher::from_toml(&toml_content)?;
        matcher.custom = true;
        if instance_slot(direction).get().is_some() {
            return Err(GlyphMapError::AlreadyInitialized);
        }
        custom_slot(direction)
            .set(toml_content)
            .map_err(|_| GlyphMapError::AlreadyInitialized)?;
        // Either our matcher lands, or whoever won built it from the custom
        // slot we just filled.
        if instance_slot(direction).set(matcher).is_err() && !Self::global(direction).custom {
            return Err(GlyphMapError::AlreadyInitialized);
        }
        debug!(?direction, "custom glyph table installed");
        Ok(())
    }

    /// Get or initialize the global matcher for `direction`.
    pub fn global(direction: Direction) -> &'static GlyphMatcher {
        instance_slot(direction).get_or_init(|| {
            let custom = custom_slot(direction).get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(direction.default_toml());
            let mut matcher =
                GlyphMatcher::from_toml(toml_str).expect("glyph table TOML must be valid");
            matcher.custom = custom.is_some();
            debug!(?direction, entries = matcher.len(), "glyph table initialized");
            matcher
        })
    }

    pub fn legacy_to_unicode() -> &'static GlyphMatcher {
        Self::global(Direction::LegacyToUnicode)
    }

    pub fn unicode_to_legacy() -> &'static GlyphMatcher {
        Self::global(Direction::UnicodeToLegacy)
    }

    /// Whether this matcher was built from a table given to `init_custom`.
    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|i| self.entries[i].1.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Split `text` into tokens. At each position the longest matching key
    /// wins; characters no key covers become single-character literals.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Vec<GlyphToken<'a>> {
        let mut tokens = Vec::with_capacity(text.len());
        let mut last = 0;
        for m in self.automaton.find_iter(text) {
            push_literals(&mut tokens, &text[last..m.start()]);
            let replacement = self.entries[m.pattern().as_usize()].1.as_str();
            tokens.push(GlyphToken::mapped(&text[m.start()..m.end()], replacement));
            last = m.end();
        }
        push_literals(&mut tokens, &text[last..]);
        tokens
    }

    /// Tokenize and concatenate every token's output.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        for token in self.tokenize(text) {
            out.push_str(token.output());
        }
        out
    }
}

fn push_literals<'a>(tokens: &mut Vec<GlyphToken<'a>>, span: &'a str) {
    for (i, c) in span.char_indices() {
        tokens.push(GlyphToken::literal(&span[i..i + c.len_utf8()]));
    }
}
