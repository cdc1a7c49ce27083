//! Character-level classification for Bengali text.
//!
//! The predicates follow the conventions of the legacy typesetting model,
//! not the Unicode general categories: anusvara, visarga and chandrabindu are
//! members of the consonant list because they cluster like consonants.

use serde::Serialize;

pub const HASANT: char = '\u{09CD}';
pub const NUKTA: char = '\u{09BC}';
pub const CHANDRABINDU: char = '\u{0981}';
/// "র", the consonant that becomes a reph when followed by hasant.
pub const RA: char = '\u{09B0}';
pub const E_KAR: char = '\u{09C7}';
pub const AA_KAR: char = '\u{09BE}';
pub const O_KAR: char = '\u{09CB}';
pub const AU_KAR: char = '\u{09CC}';
/// Au length mark, the trailing half of "ৌ".
pub const AU_LENGTH_MARK: char = '\u{09D7}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterClass {
    Digit,
    IndependentVowel,
    Consonant,
    PreKar,
    PostKar,
    MidKar,
    Hasant,
    Chandrabindu,
    Nukta,
    Space,
    Other,
}

impl CharacterClass {
    /// Classify an optional character. `None` (a position past the end of the
    /// text) is `Other`.
    pub fn of(c: Option<char>) -> Self {
        let Some(c) = c else {
            return CharacterClass::Other;
        };
        if is_chandrabindu(c) {
            CharacterClass::Chandrabindu
        } else if is_consonant(c) {
            CharacterClass::Consonant
        } else if is_independent_vowel(c) {
            CharacterClass::IndependentVowel
        } else if is_pre_kar(c) {
            CharacterClass::PreKar
        } else if is_post_kar(c) {
            CharacterClass::PostKar
        } else if is_mid_kar(c) {
            CharacterClass::MidKar
        } else if is_hasant(c) {
            CharacterClass::Hasant
        } else if is_nukta(c) {
            CharacterClass::Nukta
        } else if is_digit(c) {
            CharacterClass::Digit
        } else if is_space(c) {
            CharacterClass::Space
        } else {
            CharacterClass::Other
        }
    }

    pub fn is_kar(self) -> bool {
        matches!(
            self,
            CharacterClass::PreKar | CharacterClass::PostKar | CharacterClass::MidKar
        )
    }
}

pub fn is_digit(c: char) -> bool {
    ('\u{09E6}'..='\u{09EF}').contains(&c)
}

/// অ..ঌ plus এ, ঐ, ও, ঔ.
pub fn is_independent_vowel(c: char) -> bool {
    ('\u{0985}'..='\u{098C}').contains(&c) || matches!(c, 'এ' | 'ঐ' | 'ও' | 'ঔ')
}

/// ক..ন, প..র, ল, শ..হ, the nukta-bearing ড় ঢ় য়, khanda ta, and the three
/// nasal/aspiration signs ং ঃ ঁ.
pub fn is_consonant(c: char) -> bool {
    ('\u{0995}'..='\u{09A8}').contains(&c)
        || ('\u{09AA}'..='\u{09B0}').contains(&c)
        || c == 'ল'
        || ('\u{09B6}'..='\u{09B9}').contains(&c)
        || matches!(
            c,
            '\u{09DC}' | '\u{09DD}' | '\u{09DF}' | 'ৎ' | 'ং' | 'ঃ' | CHANDRABINDU
        )
}

/// Vowel signs drawn before their consonant: ি, ে, ৈ.
pub fn is_pre_kar(c: char) -> bool {
    matches!(c, 'ি' | 'ে' | 'ৈ')
}

/// Vowel signs drawn after their consonant, including the au length mark.
pub fn is_post_kar(c: char) -> bool {
    matches!(c, 'া' | 'ৗ' | 'ু' | 'ূ' | 'ী' | 'ৃ')
}

/// Two-part vowel signs drawn on both sides of their consonant: ো, ৌ.
pub fn is_mid_kar(c: char) -> bool {
    matches!(c, O_KAR | AU_KAR)
}

pub fn is_kar(c: char) -> bool {
    is_pre_kar(c) || is_post_kar(c) || is_mid_kar(c)
}

pub fn is_hasant(c: char) -> bool {
    c == HASANT
}

pub fn is_chandrabindu(c: char) -> bool {
    c == CHANDRABINDU
}

pub fn is_nukta(c: char) -> bool {
    c == NUKTA
}

pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Consonant or independent vowel: the characters that stand alone as a
/// cluster when another letter follows.
pub fn is_letter(c: char) -> bool {
    is_consonant(c) || is_independent_vowel(c)
}

/// Split a mid-kar into its (pre, post) components.
pub fn mid_kar_parts(c: char) -> Option<(char, char)> {
    match c {
        O_KAR => Some((E_KAR, AA_KAR)),
        AU_KAR => Some((E_KAR, AU_LENGTH_MARK)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_ranges() {
        for c in ['ক', 'ন', 'প', 'র', 'ল', 'শ', 'হ', 'ৎ', 'ং', 'ঃ', 'ঁ'] {
            assert!(is_consonant(c), "{c} should be a consonant");
        }
        // Gaps in the block: U+09A9, U+09B1, U+09B3..B5
        assert!(!is_consonant('\u{09A9}'));
        assert!(!is_consonant('\u{09B1}'));
        assert!(!is_consonant('\u{09B3}'));
        assert!(is_consonant('\u{09DC}'));
        assert!(is_consonant('\u{09DF}'));
        assert!(!is_consonant('অ'));
        assert!(!is_consonant('K'));
    }

    #[test]
    fn test_independent_vowels() {
        for c in ['অ', 'আ', 'ই', 'ঈ', 'উ', 'ঊ', 'ঋ', 'ঌ', 'এ', 'ঐ', 'ও', 'ঔ'] {
            assert!(is_independent_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_independent_vowel('\u{098D}'));
        assert!(!is_independent_vowel('ক'));
    }

    #[test]
    fn test_kar_subtypes() {
        assert!(is_pre_kar('ি') && is_pre_kar('ে') && is_pre_kar('ৈ'));
        assert!(is_post_kar('া') && is_post_kar('ৃ') && is_post_kar('ৗ'));
        assert!(is_mid_kar('ো') && is_mid_kar('ৌ'));
        assert!(!is_pre_kar('া'));
        assert!(!is_post_kar('ো'));
        assert!(is_kar('ী'));
        assert!(!is_kar(HASANT));
    }

    #[test]
    fn test_mid_kar_parts() {
        assert_eq!(mid_kar_parts('ো'), Some(('ে', 'া')));
        assert_eq!(mid_kar_parts('ৌ'), Some(('ে', 'ৗ')));
        assert_eq!(mid_kar_parts('া'), None);
    }

    #[test]
    fn test_class_of() {
        assert_eq!(CharacterClass::of(None), CharacterClass::Other);
        assert_eq!(CharacterClass::of(Some('৭')), CharacterClass::Digit);
        assert_eq!(CharacterClass::of(Some('ক')), CharacterClass::Consonant);
        assert_eq!(CharacterClass::of(Some('আ')), CharacterClass::IndependentVowel);
        assert_eq!(CharacterClass::of(Some('ি')), CharacterClass::PreKar);
        assert_eq!(CharacterClass::of(Some('া')), CharacterClass::PostKar);
        assert_eq!(CharacterClass::of(Some('ৌ')), CharacterClass::MidKar);
        assert_eq!(CharacterClass::of(Some('্')), CharacterClass::Hasant);
        assert_eq!(CharacterClass::of(Some('়')), CharacterClass::Nukta);
        assert_eq!(CharacterClass::of(Some('\t')), CharacterClass::Space);
        assert_eq!(CharacterClass::of(Some('x')), CharacterClass::Other);
        // Chandrabindu is also in the consonant list; the specific class wins.
        assert_eq!(CharacterClass::of(Some('ঁ')), CharacterClass::Chandrabindu);
    }
}
