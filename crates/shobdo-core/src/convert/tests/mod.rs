
use super::*;

#[test]
fn test_empty_input() {
    assert_eq!(visual_to_logical(""), "");
    assert_eq!(logical_to_visual(""), "");
}

#[test]
fn test_known_sentence_both_ways() {
    let legacy = "Avwg evsjvq K_v ej‡Z cvwi";
    let unicode = "আমি বাংলা\u{09AF}\u{09BC} কথা বলতে পারি";
    assert_eq!(visual_to_logical(legacy), unicode);
    assert_eq!(logical_to_visual(unicode), legacy);
}

#[test]
fn test_round_trip_through_canonical_glyphs() {
    for legacy in ["Avgvi ‡mvbvi evsjv", "‡Kv‡bv", "Kg©x", "evsjv‡`k", "kw³"] {
        assert_eq!(logical_to_visual(&visual_to_logical(legacy)), legacy);
    }
}

/// The legacy→Unicode table folds several glyph variants onto one Unicode
/// sequence; the reverse table picks one canonical glyph. Going through
/// Unicode therefore normalises the legacy spelling. This is expected.
#[test]
fn test_known_asymmetry_is_not_a_round_trip() {
    // Alternate ta-conjunct glyph for ন্ত
    assert_eq!(visual_to_logical("šÍ"), "ন্ত");
    assert_eq!(logical_to_visual("ন্ত"), "š—");

    // Alternate ra-phala glyph
    assert_eq!(visual_to_logical("cÖ"), "প্র");
    assert_eq!(logical_to_visual("প্র"), "c«");

    // Alternate u-kar glyph
    assert_eq!(visual_to_logical("Kz"), "কু");
    assert_eq!(logical_to_visual("কু"), "Ky");

    for legacy in ["šÍ", "cÖ", "Kz"] {
        assert_ne!(logical_to_visual(&visual_to_logical(legacy)), legacy);
    }
}
