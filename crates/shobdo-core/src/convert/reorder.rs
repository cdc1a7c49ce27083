//! Visual → logical reordering of legacy glyph tokens.
//!
//! Legacy text draws pre-kars before their consonant, the reph after the
//! cluster it belongs to, and chandrabindu before a following vowel sign.
//! Each pass collects its indices up front and then swaps neighbours; any
//! swap that would reach past either end of the sequence is skipped.

use crate::glyph_map::GlyphToken;

pub(super) fn visual_to_logical_order(tokens: &mut [GlyphToken<'_>]) {
    move_pre_kars(tokens);
    move_refs(tokens);
    move_chandrabindus(tokens);
}

/// A pre-kar moves behind its consonant, and behind any reph or fola
/// attached to that consonant.
fn move_pre_kars(tokens: &mut [GlyphToken<'_>]) {
    let positions: Vec<usize> = positions_of(tokens, |t| t.is_pre_kar());
    let len = tokens.len();
    for p in positions {
        if !tokens[p].is_pre_kar() || p + 1 >= len {
            continue;
        }
        if is_ref_or_fola(&tokens[p + 1]) && p + 2 < len {
            tokens.swap(p + 1, p + 2);
        }
        tokens.swap(p, p + 1);
        let q = p + 1;
        if q + 1 < len && is_ref_or_fola(&tokens[q + 1]) {
            tokens.swap(q, q + 1);
        }
    }
}

/// A reph moves in front of the consonant it follows, and in front of a
/// vowel sign or fola drawn between them.
fn move_refs(tokens: &mut [GlyphToken<'_>]) {
    let positions: Vec<usize> = positions_of(tokens, |t| t.is_ref());
    for r in positions {
        if r == 0 {
            continue;
        }
        tokens.swap(r - 1, r);
        let displaced = &tokens[r];
        if r >= 2 && (displaced.is_kar() || displaced.is_fola()) {
            tokens.swap(r - 2, r - 1);
        }
    }
}

/// Chandrabindu goes after a vowel sign that follows it.
fn move_chandrabindus(tokens: &mut [GlyphToken<'_>]) {
    let positions: Vec<usize> = positions_of(tokens, |t| t.is_chandrabindu());
    for c in positions {
        if tokens.get(c + 1).is_some_and(|t| t.is_kar()) {
            tokens.swap(c, c + 1);
        }
    }
}

fn is_ref_or_fola(token: &GlyphToken<'_>) -> bool {
    token.is_ref() || token.is_fola()
}

fn positions_of(tokens: &[GlyphToken<'_>], pred: impl Fn(&GlyphToken<'_>) -> bool) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| pred(t))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph_map::GlyphMatcher;

    fn reordered(legacy: &str) -> Vec<String> {
        let matcher = GlyphMatcher::legacy_to_unicode();
        let mut tokens = matcher.tokenize(legacy);
        visual_to_logical_order(&mut tokens);
        tokens.iter().map(|t| t.source.to_string()).collect()
    }

    #[test]
    fn pre_kar_moves_behind_consonant() {
        assert_eq!(reordered("wg"), vec!["g", "w"]);
        assert_eq!(reordered("Avwg"), vec!["Av", "g", "w"]);
    }

    #[test]
    fn pre_kar_moves_behind_fola() {
        // ‡ c Ö → c Ö ‡ (প্রে)
        assert_eq!(reordered("‡cÖ"), vec!["c", "Ö", "‡"]);
    }

    #[test]
    fn pre_kar_and_ref() {
        // ‡ K © v → © K ‡ v (র্কো)
        assert_eq!(reordered("‡K©v"), vec!["©", "K", "‡", "v"]);
    }

    #[test]
    fn ref_moves_before_consonant_and_kar() {
        assert_eq!(reordered("K©"), vec!["©", "K"]);
        assert_eq!(reordered("Kv©"), vec!["©", "K", "v"]);
    }

    #[test]
    fn chandrabindu_moves_after_kar() {
        assert_eq!(reordered("Puv`"), vec!["P", "v", "u", "`"]);
        assert_eq!(reordered("Pvu`"), vec!["P", "v", "u", "`"]);
    }

    #[test]
    fn dangling_marks_at_edges() {
        assert_eq!(reordered("w"), vec!["w"]);
        assert_eq!(reordered("©"), vec!["©"]);
        assert_eq!(reordered("u"), vec!["u"]);
        assert_eq!(reordered("‡©"), vec!["©", "‡"]);
    }
}
