//! Conversion between legacy visual-order glyph text and logical-order
//! Unicode Bengali.
//!
//! Both directions are total: unmapped input passes through unchanged and
//! no input is rejected. The two converters are independent; neither calls
//! the other, and round trips are not guaranteed to be the identity (the
//! legacy→Unicode table folds several glyph variants onto one sequence).

mod cluster;
mod reorder;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::classify::{AA_KAR, AU_KAR, AU_LENGTH_MARK, O_KAR};
use crate::glyph_map::GlyphMatcher;

pub use cluster::{make_clusters, recompose_nukta, reorder_cluster, Cluster};

/// Convert legacy glyph text (visual order) to Unicode Bengali.
pub fn visual_to_logical(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("visual_to_logical", len = text.len()).entered();

    let matcher = GlyphMatcher::legacy_to_unicode();
    let mut tokens = matcher.tokenize(text);
    debug!(tokens = tokens.len(), "tokenized");
    reorder::visual_to_logical_order(&mut tokens);

    let mut out = String::with_capacity(text.len() * 3);
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.is_pre_kar() {
            // After reordering the pre-kar sits right behind its consonant;
            // followed by aa-kar or the au length mark it is a two-part sign.
            if let Some(next) = tokens.get(i + 1) {
                if next.replaces_with(AU_LENGTH_MARK) {
                    out.push(AU_KAR);
                    i += 2;
                    continue;
                }
                if next.replaces_with(AA_KAR) {
                    out.push(O_KAR);
                    i += 2;
                    continue;
                }
            }
        }
        out.push_str(token.output());
        i += 1;
    }
    out
}

/// Convert Unicode Bengali to legacy glyph text (visual order).
pub fn logical_to_visual(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("logical_to_visual", len = text.len()).entered();

    let matcher = GlyphMatcher::unicode_to_legacy();
    let mut chars: Vec<char> = text.chars().collect();
    recompose_nukta(&mut chars);
    let clusters = make_clusters(&chars);
    debug!(clusters = clusters.len(), "segmented");

    let mut out = String::with_capacity(text.len());
    let mut buf = String::new();
    for mut cluster in clusters {
        reorder_cluster(&mut cluster);
        buf.clear();
        buf.extend(cluster.iter());
        out.push_str(&matcher.substitute(&buf));
    }
    out
}
