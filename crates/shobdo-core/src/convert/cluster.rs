//! Segmentation of Unicode Bengali into orthographic clusters (aksharas) and
//! per-cluster reordering into the legacy visual order.

use crate::classify::{self, CharacterClass, HASANT, NUKTA, RA};

/// One akshara: a consonant core, an optional hasant chain and an optional
/// vowel sign. Anything else is a one-character cluster.
pub type Cluster = Vec<char>;

/// Recompose consonant + nukta into the precomposed ড় ঢ় য়, which is how
/// the glyph table spells them.
///
/// Compacts in place with a trailing write index, so the cost is linear in
/// the length of `chars`.
pub fn recompose_nukta(chars: &mut Vec<char>) {
    let mut write = 0;
    let mut read = 0;
    while read < chars.len() {
        let c = chars[read];
        let composed = match chars.get(read + 1) {
            Some(&NUKTA) => nukta_form(c),
            _ => None,
        };
        match composed {
            Some(composed) => {
                chars[write] = composed;
                read += 2;
            }
            None => {
                chars[write] = c;
                read += 1;
            }
        }
        write += 1;
    }
    chars.truncate(write);
}

fn nukta_form(c: char) -> Option<char> {
    match c {
        '\u{09A1}' => Some('\u{09DC}'),
        '\u{09A2}' => Some('\u{09DD}'),
        '\u{09AF}' => Some('\u{09DF}'),
        _ => None,
    }
}

/// Split `chars` into clusters with a single left-to-right scan.
///
/// Rules, in priority order at each position:
/// 1. a consonant followed by hasant opens a conjunct chain (so does a bare
///    hasant);
/// 2. a letter followed by another letter stands alone;
/// 3. a consonant followed by a vowel sign takes it;
/// 4. anything else stands alone.
pub fn make_clusters(chars: &[char]) -> Vec<Cluster> {
    let at = |i: usize| chars.get(i).copied();
    let mut clusters = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = at(i + 1);

        if classify::is_consonant(c) && next.is_some_and(classify::is_hasant) {
            let (cluster, end) = conjunct(chars, i, i + 1);
            clusters.push(cluster);
            i = end;
        } else if classify::is_hasant(c) {
            let (cluster, end) = conjunct(chars, i, i);
            clusters.push(cluster);
            i = end;
        } else if classify::is_letter(c) && next.is_some_and(classify::is_letter) {
            clusters.push(vec![c]);
            i += 1;
        } else if classify::is_consonant(c) && next.is_some_and(classify::is_kar) {
            clusters.push(vec![c, chars[i + 1]]);
            i += 2;
        } else {
            clusters.push(vec![c]);
            i += 1;
        }
    }
    clusters
}

/// Consume a conjunct starting at `start` whose first hasant is at `hasant`.
///
/// The chain extends two characters at a time while the character two
/// positions ahead is again a hasant; a position past the end reads as no
/// character and stops it. A trailing consonant and then a vowel sign are
/// taken if present. Returns the cluster and the index after it.
fn conjunct(chars: &[char], start: usize, hasant: usize) -> (Cluster, usize) {
    let class_at = |i: usize| CharacterClass::of(chars.get(i).copied());

    let mut last_hasant = hasant;
    while class_at(last_hasant + 2) == CharacterClass::Hasant {
        last_hasant += 2;
    }

    let mut cluster: Cluster = chars[start..=last_hasant].to_vec();
    let mut end = last_hasant + 1;
    if chars.get(end).is_some_and(|&c| classify::is_consonant(c)) {
        cluster.push(chars[end]);
        end += 1;
    }
    if class_at(end).is_kar() {
        cluster.push(chars[end]);
        end += 1;
    }
    (cluster, end)
}

/// Reorder one cluster from logical into legacy visual order.
///
/// - a trailing pre-kar moves to the front;
/// - a trailing mid-kar splits into "ে" at the front and its post component
///   at the end;
/// - a leading "র" + hasant (reph) moves to the tail: just before the vowel
///   sign if the cluster ends in a post-kar or split mid-kar, else to the end.
pub fn reorder_cluster(cluster: &mut Cluster) {
    let Some(&last) = cluster.last() else {
        return;
    };

    let mut has_post_component = false;
    if classify::is_pre_kar(last) {
        cluster.rotate_right(1);
    } else if classify::is_post_kar(last) {
        has_post_component = true;
    } else if let Some((pre, post)) = classify::mid_kar_parts(last) {
        cluster.pop();
        cluster.insert(0, pre);
        cluster.push(post);
        has_post_component = true;
    }

    if let Some(ra) = reph_position(cluster) {
        let pair: Vec<char> = cluster.drain(ra..ra + 2).collect();
        let at = if has_post_component {
            cluster.len().saturating_sub(1)
        } else {
            cluster.len()
        };
        cluster.splice(at..at, pair);
    }
}

/// Index of the first "র" followed by hasant where the "র" is not itself
/// the second member of a conjunct.
///
/// A "র" preceded by hasant is a subjoined ra-phala, so "ক্র্য" keeps its
/// conjunct and is not given a reph. Only one pair moves per cluster.
fn reph_position(cluster: &[char]) -> Option<usize> {
    (0..cluster.len().saturating_sub(1)).find(|&i| {
        cluster[i] == RA
            && cluster[i + 1] == HASANT
            && (i == 0 || cluster[i - 1] != HASANT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(s: &str) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        make_clusters(&chars)
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect()
    }

    fn reordered(s: &str) -> String {
        let mut cluster: Cluster = s.chars().collect();
        reorder_cluster(&mut cluster);
        cluster.into_iter().collect()
    }

    #[test]
    fn letters_stand_alone() {
        assert_eq!(clusters("কলম"), vec!["ক", "ল", "ম"]);
        assert_eq!(clusters("আম"), vec!["আ", "ম"]);
    }

    #[test]
    fn consonant_takes_vowel_sign() {
        assert_eq!(clusters("আমি"), vec!["আ", "মি"]);
        assert_eq!(clusters("বাতাসে"), vec!["বা", "তা", "সে"]);
    }

    #[test]
    fn conjunct_chain() {
        assert_eq!(clusters("অন্ত"), vec!["অ", "ন্ত"]);
        assert_eq!(clusters("শক্তি"), vec!["শ", "ক্তি"]);
        assert_eq!(clusters("ন্ত্র"), vec!["ন্ত্র"]);
        assert_eq!(clusters("গর্ব"), vec!["গ", "র্ব"]);
        assert_eq!(clusters("ক্ষমা"), vec!["ক্ষ", "মা"]);
    }

    #[test]
    fn trailing_hasant_keeps_consonant() {
        assert_eq!(clusters("ক্"), vec!["ক্"]);
    }

    #[test]
    fn hasant_directly_followed_by_kar() {
        assert_eq!(clusters("ক্া"), vec!["ক্া"]);
    }

    #[test]
    fn text_after_space_is_kept() {
        assert_eq!(clusters("আমি বাংলা"), vec!["আ", "মি", " ", "বা", "ং", "লা"]);
    }

    #[test]
    fn nukta_recomposition() {
        let mut chars: Vec<char> = "য\u{09BC}ড\u{09BC}ক\u{09BC}".chars().collect();
        recompose_nukta(&mut chars);
        assert_eq!(chars, vec!['\u{09DF}', '\u{09DC}', 'ক', '\u{09BC}']);
        assert_eq!(clusters("\u{09AC}\u{09BE}\u{09DF}"), vec!["বা", "\u{09DF}"]);
    }

    #[test]
    fn nukta_recomposition_edges() {
        let mut chars: Vec<char> = "\u{09BC}য\u{09BC}\u{09BC}য".chars().collect();
        recompose_nukta(&mut chars);
        assert_eq!(chars, vec!['\u{09BC}', '\u{09DF}', '\u{09BC}', 'য']);

        let mut empty: Vec<char> = Vec::new();
        recompose_nukta(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn nukta_recomposition_long_input() {
        let n = 200_000;
        let mut chars: Vec<char> = "য\u{09BC}া".repeat(n).chars().collect();
        recompose_nukta(&mut chars);
        assert_eq!(chars.len(), 2 * n);
        assert!(chars
            .chunks(2)
            .all(|pair| pair == ['\u{09DF}', '\u{09BE}']));
    }

    #[test]
    fn long_hasant_run_terminates() {
        let input = format!("ক{}", "্".repeat(10));
        let out = clusters(&input);
        assert_eq!(out.concat(), input);
        assert_eq!(out, vec![format!("ক{}", "্".repeat(9)), "্".to_string()]);
    }

    #[test]
    fn reorder_pre_kar() {
        assert_eq!(reordered("মি"), "িম");
        assert_eq!(reordered("ক্তি"), "িক্ত");
    }

    #[test]
    fn reorder_mid_kar() {
        assert_eq!(reordered("কো"), "েকা");
        assert_eq!(reordered("কৌ"), "েকৗ");
    }

    #[test]
    fn reorder_reph() {
        assert_eq!(reordered("র্ক"), "কর্");
        assert_eq!(reordered("র্কা"), "কর্া");
        assert_eq!(reordered("র্কি"), "িকর্");
        assert_eq!(reordered("র্কো"), "েকর্া");
    }

    #[test]
    fn ya_phala_after_ra_is_not_a_reph() {
        assert_eq!(reordered("ক্র্য"), "ক্র্য");
    }

    #[test]
    fn reorder_leaves_plain_clusters() {
        assert_eq!(reordered("ক"), "ক");
        assert_eq!(reordered("কা"), "কা");
        assert_eq!(reordered(""), "");
    }
}
