use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use shobdo_core::CharacterClass;

/// Dotted circle, the conventional base for showing a mark on its own.
const MARK_BASE: char = '\u{25CC}';

#[derive(Debug, Serialize)]
pub struct CharInfo {
    #[serde(rename = "char")]
    pub ch: char,
    pub code_point: String,
    pub class: CharacterClass,
}

pub fn classify_chars(text: &str) -> Vec<CharInfo> {
    text.chars()
        .map(|ch| CharInfo {
            ch,
            code_point: format!("U+{:04X}", ch as u32),
            class: CharacterClass::of(Some(ch)),
        })
        .collect()
}

/// Render one row per character with the glyph column padded to a fixed
/// display width. Zero-width marks are shown on a dotted circle.
pub fn format_table(rows: &[CharInfo]) -> String {
    let pad_width = 4;
    let mut out = String::new();
    for row in rows {
        let mut glyph = row.ch.to_string();
        if UnicodeWidthStr::width(glyph.as_str()) == 0 {
            glyph = format!("{MARK_BASE}{}", row.ch);
        }
        if row.ch.is_control() {
            glyph = format!("{:?}", row.ch).trim_matches('\'').to_string();
        }
        let display_width = UnicodeWidthStr::width(glyph.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", glyph, " ".repeat(pad_width - display_width))
        } else {
            glyph
        };
        out.push_str(&format!("{padded} {:<8} {:?}\n", row.code_point, row.class));
    }
    out
}

pub fn classify_cmd(text: &str, json: bool) {
    let rows = classify_chars(text);
    if json {
        let s = die!(serde_json::to_string_pretty(&rows), "Error serializing: {}");
        println!("{s}");
    } else {
        print!("{}", format_table(&rows));
    }
}
