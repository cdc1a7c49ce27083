use std::fs;
use std::io::{self, Read, Write};

use shobdo_core::{logical_to_visual, visual_to_logical, Direction};

use super::table_ops;

/// Read the text to convert: the TEXT argument, else `--input`, else stdin.
pub fn read_source(text: Option<&str>, input: Option<&str>) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Convert line by line so that reordering never crosses a line break.
/// Line terminators are copied through unchanged.
pub fn convert_lines(text: &str, convert: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for line in text.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        out.push_str(&convert(body));
        out.push_str(&line[body.len()..]);
    }
    out
}

fn write_sink(output: Option<&str>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}

fn run(
    direction: Direction,
    text: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    table: Option<&str>,
) {
    if let Some(path) = table {
        die!(table_ops::install_table(direction, path), "Error: {}");
    }
    let source = die!(read_source(text, input), "Error reading input: {}");
    let converted = match direction {
        Direction::LegacyToUnicode => convert_lines(&source, visual_to_logical),
        Direction::UnicodeToLegacy => convert_lines(&source, logical_to_visual),
    };
    tracing::debug!(
        in_bytes = source.len(),
        out_bytes = converted.len(),
        "converted"
    );
    die!(write_sink(output, &converted), "Error writing output: {}");
}

pub fn to_unicode_cmd(
    text: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    table: Option<&str>,
) {
    run(Direction::LegacyToUnicode, text, input, output, table);
}

pub fn to_legacy_cmd(
    text: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    table: Option<&str>,
) {
    run(Direction::UnicodeToLegacy, text, input, output, table);
}
