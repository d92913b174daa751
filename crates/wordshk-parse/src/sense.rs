use wordshk_types::Sense;

use crate::error::Result;
use crate::lang::parse_language_block;

/// Marker line opening the explanation of a sense.
pub const EXPLANATION_MARKER: &str = "<explanation>";
/// Marker line opening each worked example.
pub const EXAMPLE_MARKER: &str = "<eg>";
/// Line separating senses.
pub const SENSE_DELIMITER: &str = "----";

/// Parse a tag-stripped body into senses.
pub fn parse_senses(body: &str) -> Result<Vec<Sense>> {
    split_on_line(body, SENSE_DELIMITER)
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .map(parse_sense)
        .collect()
}

/// Parse one sense block: explanation first, then one block per `<eg>`.
pub fn parse_sense(block: &str) -> Result<Sense> {
    let block = strip_explanation_marker(block);
    let mut parts = split_on_line(block, EXAMPLE_MARKER).into_iter();
    let explanation = parse_language_block(parts.next().unwrap_or_default())?;
    let examples = parts.map(parse_language_block).collect::<Result<Vec<_>>>()?;
    Ok(Sense {
        explanation,
        examples,
    })
}

fn strip_explanation_marker(block: &str) -> &str {
    let trimmed = block.trim_start();
    match trimmed.split_once('\n') {
        Some((first, rest)) if first.trim() == EXPLANATION_MARKER => rest,
        None if trimmed.trim() == EXPLANATION_MARKER => "",
        _ => block,
    }
}

/// Split `text` on lines equal to `delimiter` (surrounding whitespace ignored).
fn split_on_line<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim() == delimiter {
            parts.push(&text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    parts.push(&text[start..]);
    parts
}
