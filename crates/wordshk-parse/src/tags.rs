use wordshk_types::Tag;

use crate::error::{ParseError, Result};

/// Literal that must open the first line of every entry body.
pub const POS_MARKER: &str = "(pos:";

/// Split off the tag line without touching the caller's lines.
///
/// Returns the first line and the remaining lines. Fails on an empty body or
/// when the first line does not start with [`POS_MARKER`].
pub fn split_tag_line<'a, 'b>(lines: &'b [&'a str]) -> Result<(&'a str, &'b [&'a str])> {
    let (&first, rest) = lines.split_first().ok_or(ParseError::EmptyBody)?;
    let first = first.trim();
    if !first.starts_with(POS_MARKER) {
        return Err(ParseError::MissingPosMarker(first.to_string()));
    }
    Ok((first, rest))
}

/// Parse `(name:value)(name:value)...` into tags, keeping their order.
pub fn parse_tags(line: &str) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    for fragment in line.trim().split(")(") {
        let fragment = fragment.trim_matches(|c| c == '(' || c == ')').trim();
        if fragment.is_empty() {
            continue;
        }
        let (name, value) = fragment
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedTag(fragment.to_string()))?;
        tags.push(Tag {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        });
    }
    if tags.is_empty() {
        return Err(ParseError::EmptyTagBlock(line.to_string()));
    }
    Ok(tags)
}
