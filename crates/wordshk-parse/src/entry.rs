use wordshk_types::{DictionaryEntry, Headword};

use crate::error::{ParseError, Result};
use crate::sense::parse_senses;
use crate::tags::{parse_tags, split_tag_line};

/// Parse the headword field: `text:reading[:reading...]` groups separated by `,`.
///
/// ```rust
/// let hws = wordshk_parse::parse_headwords("飲茶:jam2 caa4").unwrap();
/// assert_eq!(hws[0].text, "飲茶");
/// assert_eq!(hws[0].readings, vec!["jam2 caa4"]);
/// ```
pub fn parse_headwords(field: &str) -> Result<Vec<Headword>> {
    if field.trim().is_empty() {
        return Err(malformed(field, "empty headword field"));
    }
    field.split(',').map(parse_headword).collect()
}

fn parse_headword(group: &str) -> Result<Headword> {
    let mut parts = group.split(':');
    let text = parts.next().unwrap_or_default().trim();
    if text.is_empty() {
        return Err(malformed(group, "missing text"));
    }
    let readings = parts
        .map(|reading| {
            let reading = reading.trim();
            if reading.is_empty() {
                Err(malformed(group, "empty reading"))
            } else {
                Ok(reading.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;
    if readings.is_empty() {
        return Err(malformed(group, "missing reading"));
    }
    Ok(Headword {
        text: text.to_string(),
        readings,
    })
}

fn malformed(group: &str, reason: &'static str) -> ParseError {
    ParseError::MalformedHeadword {
        group: group.to_string(),
        reason,
    }
}

/// Validate a row id: a positive integer.
pub fn parse_id(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ParseError::InvalidId(raw.to_string())),
    }
}

/// Assemble one complete entry from a row's id, headword and body fields.
///
/// Fails on the first structural error; nothing partial is returned.
pub fn parse_entry(id: &str, headword: &str, body: &str) -> Result<DictionaryEntry> {
    let id = parse_id(id)?;
    let headwords = parse_headwords(headword)?;

    let lines: Vec<&str> = body
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let (tag_line, rest) = split_tag_line(&lines)?;
    let tags = parse_tags(tag_line)?;
    let senses = parse_senses(&rest.join("\n"))?;

    Ok(DictionaryEntry {
        id,
        headwords,
        tags,
        senses,
    })
}
