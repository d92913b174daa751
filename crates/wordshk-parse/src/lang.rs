use wordshk_types::{Language, LanguageData};

use crate::error::{ParseError, Result};

/// Parse a block of `code:text` lines into per-language segments.
///
/// A line opens a new segment when the text before its first `:` is a
/// three-letter lowercase code; such a code must be a known [`Language`].
/// Any other line continues the open segment, joined with `\n`. Segments are
/// trimmed and empty ones are dropped.
pub fn parse_language_block(block: &str) -> Result<LanguageData> {
    let mut data = LanguageData::new();
    let mut current: Option<(Language, String)> = None;

    for line in block.lines() {
        match language_line(line)? {
            Some((lang, text)) => {
                flush(&mut data, current.take());
                current = Some((lang, text.to_string()));
            }
            None => match current.as_mut() {
                Some((_, buffer)) => {
                    buffer.push('\n');
                    buffer.push_str(line);
                }
                None if line.trim().is_empty() => {}
                None => return Err(ParseError::OrphanText(line.trim().to_string())),
            },
        }
    }
    flush(&mut data, current);
    Ok(data)
}

fn language_line(line: &str) -> Result<Option<(Language, &str)>> {
    let Some((prefix, rest)) = line.split_once(':') else {
        return Ok(None);
    };
    if !is_code_shaped(prefix) {
        return Ok(None);
    }
    match Language::from_code(prefix) {
        Some(lang) => Ok(Some((lang, rest))),
        None => Err(ParseError::UnknownLanguage {
            code: prefix.to_string(),
            line: line.to_string(),
        }),
    }
}

fn is_code_shaped(prefix: &str) -> bool {
    prefix.len() == 3 && prefix.bytes().all(|b| b.is_ascii_lowercase())
}

fn flush(data: &mut LanguageData, segment: Option<(Language, String)>) {
    if let Some((lang, buffer)) = segment {
        let text = buffer.trim();
        if !text.is_empty() {
            data.push(lang, text);
        }
    }
}
