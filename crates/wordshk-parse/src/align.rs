//! Text/reading alignment.
//!
//! The text and the Jyutping string are tokenized independently, then walked
//! with two cursors. What happens at each step is decided by [`action_for`],
//! a table keyed by the class of the current text token and the class of the
//! current reading token (or `None` once readings run out).

use wordshk_types::TextReadingPair;

use crate::classify::{CharClass, classify_token};
use crate::error::{ParseError, Result};
use crate::tokenize::tokenize;

/// Step taken for one `(text, reading)` class combination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlignAction {
    /// Consume both tokens and pair them.
    Pair,
    /// Consume the text token only; it gets an empty reading.
    TextOnly,
    /// Consume both; the text token gets an empty reading and the reading
    /// token is dropped.
    SkipBoth,
    Fail,
}

/// The alignment policy.
///
/// An ideograph or syllable facing punctuation or other text in the reading
/// fails instead of pairing with it, so a syllable is never matched to a comma.
pub fn action_for(text: CharClass, reading: Option<CharClass>) -> AlignAction {
    use AlignAction::*;
    use CharClass::*;

    match (text, reading) {
        (_, None) => TextOnly,
        (Ideograph | Reading, Some(Reading | Ideograph)) => Pair,
        (Ideograph | Reading, Some(Punctuation | Other)) => Fail,
        (Punctuation, Some(Punctuation)) => SkipBoth,
        (Punctuation, Some(_)) => TextOnly,
        (Other, Some(Reading)) => TextOnly,
        (Other, Some(_)) => SkipBoth,
    }
}

/// Align `text` against the whitespace-delimited `reading`.
///
/// Every text token appears exactly once in the output, in order. Running out
/// of readings is fine (trailing punctuation has none); readings left over
/// once the text is exhausted are an error.
pub fn align(text: &str, reading: &str) -> Result<Vec<TextReadingPair>> {
    let text_tokens = tokenize(text);
    let reading_tokens = tokenize(reading);

    let mut pairs = Vec::with_capacity(text_tokens.len());
    let mut ti = 0;
    let mut ri = 0;
    let bound = text_tokens.len().max(reading_tokens.len());

    for _ in 0..bound {
        let Some(&token) = text_tokens.get(ti) else {
            break;
        };
        let current_reading = reading_tokens.get(ri).copied();
        let action = action_for(classify_token(token), current_reading.map(classify_token));

        match action {
            AlignAction::Pair => {
                pairs.push(pair(token, current_reading.unwrap_or_default()));
                ri += 1;
            }
            AlignAction::TextOnly => pairs.push(pair(token, "")),
            AlignAction::SkipBoth => {
                pairs.push(pair(token, ""));
                ri += 1;
            }
            AlignAction::Fail => {
                return Err(ParseError::Alignment {
                    token: token.to_string(),
                    index: ti,
                    text: text.to_string(),
                    reading: reading.to_string(),
                });
            }
        }
        ti += 1;
    }

    if ri < reading_tokens.len() {
        return Err(ParseError::UnconsumedReadings {
            remaining: reading_tokens.len() - ri,
            text: text.to_string(),
            reading: reading.to_string(),
        });
    }
    Ok(pairs)
}

/// Split a Cantonese example of the form `text (reading)` into its parts.
///
/// Both the ASCII and the full-width parenthesis are accepted.
pub fn split_reading_suffix(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim();
    let inner = segment
        .strip_suffix(')')
        .or_else(|| segment.strip_suffix('）'))?;
    let open = inner.rfind(['(', '（'])?;
    let text = inner[..open].trim();
    let reading = inner[open..].trim_start_matches(['(', '（']).trim();
    if text.is_empty() || reading.is_empty() {
        return None;
    }
    Some((text, reading))
}

/// Align an example segment carrying its own `(reading)` suffix.
///
/// Returns `None` when the segment has no reading suffix.
pub fn align_segment(segment: &str) -> Option<Result<Vec<TextReadingPair>>> {
    split_reading_suffix(segment).map(|(text, reading)| align(text, reading))
}

fn pair(text: &str, reading: &str) -> TextReadingPair {
    TextReadingPair {
        text: text.to_string(),
        reading: reading.to_string(),
    }
}
