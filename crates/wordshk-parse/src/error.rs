use thiserror::Error;

/// Structural failure while parsing one row. Nothing partial is returned.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid id {0:?}: expected a positive integer")]
    InvalidId(String),
    #[error("malformed headword {group:?}: {reason}")]
    MalformedHeadword { group: String, reason: &'static str },
    #[error("entry body is empty")]
    EmptyBody,
    #[error("first body line must start with \"(pos:\", got {0:?}")]
    MissingPosMarker(String),
    #[error("no tags found in {0:?}")]
    EmptyTagBlock(String),
    #[error("malformed tag {0:?}: expected name:value")]
    MalformedTag(String),
    #[error("unrecognized language code {code:?} in line {line:?}")]
    UnknownLanguage { code: String, line: String },
    #[error("text {0:?} appears before any language line")]
    OrphanText(String),
    #[error(
        "cannot align token {token:?} at index {index} (text {text:?}, reading {reading:?})"
    )]
    Alignment {
        token: String,
        index: usize,
        text: String,
        reading: String,
    },
    #[error("{remaining} unconsumed reading(s) (text {text:?}, reading {reading:?})")]
    UnconsumedReadings {
        remaining: usize,
        text: String,
        reading: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
