/// Character classes used by the tokenizer and the reading aligner.
///
/// Every code point maps to exactly one class; whitespace is [`CharClass::Other`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CharClass {
    /// CJK Unified Ideographs and extensions A to E.
    Ideograph,
    /// ASCII letter or digit, the alphabet of Jyutping.
    Reading,
    /// CJK or ASCII terminal/separator mark.
    Punctuation,
    Other,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Ideograph,
        CharClass::Reading,
        CharClass::Punctuation,
        CharClass::Other,
    ];
}

const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', '「', '」', '『', '』', '（', '）', '《', '》', '〈',
    '〉', '…', '—', '～', '·', '．', ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']',
    '-', '~', '/',
];

pub fn classify(c: char) -> CharClass {
    if is_ideograph(c) {
        CharClass::Ideograph
    } else if c.is_ascii_alphanumeric() {
        CharClass::Reading
    } else if PUNCTUATION.contains(&c) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// Class of a token, taken from its first character. Empty tokens are `Other`.
pub fn classify_token(token: &str) -> CharClass {
    token.chars().next().map(classify).unwrap_or(CharClass::Other)
}

pub fn is_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2B73F}'
            | '\u{2B740}'..='\u{2B81F}'
            | '\u{2B820}'..='\u{2CEAF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_class() {
        assert_eq!(classify('飲'), CharClass::Ideograph);
        assert_eq!(classify('㐀'), CharClass::Ideograph);
        assert_eq!(classify('\u{20000}'), CharClass::Ideograph);
        assert_eq!(classify('j'), CharClass::Reading);
        assert_eq!(classify('Z'), CharClass::Reading);
        assert_eq!(classify('4'), CharClass::Reading);
        assert_eq!(classify('，'), CharClass::Punctuation);
        assert_eq!(classify('?'), CharClass::Punctuation);
        assert_eq!(classify(' '), CharClass::Other);
        assert_eq!(classify('ア'), CharClass::Other);
        assert_eq!(classify('é'), CharClass::Other);
    }

    #[test]
    fn extension_boundaries_are_ideographs() {
        for c in ['\u{4DBF}', '\u{9FFF}', '\u{2A6DF}', '\u{2B73F}', '\u{2CEAF}'] {
            assert!(is_ideograph(c), "{c:?}");
        }
        assert!(!is_ideograph('\u{2CEB0}'));
        assert!(!is_ideograph('\u{33FF}'));
    }

    #[test]
    fn token_class_uses_first_char() {
        assert_eq!(classify_token("nei5"), CharClass::Reading);
        assert_eq!(classify_token("你"), CharClass::Ideograph);
        assert_eq!(classify_token(""), CharClass::Other);
    }
}
