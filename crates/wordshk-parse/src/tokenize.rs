use crate::classify::{CharClass, classify};

/// Split `raw` into trimmed, non-empty tokens.
///
/// Consecutive ASCII letters/digits coalesce into one run; every other
/// character is a token of its own (whitespace tokens are dropped). A letter
/// directly after a digit starts a new run, so `jam2caa4` yields `jam2`,
/// `caa4` even without the separating space. Two syllables glued without a
/// tone digit (`bitging`) stay one token.
pub fn tokenize(raw: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut prev_digit = false;

    for (idx, c) in raw.char_indices() {
        if classify(c) == CharClass::Reading {
            match run_start {
                Some(start) if prev_digit && c.is_ascii_alphabetic() => {
                    push_token(&mut tokens, &raw[start..idx]);
                    run_start = Some(idx);
                }
                Some(_) => {}
                None => run_start = Some(idx),
            }
            prev_digit = c.is_ascii_digit();
            continue;
        }

        if let Some(start) = run_start.take() {
            push_token(&mut tokens, &raw[start..idx]);
        }
        prev_digit = false;
        push_token(&mut tokens, &raw[idx..idx + c.len_utf8()]);
    }

    if let Some(start) = run_start {
        push_token(&mut tokens, &raw[start..]);
    }
    tokens
}

fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
    let token = token.trim();
    if !token.is_empty() {
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_ideographs_and_reading_runs() {
        assert_eq!(tokenize("飲茶"), vec!["飲", "茶"]);
        assert_eq!(tokenize("jam2 caa4"), vec!["jam2", "caa4"]);
        assert_eq!(tokenize("AA制"), vec!["AA", "制"]);
    }

    #[test]
    fn punctuation_flushes_the_run() {
        assert_eq!(tokenize("nei5,hou2"), vec!["nei5", ",", "hou2"]);
        assert_eq!(tokenize("你好，我"), vec!["你", "好", "，", "我"]);
    }

    #[test]
    fn recovers_missing_separator_after_tone_digit() {
        assert_eq!(tokenize("jam2caa4"), vec!["jam2", "caa4"]);
        assert_eq!(tokenize("bit6ging1"), vec!["bit6", "ging1"]);
        assert_eq!(tokenize("ging1"), vec!["ging1"]);
        assert_eq!(tokenize("T恤 ti1 seot1"), vec!["T", "恤", "ti1", "seot1"]);
    }

    #[test]
    fn letter_runs_without_a_digit_stay_whole() {
        assert_eq!(tokenize("bitging"), vec!["bitging"]);
        assert_eq!(tokenize("caa4"), vec!["caa4"]);
    }

    #[test]
    fn drops_whitespace_and_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
        assert_eq!(tokenize("  nei5  "), vec!["nei5"]);
    }

    #[test]
    fn other_characters_are_single_tokens() {
        assert_eq!(tokenize("ab→cd"), vec!["ab", "→", "cd"]);
        assert_eq!(tokenize("é"), vec!["é"]);
    }
}
