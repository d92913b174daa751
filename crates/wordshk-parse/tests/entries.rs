use wordshk_parse::{ParseError, align_segment, parse_entry};
use wordshk_types::Language;

const YUM_CHA: &str = "(pos:動詞)(pos:名詞)(label:飲食)
<explanation>
yue:去茶樓食點心、飲茶
eng:to have dim sum; to go to a Chinese restaurant for tea and snacks
<eg>
yue:我哋星期日成家人去飲茶。 (ngo5 dei6 sing1 kei4 jat6 seng4 gaa1 jan4 heoi3 jam2 caa4.)
eng:Our whole family goes for dim sum on Sundays.
----
<explanation>
yue:飲茶水
eng:to drink tea
<eg>
yue:你飲唔飲茶呀？ (nei5 jam2 m4 jam2 caa4 aa3?)
eng:Would you like
some tea?
<eg>
zho:你要不要喝茶？
";

#[test]
fn parses_multi_sense_entry() {
    let entry = parse_entry("95001", "飲茶:jam2 caa4", YUM_CHA).expect("entry parses");

    assert_eq!(entry.id, 95001);
    assert_eq!(entry.headwords.len(), 1);
    assert_eq!(entry.headwords[0].readings, vec!["jam2 caa4"]);
    assert_eq!(entry.pos(), vec!["動詞", "名詞"]);
    assert_eq!(entry.labels(), vec!["飲食"]);

    assert_eq!(entry.senses.len(), 2);
    let first = &entry.senses[0];
    assert_eq!(first.explanation.get(Language::Yue), &["去茶樓食點心、飲茶"]);
    assert_eq!(first.examples.len(), 1);

    let second = &entry.senses[1];
    assert_eq!(second.examples.len(), 2);
    assert_eq!(
        second.examples[0].get(Language::Eng),
        &["Would you like\nsome tea?"]
    );
    assert_eq!(second.examples[1].get(Language::Zho), &["你要不要喝茶？"]);
}

#[test]
fn parsing_is_deterministic() {
    let a = parse_entry("1", "飲茶:jam2 caa4", YUM_CHA).unwrap();
    let b = parse_entry("1", "飲茶:jam2 caa4", YUM_CHA).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cantonese_examples_align_with_their_readings() {
    let entry = parse_entry("1", "飲茶:jam2 caa4", YUM_CHA).unwrap();
    for sense in &entry.senses {
        for example in &sense.examples {
            for segment in example.get(Language::Yue) {
                let pairs = align_segment(segment)
                    .expect("example carries a reading")
                    .expect("example aligns");
                assert!(pairs.iter().any(|p| p.text == "茶" && p.reading == "caa4"));
            }
        }
    }
}

#[test]
fn unknown_language_in_example_rejects_the_row() {
    let body = "(pos:名詞)\nyue:茶\n<eg>\nxxx:???";
    let err = parse_entry("2", "茶:caa4", body).unwrap_err();
    assert!(matches!(err, ParseError::UnknownLanguage { ref code, .. } if code == "xxx"));
    assert!(err.to_string().contains("xxx"));
}

#[test]
fn error_messages_name_the_violation() {
    let err = parse_entry("abc", "茶:caa4", "(pos:名詞)").unwrap_err();
    assert!(err.to_string().contains("positive integer"));

    let err = parse_entry("1", "茶", "(pos:名詞)").unwrap_err();
    assert!(err.to_string().contains("missing reading"));

    let err = parse_entry("1", "茶:caa4", "(label:書面語)").unwrap_err();
    assert!(err.to_string().contains("(pos:"));
}
