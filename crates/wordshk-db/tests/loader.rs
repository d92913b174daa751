use std::path::PathBuf;

use wordshk_db::{Dictionary, LoadMode, LoadOptions};
use wordshk_types::Language;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample.csv")
}

#[test]
fn loads_fixture_and_counts_rows() {
    let dict = Dictionary::load(fixture()).expect("load fixture");
    let stats = dict.stats();
    assert_eq!(stats.rows, 5);
    assert_eq!(stats.parsed, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.unreviewed, 1);
    assert_eq!(stats.unpublished, 1);

    let err = &dict.errors()[0];
    assert_eq!(err.id, "95004");
    assert!(err.message.contains("tlh"));
}

#[test]
fn parses_senses_and_examples_from_fixture() {
    let dict = Dictionary::load(fixture()).expect("load fixture");
    let entry = dict.get(95001).expect("yum cha present");

    assert_eq!(entry.pos(), vec!["動詞"]);
    assert_eq!(entry.senses.len(), 2);
    assert_eq!(entry.senses[0].examples.len(), 1);
    assert_eq!(
        entry.senses[0].examples[0].get(Language::Eng),
        &["We're going for dim sum."]
    );
    assert!(entry.senses[1].examples.is_empty());
    assert_eq!(
        entry.senses[1].explanation.get(Language::Eng),
        &["to drink tea"]
    );
}

#[test]
fn multi_headword_rows_are_indexed_under_each_spelling() {
    let dict = Dictionary::load(fixture()).expect("load fixture");
    let by_first = dict.lookup("嘢");
    let by_second = dict.lookup("野");
    assert_eq!(by_first.len(), 1);
    assert_eq!(by_second.len(), 1);
    assert_eq!(by_first[0].id, 95005);
    assert_eq!(by_first[0].headwords[0].readings, vec!["je5", "je2"]);
}

#[test]
fn load_modes_agree() {
    let mmap = Dictionary::load_with_options(
        fixture(),
        LoadOptions {
            mode: LoadMode::Mmap,
            workers: 2,
        },
    )
    .expect("mmap load");
    let owned = Dictionary::load_with_options(
        fixture(),
        LoadOptions {
            mode: LoadMode::Owned,
            workers: 1,
        },
    )
    .expect("owned load");
    assert_eq!(mmap.stats(), owned.stats());
    assert_eq!(
        mmap.iter().collect::<Vec<_>>(),
        owned.iter().collect::<Vec<_>>()
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dictionary::load(dir.path().join("absent.csv"))
        .err()
        .expect("missing file fails");
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn loads_dump_written_at_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.csv");
    std::fs::write(
        &path,
        "id,headword,entry,variants,warning,public\n\
         1,茶:caa4,\"(pos:名詞)\nyue:茶\",茶,,已公開\n\
         2,飯:faan6,未有內容 NO DATA,飯,,已公開\n\
         0,錯:co3,\"(pos:名詞)\",錯,,已公開\n",
    )
    .unwrap();
    let dict = Dictionary::load(&path).expect("load dump");
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.stats().skipped, 1);
    assert_eq!(dict.errors()[0].id, "0");
}

#[test]
fn truncated_row_does_not_abort_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.csv");
    std::fs::write(
        &path,
        "id,headword,entry,variants,warning,public\n\
         1,茶:caa4,\"(pos:名詞)\nyue:茶\",茶,,已公開\n\
         2,飯:faan6\n\
         3,飲:jam2,\"(pos:動詞)\nyue:飲\",飲,,已公開\n",
    )
    .unwrap();
    let dict = Dictionary::load(&path).expect("load survives a short row");
    assert_eq!(dict.len(), 2);
    assert!(dict.get(1).is_some());
    assert!(dict.get(3).is_some());

    let stats = dict.stats();
    assert_eq!(stats.rows, 3);
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.errors, 1);
    assert_eq!(dict.errors()[0].id, "2");
}
