use std::env;
use std::path::PathBuf;

use wordshk_db::Dictionary;

fn dump_path() -> Option<PathBuf> {
    env::var("WORDSHK_CSV").ok().map(PathBuf::from)
}

#[test]
fn loads_full_wordshk_dump() {
    let Some(path) = dump_path() else {
        eprintln!("skipping: WORDSHK_CSV not set");
        return;
    };
    let dict = Dictionary::load(&path).expect("load words.hk dump");

    let stats = dict.stats();
    assert!(stats.parsed > 10_000, "too few entries parsed");
    assert!(
        stats.errors * 100 < stats.rows,
        "more than 1% of rows failed: {}",
        stats.errors
    );
    assert!(!dict.lookup("飲茶").is_empty());
}
