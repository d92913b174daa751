use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordshk_db::{Dictionary, LoadMode, LoadOptions, default_workers};

fn main() -> Result<()> {
    let dump = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p wordshk-db --example stats -- <path-to-wordshk.csv>")?;

    let dict = Dictionary::load_with_options(
        &dump,
        LoadOptions {
            mode: LoadMode::Mmap,
            workers: default_workers(),
        },
    )
    .with_context(|| format!("loading words.hk dump from {}", dump.display()))?;

    let mut senses = 0usize;
    let mut examples = 0usize;
    let mut headwords = 0usize;
    for entry in dict.iter() {
        headwords += entry.headwords.len();
        senses += entry.senses.len();
        examples += entry.senses.iter().map(|s| s.examples.len()).sum::<usize>();
    }

    let stats = dict.stats();
    println!("Dump         : {}", dump.display());
    println!("Rows         : {}", stats.rows);
    println!("Entries      : {}", stats.parsed);
    println!("Skipped      : {}", stats.skipped);
    println!("Errors       : {}", stats.errors);
    println!("Unreviewed   : {}", stats.unreviewed);
    println!("Unpublished  : {}", stats.unpublished);
    println!("Headwords    : {}", headwords);
    println!("Senses       : {}", senses);
    println!("Examples     : {}", examples);

    for err in dict.errors().iter().take(10) {
        println!("  row {}: {}", err.id, err.message);
    }

    // Spot-check a couple of headwords to confirm lookup.
    for text in ["飲茶", "食飯"] {
        println!("Headword '{}' entries: {}", text, dict.lookup(text).len());
    }

    Ok(())
}
