//! Load a words.hk CSV dump into an in-memory, read-only dictionary.
//!
//! Rows are read with the `csv` crate (quoted multi-line fields, `#` comment
//! lines before the header), then parsed with [`wordshk_parse::parse_entry`].
//! The batch never aborts on a bad row: the failure is logged, counted and
//! recorded with the row id, and loading continues. That holds for records
//! the CSV layer cannot map onto a [`Row`] too (a truncated row missing its
//! `entry` column, say). Only I/O and header failures end the load.
//!
//! Two sentinels are special-cased before parsing:
//! - an entry body of [`NO_DATA`] is skipped, not an error;
//! - a warning containing [`UNREVIEWED_MARKER`] or a `public` field other
//!   than [`PUBLISHED`] only bumps an informational counter.
//!
//! # Example
//! ```no_run
//! use wordshk_db::{Dictionary, LoadMode, LoadOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dict = Dictionary::load_with_options(
//!     "/path/to/wordshk.csv",
//!     LoadOptions { mode: LoadMode::Mmap, workers: 4 },
//! )?;
//! for entry in dict.lookup("飲茶") {
//!     println!("{}: {:?}", entry.id, entry.pos());
//! }
//! println!("{:?}", dict.stats());
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p wordshk-db --example stats -- <dump.csv>`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wordshk_parse::parse_entry;
use wordshk_types::DictionaryEntry;

/// Entry body of rows that have no content yet.
pub const NO_DATA: &str = "未有內容 NO DATA";
/// Substring of the warning field on entries not yet reviewed.
pub const UNREVIEWED_MARKER: &str = "未經覆核稿";
/// Value of the `public` field on published entries.
///
/// Publication status is read from the dump's own `public` column, not from a
/// marker in the warning field; a non-empty value other than this one counts
/// as unpublished.
pub const PUBLISHED: &str = "已公開";

/// Strategy for loading the dump file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (fast, zero-copy).
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

/// How a dump is loaded.
#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    pub mode: LoadMode,
    /// Number of threads parsing rows; `1` parses on the calling thread.
    pub workers: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            mode: LoadMode::Mmap,
            workers: default_workers(),
        }
    }
}

/// Worker count matching the machine's available parallelism.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// One raw row of the dump, keyed by the CSV header names.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Row {
    pub id: String,
    pub headword: String,
    pub entry: String,
    #[serde(default)]
    pub variants: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub public: String,
}

/// Rows read from a dump, plus the records that could not be read as rows.
#[derive(Debug, Default)]
pub struct RawRows {
    pub rows: Vec<Row>,
    pub errors: Vec<RowError>,
}

/// A row that failed to parse.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RowError {
    pub id: String,
    pub message: String,
}

/// Counters collected while loading.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LoadStats {
    pub rows: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub unreviewed: usize,
    pub unpublished: usize,
}

enum Outcome {
    Parsed(DictionaryEntry),
    Skipped,
    Failed(RowError),
}

/// Parsed dictionary with lookups by id and by headword text.
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    by_id: HashMap<u32, usize>,
    by_headword: HashMap<String, Vec<usize>>,
    stats: LoadStats,
    errors: Vec<RowError>,
}

impl Dictionary {
    /// Load a CSV dump, memory-mapped, parsing on all available cores.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_options(path, LoadOptions::default())
    }

    /// Load a CSV dump choosing the backing buffer and worker count.
    pub fn load_with_options(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        let buffer = load_file(path, options.mode)?;
        let raw =
            read_rows(buffer.as_slice()).with_context(|| format!("read {}", path.display()))?;
        info!(
            "read {} rows from {} ({} unreadable)",
            raw.rows.len(),
            path.display(),
            raw.errors.len()
        );

        let mut dict = Self::from_rows(raw.rows, options.workers);
        dict.stats.rows += raw.errors.len();
        for err in raw.errors {
            dict.record_error(err);
        }
        info!(
            "parsed {} entries ({} skipped, {} errors) in {} ms",
            dict.stats.parsed,
            dict.stats.skipped,
            dict.stats.errors,
            start.elapsed().as_millis()
        );
        Ok(dict)
    }

    /// Parse already-split rows. Bad rows are recorded, never fatal.
    pub fn from_rows(rows: Vec<Row>, workers: usize) -> Self {
        let mut stats = LoadStats {
            rows: rows.len(),
            ..LoadStats::default()
        };
        for row in &rows {
            if row.warning.contains(UNREVIEWED_MARKER) {
                stats.unreviewed += 1;
            }
            if !row.public.trim().is_empty() && row.public.trim() != PUBLISHED {
                stats.unpublished += 1;
            }
        }

        let outcomes = parse_rows(&rows, workers);

        let mut dict = Self {
            entries: Vec::with_capacity(outcomes.len()),
            by_id: HashMap::new(),
            by_headword: HashMap::new(),
            stats,
            errors: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Outcome::Parsed(entry) => dict.insert(entry),
                Outcome::Skipped => dict.stats.skipped += 1,
                Outcome::Failed(err) => dict.record_error(err),
            }
        }
        dict
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        if self.by_id.contains_key(&entry.id) {
            self.record_error(RowError {
                id: entry.id.to_string(),
                message: format!("duplicate id {}", entry.id),
            });
            return;
        }
        let idx = self.entries.len();
        self.by_id.insert(entry.id, idx);
        for headword in &entry.headwords {
            let ids = self.by_headword.entry(headword.text.clone()).or_default();
            if !ids.contains(&idx) {
                ids.push(idx);
            }
        }
        self.entries.push(entry);
        self.stats.parsed += 1;
    }

    fn record_error(&mut self, err: RowError) {
        warn!("row {}: {}", err.id, err.message);
        self.stats.errors += 1;
        self.errors.push(err);
    }

    /// Fetch an entry by its row id.
    pub fn get(&self, id: u32) -> Option<&DictionaryEntry> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Entries having a headword spelled exactly `text`, in dump order.
    pub fn lookup(&self, text: &str) -> Vec<&DictionaryEntry> {
        self.by_headword
            .get(text.trim())
            .map(|ids| ids.iter().map(|&idx| &self.entries[idx]).collect())
            .unwrap_or_default()
    }

    /// Iterate over all entries in dump order.
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Rows that failed, with their ids and messages.
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }
}

/// Split a CSV dump into rows. Lines starting with `#` before a record are skipped.
///
/// A record that cannot be read as a [`Row`] is returned in
/// [`RawRows::errors`], keyed by its first field, and reading carries on.
/// Fails only on I/O errors or an unreadable header.
pub fn read_rows(bytes: &[u8]) -> Result<RawRows> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(bytes);
    let headers = reader.headers().context("csv header")?.clone();
    let mut raw = RawRows::default();
    for (idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                return Err(anyhow::Error::new(err).context(format!("csv record {}", idx + 1)));
            }
            Err(err) => {
                raw.errors.push(RowError {
                    id: format!("record {}", idx + 1),
                    message: err.to_string(),
                });
                continue;
            }
        };
        match record.deserialize::<Row>(Some(&headers)) {
            Ok(row) => raw.rows.push(row),
            Err(err) => raw.errors.push(RowError {
                id: record.get(0).unwrap_or_default().trim().to_string(),
                message: err.to_string(),
            }),
        }
    }
    Ok(raw)
}

fn parse_rows(rows: &[Row], workers: usize) -> Vec<Outcome> {
    if workers <= 1 || rows.len() < 2 {
        return rows.iter().map(parse_row).collect();
    }
    let chunk_size = rows.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = rows
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(parse_row).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(outcomes) => outcomes,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

fn parse_row(row: &Row) -> Outcome {
    if row.entry.trim() == NO_DATA {
        debug!("row {}: no data", row.id);
        return Outcome::Skipped;
    }
    match parse_entry(&row.id, &row.headword, &row.entry) {
        Ok(entry) => Outcome::Parsed(entry),
        Err(err) => Outcome::Failed(RowError {
            id: row.id.trim().to_string(),
            message: err.to_string(),
        }),
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))
        }
        LoadMode::Owned => {
            let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}
