//! Parse words.hk dictionary rows into typed entries.
//!
//! A row carries an id, a headword field (`text:reading` groups) and a
//! multi-line entry body:
//!
//! ```text
//! (pos:名詞)(label:口語)
//! <explanation>
//! yue:一種飲品
//! eng:tea
//! <eg>
//! yue:飲杯茶先啦。 (jam2 bui1 caa4 sin1 laa1.)
//! eng:Have a cup of tea first.
//! ----
//! <explanation>
//! ...
//! ```
//!
//! The first line is the tag block; senses are separated by `----` lines and
//! examples by `<eg>` lines; each block is a list of `code:text` lines with
//! free continuation lines.
//!
//! Besides the entry grammar this crate aligns a mixed-script string with its
//! Jyutping, one reading per orthographic token (see [`align`]).
//!
//! # Example
//! ```rust
//! use wordshk_parse::parse_entry;
//! use wordshk_types::Language;
//!
//! let entry = parse_entry("1", "茶:caa4", "(pos:名詞)\nyue:茶\neng:tea").unwrap();
//! assert_eq!(entry.pos(), vec!["名詞"]);
//! assert_eq!(entry.senses[0].explanation.get(Language::Eng), &["tea"]);
//!
//! let pairs = wordshk_parse::align("飲茶", "jam2 caa4").unwrap();
//! assert_eq!(pairs[1].reading, "caa4");
//! ```
//!
//! Parsing is pure: no state is kept between calls, so rows can be parsed
//! on as many threads as the caller likes.

pub mod align;
pub mod classify;
pub mod entry;
pub mod error;
pub mod lang;
pub mod sense;
pub mod tags;
pub mod tokenize;

pub use align::{AlignAction, action_for, align, align_segment, split_reading_suffix};
pub use classify::{CharClass, classify, classify_token};
pub use entry::{parse_entry, parse_headwords, parse_id};
pub use error::{ParseError, Result};
pub use lang::parse_language_block;
pub use sense::{parse_sense, parse_senses};
pub use tags::{parse_tags, split_tag_line};
pub use tokenize::tokenize;
