//! Shared, owned value types that mirror the words.hk entry layout.
//!
//! A parsed row becomes a [`DictionaryEntry`]: one or more [`Headword`]s with
//! their Jyutping readings, the `(name:value)` [`Tag`]s from the first body
//! line, and an ordered list of [`Sense`]s. Every sense carries its
//! explanation and examples as [`LanguageData`], keyed by the closed
//! [`Language`] enumeration.
//!
//! All types are plain values: built bottom-up by the parser, never mutated
//! afterwards, and serializable so higher-level tooling can render them.
//!
//! ```rust
//! use wordshk_types::{Language, LanguageData};
//!
//! let lang = Language::from_code("yue").unwrap();
//! assert_eq!(lang.short(), "粵");
//!
//! let mut data = LanguageData::new();
//! data.push(Language::Eng, "hello");
//! data.push(Language::Eng, "world");
//! assert_eq!(data.get(Language::Eng), &["hello", "world"]);
//! ```

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Language codes accepted in explanation and example blocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Yue,
    Eng,
    Zho,
    Jpn,
    Kor,
    Vie,
    Lzh,
    Por,
    Deu,
    Fra,
    Lat,
    Ind,
    Tha,
    Msa,
    Spa,
    Ita,
    Rus,
    Ara,
    Hin,
    Tgl,
    Nep,
    Urd,
    Mnc,
    Tib,
}

impl Language {
    /// Every known language, in display order.
    pub const ALL: [Language; 24] = [
        Language::Yue,
        Language::Eng,
        Language::Zho,
        Language::Jpn,
        Language::Kor,
        Language::Vie,
        Language::Lzh,
        Language::Por,
        Language::Deu,
        Language::Fra,
        Language::Lat,
        Language::Ind,
        Language::Tha,
        Language::Msa,
        Language::Spa,
        Language::Ita,
        Language::Rus,
        Language::Ara,
        Language::Hin,
        Language::Tgl,
        Language::Nep,
        Language::Urd,
        Language::Mnc,
        Language::Tib,
    ];

    /// Look up a three-letter code as written in entry bodies (`yue`, `eng`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Code used in entry bodies.
    pub fn code(self) -> &'static str {
        match self {
            Language::Yue => "yue",
            Language::Eng => "eng",
            Language::Zho => "zho",
            Language::Jpn => "jpn",
            Language::Kor => "kor",
            Language::Vie => "vie",
            Language::Lzh => "lzh",
            Language::Por => "por",
            Language::Deu => "deu",
            Language::Fra => "fra",
            Language::Lat => "lat",
            Language::Ind => "ind",
            Language::Tha => "tha",
            Language::Msa => "msa",
            Language::Spa => "spa",
            Language::Ita => "ita",
            Language::Rus => "rus",
            Language::Ara => "ara",
            Language::Hin => "hin",
            Language::Tgl => "tgl",
            Language::Nep => "nep",
            Language::Urd => "urd",
            Language::Mnc => "mnc",
            Language::Tib => "tib",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Yue => "Cantonese",
            Language::Eng => "English",
            Language::Zho => "Standard Chinese",
            Language::Jpn => "Japanese",
            Language::Kor => "Korean",
            Language::Vie => "Vietnamese",
            Language::Lzh => "Classical Chinese",
            Language::Por => "Portuguese",
            Language::Deu => "German",
            Language::Fra => "French",
            Language::Lat => "Latin",
            Language::Ind => "Indonesian",
            Language::Tha => "Thai",
            Language::Msa => "Malay",
            Language::Spa => "Spanish",
            Language::Ita => "Italian",
            Language::Rus => "Russian",
            Language::Ara => "Arabic",
            Language::Hin => "Hindi",
            Language::Tgl => "Tagalog",
            Language::Nep => "Nepali",
            Language::Urd => "Urdu",
            Language::Mnc => "Manchu",
            Language::Tib => "Tibetan",
        }
    }

    /// Short glyph used as a compact label in listings.
    pub fn short(self) -> &'static str {
        match self {
            Language::Yue => "粵",
            Language::Eng => "英",
            Language::Zho => "中",
            Language::Jpn => "日",
            Language::Kor => "韓",
            Language::Vie => "越",
            Language::Lzh => "文",
            Language::Por => "葡",
            Language::Deu => "德",
            Language::Fra => "法",
            Language::Lat => "拉",
            Language::Ind => "印尼",
            Language::Tha => "泰",
            Language::Msa => "馬",
            Language::Spa => "西",
            Language::Ita => "意",
            Language::Rus => "俄",
            Language::Ara => "阿",
            Language::Hin => "印",
            Language::Tgl => "菲",
            Language::Nep => "尼",
            Language::Urd => "烏",
            Language::Mnc => "滿",
            Language::Tib => "藏",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Citation form of an entry with its Jyutping readings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Headword {
    pub text: String,
    pub readings: Vec<String>,
}

/// Opaque `(name:value)` pair from the tag line, e.g. `pos` / `名詞`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// Text segments keyed by language, in first-appearance order.
///
/// A language that appears twice in one block keeps two segments; they are
/// never merged.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LanguageData {
    entries: Vec<(Language, Vec<String>)>,
}

impl LanguageData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to `lang`'s list, opening the list if needed.
    pub fn push(&mut self, lang: Language, segment: impl Into<String>) {
        let segment = segment.into();
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some((_, segments)) => segments.push(segment),
            None => self.entries.push((lang, vec![segment])),
        }
    }

    /// Segments for `lang`, or an empty slice.
    pub fn get(&self, lang: Language) -> &[String] {
        self.entries
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, segments)| segments.as_slice())
            .unwrap_or(&[])
    }

    /// Languages present, in first-appearance order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.iter().map(|(lang, _)| *lang)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(lang, segments)| (*lang, segments.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for LanguageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (lang, segments) in &self.entries {
            map.serialize_entry(lang.code(), segments)?;
        }
        map.end()
    }
}

/// One meaning of a headword: explanation plus worked examples.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Sense {
    pub explanation: LanguageData,
    pub examples: Vec<LanguageData>,
}

/// One orthographic token and the reading aligned to it.
///
/// An empty `reading` means no reading applies (punctuation, decoration).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TextReadingPair {
    pub text: String,
    pub reading: String,
}

/// Complete record for one dictionary row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DictionaryEntry {
    pub id: u32,
    pub headwords: Vec<Headword>,
    pub tags: Vec<Tag>,
    pub senses: Vec<Sense>,
}

impl DictionaryEntry {
    /// Values of every tag named `name`, in tag-line order.
    pub fn tag_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.name == name)
            .map(|tag| tag.value.as_str())
    }

    /// Part-of-speech values (`pos` tags).
    pub fn pos(&self) -> Vec<&str> {
        self.tag_values("pos").collect()
    }

    /// Usage labels (`label` tags).
    pub fn labels(&self) -> Vec<&str> {
        self.tag_values("label").collect()
    }
}
