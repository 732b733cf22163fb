//! Typed view of a converted kanji record
//!
//! Records in an identifier-keyed document are free-form JSON objects; this is
//! the shape the dictionary data actually carries once `symbol` and `unicode`
//! have been added.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// JLPT level under the post-2010 numbering (N5 easiest, N1 hardest)
///
/// Serialized as its bare number; `TryFrom<u8>` comes from `TryFromPrimitive`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum JlptLevel {
    N1 = 1,
    N2 = 2,
    N3 = 3,
    N4 = 4,
    N5 = 5,
}

impl JlptLevel {
    pub fn number(self) -> u8 {
        self.into()
    }
}

impl std::fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N{}", self.number())
    }
}

/// Accepts `"N3"`, `"n3"` or `"3"`
impl FromStr for JlptLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('N')
            .or_else(|| trimmed.strip_prefix('n'))
            .unwrap_or(trimmed);
        let value: u8 = digits
            .parse()
            .map_err(|_| format!("invalid JLPT level: {s:?}"))?;
        Self::try_from_primitive(value).map_err(|_| format!("JLPT level out of range: {s:?}"))
    }
}

/// One entry of the kanji dictionary, keyed by its KanjiVG identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanjiEntry {
    #[serde(default)]
    pub strokes: Option<u32>,
    #[serde(default)]
    pub grade: Option<u32>,
    #[serde(default)]
    pub freq: Option<u32>,
    #[serde(default)]
    pub jlpt_new: Option<JlptLevel>,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub readings_on: Vec<String>,
    #[serde(default)]
    pub readings_kun: Vec<String>,

    // WaniKani data, absent for kanji outside the WaniKani curriculum
    #[serde(default)]
    pub wk_level: Option<u32>,
    #[serde(default)]
    pub wk_meanings: Option<Vec<String>>,
    #[serde(default)]
    pub wk_readings_on: Option<Vec<String>>,
    #[serde(default)]
    pub wk_readings_kun: Option<Vec<String>>,
    #[serde(default)]
    pub wk_radicals: Option<Vec<String>>,

    pub symbol: String,
    pub unicode: String,
}
