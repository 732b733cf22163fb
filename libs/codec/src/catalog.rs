//! Read-side view over an identifier-keyed kanji dictionary
//!
//! Built from the output of [`crate::rekey_by_kvg_id`]: each value must
//! deserialize as a [`KanjiEntry`].

use crate::document::{require_key, Document};
use kvg_types::{ConversionError, JlptLevel, KanjiEntry};
use indexmap::IndexMap;
use serde::Serialize;

/// Listing row for the full catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanjiSummary {
    #[serde(rename = "kvgId")]
    pub kvg_id: String,
    pub symbol: String,
    pub jlpt: Option<JlptLevel>,
}

/// Listing row for a single JLPT level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanjiDetail {
    #[serde(rename = "kvgId")]
    pub kvg_id: String,
    pub symbol: String,
    pub jlpt: Option<JlptLevel>,
    pub meanings: Vec<String>,
    pub readings_on: Vec<String>,
    pub readings_kun: Vec<String>,
    pub strokes: Option<u32>,
}

/// Entries keyed by `kvg_id`, iterated in document order
#[derive(Debug, Clone, Default)]
pub struct KanjiCatalog {
    entries: IndexMap<String, KanjiEntry>,
}

impl KanjiCatalog {
    pub fn from_document(document: &Document) -> Result<Self, ConversionError> {
        let mut catalog = Self::default();

        for (kvg_id, value) in document {
            require_key(kvg_id)?;
            let entry: KanjiEntry = serde_json::from_value(value.clone())
                .map_err(|e| ConversionError::invalid_entry(kvg_id, e.to_string()))?;

            catalog.entries.insert(kvg_id.clone(), entry);
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kvg_id: &str) -> Option<&KanjiEntry> {
        self.entries.get(kvg_id)
    }

    /// Linear scan; the dictionary is keyed by identifier, not glyph
    pub fn find_symbol(&self, symbol: &str) -> Option<(&str, &KanjiEntry)> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.symbol == symbol)
            .map(|(kvg_id, entry)| (kvg_id.as_str(), entry))
    }

    /// Every entry in document order
    pub fn items(&self) -> Vec<KanjiSummary> {
        self.entries
            .iter()
            .map(|(kvg_id, entry)| KanjiSummary {
                kvg_id: kvg_id.clone(),
                symbol: entry.symbol.clone(),
                jlpt: entry.jlpt_new,
            })
            .collect()
    }

    /// Entries tagged with the given JLPT level, in document order
    pub fn by_level(&self, level: JlptLevel) -> Vec<KanjiDetail> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.jlpt_new == Some(level))
            .map(|(kvg_id, entry)| KanjiDetail {
                kvg_id: kvg_id.clone(),
                symbol: entry.symbol.clone(),
                jlpt: entry.jlpt_new,
                meanings: entry.meanings.clone(),
                readings_on: entry.readings_on.clone(),
                readings_kun: entry.readings_kun.clone(),
                strokes: entry.strokes,
            })
            .collect()
    }
}
