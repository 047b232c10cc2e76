//! Latin-to-script mapping tables.
//!
//! A `MappingTable` is an ordered list of `(key, value)` entries bound to one
//! `Script`, with an exact-match index over the keys. Entries are grouped
//! into priority tiers. The matcher's chunk probe length is the longest key
//! in the table, so data and algorithm stay in step when a table grows, and
//! a longer key always wins over its prefixes.

mod builtin;
mod config;

pub use builtin::default_toml;
pub use config::parse_table_toml;

use std::collections::HashMap;

use crate::script::Script;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mapping table is empty")]
    Empty,
    #[error("empty key in {0:?} tier")]
    EmptyKey(Tier),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("invalid key {key:?} in {tier:?} tier (expected lowercase ASCII letters)")]
    InvalidKey { key: String, tier: Tier },
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

/// Priority tier of a table entry, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Whole proper names and common words. May contain single interior
    /// spaces, matched only by whole-input lookup.
    Name,
    /// Digraphs and consonant+vowel syllables.
    Cluster,
    Consonant,
    /// Vowels: the last-resort matches.
    Vowel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub tier: Tier,
}

#[derive(Debug, Clone)]
pub struct MappingTable {
    script: Script,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    max_chunk_len: usize,
}

impl MappingTable {
    pub fn builder(script: Script) -> TableBuilder {
        TableBuilder {
            script,
            entries: Vec::new(),
        }
    }

    /// Parse a table from TOML text (see `parse_table_toml`).
    pub fn from_toml(script: Script, toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(script, toml_str)
    }

    /// The table shipped with the crate for `script`.
    pub fn builtin(script: Script) -> Self {
        parse_table_toml(script, default_toml(script)).expect("built-in mapping TOML must be valid")
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Exact lookup. `key` must already be lowercased.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].value.as_str())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest key (in chars) across all tiers. The chunk matcher never
    /// probes substrings longer than this.
    pub fn max_chunk_len(&self) -> usize {
        self.max_chunk_len
    }
}

/// Incremental, validating constructor for `MappingTable`.
///
/// Entries keep the order they are added in.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    script: Script,
    entries: Vec<Entry>,
}

impl TableBuilder {
    pub fn entry(mut self, tier: Tier, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(tier, key.into(), value.into());
        self
    }

    pub(crate) fn push(&mut self, tier: Tier, key: String, value: String) {
        self.entries.push(Entry { key, value, tier });
    }

    pub fn build(self) -> Result<MappingTable, TableError> {
        if self.entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut index = HashMap::with_capacity(self.entries.len());
        let mut max_chunk_len = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.key.is_empty() {
                return Err(TableError::EmptyKey(entry.tier));
            }
            if !is_valid_key(entry.tier, &entry.key) {
                return Err(TableError::InvalidKey {
                    key: entry.key.clone(),
                    tier: entry.tier,
                });
            }
            if entry.value.is_empty() {
                return Err(TableError::EmptyValue(entry.key.clone()));
            }
            if index.insert(entry.key.clone(), i).is_some() {
                return Err(TableError::DuplicateKey(entry.key.clone()));
            }
            // Keys are ASCII, so byte length == char length.
            max_chunk_len = max_chunk_len.max(entry.key.len());
        }

        Ok(MappingTable {
            script: self.script,
            entries: self.entries,
            index,
            max_chunk_len,
        })
    }
}

fn is_valid_key(tier: Tier, key: &str) -> bool {
    let is_word = |w: &str| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase());
    match tier {
        Tier::Name => key.split(' ').all(is_word),
        _ => is_word(key),
    }
}
