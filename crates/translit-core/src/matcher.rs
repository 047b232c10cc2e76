//! Latin-to-script matching over a single `MappingTable`.
//!
//! Resolution order:
//!
//! 1. the whole normalized input is a key (multi-word proper nouns);
//! 2. per whitespace-delimited word, the word is a key;
//! 3. otherwise greedy longest-match over the word, probing from
//!    `MappingTable::max_chunk_len` chars (the longest key) down to one at
//!    each position, so a key always beats any of its prefixes. A char that
//!    no probe covers is copied through unchanged.
//!
//! Step 1 must stay ahead of step 3: multi-word keys can never match inside
//! a single word.
//!
//! The matcher is permissive: digits, punctuation and non-Latin chars reach
//! step 3 and pass through. Callers wanting a hard gate use
//! `Engine::transliterate_strict`.

use std::iter;

use tracing::{debug, debug_span};

use crate::table::MappingTable;

/// Trim, lowercase and collapse whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for word in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[derive(Debug, Default)]
struct MatchStats {
    whole_words: usize,
    chunks: usize,
    passthrough: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher<'t> {
    table: &'t MappingTable,
}

impl<'t> Matcher<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t MappingTable {
        self.table
    }

    /// Transliterate raw text. Output has one word per input word, joined by
    /// single spaces, unless the whole input resolves as one key.
    pub fn transliterate(&self, text: &str) -> String {
        let _span = debug_span!(
            "transliterate",
            script = %self.table.script(),
            input_len = text.len()
        )
        .entered();

        let normalized = normalize(text);
        if normalized.is_empty() {
            return String::new();
        }

        if let Some(value) = self.table.lookup(&normalized) {
            debug!("whole-input match");
            return value.to_string();
        }

        let mut stats = MatchStats::default();
        let mut out = String::with_capacity(normalized.len() * 3);
        for (i, word) in normalized.split(' ').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            self.push_word(word, &mut out, &mut stats);
        }

        debug!(
            whole_words = stats.whole_words,
            chunks = stats.chunks,
            passthrough = stats.passthrough
        );
        out
    }

    fn push_word(&self, word: &str, out: &mut String, stats: &mut MatchStats) {
        match self.table.lookup(word) {
            Some(value) => {
                out.push_str(value);
                stats.whole_words += 1;
            }
            None => self.push_chunks(word, out, stats),
        }
    }

    fn push_chunks(&self, word: &str, out: &mut String, stats: &mut MatchStats) {
        // Byte offset of every char boundary, including the end.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(word.len()))
            .collect();
        let char_count = bounds.len() - 1;
        let max_len = self.table.max_chunk_len();

        let mut i = 0;
        while i < char_count {
            let longest = max_len.min(char_count - i);
            let hit = (1..=longest).rev().find_map(|len| {
                self.table
                    .lookup(&word[bounds[i]..bounds[i + len]])
                    .map(|value| (len, value))
            });
            match hit {
                Some((len, value)) => {
                    out.push_str(value);
                    stats.chunks += 1;
                    i += len;
                }
                None => {
                    out.push_str(&word[bounds[i]..bounds[i + 1]]);
                    stats.passthrough += 1;
                    i += 1;
                }
            }
        }
    }
}
