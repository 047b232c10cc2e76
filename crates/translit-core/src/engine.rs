use tracing::{debug, debug_span};

use crate::matcher::Matcher;
use crate::script::Script;
use crate::settings::EngineSettings;
use crate::table::{MappingTable, TableError};
use crate::unicode::is_latin_text;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("{found} table supplied for the {expected} slot")]
    ScriptMismatch { expected: Script, found: Script },
    #[error("input is not Latin text: {0:?}")]
    NonLatinInput(String),
}

/// Transliteration facade over one mapping table per script.
///
/// Immutable once built, so a single instance can be shared by reference
/// across threads and called on every keystroke.
#[derive(Debug, Clone)]
pub struct Engine {
    arabic: MappingTable,
    japanese: MappingTable,
    hindi: MappingTable,
    settings: EngineSettings,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in tables with default settings.
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            arabic: MappingTable::builtin(Script::Arabic),
            japanese: MappingTable::builtin(Script::Japanese),
            hindi: MappingTable::builtin(Script::Hindi),
            settings,
        }
    }

    /// Engine over caller-supplied tables. Each table must be bound to the
    /// script of the slot it is passed in.
    pub fn with_tables(
        arabic: MappingTable,
        japanese: MappingTable,
        hindi: MappingTable,
    ) -> Result<Self, EngineError> {
        for (expected, table) in [
            (Script::Arabic, &arabic),
            (Script::Japanese, &japanese),
            (Script::Hindi, &hindi),
        ] {
            check_slot(expected, table)?;
        }
        Ok(Self {
            arabic,
            japanese,
            hindi,
            settings: EngineSettings::default(),
        })
    }

    /// Replace the table for `script` with one parsed from `toml_str`.
    pub fn with_custom_table(mut self, script: Script, toml_str: &str) -> Result<Self, EngineError> {
        let table = MappingTable::from_toml(script, toml_str)?;
        *self.table_mut(script) = table;
        Ok(self)
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn table(&self, script: Script) -> &MappingTable {
        match script {
            Script::Arabic => &self.arabic,
            Script::Japanese => &self.japanese,
            Script::Hindi => &self.hindi,
        }
    }

    fn table_mut(&mut self, script: Script) -> &mut MappingTable {
        match script {
            Script::Arabic => &mut self.arabic,
            Script::Japanese => &mut self.japanese,
            Script::Hindi => &mut self.hindi,
        }
    }

    pub fn matcher(&self, script: Script) -> Matcher<'_> {
        Matcher::new(self.table(script))
    }

    /// Convert Latin `text` into `script`. Unmapped characters are copied
    /// through; blank input yields an empty string.
    pub fn transliterate(&self, text: &str, script: Script) -> String {
        self.matcher(script).transliterate(text)
    }

    /// Like `transliterate`, but rejects non-blank input that is not purely
    /// ASCII letters and whitespace instead of passing it through.
    pub fn transliterate_strict(&self, text: &str, script: Script) -> Result<String, EngineError> {
        if !text.trim().is_empty() && !is_latin_text(text) {
            return Err(EngineError::NonLatinInput(text.to_string()));
        }
        Ok(self.transliterate(text, script))
    }

    /// Up to `limit` table keys that extend `partial`, in table order.
    pub fn suggestions(&self, partial: &str, script: Script, limit: usize) -> Vec<String> {
        let _span = debug_span!("suggestions", %script, limit).entered();
        let prefix = partial.to_lowercase();
        let keys: Vec<String> = self
            .table(script)
            .keys()
            .filter(|key| key.len() > prefix.len() && key.starts_with(prefix.as_str()))
            .take(limit)
            .map(str::to_string)
            .collect();
        debug!(count = keys.len());
        keys
    }

    /// `suggestions` with `settings.suggestions.default_limit`.
    pub fn default_suggestions(&self, partial: &str, script: Script) -> Vec<String> {
        self.suggestions(partial, script, self.settings.suggestions.default_limit)
    }
}

fn check_slot(expected: Script, table: &MappingTable) -> Result<(), EngineError> {
    if table.script() == expected {
        Ok(())
    } else {
        Err(EngineError::ScriptMismatch {
            expected,
            found: table.script(),
        })
    }
}
