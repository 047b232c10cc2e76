//! Latin-to-script transliteration for engraving names.
//!
//! Converts a name typed on a Latin keyboard into an approximate Arabic,
//! Japanese kana or Hindi Devanagari rendering. Pure, synchronous and
//! allocation-light: safe to call on every keystroke from any thread.

pub mod engine;
pub mod matcher;
pub mod script;
pub mod settings;
pub mod table;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use engine::{Engine, EngineError};
pub use matcher::Matcher;
pub use script::{Script, TextDirection, UnsupportedScriptError};
pub use table::{MappingTable, TableBuilder, TableError, Tier};
pub use unicode::{is_in_target_script, is_latin_text};
