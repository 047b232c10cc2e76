//! Name transliteration for engraving: Latin input rendered in Arabic,
//! Japanese kana or Hindi Devanagari.
//!
//! This crate re-exports the `translit_core` API and adds optional trace
//! logging (`trace` feature).
//!
//! ```
//! use engrave::{Engine, Script};
//!
//! let engine = Engine::new();
//! assert_eq!(engine.transliterate("Zakariya", Script::Arabic), "زكريا");
//! assert!(engrave::is_in_target_script("abcد", Script::Arabic));
//! ```

mod trace_init;

pub use trace_init::init_tracing;

pub use translit_core::engine::{Engine, EngineError};
pub use translit_core::matcher::{normalize, Matcher};
pub use translit_core::script::{Script, TextDirection, UnsupportedScriptError};
pub use translit_core::settings::{
    parse_settings_toml, EngineSettings, SettingsError, SuggestionSettings,
};
pub use translit_core::table::{
    default_toml, parse_table_toml, Entry, MappingTable, TableBuilder, TableError, Tier,
};
pub use translit_core::unicode::{is_in_target_script, is_latin_text};

/// Engine version string.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
