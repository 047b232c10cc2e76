use crate::script::Script;

const ARABIC_TOML: &str = include_str!("data/arabic.toml");
const JAPANESE_TOML: &str = include_str!("data/japanese.toml");
const HINDI_TOML: &str = include_str!("data/hindi.toml");

/// Returns the embedded default table TOML for `script`.
pub fn default_toml(script: Script) -> &'static str {
    match script {
        Script::Arabic => ARABIC_TOML,
        Script::Japanese => JAPANESE_TOML,
        Script::Hindi => HINDI_TOML,
    }
}
