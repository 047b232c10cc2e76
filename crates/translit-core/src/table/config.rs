use serde::Deserialize;

use super::{MappingTable, TableError, Tier};
use crate::script::Script;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableConfig {
    #[serde(default)]
    names: Vec<(String, String)>,
    #[serde(default)]
    clusters: Vec<(String, String)>,
    #[serde(default)]
    consonants: Vec<(String, String)>,
    #[serde(default)]
    vowels: Vec<(String, String)>,
}

/// Parse TOML text into a `MappingTable` for `script`.
///
/// Entries are laid out tier by tier (`names`, `clusters`, `consonants`,
/// `vowels`), each in document order, whatever order the arrays appear in.
pub fn parse_table_toml(script: Script, toml_str: &str) -> Result<MappingTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let mut builder = MappingTable::builder(script);
    let tiers = [
        (Tier::Name, config.names),
        (Tier::Cluster, config.clusters),
        (Tier::Consonant, config.consonants),
        (Tier::Vowel, config.vowels),
    ];
    for (tier, pairs) in tiers {
        for (key, value) in pairs {
            builder.push(tier, key, value);
        }
    }
    builder.build()
}
