//! Target writing systems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A target script for transliteration. Closed set: every engine operation
/// is total over these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Japanese,
    Hindi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Returned when a string does not name one of the supported scripts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported script: {0:?}")]
pub struct UnsupportedScriptError(pub String);

impl Script {
    pub const ALL: [Script; 3] = [Script::Arabic, Script::Japanese, Script::Hindi];

    /// Lowercase identifier, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Script::Arabic => "arabic",
            Script::Japanese => "japanese",
            Script::Hindi => "hindi",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Script::Arabic => "Arabic",
            Script::Japanese => "Japanese",
            Script::Hindi => "Hindi",
        }
    }

    /// Direction an engraving in this script is laid out in.
    pub fn direction(self) -> TextDirection {
        match self {
            Script::Arabic => TextDirection::RightToLeft,
            Script::Japanese | Script::Hindi => TextDirection::LeftToRight,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = UnsupportedScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Script::ALL
            .into_iter()
            .find(|script| script.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnsupportedScriptError(s.to_string()))
    }
}
