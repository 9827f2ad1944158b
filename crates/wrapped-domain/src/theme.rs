use serde::{Deserialize, Serialize};
use std::fmt;

const THEME_PREFIX: &str = "theme-";

/// Style tag of a card. Stored as the bare suffix so the rendered class is
/// always exactly one `theme-<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Theme(String);

impl Theme {
    pub fn new(raw: &str) -> Self {
        let mut suffix = raw.trim();
        while let Some(rest) = suffix.strip_prefix(THEME_PREFIX) {
            suffix = rest;
        }
        Self(suffix.to_string())
    }

    /// Theme used for records that never declared one.
    pub fn unknown() -> Self {
        Self("unknown".to_string())
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    pub fn class_name(&self) -> String {
        format!("{}{}", THEME_PREFIX, self.0)
    }
}

impl From<String> for Theme {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.class_name()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", THEME_PREFIX, self.0)
    }
}
