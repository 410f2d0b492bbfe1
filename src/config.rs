//! Generator configuration: the root definition name and the naming suffix
//! every nested definition name is derived with.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_ROOT_NAME: &str = "GeneratedSerializer";
pub const DEFAULT_SUFFIX: &str = "Serializer";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid")
});

pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the top-level definition.
    pub root_name: String,
    /// Stripped from a parent name (when present) before a key is appended,
    /// then re-appended to form the child name.
    pub suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Root name must be an identifier; the suffix may be empty but otherwise
    /// has to be an identifier too.
    ///
    /// JSON keys are not checked here: they are emitted verbatim as field names
    /// and folded into nested class names, so a key like `a-b` yields output
    /// that is not valid Python. Emission logs a warning for each such name.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.root_name) {
            return Err(Error::InvalidName { what: "root name", value: self.root_name.clone() });
        }
        if !self.suffix.is_empty() && !is_identifier(&self.suffix) {
            return Err(Error::InvalidName { what: "suffix", value: self.suffix.clone() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_name, "GeneratedSerializer");
        assert_eq!(config.suffix, "Serializer");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_identifier_root_name() {
        let config = GeneratorConfig::new().with_root_name("1Root");
        assert!(matches!(config.validate(), Err(Error::InvalidName { what: "root name", .. })));
        let config = GeneratorConfig::new().with_root_name("My Root");
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_suffix_is_allowed() {
        let config = GeneratorConfig::new().with_root_name("Root").with_suffix("");
        assert!(config.validate().is_ok());
        let config = GeneratorConfig::new().with_suffix("-x");
        assert!(matches!(config.validate(), Err(Error::InvalidName { what: "suffix", .. })));
    }

    #[test]
    fn identifier_check() {
        assert!(is_identifier("RootAbSerializer"));
        assert!(is_identifier("_private"));
        assert!(!is_identifier("RootA-bSerializer"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"root_name": "Root"}"#).unwrap();
        assert_eq!(config.root_name, "Root");
        assert_eq!(config.suffix, DEFAULT_SUFFIX);
    }
}
