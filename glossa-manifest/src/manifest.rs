//! Manifest types and parsing for glossa.toml files.

use std::{collections::BTreeMap, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, SourceContext, TargetName, validate};

/// Root manifest for glossa.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Selected target and its folder overrides
    pub target: TargetConfig,

    /// Extra or overriding abstract-to-target type entries
    #[serde(default)]
    pub type_mappings: BTreeMap<String, String>,

    /// Extra reserved words
    #[serde(default)]
    pub reserved_words: ExtraNames,

    /// Extra target primitives (needed when a mapping introduces a new type)
    #[serde(default)]
    pub primitives: ExtraNames,
}

/// The `[target]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    pub language: TargetName,
    /// Root output folder
    pub output: Option<Spanned<String>>,
    /// Source subfolder; an empty string removes the target's default
    pub source_folder: Option<Spanned<String>>,
    pub api_package: Option<Spanned<String>>,
    pub model_package: Option<Spanned<String>>,
}

/// A table holding an `extra` list of names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraNames {
    #[serde(default)]
    pub extra: Vec<String>,
}

impl TargetConfig {
    pub fn output(&self) -> Option<&str> {
        self.output.as_ref().map(|s| s.get_ref().as_str())
    }

    pub fn source_folder(&self) -> Option<&str> {
        self.source_folder.as_ref().map(|s| s.get_ref().as_str())
    }

    pub fn api_package(&self) -> Option<&str> {
        self.api_package.as_ref().map(|s| s.get_ref().as_str())
    }

    pub fn model_package(&self) -> Option<&str> {
        self.model_package.as_ref().map(|s| s.get_ref().as_str())
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, crate::DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a glossa.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub(crate) fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate::validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest() {
        let manifest: Manifest = r#"
            [target]
            language = "swift"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.target.language, TargetName::Swift);
        assert_eq!(manifest.target.output(), None);
        assert!(manifest.type_mappings.is_empty());
        assert!(manifest.reserved_words.extra.is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let manifest: Manifest = r#"
            [target]
            language = "golang"
            output = "out/go"
            source_folder = ""
            api_package = "client.api"
            model_package = "models"

            [type_mappings]
            currency = "Decimal"

            [reserved_words]
            extra = ["Result"]

            [primitives]
            extra = ["Decimal"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.target.language, TargetName::Go);
        assert_eq!(manifest.target.output(), Some("out/go"));
        assert_eq!(manifest.target.source_folder(), Some(""));
        assert_eq!(manifest.target.api_package(), Some("client.api"));
        assert_eq!(manifest.target.model_package(), Some("models"));
        assert_eq!(
            manifest.type_mappings.get("currency").map(String::as_str),
            Some("Decimal")
        );
        assert_eq!(manifest.reserved_words.extra, vec!["Result"]);
        assert_eq!(manifest.primitives.extra, vec!["Decimal"]);
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let err = r#"
            [target]
            language = "java"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = r#"
            [target]
            language = "swift"
            colour = "blue"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_target_is_parse_error() {
        let err = "[type_mappings]\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
