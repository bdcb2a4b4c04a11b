//! Reserved words and their escaping.

use indexmap::IndexSet;

use crate::{DescriptorError, Result};

/// Prefix prepended to reserved identifiers.
pub const ESCAPE_PREFIX: &str = "_";

/// Identifiers a target language forbids as user-defined names.
///
/// Escaping prefixes a reserved name with [`ESCAPE_PREFIX`]. That is only
/// collision free while no reserved word is itself the escaped form of
/// another; [`ReservedWords::check`] enforces it and descriptor construction
/// runs the check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedWords {
    words: IndexSet<String>,
}

impl ReservedWords {
    /// Create a table from a list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add more words to the table.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Check if a name is a reserved word (case-sensitive).
    pub fn is_reserved(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn escape(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{ESCAPE_PREFIX}{name}")
        } else {
            name.to_string()
        }
    }

    /// Verify that no escaped reserved word is itself reserved.
    pub fn check(&self, target: &str) -> Result<()> {
        for word in &self.words {
            let escaped = self.escape(word);
            if self.is_reserved(&escaped) {
                return Err(DescriptorError::EscapeCollision {
                    target: target.to_string(),
                    word: word.clone(),
                    escaped,
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved() {
        let words = ReservedWords::new(["type", "func"]);
        assert!(words.is_reserved("type"));
        assert!(!words.is_reserved("Type"));
        assert_eq!(words.escape("type"), "_type");
        assert_eq!(words.escape("name"), "name");
    }

    #[test]
    fn test_check_passes_without_collision() {
        let words = ReservedWords::new(["type", "func", "_x"]);
        assert!(words.check("demo").is_ok());
    }

    #[test]
    fn test_check_detects_collision() {
        let words = ReservedWords::new(["type", "_type"]);
        let err = words.check("demo").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::EscapeCollision {
                target: "demo".to_string(),
                word: "type".to_string(),
                escaped: "_type".to_string(),
            }
        );
    }

    #[test]
    fn test_extend() {
        let mut words = ReservedWords::new(["type"]);
        words.extend(["Result"]);
        assert_eq!(words.len(), 2);
        assert!(words.is_reserved("Result"));
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["type", "Result"]);
    }
}
