//! Check command report data structures.

use super::output::{Output, Report};

/// Result of checking one target.
#[derive(Debug)]
pub struct CheckEntry {
    pub target: String,
    pub reserved_words: usize,
    pub type_mappings: usize,
    /// Error message if the target failed its checks.
    pub error: Option<String>,
}

/// Report from descriptor self-checks.
#[derive(Debug)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Whether every target passed.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.error.is_none())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            match &entry.error {
                Some(error) => out.warning(&format!("error: {}: {}", entry.target, error)),
                None => out.preformatted(&format!(
                    "✓ {} ({} reserved words, {} type mappings)",
                    entry.target, entry.reserved_words, entry.type_mappings
                )),
            }
        }
    }
}
