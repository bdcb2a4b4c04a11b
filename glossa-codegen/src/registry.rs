//! Mapping from target name to descriptor.
//!
//! The registry is filled explicitly at startup by calling each target's
//! factory; there is no global registration.
//!
//! ```ignore
//! let mut registry = TargetRegistry::new();
//! registry.register(glossa_codegen_swift::descriptor()?)?;
//! registry.register(glossa_codegen_go::descriptor()?)?;
//!
//! let swift = registry.require("swift")?;
//! ```

use indexmap::IndexMap;

use crate::{DescriptorError, LanguageDescriptor, Result};

/// Registered target descriptors, keyed by lowercase name in registration order.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: IndexMap<String, LanguageDescriptor>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its name. Names are unique.
    pub fn register(&mut self, descriptor: LanguageDescriptor) -> Result<()> {
        let key = descriptor.name().to_lowercase();
        if self.targets.contains_key(&key) {
            return Err(DescriptorError::DuplicateTarget { name: key });
        }
        tracing::debug!(target_name = %key, "registered target");
        self.targets.insert(key, descriptor);
        Ok(())
    }

    /// Look up a target by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.targets.get(&name.to_lowercase())
    }

    /// Like [`get`](Self::get), but reports the available targets on failure.
    pub fn require(&self, name: &str) -> Result<&LanguageDescriptor> {
        self.get(name).ok_or_else(|| DescriptorError::UnknownTarget {
            name: name.to_string(),
            known: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
