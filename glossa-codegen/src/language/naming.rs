//! Naming conventions for generated identifiers and file names.

use glossa_core::initial_caps;

/// Language-specific case transforms.
///
/// Reserved-word escaping is applied on top of these by
/// [`LanguageDescriptor`](crate::LanguageDescriptor).
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to a type name (e.g., "pet" -> "Pet")
    pub model_to_type: fn(&str) -> String,
    /// Transform a model name to a file name without extension
    pub model_to_file: fn(&str) -> String,
    /// Transform an api class name (e.g., "PetApi") to a file name without extension
    pub api_to_file: fn(&str) -> String,
    /// Transform a property name to a variable name
    pub var_to_name: fn(&str) -> String,
    /// Transform a parameter name to a parameter name
    pub param_to_name: fn(&str) -> String,
    /// Transform an operation id (e.g., "getPetById" -> "GetPetById" in Go)
    pub operation_to_id: fn(&str) -> String,
}

fn verbatim(name: &str) -> String {
    name.to_string()
}

impl NamingConvention {
    /// Conventions of the generator framework's base configuration: model
    /// names and model files get an initial capital, everything else is
    /// emitted as written.
    pub const DEFAULT: NamingConvention = NamingConvention {
        model_to_type: initial_caps,
        model_to_file: initial_caps,
        api_to_file: verbatim,
        var_to_name: verbatim,
        param_to_name: verbatim,
        operation_to_id: verbatim,
    };
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::DEFAULT
    }
}
