//! Go client target for the Glossa code generator.
//!
//! [`descriptor`] returns the ready-to-use target; [`builder`] returns the
//! pre-populated builder so callers can apply configuration before building.

mod naming;
mod types;

use glossa_codegen::{DescriptorBuilder, LanguageDescriptor, Result};

pub use naming::{GO_NAMING, RESERVED_WORDS};
pub use types::{CONTAINERS, PRIMITIVES, TYPE_MAPPING};

/// Target identifier.
pub const NAME: &str = "go";

/// Extension of generated Go sources.
pub const FILE_EXTENSION: &str = ".go";

/// Builder pre-populated with the Go client defaults.
///
/// Go packages live directly under the output folder, so there is no source
/// subfolder.
pub fn builder() -> DescriptorBuilder {
    LanguageDescriptor::builder(NAME)
        .help("Generates a Go client library.")
        .template_dir("golang")
        .output_folder("generated-code/golang")
        .api_package("api")
        .model_package("model")
        .model_template("model.mustache", FILE_EXTENSION)
        .api_template("api.mustache", FILE_EXTENSION)
        .reserved_words(RESERVED_WORDS.iter().copied())
        .primitives(PRIMITIVES.iter().copied())
        .type_mappings(TYPE_MAPPING.iter().copied())
        .containers(CONTAINERS)
        .naming(GO_NAMING)
}

/// The Go client descriptor with default settings.
pub fn descriptor() -> Result<LanguageDescriptor> {
    builder().build()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_descriptor_metadata() {
        let go = descriptor().unwrap();
        assert_eq!(go.name(), "go");
        assert_eq!(go.help(), "Generates a Go client library.");
        assert_eq!(go.template_dir(), "golang");
        assert!(go.supporting_files().is_empty());
    }

    #[test]
    fn test_folders() {
        let go = descriptor().unwrap();
        assert_eq!(go.paths().source_folder(), None);
        assert_eq!(go.api_file_folder(), Path::new("generated-code/golang/api"));
        assert_eq!(
            go.model_file_folder(),
            Path::new("generated-code/golang/model")
        );
    }

    #[test]
    fn test_nested_packages() {
        let go = builder().api_package("api.sub").build().unwrap();
        assert_eq!(
            go.api_file_folder(),
            Path::new("generated-code/golang/api/sub")
        );
    }
}
