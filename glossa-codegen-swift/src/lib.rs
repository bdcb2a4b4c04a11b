//! Swift client target for the Glossa code generator.
//!
//! [`descriptor`] returns the ready-to-use target; [`builder`] returns the
//! pre-populated builder so callers can apply configuration before building.

mod naming;
mod types;

use glossa_codegen::{DescriptorBuilder, LanguageDescriptor, Result, SupportingFile};

pub use naming::{RESERVED_WORDS, SWIFT_NAMING};
pub use types::{BUILTIN_TYPES, CONTAINERS, INSTANTIATION_TYPES, PRIMITIVES, TYPE_MAPPING};

/// Target identifier.
pub const NAME: &str = "swift";

/// Subfolder holding the sources of the generated client.
pub const SOURCE_FOLDER: &str = "client";

/// Extension of generated Swift sources.
pub const FILE_EXTENSION: &str = ".swift";

/// Builder pre-populated with the Swift client defaults.
pub fn builder() -> DescriptorBuilder {
    let mut builder = LanguageDescriptor::builder(NAME)
        .help("Generates a Swift client library.")
        .template_dir("swift")
        .output_folder("generated-code/swift")
        .source_folder(Some(SOURCE_FOLDER))
        .api_package("api")
        .model_package("model")
        .model_template("model.mustache", FILE_EXTENSION)
        .api_template("api.mustache", FILE_EXTENSION)
        .reserved_words(RESERVED_WORDS.iter().copied())
        .primitives(PRIMITIVES.iter().copied())
        .builtin_types(BUILTIN_TYPES.iter().copied())
        .type_mappings(TYPE_MAPPING.iter().copied())
        .containers(CONTAINERS)
        .naming(SWIFT_NAMING);

    for (container, ty) in INSTANTIATION_TYPES {
        builder = builder.instantiation_type(*container, *ty);
    }

    for (template, destination) in SUPPORTING_FILES {
        builder = builder.supporting_file(SupportingFile::new(
            *template,
            SOURCE_FOLDER,
            *destination,
        ));
    }

    builder
}

/// The Swift client descriptor with default settings.
pub fn descriptor() -> Result<LanguageDescriptor> {
    builder().build()
}

/// Runtime sources copied next to the generated client (template, destination).
const SUPPORTING_FILES: &[(&str, &str)] = &[
    ("apiInvoker.mustache", "ApiInvoker.swift"),
    ("JsonModel.swift", "JsonModel.swift"),
    ("ApiCallback.swift", "ApiCallback.swift"),
    ("SWGDate.swift", "SWGDate.swift"),
    ("SWGFile.swift", "SWGFile.swift"),
    ("VoidResult.swift", "VoidResult.swift"),
    ("ApiException.swift", "ApiException.swift"),
];
