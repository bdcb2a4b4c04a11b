//! Built-in targets and configuration overrides.
//!
//! Centralizes which target factories exist and how a glossa.toml is applied
//! to a target before its descriptor is built.

use glossa_codegen::{DescriptorBuilder, LanguageDescriptor, Result, TargetRegistry};
use glossa_manifest::{Manifest, TargetName};

/// Pre-populated builder for a built-in target.
pub fn builder(name: TargetName) -> DescriptorBuilder {
    match name {
        TargetName::Swift => glossa_codegen_swift::builder(),
        TargetName::Go => glossa_codegen_go::builder(),
    }
}

/// Registry holding every built-in target with default settings.
pub fn registry() -> Result<TargetRegistry> {
    let mut registry = TargetRegistry::new();
    for name in TargetName::ALL {
        registry.register(builder(name).build()?)?;
    }
    Ok(registry)
}

/// Build the descriptor selected by a manifest, with its overrides applied.
///
/// The usual construction checks still run, so configured reserved words or
/// mappings that break a target's invariants are rejected here.
pub fn configure(manifest: &Manifest) -> Result<LanguageDescriptor> {
    let target = &manifest.target;
    let mut builder = builder(target.language);

    if let Some(output) = target.output() {
        builder = builder.output_folder(output);
    }
    if let Some(source) = target.source_folder() {
        builder = builder.source_folder(Some(source));
    }
    if let Some(package) = target.api_package() {
        builder = builder.api_package(package);
    }
    if let Some(package) = target.model_package() {
        builder = builder.model_package(package);
    }

    tracing::debug!(
        target_name = %target.language,
        mappings = manifest.type_mappings.len(),
        reserved = manifest.reserved_words.extra.len(),
        "applying glossa.toml overrides"
    );

    builder
        .reserved_words(manifest.reserved_words.extra.iter().cloned())
        .primitives(manifest.primitives.extra.iter().cloned())
        .type_mappings(
            manifest
                .type_mappings
                .iter()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )
        .build()
}
