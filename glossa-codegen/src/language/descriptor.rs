//! The per-target descriptor and its builder.
//!
//! A descriptor is built once at startup by a target factory and consulted
//! read-only afterwards. It holds no interior mutability, so one instance can
//! be shared across concurrent generation tasks.
//!
//! # Example
//!
//! ```
//! use glossa_codegen::{ContainerSyntax, LanguageDescriptor, Wrap};
//! use glossa_ir::Property;
//!
//! let descriptor = LanguageDescriptor::builder("demo")
//!     .primitives(["Int", "String"])
//!     .type_mapping("integer", "Int")
//!     .type_mapping("string", "String")
//!     .containers(ContainerSyntax {
//!         array: Wrap::new("[", "]"),
//!         map: Wrap::new("[String: ", "]"),
//!         map_key: "String",
//!     })
//!     .build()
//!     .unwrap();
//!
//! let prop: Property = "map<array<integer>>".parse().unwrap();
//! assert_eq!(descriptor.render(&prop), "[String: [Int]]");
//! ```

use std::path::PathBuf;

use glossa_core::{CodegenKind, initial_caps};
use glossa_ir::Property;

use super::{
    ContainerSyntax, NamingConvention, PathResolver, ReservedWords, TypeMapping, TypeResolver,
};
use crate::{DescriptorError, Result};

/// A template rendered once per api or model, and the extension of its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Template identifier (e.g., "model.mustache")
    pub template: String,
    /// Output extension including the dot (e.g., ".swift")
    pub extension: String,
}

/// A file copied or rendered once per run, independent of the api model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingFile {
    /// Source template path relative to the template directory
    pub template: String,
    /// Destination folder relative to the output folder (may be empty)
    pub folder: String,
    /// Destination file name
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }
}

/// Everything one target language declares to the generation engine.
#[derive(Debug, Clone)]
pub struct LanguageDescriptor {
    name: String,
    help: String,
    kind: CodegenKind,
    template_dir: String,
    reserved: ReservedWords,
    resolver: TypeResolver,
    paths: PathResolver,
    model_templates: Vec<TemplateFile>,
    api_templates: Vec<TemplateFile>,
    supporting_files: Vec<SupportingFile>,
}

impl LanguageDescriptor {
    /// Start building a descriptor for the target `name`.
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(name)
    }

    /// Target identifier (e.g., "swift", "go").
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn kind(&self) -> CodegenKind {
        self.kind
    }

    /// Directory the engine loads this target's templates from.
    pub fn template_dir(&self) -> &str {
        &self.template_dir
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    pub fn naming(&self) -> &NamingConvention {
        &self.resolver.naming
    }

    pub fn model_templates(&self) -> &[TemplateFile] {
        &self.model_templates
    }

    pub fn api_templates(&self) -> &[TemplateFile] {
        &self.api_templates
    }

    pub fn supporting_files(&self) -> &[SupportingFile] {
        &self.supporting_files
    }

    // -- Types --

    /// Render the target type declaration of a property.
    pub fn render(&self, property: &Property) -> String {
        self.resolver.render(property)
    }

    pub fn instantiation_type(&self, property: &Property) -> String {
        self.resolver.instantiation_type(property)
    }

    pub fn swagger_type(&self, property: &Property) -> String {
        self.resolver.swagger_type(property)
    }

    pub fn resolve_primitive(&self, name: &str) -> String {
        self.resolver.resolve_primitive(name)
    }

    pub fn to_model_name(&self, name: &str) -> String {
        self.resolver.to_model_name(name)
    }

    // -- Identifiers --

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.is_reserved(name)
    }

    /// Escape `name` if it is a reserved word.
    pub fn escape_reserved_word(&self, name: &str) -> String {
        self.reserved.escape(name)
    }

    pub fn to_var_name(&self, name: &str) -> String {
        self.reserved.escape(&(self.naming().var_to_name)(name))
    }

    pub fn to_param_name(&self, name: &str) -> String {
        self.reserved.escape(&(self.naming().param_to_name)(name))
    }

    pub fn to_operation_id(&self, operation_id: &str) -> String {
        (self.naming().operation_to_id)(operation_id)
    }

    /// Api class name for a tag ("pet" -> "PetApi", "" -> "DefaultApi").
    pub fn to_api_name(&self, tag: &str) -> String {
        if tag.is_empty() {
            "DefaultApi".to_string()
        } else {
            format!("{}Api", initial_caps(tag))
        }
    }

    // -- Files --

    pub fn to_model_filename(&self, name: &str) -> String {
        (self.naming().model_to_file)(name)
    }

    pub fn to_api_filename(&self, tag: &str) -> String {
        (self.naming().api_to_file)(&self.to_api_name(tag))
    }

    pub fn api_file_folder(&self) -> PathBuf {
        self.paths.api_file_folder()
    }

    pub fn model_file_folder(&self) -> PathBuf {
        self.paths.model_file_folder()
    }

    /// Output path of an api file generated from `template` for `tag`.
    pub fn api_filename(&self, template: &TemplateFile, tag: &str) -> PathBuf {
        self.api_file_folder()
            .join(format!("{}{}", self.to_api_filename(tag), template.extension))
    }

    /// Output path of a model file generated from `template` for `name`.
    pub fn model_filename(&self, template: &TemplateFile, name: &str) -> PathBuf {
        self.model_file_folder()
            .join(format!("{}{}", self.to_model_filename(name), template.extension))
    }

    pub fn supporting_file_path(&self, file: &SupportingFile) -> PathBuf {
        self.paths
            .supporting_file_path(&file.folder, &file.destination)
    }

    /// Re-run the construction checks.
    pub fn validate(&self) -> Result<()> {
        validate(&self.name, &self.reserved, &self.resolver)
    }
}

fn validate(name: &str, reserved: &ReservedWords, resolver: &TypeResolver) -> Result<()> {
    reserved.check(name)?;
    for (from, to) in resolver.mapping.iter() {
        if !resolver.is_known_type(to) {
            return Err(DescriptorError::DanglingMapping {
                target: name.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }
    Ok(())
}

/// Single-shot builder for a [`LanguageDescriptor`].
///
/// Every table is populated here; [`build`](Self::build) consumes the builder
/// and checks the descriptor invariants.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    name: String,
    help: String,
    kind: CodegenKind,
    template_dir: Option<String>,
    output_folder: PathBuf,
    source_folder: Option<String>,
    api_package: String,
    model_package: String,
    reserved: ReservedWords,
    resolver: TypeResolver,
    model_templates: Vec<TemplateFile>,
    api_templates: Vec<TemplateFile>,
    supporting_files: Vec<SupportingFile>,
}

impl DescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            output_folder: PathBuf::from("generated-code").join(&name),
            name,
            help: String::new(),
            kind: CodegenKind::Client,
            template_dir: None,
            source_folder: None,
            api_package: "api".to_string(),
            model_package: "model".to_string(),
            reserved: ReservedWords::default(),
            resolver: TypeResolver {
                mapping: TypeMapping::new(),
                instantiation: TypeMapping::new(),
                primitives: Default::default(),
                builtins: Default::default(),
                containers: ContainerSyntax::default(),
                naming: NamingConvention::default(),
            },
            model_templates: Vec::new(),
            api_templates: Vec::new(),
            supporting_files: Vec::new(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn kind(mut self, kind: CodegenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Template directory; defaults to the target name.
    pub fn template_dir(mut self, dir: impl Into<String>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = folder.into();
        self
    }

    /// Source subfolder between the output folder and the packages.
    /// `None` or an empty string removes it.
    pub fn source_folder(mut self, folder: Option<impl Into<String>>) -> Self {
        self.source_folder = folder.map(Into::into).filter(|f: &String| !f.is_empty());
        self
    }

    pub fn api_package(mut self, package: impl Into<String>) -> Self {
        self.api_package = package.into();
        self
    }

    pub fn model_package(mut self, package: impl Into<String>) -> Self {
        self.model_package = package.into();
        self
    }

    pub fn reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(words);
        self
    }

    /// Target types that must not be reformatted or aliased further.
    pub fn primitives<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolver
            .primitives
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Target types emitted verbatim, e.g. types provided by supporting files.
    pub fn builtin_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolver
            .builtins
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn type_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.resolver.mapping.insert(from, to);
        self
    }

    pub fn type_mappings<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (from, to) in entries {
            self.resolver.mapping.insert(from, to);
        }
        self
    }

    /// Concrete container type for "array" or "map".
    pub fn instantiation_type(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.resolver.instantiation.insert(from, to);
        self
    }

    pub fn containers(mut self, syntax: ContainerSyntax) -> Self {
        self.resolver.containers = syntax;
        self
    }

    pub fn naming(mut self, naming: NamingConvention) -> Self {
        self.resolver.naming = naming;
        self
    }

    pub fn model_template(
        mut self,
        template: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        self.model_templates.push(TemplateFile {
            template: template.into(),
            extension: extension.into(),
        });
        self
    }

    pub fn api_template(
        mut self,
        template: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        self.api_templates.push(TemplateFile {
            template: template.into(),
            extension: extension.into(),
        });
        self
    }

    pub fn supporting_file(mut self, file: SupportingFile) -> Self {
        self.supporting_files.push(file);
        self
    }

    /// Finish the descriptor, checking reserved-word escaping and that every
    /// type mapping lands on a known target type.
    pub fn build(self) -> Result<LanguageDescriptor> {
        if self.name.is_empty() {
            return Err(DescriptorError::MissingName);
        }
        validate(&self.name, &self.reserved, &self.resolver)?;

        tracing::debug!(
            target_name = %self.name,
            reserved = self.reserved.len(),
            mappings = self.resolver.mapping.len(),
            supporting = self.supporting_files.len(),
            "built language descriptor"
        );

        Ok(LanguageDescriptor {
            template_dir: self.template_dir.unwrap_or_else(|| self.name.clone()),
            paths: PathResolver::new(
                self.output_folder,
                self.source_folder,
                self.api_package,
                self.model_package,
            ),
            name: self.name,
            help: self.help,
            kind: self.kind,
            reserved: self.reserved,
            resolver: self.resolver,
            model_templates: self.model_templates,
            api_templates: self.api_templates,
            supporting_files: self.supporting_files,
        })
    }
}
