use miette::Diagnostic;
use thiserror::Error;

/// Result type for descriptor construction and lookup.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors raised while building or looking up target descriptors.
///
/// All of these surface at startup; type rendering itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DescriptorError {
    #[error("target descriptor has no name")]
    #[diagnostic(code(glossa::missing_name))]
    MissingName,

    #[error("escaping reserved word '{word}' yields '{escaped}', which is also reserved in '{target}'")]
    #[diagnostic(
        code(glossa::escape_collision),
        help("remove '{escaped}' from the reserved words of '{target}'")
    )]
    EscapeCollision {
        target: String,
        word: String,
        escaped: String,
    },

    #[error("type mapping '{from}' -> '{to}' in '{target}' does not resolve to a known target type")]
    #[diagnostic(
        code(glossa::dangling_mapping),
        help("declare '{to}' as a primitive or builtin type of '{target}'")
    )]
    DanglingMapping {
        target: String,
        from: String,
        to: String,
    },

    #[error("target '{name}' is already registered")]
    #[diagnostic(code(glossa::duplicate_target))]
    DuplicateTarget { name: String },

    #[error("unknown target '{name}'")]
    #[diagnostic(code(glossa::unknown_target), help("available targets: {known}"))]
    UnknownTarget { name: String, known: String },
}
