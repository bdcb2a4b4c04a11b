use thiserror::Error;

/// Errors raised while building a [`Property`](crate::Property) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    #[error("unknown container kind '{kind}' in '{input}', expected 'array' or 'map'")]
    UnknownContainer { kind: String, input: String },

    #[error("expected a type name at offset {offset} in '{input}'")]
    ExpectedName { offset: usize, input: String },

    #[error("unclosed '<' in '{input}'")]
    Unclosed { input: String },

    #[error("type expression nests more than {limit} containers")]
    TooDeep { limit: usize, input: String },

    #[error("unexpected trailing input '{rest}' in '{input}'")]
    TrailingInput { rest: String, input: String },
}
