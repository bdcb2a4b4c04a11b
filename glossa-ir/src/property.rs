//! The abstract property tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An abstract schema property: a named primitive or a container of one.
///
/// Map keys are always strings in the abstract schema, so only the value
/// type is carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Property {
    /// A primitive or model name from the abstract vocabulary (e.g. "integer", "Pet").
    Primitive(String),
    /// A list of the inner property.
    Array(Box<Property>),
    /// A string-keyed map of the inner property.
    Map(Box<Property>),
}

impl Property {
    /// Create a primitive property.
    pub fn primitive(name: impl Into<String>) -> Self {
        Property::Primitive(name.into())
    }

    /// Create an array of `inner`.
    pub fn array(inner: Property) -> Self {
        Property::Array(Box::new(inner))
    }

    /// Create a string-keyed map of `inner`.
    pub fn map(inner: Property) -> Self {
        Property::Map(Box::new(inner))
    }

    /// Abstract name of the outermost type ("array", "map" or the primitive name).
    pub fn kind_name(&self) -> &str {
        match self {
            Property::Primitive(name) => name,
            Property::Array(_) => "array",
            Property::Map(_) => "map",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Primitive(name) => f.write_str(name),
            Property::Array(inner) => write!(f, "array<{inner}>"),
            Property::Map(inner) => write!(f, "map<{inner}>"),
        }
    }
}

impl From<Property> for String {
    fn from(property: Property) -> Self {
        property.to_string()
    }
}

impl TryFrom<String> for Property {
    type Error = crate::IrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
