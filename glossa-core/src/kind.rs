//! Kinds of generators a target can be registered as.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a target generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodegenKind {
    /// Client library that calls the described API.
    Client,
    /// Server stubs implementing the described API.
    Server,
    /// Documentation output.
    Documentation,
}

impl CodegenKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodegenKind::Client => "client",
            CodegenKind::Server => "server",
            CodegenKind::Documentation => "documentation",
        }
    }
}

impl fmt::Display for CodegenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(CodegenKind::Client.as_str(), "client");
        assert_eq!(CodegenKind::Server.as_str(), "server");
        assert_eq!(CodegenKind::Documentation.to_string(), "documentation");
    }
}
