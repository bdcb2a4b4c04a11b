//! Target names accepted in glossa.toml.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Targets that can be selected in `[target] language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetName {
    /// Swift client
    Swift,
    /// Go client
    #[serde(alias = "golang")]
    Go,
}

impl TargetName {
    /// All known targets.
    pub const ALL: [TargetName; 2] = [TargetName::Swift, TargetName::Go];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetName::Swift => "swift",
            TargetName::Go => "go",
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swift" => Ok(TargetName::Swift),
            "go" | "golang" => Ok(TargetName::Go),
            _ => Err(format!("unknown target '{}', expected 'swift' or 'go'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TargetName::from_str("swift").unwrap(), TargetName::Swift);
        assert_eq!(TargetName::from_str("Swift").unwrap(), TargetName::Swift);
        assert_eq!(TargetName::from_str("go").unwrap(), TargetName::Go);
        assert_eq!(TargetName::from_str("golang").unwrap(), TargetName::Go);
        assert!(TargetName::from_str("java").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetName::Swift.to_string(), "swift");
        assert_eq!(TargetName::Go.to_string(), "go");
    }

    #[test]
    fn test_deserialize() {
        let swift: TargetName = serde_json::from_str(r#""swift""#).unwrap();
        assert_eq!(swift, TargetName::Swift);

        let go: TargetName = serde_json::from_str(r#""golang""#).unwrap();
        assert_eq!(go, TargetName::Go);
    }
}
