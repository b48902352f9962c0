//! Supported DCR specification versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A DCR specification version with its own validation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecVersion {
    /// Dynamic Client Registration v3.2.
    #[serde(rename = "3.2")]
    V3_2,
    /// Dynamic Client Registration v3.3.
    #[serde(rename = "3.3")]
    V3_3,
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3_2 => write!(f, "3.2"),
            Self::V3_3 => write!(f, "3.3"),
        }
    }
}

/// Error for unrecognized specification versions.
#[derive(Debug, Error)]
#[error("unsupported spec version: {0} (supported: 3.2, 3.3)")]
pub struct SpecVersionError(String);

impl FromStr for SpecVersion {
    type Err = SpecVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.2" => Ok(Self::V3_2),
            "3.3" => Ok(Self::V3_3),
            other => Err(SpecVersionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_versions() {
        assert_eq!("3.2".parse::<SpecVersion>().unwrap(), SpecVersion::V3_2);
        assert_eq!("3.3".parse::<SpecVersion>().unwrap(), SpecVersion::V3_3);
    }

    #[test]
    fn rejects_unknown_version() {
        let error = "3.1".parse::<SpecVersion>().unwrap_err();
        assert!(error.to_string().contains("3.1"));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(SpecVersion::V3_3.to_string(), "3.3");
    }
}
