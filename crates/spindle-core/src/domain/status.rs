//! Task status: a closed enumeration.
//!
//! Design note: the wire format carries the exact variant names
//! ("Pending", "InProgress", "Completed"). Unknown strings are rejected
//! at the boundary by `FromStr`/serde and are never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "InProgress",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Status::Pending),
            "InProgress" => Ok(Status::InProgress),
            "Completed" => Ok(Status::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pending", Status::Pending)]
    #[case("InProgress", Status::InProgress)]
    #[case("Completed", Status::Completed)]
    fn parses_known_values(#[case] raw: &str, #[case] expected: Status) {
        assert_eq!(raw.parse::<Status>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("pending")]
    #[case("Done")]
    #[case("IN_PROGRESS")]
    fn rejects_unknown_values(#[case] raw: &str) {
        assert!(raw.parse::<Status>().is_err());
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn wire_format_matches_variant_names() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"InProgress\"");

        let parsed: Status = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, Status::Completed);

        assert!(serde_json::from_str::<Status>("\"Unknown\"").is_err());
    }
}
