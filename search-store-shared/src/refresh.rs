//! Refresh policy for document writes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controls when written documents become visible to search.
///
/// Maps to the store's bulk `refresh` parameter: `false` (default), `true`,
/// or `wait_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Do not refresh; documents become visible on the store's own schedule.
    #[default]
    None,
    /// Refresh the affected shards immediately after the write.
    Immediate,
    /// Block the write until the next scheduled refresh makes it visible.
    WaitFor,
}

impl RefreshPolicy {
    /// The store's wire value for this policy.
    pub fn as_wire_value(&self) -> &'static str {
        match self {
            RefreshPolicy::None => "false",
            RefreshPolicy::Immediate => "true",
            RefreshPolicy::WaitFor => "wait_for",
        }
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "false" | "none" => Ok(RefreshPolicy::None),
            "true" | "immediate" => Ok(RefreshPolicy::Immediate),
            "wait_for" | "wait-for" => Ok(RefreshPolicy::WaitFor),
            other => Err(format!("Unknown refresh policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(RefreshPolicy::default(), RefreshPolicy::None);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(RefreshPolicy::None.as_wire_value(), "false");
        assert_eq!(RefreshPolicy::Immediate.as_wire_value(), "true");
        assert_eq!(RefreshPolicy::WaitFor.as_wire_value(), "wait_for");
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("false".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::None);
        assert_eq!("true".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::Immediate);
        assert_eq!(
            "wait_for".parse::<RefreshPolicy>().unwrap(),
            RefreshPolicy::WaitFor
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("sometimes".parse::<RefreshPolicy>().is_err());
    }
}
