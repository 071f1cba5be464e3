//! Logical stack status model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a remote stack at one observation point.
///
/// Provider-reported statuses pass through verbatim; states this crate
/// has no variant for are preserved in [`StackStatus::Other`] so new
/// provider states never get misread as something else.
///
/// `NotFound` is a purely local sentinel. The provisioning service never
/// reports it; the status resolver synthesizes it from the provider's
/// validation-class "no such stack" error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StackStatus {
    NotFound,
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackInProgress,
    RollbackComplete,
    RollbackFailed,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    UpdateInProgress,
    UpdateComplete,
    /// Any provider-defined status without a dedicated variant.
    Other(String),
}

impl StackStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StackStatus::NotFound => "NOT_FOUND",
            StackStatus::CreateInProgress => "CREATE_IN_PROGRESS",
            StackStatus::CreateComplete => "CREATE_COMPLETE",
            StackStatus::CreateFailed => "CREATE_FAILED",
            StackStatus::RollbackInProgress => "ROLLBACK_IN_PROGRESS",
            StackStatus::RollbackComplete => "ROLLBACK_COMPLETE",
            StackStatus::RollbackFailed => "ROLLBACK_FAILED",
            StackStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            StackStatus::DeleteComplete => "DELETE_COMPLETE",
            StackStatus::DeleteFailed => "DELETE_FAILED",
            StackStatus::UpdateInProgress => "UPDATE_IN_PROGRESS",
            StackStatus::UpdateComplete => "UPDATE_COMPLETE",
            StackStatus::Other(status) => status,
        }
    }
}

impl From<&str> for StackStatus {
    fn from(value: &str) -> Self {
        match value {
            "NOT_FOUND" => StackStatus::NotFound,
            "CREATE_IN_PROGRESS" => StackStatus::CreateInProgress,
            "CREATE_COMPLETE" => StackStatus::CreateComplete,
            "CREATE_FAILED" => StackStatus::CreateFailed,
            "ROLLBACK_IN_PROGRESS" => StackStatus::RollbackInProgress,
            "ROLLBACK_COMPLETE" => StackStatus::RollbackComplete,
            "ROLLBACK_FAILED" => StackStatus::RollbackFailed,
            "DELETE_IN_PROGRESS" => StackStatus::DeleteInProgress,
            "DELETE_COMPLETE" => StackStatus::DeleteComplete,
            "DELETE_FAILED" => StackStatus::DeleteFailed,
            "UPDATE_IN_PROGRESS" => StackStatus::UpdateInProgress,
            "UPDATE_COMPLETE" => StackStatus::UpdateComplete,
            other => StackStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for StackStatus {
    fn from(value: String) -> Self {
        StackStatus::from(value.as_str())
    }
}

impl From<StackStatus> for String {
    fn from(value: StackStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_round_trip() {
        for raw in ["CREATE_COMPLETE", "DELETE_IN_PROGRESS", "ROLLBACK_COMPLETE"] {
            assert_eq!(StackStatus::from(raw).as_str(), raw);
        }
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let status = StackStatus::from("UPDATE_ROLLBACK_COMPLETE");
        assert_eq!(
            status,
            StackStatus::Other("UPDATE_ROLLBACK_COMPLETE".to_string())
        );
        assert_eq!(status.to_string(), "UPDATE_ROLLBACK_COMPLETE");
    }

    #[test]
    fn not_found_has_a_stable_wire_form() {
        assert_eq!(StackStatus::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(StackStatus::from("NOT_FOUND"), StackStatus::NotFound);
    }
}
