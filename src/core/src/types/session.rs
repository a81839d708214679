//! Authenticated-session snapshot

use crate::error::Result;
use crate::types::DepartmentId;
use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user as persisted by the mobile client.
///
/// The role arrives as a free-form string from the backend and is stored
/// verbatim; interpreting it (including default-deny normalization of
/// unknown values) is the authorization boundary's job, not the session's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Display name of the user
    pub name: String,

    /// Login email
    pub email: String,

    /// Raw role string from the backend ("power", "admin", "d-admin", "user")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Department the user administrates, present for department admins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl Session {
    /// Parse a stored session blob.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize the session for storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Raw role string, if the backend supplied one.
    pub fn role_str(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
