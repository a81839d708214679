//! Department identifiers and records

use crate::traits::DepartmentScoped;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric department identifier as issued by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DepartmentId(pub u32);

impl From<u32> for DepartmentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department record as returned by the departments endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Department identifier
    pub id: DepartmentId,

    /// Department name (e.g., "Computer Science")
    pub name: String,

    /// Short code (e.g., "CS")
    pub code: String,

    /// Optional long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Faculty the department belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,

    /// Study levels offered (e.g., "100", "200")
    #[serde(default)]
    pub levels: Vec<String>,

    /// Whether the department is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl DepartmentScoped for Department {
    fn department_id(&self) -> Option<DepartmentId> {
        Some(self.id)
    }
}
