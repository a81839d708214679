//! Channel summaries

use crate::traits::DepartmentScoped;
use crate::types::DepartmentId;
use serde::{Deserialize, Serialize};

/// Channel visibility
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to every member
    #[default]
    Public,
    /// Visible to members of the channel only
    Private,
}

/// Channel summary as returned by the channels endpoint.
///
/// A channel without a `departmentId` is a campus-wide channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Channel identifier
    pub id: String,

    /// Channel name
    pub name: String,

    /// Optional description shown in the channel header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Visibility of the channel
    #[serde(default)]
    pub visibility: Visibility,

    /// Owning department, absent for campus-wide channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl DepartmentScoped for Channel {
    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }
}
