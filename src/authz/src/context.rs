//! Per-check evaluation context

use crate::role::Role;
use campus_core::{DepartmentId, DepartmentScoped, Session};
use serde::{Deserialize, Serialize};

/// Input for a single permission check.
///
/// A context is built fresh from the current session and the resource being
/// acted upon at the moment of the UI action; it is never stored or
/// mutated between checks.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ActorContext {
    /// Role of the acting user
    #[serde(default)]
    pub role: Role,

    /// Department the actor administrates, present for department admins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_department: Option<DepartmentId>,

    /// Department of the target resource, absent for global resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_department: Option<DepartmentId>,
}

impl ActorContext {
    /// Create a context for a role with no department on either side.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Set the actor's department.
    pub fn with_actor_department(mut self, id: impl Into<DepartmentId>) -> Self {
        self.actor_department = Some(id.into());
        self
    }

    /// Set the target resource's department.
    pub fn with_resource_department(mut self, id: impl Into<DepartmentId>) -> Self {
        self.resource_department = Some(id.into());
        self
    }

    /// Build a context from the stored session snapshot.
    ///
    /// The raw role string is normalized here; unknown values become
    /// [`Role::User`] so a malformed session can never grant privilege.
    pub fn from_session(session: &Session) -> Self {
        Self {
            role: Role::from_wire(session.role_str()),
            actor_department: session.department_id,
            resource_department: None,
        }
    }

    /// Context for a check against a specific resource.
    pub fn for_resource<R: DepartmentScoped>(&self, resource: &R) -> Self {
        Self {
            resource_department: resource.department_id(),
            ..*self
        }
    }

    /// Whether the actor's department matches the resource's.
    ///
    /// Absence of either id is a mismatch, never a default-allow.
    pub fn department_match(&self) -> bool {
        matches!(
            (self.actor_department, self.resource_department),
            (Some(actor), Some(resource)) if actor == resource
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_match_requires_both_ids() {
        let base = ActorContext::new(Role::DepartmentAdmin);
        assert!(!base.department_match());
        assert!(!base.with_actor_department(1u32).department_match());
        assert!(!base.with_resource_department(1u32).department_match());
        assert!(!base
            .with_actor_department(1u32)
            .with_resource_department(2u32)
            .department_match());
        assert!(base
            .with_actor_department(1u32)
            .with_resource_department(1u32)
            .department_match());
    }

    #[test]
    fn session_with_unknown_role_yields_user_context() {
        let session = Session::from_json(
            r#"{"name":"Kim","email":"kim@campus.edu","role":"moderator"}"#,
        )
        .unwrap();
        let ctx = ActorContext::from_session(&session);
        assert_eq!(ctx.role, Role::User);
        assert_eq!(ctx.actor_department, None);
    }
}
