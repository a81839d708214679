//! Decisions and denial reasons

use crate::action::Action;
use crate::context::ActorContext;
use crate::policy;
use crate::role::Role;
use serde::Serialize;
use tracing::debug;

/// Outcome of a single permission check.
///
/// Carries the denial message for the UI to surface; `reason` is `None`
/// when the action is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Action that was checked
    pub action: Action,

    /// Whether the action is allowed
    pub allowed: bool,

    /// Human-readable denial reason, absent when allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl Decision {
    /// Create an allow decision.
    pub fn allow(action: Action) -> Self {
        Self {
            action,
            allowed: true,
            reason: None,
        }
    }

    /// Create a deny decision with a reason.
    pub fn deny(action: Action, reason: &'static str) -> Self {
        Self {
            action,
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Role-aware denial message for an action.
///
/// Total over both inputs; the message explains the restriction in terms
/// of the actor's own role where the distinction matters.
pub fn denial_reason(action: Action, role: Role) -> &'static str {
    match action {
        Action::PostToHomeFeed => {
            "Only Power Admins and Admins can post to the home feed. \
             Contact an administrator if you need posting privileges."
        }
        Action::PostToChannel => match role {
            Role::DepartmentAdmin => {
                "As a Department Admin, you can only post to channels in your department."
            }
            Role::User => {
                "Only administrators can create posts. \
                 You can like, comment, and share existing posts."
            }
            _ => "You do not have permission to post in this channel.",
        },
        Action::CreateChannel => "Only Power Admins and Admins can create channels.",
        Action::CreateEvent => "You do not have permission to create events.",
        Action::ManageUsers => "Only Power Admins can manage user roles.",
        Action::DeletePost => "You do not have permission to delete this post.",
    }
}

/// Evaluate an action against a context.
///
/// The single enforcement entry point: dispatches to the predicate for the
/// action and attaches the denial reason on refusal. Apart from a debug
/// log line the call is pure; checking twice yields the same decision.
pub fn evaluate(action: Action, ctx: &ActorContext) -> Decision {
    let allowed = policy::allows(action, ctx);
    debug!(
        action = action.as_str(),
        role = ctx.role.as_str(),
        allowed,
        "permission check"
    );

    if allowed {
        Decision::allow(action)
    } else {
        Decision::deny(action, denial_reason(action, ctx.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_decisions_carry_the_role_specific_reason() {
        let ctx = ActorContext::new(Role::DepartmentAdmin)
            .with_actor_department(1u32)
            .with_resource_department(2u32);

        let decision = evaluate(Action::PostToChannel, &ctx);
        assert!(!decision.allowed);
        assert_eq!(
            decision.reason,
            Some(denial_reason(Action::PostToChannel, Role::DepartmentAdmin))
        );
    }

    #[test]
    fn allowed_decisions_have_no_reason() {
        let decision =
            evaluate(Action::CreateChannel, &ActorContext::new(Role::Admin));
        assert!(decision.allowed);
        assert_eq!(decision.reason, None);
    }

    #[test]
    fn decision_serializes_without_reason_when_allowed() {
        let decision = Decision::allow(Action::CreateEvent);
        let json = serde_json::to_string(&decision).unwrap();
        assert_eq!(json, r#"{"action":"create-event","allowed":true}"#);
    }
}
