//! Permission predicates
//!
//! Every predicate is a pure, total function: no state, no errors, the
//! same inputs always produce the same answer. Scoped checks deny whenever
//! a department id is missing on either side.

use crate::action::Action;
use crate::context::ActorContext;
use crate::role::Role;

/// Posting on the campus-wide home feed is reserved for global admins.
pub fn can_post_to_home_feed(role: Role) -> bool {
    role.is_global_admin()
}

/// Channel posting: global admins anywhere, department admins only inside
/// their own department, everyone else nowhere.
pub fn can_post_to_channel(ctx: &ActorContext) -> bool {
    if ctx.role.is_global_admin() {
        return true;
    }
    if ctx.role == Role::DepartmentAdmin {
        return ctx.department_match();
    }
    false
}

/// Only global admins create channels.
pub fn can_create_channel(role: Role) -> bool {
    role.is_global_admin()
}

/// Global admins and department admins create events.
///
/// Department scoping is intentionally not enforced here: any department
/// admin may create events anywhere. See DESIGN.md, Open Questions.
pub fn can_create_event(role: Role) -> bool {
    role.is_global_admin() || role == Role::DepartmentAdmin
}

/// Promoting and demoting roles is exclusive to the power admin.
///
/// Narrower than every other elevated check: `Admin` is excluded.
pub fn can_manage_users(role: Role) -> bool {
    role == Role::PowerAdmin
}

/// Post deletion follows the same shape as channel posting.
pub fn can_delete_post(ctx: &ActorContext) -> bool {
    if ctx.role.is_global_admin() {
        return true;
    }
    if ctx.role == Role::DepartmentAdmin {
        return ctx.department_match();
    }
    false
}

/// Whether `actor` may demote `target`.
///
/// Only the power admin demotes, and the power admin itself is never a
/// valid target.
pub fn can_demote(actor: Role, target: Role) -> bool {
    actor == Role::PowerAdmin && target != Role::PowerAdmin
}

/// Dispatch a permission check for any gated action.
pub fn allows(action: Action, ctx: &ActorContext) -> bool {
    match action {
        Action::PostToHomeFeed => can_post_to_home_feed(ctx.role),
        Action::PostToChannel => can_post_to_channel(ctx),
        Action::CreateChannel => can_create_channel(ctx.role),
        Action::CreateEvent => can_create_event(ctx.role),
        Action::ManageUsers => can_manage_users(ctx.role),
        Action::DeletePost => can_delete_post(ctx),
    }
}
