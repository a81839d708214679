//! # Campus Authorization Policy
//!
//! Role-based permission checks for the campus community platform: who may
//! post to the home feed or a channel, create channels and events, delete
//! posts, and manage other users' roles.
//!
//! The policy is a set of pure, total functions over small value types.
//! There is no state between checks, no caching, and no error path —
//! denial is an ordinary return value, and any unrecognized role is
//! normalized to the unprivileged [`Role::User`] before evaluation.
//!
//! ## Example
//!
//! ```rust
//! use campus_authz::{evaluate, Action, ActorContext, Role};
//!
//! let ctx = ActorContext::new(Role::DepartmentAdmin)
//!     .with_actor_department(7u32)
//!     .with_resource_department(7u32);
//!
//! let decision = evaluate(Action::PostToChannel, &ctx);
//! assert!(decision.allowed);
//! ```

pub mod action;
pub mod context;
pub mod decision;
pub mod policy;
pub mod role;

// Re-export commonly used types
pub use action::Action;
pub use context::ActorContext;
pub use decision::{denial_reason, evaluate, Decision};
pub use policy::{
    allows, can_create_channel, can_create_event, can_delete_post, can_demote,
    can_manage_users, can_post_to_channel, can_post_to_home_feed,
};
pub use role::Role;
