//! # Campus Core
//!
//! Shared domain types for the campus community platform: identifiers,
//! department/channel/post/event summaries as they appear on the REST wire,
//! and the authenticated-session snapshot the mobile client stores locally.
//!
//! This package carries no policy logic of its own; the authorization rules
//! live in `campus-authz` and consume these types through the
//! [`DepartmentScoped`] seam.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::DepartmentScoped;
pub use types::{
    Channel, Department, DepartmentId, Event, Post, Session, Visibility,
};

/// User identifier as issued by the backend.
pub type UserId = String;
