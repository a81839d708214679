//! Domain record types shared across the platform

pub mod channel;
pub mod content;
pub mod department;
pub mod session;

pub use channel::{Channel, Visibility};
pub use content::{Event, Post};
pub use department::{Department, DepartmentId};
pub use session::Session;
