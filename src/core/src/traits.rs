//! Seams between the domain records and the authorization policy

use crate::types::DepartmentId;

/// Anything that may carry a department tag.
///
/// Channels, posts, and events are optionally scoped to a department;
/// `None` means the resource is global. The authorization policy reads the
/// target's department through this trait and never touches the rest of
/// the record.
pub trait DepartmentScoped {
    /// Department the resource belongs to, if any.
    fn department_id(&self) -> Option<DepartmentId>;
}
