//! User roles and their presentation

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// User role as issued by the backend session endpoint.
///
/// `PowerAdmin` and `Admin` are global peers for posting and channel/event
/// creation; only `PowerAdmin` may manage other users. `DepartmentAdmin`
/// holds authority inside a single department. Any value the backend sends
/// that is not one of the four known spellings deserializes to `User`, so
/// an out-of-band role can never grant privilege.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(from = "String")]
pub enum Role {
    /// Highest privilege; exclusive user-management rights
    #[serde(rename = "power")]
    PowerAdmin,

    /// Globally privileged, excluded from user management
    #[serde(rename = "admin")]
    Admin,

    /// Privileged within a single department
    #[serde(rename = "d-admin")]
    DepartmentAdmin,

    /// Default, unprivileged role
    #[default]
    #[serde(rename = "user")]
    User,
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::from_wire(Some(&raw))
    }
}

impl Role {
    /// Normalize a raw role string from the session store.
    ///
    /// Missing and unrecognized values both resolve to `User`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("power") => Role::PowerAdmin,
            Some("admin") => Role::Admin,
            Some("d-admin") => Role::DepartmentAdmin,
            _ => Role::User,
        }
    }

    /// Wire spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PowerAdmin => "power",
            Role::Admin => "admin",
            Role::DepartmentAdmin => "d-admin",
            Role::User => "user",
        }
    }

    /// Whether the role is globally privileged (power admin or admin).
    pub fn is_global_admin(&self) -> bool {
        matches!(self, Role::PowerAdmin | Role::Admin)
    }

    /// Human-readable label shown next to the user's name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::PowerAdmin => "Power Admin",
            Role::Admin => "Admin",
            Role::DepartmentAdmin => "Department Admin",
            Role::User => "User",
        }
    }

    /// Badge background color for the role, as a hex token.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Role::PowerAdmin => "#9C27B0",
            Role::Admin => "#F44336",
            Role::DepartmentAdmin => "#FF9800",
            Role::User => "#2196F3",
        }
    }

    /// Short badge label ("PA", "A", "DA", "U").
    pub fn badge_abbreviation(&self) -> &'static str {
        match self {
            Role::PowerAdmin => "PA",
            Role::Admin => "A",
            Role::DepartmentAdmin => "DA",
            Role::User => "U",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from_wire(Some(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_values_normalize_to_user() {
        assert_eq!(Role::from_wire(None), Role::User);
        assert_eq!(Role::from_wire(Some("superuser")), Role::User);
        assert_eq!(Role::from_wire(Some("POWER")), Role::User);
        assert_eq!(Role::from_wire(Some("")), Role::User);
    }

    #[test]
    fn known_wire_values_parse() {
        assert_eq!(Role::from_wire(Some("power")), Role::PowerAdmin);
        assert_eq!(Role::from_wire(Some("admin")), Role::Admin);
        assert_eq!(Role::from_wire(Some("d-admin")), Role::DepartmentAdmin);
        assert_eq!(Role::from_wire(Some("user")), Role::User);
    }

    #[test]
    fn display_matches_wire_spelling() {
        assert_eq!(Role::DepartmentAdmin.to_string(), "d-admin");
    }

    #[test]
    fn presentation_is_distinct_per_role() {
        let roles = [
            Role::PowerAdmin,
            Role::Admin,
            Role::DepartmentAdmin,
            Role::User,
        ];
        for (i, a) in roles.iter().enumerate() {
            for b in roles.iter().skip(i + 1) {
                assert_ne!(a.display_name(), b.display_name());
                assert_ne!(a.badge_color(), b.badge_color());
                assert_ne!(a.badge_abbreviation(), b.badge_abbreviation());
            }
        }
    }
}
