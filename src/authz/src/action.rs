//! Gated actions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action a user may attempt against the platform.
///
/// The set is closed: every enforcement point in the UI maps to exactly one
/// of these variants. Wire spellings are the kebab-case action keys the
/// client uses when surfacing denial messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Publish a post on the campus-wide home feed
    #[serde(rename = "post-home")]
    PostToHomeFeed,

    /// Publish a post in a channel
    #[serde(rename = "post-channel")]
    PostToChannel,

    /// Create a new channel
    #[serde(rename = "create-channel")]
    CreateChannel,

    /// Create a new event
    #[serde(rename = "create-event")]
    CreateEvent,

    /// Promote or demote other users' roles
    #[serde(rename = "manage-users")]
    ManageUsers,

    /// Delete an existing post
    #[serde(rename = "delete-post")]
    DeletePost,
}

impl Action {
    /// Wire spelling of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::PostToHomeFeed => "post-home",
            Action::PostToChannel => "post-channel",
            Action::CreateChannel => "create-channel",
            Action::CreateEvent => "create-event",
            Action::ManageUsers => "manage-users",
            Action::DeletePost => "delete-post",
        }
    }

    /// All actions, in a stable order.
    pub const ALL: [Action; 6] = [
        Action::PostToHomeFeed,
        Action::PostToChannel,
        Action::CreateChannel,
        Action::CreateEvent,
        Action::ManageUsers,
        Action::DeletePost,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
