//! Post and event summaries

use crate::traits::DepartmentScoped;
use crate::types::DepartmentId;
use crate::UserId;
use serde::{Deserialize, Serialize};

/// Post summary as returned by the posts endpoint.
///
/// Posts inherit the department of the channel they were published in;
/// home-feed posts carry no department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier
    pub id: String,

    /// Channel the post was published in, absent for home-feed posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Author identifier
    pub author_id: UserId,

    /// Post body
    pub body: String,

    /// Department inherited from the channel, absent for the home feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl DepartmentScoped for Post {
    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }
}

/// Event summary as returned by the events endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event identifier
    pub id: String,

    /// Event title
    pub title: String,

    /// Owning department, absent for campus-wide events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl DepartmentScoped for Event {
    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_feed_post_has_no_department() {
        let post: Post = serde_json::from_str(
            r#"{"id":"p1","authorId":"u1","body":"welcome week"}"#,
        )
        .unwrap();
        assert_eq!(post.department_id(), None);
        assert_eq!(post.channel_id, None);
    }

    #[test]
    fn channel_post_inherits_department() {
        let post: Post = serde_json::from_str(
            r#"{"id":"p2","channelId":"c2","authorId":"u2","body":"lab moved","departmentId":7}"#,
        )
        .unwrap();
        assert_eq!(post.department_id(), Some(DepartmentId(7)));
    }
}
