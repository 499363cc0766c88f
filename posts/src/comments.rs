use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn is_own(&self, viewer: Option<&User>) -> bool {
        viewer.is_some_and(|user| user.id == self.user_id)
    }

    /// `3/7/2024 at 09:05 PM`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%-m/%-d/%Y at %I:%M %p")
            .to_string()
    }
}
