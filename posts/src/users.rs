use std::fmt;

use serde::{Deserialize, Serialize};

/// The account the API seeds itself with. It never shows up in the dashboard.
pub const BUILT_IN_ADMIN: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Uploader,
    #[default]
    User,
}

impl Role {
    /// Whether the "New Post!" controls are offered.
    pub fn can_publish(self) -> bool {
        matches!(self, Role::Admin | Role::Uploader)
    }

    /// Deleting comments and managing accounts.
    pub fn can_moderate(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Uploader => "Uploader",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn can_publish(&self) -> bool {
        self.role.can_publish()
    }

    pub fn can_moderate(&self) -> bool {
        self.role.can_moderate()
    }
}

/// The accounts an admin may edit or delete, in their original order.
pub fn manageable_users(users: &[User]) -> Vec<&User> {
    users
        .iter()
        .filter(|user| user.username != BUILT_IN_ADMIN)
        .collect()
}
