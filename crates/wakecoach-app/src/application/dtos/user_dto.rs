use serde::{Deserialize, Serialize};

use wakecoach_domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub created_at: String, // ISO 8601
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}
