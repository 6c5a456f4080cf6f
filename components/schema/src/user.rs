use chrono::{DateTime, Utc};

use crate::aliases::UserId;

/// A registered account.
///
/// The password field holds the argon2-encoded hash, never plaintext, and is
/// skipped on serialization so no route can leak it by accident.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing, default)]
    pub password: String,

    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password: String, avatar: String) -> User {
        User {
            id: UserId::new_v4(),
            name,
            email,
            password,
            avatar,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User::new(
            "A".to_owned(),
            "a@x.com".to_owned(),
            "$argon2id$...".to_owned(),
            "https://example.com/avatar".to_owned(),
        );

        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }
}
