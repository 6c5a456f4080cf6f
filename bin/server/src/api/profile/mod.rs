use schema::Profile;

pub mod education;
pub mod experience;
pub mod get;
pub mod github;
pub mod remove;
pub mod upsert;

/// Serializes a profile with its owner reference expanded into the joined
/// display fields, matching the wire shape clients expect.
pub(crate) fn owner_view(profile: Profile, name: String, avatar: String) -> serde_json::Value {
    let user = profile.user;

    let mut value =
        serde_json::to_value(&profile).expect("profile documents are always serializable");

    value["user"] = serde_json::json!({ "id": user, "name": name, "avatar": avatar });

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::aliases::UserId;

    #[test]
    fn owner_view_expands_the_user_reference() {
        let user = UserId::new_v4();
        let profile = Profile::new(user, "Developer".to_owned(), vec!["Rust".to_owned()]);

        let view = owner_view(profile, "A".to_owned(), "https://g/a".to_owned());

        assert_eq!(view["user"]["id"], serde_json::json!(user));
        assert_eq!(view["user"]["name"], "A");
        assert_eq!(view["status"], "Developer");
        assert_eq!(view["skills"][0], "Rust");
    }
}
