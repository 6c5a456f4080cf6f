use schema::{profile::split_skills, validation, Profile, SocialLinks};

use crate::db;
use crate::prelude::*;

use super::owner_view;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub status: String,

    /// Comma-separated on the wire.
    pub skills: String,

    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,

    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// `POST /profile`: create-or-update keyed by the authenticated owner.
///
/// Scalar fields are replaced wholesale; the experience/education sequences
/// survive updates untouched.
pub async fn upsert(
    State(state): State<ServerState>,
    auth: Auth,
    Json(form): Json<ProfileForm>,
) -> Result<Json<serde_json::Value>, Error> {
    let mut errors = Vec::new();

    if !validation::non_empty(&form.status) {
        errors.push("Status is required");
    }
    if !validation::non_empty(&form.skills) {
        errors.push("Skills is required");
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let mut profile = Profile::new(auth.user_id, form.status, split_skills(&form.skills));

    profile.company = form.company;
    profile.website = form.website;
    profile.location = form.location;
    profile.bio = form.bio;
    profile.github_username = form.githubusername;
    profile.social = SocialLinks {
        youtube: form.youtube,
        twitter: form.twitter,
        facebook: form.facebook,
        linkedin: form.linkedin,
        instagram: form.instagram,
    };

    db::profiles::upsert(&state.db, &profile).await?;

    // echo back the stored document, sequences included
    let row = db::profiles::find_with_owner(&state.db, auth.user_id)
        .await?
        .ok_or(Error::NoProfileForUser)?;

    let (profile, name, avatar) = row.into_parts();
    Ok(Json(owner_view(profile, name, avatar)))
}
