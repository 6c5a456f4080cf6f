use chrono::NaiveDate;

use schema::{validation, Experience, Profile};

use crate::db;
use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// `PUT|POST /profile/experience`: prepend a validated entry.
pub async fn add(
    State(state): State<ServerState>,
    auth: Auth,
    Json(form): Json<ExperienceForm>,
) -> Result<Json<Profile>, Error> {
    let mut errors = Vec::new();

    if !validation::non_empty(&form.title) {
        errors.push("Title is required");
    }
    if !validation::non_empty(&form.company) {
        errors.push("Company is required");
    }
    if form.from.is_none() {
        errors.push("From date is required");
    }

    let (Some(from), true) = (form.from, errors.is_empty()) else {
        return Err(Error::Validation(errors));
    };

    let mut profile = db::profiles::find(&state.db, auth.user_id)
        .await?
        .ok_or(Error::NoProfileForUser)?;

    profile.add_experience(Experience {
        id: ExperienceId::nil(), // replaced with a fresh id on insert
        title: form.title,
        company: form.company,
        location: form.location,
        from,
        to: if form.current { None } else { form.to },
        current: form.current,
        description: form.description,
    });

    db::profiles::save_experience(&state.db, auth.user_id, &profile.experience).await?;

    Ok(Json(profile))
}

/// `DELETE /profile/experience/:exp_id`: remove by id; unknown or
/// malformed ids leave the sequence untouched.
pub async fn remove(
    State(state): State<ServerState>,
    auth: Auth,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, Error> {
    let mut profile = db::profiles::find(&state.db, auth.user_id)
        .await?
        .ok_or(Error::NoProfileForUser)?;

    if let Ok(exp_id) = exp_id.parse::<ExperienceId>() {
        if profile.remove_experience(exp_id) {
            db::profiles::save_experience(&state.db, auth.user_id, &profile.experience).await?;
        }
    }

    Ok(Json(profile))
}
