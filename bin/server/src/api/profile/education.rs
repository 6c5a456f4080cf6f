use chrono::NaiveDate;

use schema::{validation, Education, Profile};

use crate::db;
use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// `PUT|POST /profile/education`: prepend a validated entry.
pub async fn add(
    State(state): State<ServerState>,
    auth: Auth,
    Json(form): Json<EducationForm>,
) -> Result<Json<Profile>, Error> {
    let mut errors = Vec::new();

    if !validation::non_empty(&form.school) {
        errors.push("School is required");
    }
    if !validation::non_empty(&form.degree) {
        errors.push("Degree is required");
    }
    if !validation::non_empty(&form.fieldofstudy) {
        errors.push("Field of study is required");
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

    profile.add_education(Education {
        id: EducationId::nil(), // replaced with a fresh id on insert
        school: form.school,
        degree: form.degree,
        field_of_study: form.fieldofstudy,
        from,
        to: if form.current { None } else { form.to },
        current: form.current,
        description: form.description,
    });

    db::profiles::save_education(&state.db, auth.user_id, &profile.education).await?;

    Ok(Json(profile))
}

/// `DELETE /profile/education/:edu_id`: remove by id; unknown or
/// malformed ids leave the sequence untouched.
pub async fn remove(
    State(state): State<ServerState>,
    auth: Auth,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, Error> {
    let mut profile = db::profiles::find(&state.db, auth.user_id)
        .await?
        .ok_or(Error::NoProfileForUser)?;

    if let Ok(edu_id) = edu_id.parse::<EducationId>() {
        if profile.remove_education(edu_id) {
            db::profiles::save_education(&state.db, auth.user_id, &profile.education).await?;
        }
    }

    Ok(Json(profile))
}
