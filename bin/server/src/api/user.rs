use schema::{validation, User};

use crate::db;
use crate::internal::avatar::gravatar_url;
use crate::internal::login::{do_login, Session};
use crate::internal::password::hash_password;
use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /users`
pub async fn register(
    State(state): State<ServerState>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<Session>, Error> {
    let config = &state.config.shared;

    let mut errors = Vec::new();

    if !validation::validate_name(&form.name, config.name_length.clone()) {
        errors.push("Name is required");
    }
    if !validation::validate_email(&form.email) {
        errors.push("Please include a valid email");
    }
    if !validation::validate_password(&form.password, config.password_length.clone()) {
        errors.push("Please enter a password with 6 or more characters");
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    if db::users::find_by_email(&state.db, &form.email).await?.is_some() {
        return Err(Error::AlreadyExists);
    }

    let avatar = gravatar_url(&form.email);
    let passhash = hash_password(&state, form.password).await?;

    let user = User::new(form.name, form.email, passhash, avatar);
    db::users::insert(&state.db, &user).await?;

    log::info!("Registered user {}", user.id);

    Ok(Json(do_login(&state, user.id)))
}
