use schema::{validation, User};

use crate::db;
use crate::internal::login::{do_login, Session};
use crate::internal::password::verify_password;
use crate::prelude::*;

/// `GET /auth`: the caller's own record, password hash excluded by the
/// model's serializer.
pub async fn me(State(state): State<ServerState>, auth: Auth) -> Result<Json<User>, Error> {
    match db::users::find(&state.db, auth.user_id).await? {
        Some(user) => Ok(Json(user)),
        // valid signature but the account is gone
        None => Err(Error::InvalidToken),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `POST /auth`
///
/// Unknown email and wrong password produce the same response on purpose.
pub async fn login(
    State(state): State<ServerState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<Session>, Error> {
    let mut errors = Vec::new();

    if !validation::validate_email(&form.email) {
        errors.push("Please include a valid email");
    }
    if form.password.is_empty() {
        errors.push("Password is required");
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let Some(user) = db::users::find_by_email(&state.db, &form.email).await? else {
        return Err(Error::InvalidCredentials);
    };

    if !verify_password(&state, user.password.clone(), form.password).await? {
        return Err(Error::InvalidCredentials);
    }

    Ok(Json(do_login(&state, user.id)))
}
