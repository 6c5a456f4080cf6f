use crate::db;
use crate::prelude::*;

use super::owner_view;

/// `GET /profile/me`
pub async fn me(
    State(state): State<ServerState>,
    auth: Auth,
) -> Result<Json<serde_json::Value>, Error> {
    match db::profiles::find_with_owner(&state.db, auth.user_id).await? {
        Some(row) => {
            let (profile, name, avatar) = row.into_parts();
            Ok(Json(owner_view(profile, name, avatar)))
        }
        None => Err(Error::NoProfileForUser),
    }
}

/// `GET /profile`
pub async fn all(State(state): State<ServerState>) -> Result<Json<Vec<serde_json::Value>>, Error> {
    let profiles = db::profiles::all_with_owner(&state.db)
        .await?
        .into_iter()
        .map(|row| {
            let (profile, name, avatar) = row.into_parts();
            owner_view(profile, name, avatar)
        })
        .collect();

    Ok(Json(profiles))
}

/// `GET /profile/user/:user_id`
///
/// A malformed id reads the same as an absent profile.
pub async fn by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
    let user_id: UserId = user_id.parse().map_err(|_| Error::ProfileNotFound)?;

    match db::profiles::find_with_owner(&state.db, user_id).await? {
        Some(row) => {
            let (profile, name, avatar) = row.into_parts();
            Ok(Json(owner_view(profile, name, avatar)))
        }
        None => Err(Error::ProfileNotFound),
    }
}
