use crate::db;
use crate::prelude::*;

/// `DELETE /profile`: removes the caller's posts, profile, and account.
pub async fn remove(
    State(state): State<ServerState>,
    auth: Auth,
) -> Result<Json<serde_json::Value>, Error> {
    db::posts::delete_by_user(&state.db, auth.user_id).await?;
    db::profiles::delete(&state.db, auth.user_id).await?;
    db::users::delete(&state.db, auth.user_id).await?;

    log::info!("Deleted account {}", auth.user_id);

    Ok(Json(serde_json::json!({ "msg": "User deleted" })))
}
