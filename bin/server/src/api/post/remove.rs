use crate::db;
use crate::prelude::*;

use super::parse_post_id;

/// `DELETE /post/:id`: owner only.
pub async fn remove(
    State(state): State<ServerState>,
    auth: Auth,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
    let id = parse_post_id(&id)?;

    let post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    if post.user != auth.user_id {
        return Err(Error::Unauthorized);
    }

    db::posts::delete(&state.db, id).await?;

    Ok(Json(serde_json::json!({ "msg": "Post Removed" })))
}
