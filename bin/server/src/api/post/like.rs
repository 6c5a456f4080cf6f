use schema::Like;

use crate::db;
use crate::prelude::*;

use super::parse_post_id;

/// `PUT /post/like/:id`: at most one like per user per post.
pub async fn like(
    State(state): State<ServerState>,
    auth: Auth,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, Error> {
    let id = parse_post_id(&id)?;

    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    post.like(auth.user_id)?;
    db::posts::save_likes(&state.db, id, &post.likes).await?;

    Ok(Json(post.likes))
}

/// `PUT /post/unlike/:id`: only undoes an existing like.
pub async fn unlike(
    State(state): State<ServerState>,
    auth: Auth,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, Error> {
    let id = parse_post_id(&id)?;

    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    post.unlike(auth.user_id)?;
    db::posts::save_likes(&state.db, id, &post.likes).await?;

    Ok(Json(post.likes))
}
