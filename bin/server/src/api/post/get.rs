use schema::Post;

use crate::db;
use crate::prelude::*;

use super::parse_post_id;

/// `GET /post`: the whole feed, most recent first.
pub async fn all(State(state): State<ServerState>, _auth: Auth) -> Result<Json<Vec<Post>>, Error> {
    Ok(Json(db::posts::all(&state.db).await?))
}

/// `GET /post/:id`
pub async fn one(
    State(state): State<ServerState>,
    _auth: Auth,
    Path(id): Path<String>,
) -> Result<Json<Post>, Error> {
    let id = parse_post_id(&id)?;

    match db::posts::find(&state.db, id).await? {
        Some(post) => Ok(Json(post)),
        None => Err(Error::PostNotFound),
    }
}
