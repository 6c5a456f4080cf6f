use schema::{validation, Post};

use crate::db;
use crate::prelude::*;

use super::{create::PostForm, parse_post_id};

/// `PUT /post/edit-post/:id`: owner only; replaces the body text.
///
/// The target is selected by post id. (The pre-rewrite service filtered on
/// owner plus a junk field here, which could update the wrong document;
/// that selection was not carried over.)
pub async fn edit(
    State(state): State<ServerState>,
    auth: Auth,
    Path(id): Path<String>,
    Json(form): Json<PostForm>,
) -> Result<Json<Post>, Error> {
    if !validation::non_empty(&form.text) {
        return Err(Error::Validation(vec!["Please enter text"]));
    }

    let id = parse_post_id(&id)?;

    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    if post.user != auth.user_id {
        return Err(Error::Unauthorized);
    }

    post.text = form.text;
    db::posts::save_text(&state.db, id, &post.text).await?;

    Ok(Json(post))
}
