use axum::http::StatusCode;

use schema::{validation, Post};

use crate::db;
use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub text: String,
}

/// `POST /post`
///
/// Snapshots the author's name and avatar into the post at creation time;
/// later profile edits do not touch it.
pub async fn create(
    State(state): State<ServerState>,
    auth: Auth,
    Json(form): Json<PostForm>,
) -> Result<(StatusCode, Json<Post>), Error> {
    if !validation::non_empty(&form.text) {
        return Err(Error::Validation(vec!["Please enter text"]));
    }

    let user = db::users::find(&state.db, auth.user_id).await?.ok_or(Error::InvalidToken)?;

    let post = Post::new(auth.user_id, form.text, user.name, user.avatar);
    db::posts::insert(&state.db, &post).await?;

    Ok((StatusCode::CREATED, Json(post)))
}
