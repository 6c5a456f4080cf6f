use schema::{validation, Comment};

use crate::db;
use crate::prelude::*;

use super::parse_post_id;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub text: String,
}

/// `POST /post/comment/:id`: prepend a comment with an author snapshot.
pub async fn add(
    State(state): State<ServerState>,
    auth: Auth,
    Path(id): Path<String>,
    Json(form): Json<CommentForm>,
) -> Result<Json<Vec<Comment>>, Error> {
    if !validation::non_empty(&form.text) {
        return Err(Error::Validation(vec!["Please enter text"]));
    }

    let id = parse_post_id(&id)?;

    let user = db::users::find(&state.db, auth.user_id).await?.ok_or(Error::InvalidToken)?;
    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    post.add_comment(auth.user_id, form.text, user.name, user.avatar);
    db::posts::save_comments(&state.db, id, &post.comments).await?;

    Ok(Json(post.comments))
}

/// `PUT /post/edit-comment/:id/:comment_id`: post owner only.
pub async fn edit(
    State(state): State<ServerState>,
    auth: Auth,
    Path((id, comment_id)): Path<(String, String)>,
    Json(form): Json<CommentForm>,
) -> Result<Json<Vec<Comment>>, Error> {
    if !validation::non_empty(&form.text) {
        return Err(Error::Validation(vec!["Please enter text"]));
    }

    let id = parse_post_id(&id)?;
    let comment_id: CommentId = comment_id.parse().map_err(|_| Error::CommentNotFound)?;

    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    if post.comment(comment_id).is_none() {
        return Err(Error::CommentNotFound);
    }

    if post.user != auth.user_id {
        return Err(Error::Unauthorized);
    }

    post.edit_comment(comment_id, form.text);
    db::posts::save_comments(&state.db, id, &post.comments).await?;

    Ok(Json(post.comments))
}

/// `DELETE /post/comment/:id/:comment_id`: permitted to the comment's
/// author or the post's owner.
pub async fn remove(
    State(state): State<ServerState>,
    auth: Auth,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, Error> {
    let id = parse_post_id(&id)?;
    let comment_id: CommentId = comment_id.parse().map_err(|_| Error::CommentNotFound)?;

    let mut post = db::posts::find(&state.db, id).await?.ok_or(Error::PostNotFound)?;

    let Some(comment) = post.comment(comment_id) else {
        return Err(Error::CommentNotFound);
    };

    if !post.comment_deletable_by(comment, auth.user_id) {
        return Err(Error::Unauthorized);
    }

    post.remove_comment(comment_id);
    db::posts::save_comments(&state.db, id, &post.comments).await?;

    Ok(Json(post.comments))
}
