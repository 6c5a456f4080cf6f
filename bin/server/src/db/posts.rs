use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use schema::{Comment, Like, Post};

use crate::prelude::*;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: PostId,
    user_id: UserId,
    text: String,
    name: String,
    avatar: String,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    date: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Post {
        Post {
            id: row.id,
            user: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            likes: row.likes.0,
            comments: row.comments.0,
            date: row.date,
        }
    }
}

pub async fn insert(pool: &PgPool, post: &Post) -> Result<(), Error> {
    sqlx::query(
        "INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(post.id)
    .bind(post.user)
    .bind(&post.text)
    .bind(&post.name)
    .bind(&post.avatar)
    .bind(Json(&post.likes))
    .bind(Json(&post.comments))
    .bind(post.date)
    .execute(pool)
    .await?;

    Ok(())
}

/// All posts, most recent first.
pub async fn all(pool: &PgPool) -> Result<Vec<Post>, Error> {
    let rows = sqlx::query_as::<_, PostRow>("SELECT * FROM posts ORDER BY date DESC")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

pub async fn find(pool: &PgPool, id: PostId) -> Result<Option<Post>, Error> {
    let row = sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Post::from))
}

pub async fn delete(pool: &PgPool, id: PostId) -> Result<(), Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1").bind(id).execute(pool).await?;

    Ok(())
}

pub async fn delete_by_user(pool: &PgPool, user_id: UserId) -> Result<(), Error> {
    sqlx::query("DELETE FROM posts WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn save_text(pool: &PgPool, id: PostId, text: &str) -> Result<(), Error> {
    sqlx::query("UPDATE posts SET text = $2 WHERE id = $1")
        .bind(id)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(())
}

/// Rewrites the whole likes sequence; last write wins at the row level.
pub async fn save_likes(pool: &PgPool, id: PostId, likes: &[Like]) -> Result<(), Error> {
    sqlx::query("UPDATE posts SET likes = $2 WHERE id = $1")
        .bind(id)
        .bind(Json(likes))
        .execute(pool)
        .await?;

    Ok(())
}

/// Rewrites the whole comments sequence; last write wins at the row level.
pub async fn save_comments(pool: &PgPool, id: PostId, comments: &[Comment]) -> Result<(), Error> {
    sqlx::query("UPDATE posts SET comments = $2 WHERE id = $1")
        .bind(id)
        .bind(Json(comments))
        .execute(pool)
        .await?;

    Ok(())
}
