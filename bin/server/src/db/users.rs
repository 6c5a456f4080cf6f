use chrono::{DateTime, Utc};
use sqlx::PgPool;

use schema::User;

use crate::prelude::*;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    name: String,
    email: String,
    password: String,
    avatar: String,
    date: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> User {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            avatar: row.avatar,
            date: row.date,
        }
    }
}

pub async fn insert(pool: &PgPool, user: &User) -> Result<(), Error> {
    let res = sqlx::query(
        "INSERT INTO users (id, name, email, password, avatar, date) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.avatar)
    .bind(user.date)
    .execute(pool)
    .await;

    match res {
        Ok(_) => Ok(()),
        // unique_violation on the email index, lost the registration race
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505") => {
            Err(Error::AlreadyExists)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn find(pool: &PgPool, id: UserId) -> Result<Option<User>, Error> {
    let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(User::from))
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, Error> {
    let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(User::from))
}

pub async fn delete(pool: &PgPool, id: UserId) -> Result<(), Error> {
    sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(pool).await?;

    Ok(())
}
