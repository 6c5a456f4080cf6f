use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use schema::{Education, Experience, Profile, SocialLinks};

use crate::prelude::*;

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: UserId,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: Json<Vec<String>>,
    bio: Option<String>,
    github_username: Option<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    date: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Profile {
        Profile {
            user: row.user_id,
            company: row.company,
            website: row.website,
            location: row.location,
            status: row.status,
            skills: row.skills.0,
            bio: row.bio,
            github_username: row.github_username,
            social: row.social.0,
            experience: row.experience.0,
            education: row.education.0,
            date: row.date,
        }
    }
}

/// A profile joined with the owning user's display fields.
#[derive(sqlx::FromRow)]
pub struct ProfileWithOwner {
    #[sqlx(flatten)]
    profile: ProfileRow,
    pub name: String,
    pub avatar: String,
}

impl ProfileWithOwner {
    pub fn into_parts(self) -> (Profile, String, String) {
        (self.profile.into(), self.name, self.avatar)
    }
}

const WITH_OWNER: &str = "SELECT p.*, u.name AS name, u.avatar AS avatar \
     FROM profiles p INNER JOIN users u ON u.id = p.user_id";

/// Create-or-update keyed by owner. Scalar fields are replaced; the
/// experience/education sequences and creation date are only written on
/// first insert.
pub async fn upsert(pool: &PgPool, profile: &Profile) -> Result<(), Error> {
    sqlx::query(
        "INSERT INTO profiles \
            (user_id, company, website, location, status, skills, bio, \
             github_username, social, experience, education, date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         ON CONFLICT (user_id) DO UPDATE SET \
            company = EXCLUDED.company, \
            website = EXCLUDED.website, \
            location = EXCLUDED.location, \
            status = EXCLUDED.status, \
            skills = EXCLUDED.skills, \
            bio = EXCLUDED.bio, \
            github_username = EXCLUDED.github_username, \
            social = EXCLUDED.social",
    )
    .bind(profile.user)
    .bind(&profile.company)
    .bind(&profile.website)
    .bind(&profile.location)
    .bind(&profile.status)
    .bind(Json(&profile.skills))
    .bind(&profile.bio)
    .bind(&profile.github_username)
    .bind(Json(&profile.social))
    .bind(Json(&profile.experience))
    .bind(Json(&profile.education))
    .bind(profile.date)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find(pool: &PgPool, user_id: UserId) -> Result<Option<Profile>, Error> {
    let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Profile::from))
}

pub async fn find_with_owner(pool: &PgPool, user_id: UserId) -> Result<Option<ProfileWithOwner>, Error> {
    let row = sqlx::query_as::<_, ProfileWithOwner>(&format!("{WITH_OWNER} WHERE p.user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn all_with_owner(pool: &PgPool) -> Result<Vec<ProfileWithOwner>, Error> {
    Ok(sqlx::query_as::<_, ProfileWithOwner>(WITH_OWNER).fetch_all(pool).await?)
}

pub async fn save_experience(
    pool: &PgPool,
    user_id: UserId,
    experience: &[Experience],
) -> Result<(), Error> {
    sqlx::query("UPDATE profiles SET experience = $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(Json(experience))
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn save_education(
    pool: &PgPool,
    user_id: UserId,
    education: &[Education],
) -> Result<(), Error> {
    sqlx::query("UPDATE profiles SET education = $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(Json(education))
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn delete(pool: &PgPool, user_id: UserId) -> Result<(), Error> {
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
