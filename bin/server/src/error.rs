use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use schema::LikeError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Per-route input validation failures, reported as a list of messages.
    #[error("Validation failure")]
    Validation(Vec<&'static str>),

    // authentication
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    AlreadyExists,
    #[error("No token, authorization denied")]
    NoToken,
    #[error("Token is not valid")]
    InvalidToken,

    // authorization
    #[error("User not authorized")]
    Unauthorized,

    // business rules
    #[error("{0}")]
    Like(#[from] LikeError),

    // absent resources
    #[error("Post not found")]
    PostNotFound,
    /// Identifier that cannot possibly name a post. Existing clients match
    /// on this exact capitalization.
    #[error("Post Not Found")]
    MalformedId,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("There is no profile for this user")]
    NoProfileForUser,
    #[error("Comment does not exist")]
    CommentNotFound,
    #[error("No Github profile found")]
    GithubNotFound,

    // FATAL ERRORS
    #[error("Database Error: {0}")]
    DbError(#[from] sqlx::Error),
    #[error("Migration Error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
    #[error("Join Error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
    #[error("Semaphore Error: {0}")]
    SemaphoreError(#[from] tokio::sync::AcquireError),
    #[error("Password Hash Error: {0}")]
    HashError(#[from] argon2::Error),
    #[error("Request Error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}

impl Error {
    #[rustfmt::skip]
    pub fn is_fatal(&self) -> bool {
        matches!(self,
            | Error::DbError(_)
            | Error::MigrateError(_)
            | Error::JoinError(_)
            | Error::SemaphoreError(_)
            | Error::HashError(_)
            | Error::RequestError(_)
            | Error::IOError(_)
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            _ if self.is_fatal() => StatusCode::INTERNAL_SERVER_ERROR,

            Error::Validation(_)
            | Error::InvalidCredentials
            | Error::AlreadyExists
            | Error::Like(_)
            | Error::MalformedId
            | Error::ProfileNotFound
            | Error::NoProfileForUser => StatusCode::BAD_REQUEST,

            Error::NoToken | Error::InvalidToken | Error::Unauthorized => StatusCode::UNAUTHORIZED,

            Error::PostNotFound | Error::CommentNotFound | Error::GithubNotFound => {
                StatusCode::NOT_FOUND
            }

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.is_fatal() {
            log::error!("{self}");

            // never leak internals to the caller
            return (status, "Server Error").into_response();
        }

        let body = match self {
            Error::Validation(msgs) => {
                json!({ "errors": msgs.iter().map(|msg| json!({ "msg": msg })).collect::<Vec<_>>() })
            }

            // indistinguishable auth failures share the login error shape
            Error::InvalidCredentials | Error::AlreadyExists => {
                json!({ "errors": [{ "msg": self.to_string() }] })
            }

            _ => json!({ "msg": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(Error::Validation(vec!["x"]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::AlreadyExists.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Like(LikeError::AlreadyLiked).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NoToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::PostNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::MalformedId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::GithubNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::ProfileNotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::DbError(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn fatal_errors_are_exactly_the_internal_ones() {
        assert!(Error::DbError(sqlx::Error::PoolClosed).is_fatal());
        assert!(!Error::Unauthorized.is_fatal());
        assert!(!Error::Like(LikeError::NotLiked).is_fatal());
    }
}
