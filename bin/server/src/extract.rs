use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;

use crate::prelude::*;

pub const AUTH_HEADER: &str = "x-auth-token";

/// Proof of authentication for protected routes.
///
/// Pulls the signed token out of the `x-auth-token` header and verifies it
/// statelessly; handlers receive the embedded user id for the rest of the
/// request.
#[derive(Debug, Clone, Copy)]
pub struct Auth {
    pub user_id: UserId,
}

#[async_trait]
impl FromRequestParts<ServerState> for Auth {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Error> {
        let Some(header) = parts.headers.get(AUTH_HEADER) else {
            return Err(Error::NoToken);
        };

        let token = header.to_str().map_err(|_| Error::InvalidToken)?;

        let user_id = state
            .keys
            .verify(token, Utc::now())
            .map_err(|_| Error::InvalidToken)?;

        Ok(Auth { user_id })
    }
}
