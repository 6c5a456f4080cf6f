use crate::prelude::*;

/// `GET /profile/github/:username`: verbatim relay of the repository
/// listing; anything that goes wrong reads as not-found.
pub async fn repos(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
    let repos = state.services.github.list_repos(&state.config.services, &username).await?;

    Ok(Json(repos))
}
