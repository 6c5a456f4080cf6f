use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::ServerState;

pub mod auth;
pub mod post;
pub mod profile;
pub mod user;

pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(crate::extract::AUTH_HEADER)]);

    Router::new()
        .route("/users", post(user::register))
        .route("/auth", get(auth::me).post(auth::login))
        .route(
            "/profile",
            get(profile::get::all).post(profile::upsert::upsert).delete(profile::remove::remove),
        )
        .route("/profile/me", get(profile::get::me))
        .route("/profile/user/:user_id", get(profile::get::by_user))
        .route(
            "/profile/experience",
            put(profile::experience::add).post(profile::experience::add),
        )
        .route("/profile/experience/:exp_id", delete(profile::experience::remove))
        .route(
            "/profile/education",
            put(profile::education::add).post(profile::education::add),
        )
        .route("/profile/education/:edu_id", delete(profile::education::remove))
        .route("/profile/github/:username", get(profile::github::repos))
        .route("/post", post(post::create::create).get(post::get::all))
        .route("/post/:id", get(post::get::one).delete(post::remove::remove))
        .route("/post/edit-post/:id", put(post::edit::edit))
        .route("/post/like/:id", put(post::like::like))
        .route("/post/unlike/:id", put(post::like::unlike))
        .route("/post/comment/:id", post(post::comment::add))
        .route("/post/edit-comment/:id/:comment_id", put(post::comment::edit))
        .route("/post/comment/:id/:comment_id", delete(post::comment::remove))
        .layer(cors)
        .with_state(state)
}
