use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::application::{
    error::HttpError,
    render::{self, RenderError, RenderOutcome},
};

use super::{HttpState, db_health_response};

pub(super) async fn blog_post(
    State(state): State<HttpState>,
    Path(slug): Path<String>,
) -> Response {
    respond(render::blog_post(&state.render, &slug).await)
}

pub(super) async fn blog_index(State(state): State<HttpState>) -> Response {
    respond(render::blog_index(&state.render).await)
}

pub(super) async fn forum_archive(State(state): State<HttpState>) -> Response {
    respond(render::forum_archive(&state.render).await)
}

pub(super) async fn forum_thread(
    State(state): State<HttpState>,
    Path(slug): Path<String>,
) -> Response {
    respond(render::forum_thread(&state.render, &slug).await)
}

pub(super) async fn forum_topics_fragment(State(state): State<HttpState>) -> Response {
    respond(render::forum_topics_fragment(&state.render).await)
}

pub(super) async fn public_health(State(state): State<HttpState>) -> Response {
    db_health_response(state.health.ping().await)
}

pub(super) async fn fallback() -> Response {
    RenderOutcome::NotFound.into_response()
}

fn respond(result: Result<RenderOutcome, RenderError>) -> Response {
    match result {
        Ok(outcome) => outcome.into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}
