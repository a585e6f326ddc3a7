mod api;
mod middleware;
mod public;
mod routes;

pub use routes::{RouteEntry, build_router, registry};

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::context::RenderContext;
use crate::application::error::ErrorReport;
use crate::application::repos::{RepoError, StoreHealth};

/// Shared, read-only handles for every public handler.
#[derive(Clone)]
pub struct HttpState {
    pub render: Arc<RenderContext>,
    pub health: Arc<dyn StoreHealth>,
}

impl HttpState {
    pub fn new(render: RenderContext, health: Arc<dyn StoreHealth>) -> Self {
        Self {
            render: Arc::new(render),
            health,
        }
    }
}

fn db_health_response(result: Result<(), RepoError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let mut response = StatusCode::SERVICE_UNAVAILABLE.into_response();
            ErrorReport::from_error(
                "infra::http::db_health",
                StatusCode::SERVICE_UNAVAILABLE,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}
