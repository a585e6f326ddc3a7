use axum::{
    body::Body,
    http::{
        HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};

use crate::application::error::ErrorReport;
use crate::presentation::{assemble::Fragment, document::Document};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const PLAIN_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const NOT_FOUND_BODY: &str = "Not Found";

/// How long shared caches may keep a rendered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Content addressed by a slug that never changes after publication.
    Immutable,
    /// Aggregate pages whose membership changes as new items are approved.
    Listing,
}

impl CachePolicy {
    pub fn header_value(self) -> &'static str {
        match self {
            CachePolicy::Immutable => "public, max-age=31536000, immutable",
            CachePolicy::Listing => "public, max-age=300",
        }
    }
}

/// Terminal state of a page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Document {
        document: Document,
        cache: CachePolicy,
    },
    Fragment {
        fragment: Fragment,
        cache: CachePolicy,
    },
    NotFound,
}

impl RenderOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RenderOutcome::Document { .. } => "document",
            RenderOutcome::Fragment { .. } => "fragment",
            RenderOutcome::NotFound => "not_found",
        }
    }
}

impl IntoResponse for RenderOutcome {
    fn into_response(self) -> Response {
        match self {
            RenderOutcome::Document { document, cache } => {
                html_response(document.into_string(), cache)
            }
            RenderOutcome::Fragment { fragment, cache } => {
                html_response(fragment.into_string(), cache)
            }
            RenderOutcome::NotFound => not_found_response(),
        }
    }
}

fn html_response(body: String, cache: CachePolicy) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache.header_value()));

    response
}

fn not_found_response() -> Response {
    let mut response = Response::new(Body::from(NOT_FOUND_BODY));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(PLAIN_CONTENT_TYPE));

    ErrorReport::from_message(
        "application::render::not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}
