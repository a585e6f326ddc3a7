//! Read-only JSON views over the same published and approved rows the pages render.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::application::{
    error::ErrorReport,
    repos::{RepoError, clamp_listing_limit},
};
use crate::domain::entities::{PostRecord, TopicSummary};

use super::HttpState;

mod codes {
    pub const BAD_REQUEST: &str = "bad_request";
    pub const NOT_FOUND: &str = "not_found";
    pub const DB_TIMEOUT: &str = "db_timeout";
    pub const REPO: &str = "repo_error";
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    detail: Option<String>,
}

impl ApiError {
    fn not_found(message: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: codes::NOT_FOUND,
            message,
            detail: None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::not_found("resource not found"),
            RepoError::Timeout => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                code: codes::DB_TIMEOUT,
                message: "Database timeout",
                detail: None,
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: codes::REPO,
                message: "Persistence error",
                detail: Some(other.to_string()),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: codes::BAD_REQUEST,
            message: "Invalid query string",
            detail: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message.to_string(),
            },
        };
        let mut response = (self.status, Json(body)).into_response();
        // Internal detail stays in the log line, not the body.
        ErrorReport::from_message(
            "infra::http::api",
            self.status,
            format!(
                "{}: {}",
                self.code,
                self.detail.as_deref().unwrap_or(self.message)
            ),
        )
        .attach(&mut response);
        response
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct PostJson {
    pub slug: String,
    pub title: String,
    pub author_name: String,
    pub excerpt: String,
    pub body: Option<String>,
    pub published_at: Option<String>,
}

impl From<PostRecord> for PostJson {
    fn from(post: PostRecord) -> Self {
        Self {
            published_at: post.published_at.and_then(rfc3339),
            slug: post.slug,
            title: post.title,
            author_name: post.author_name,
            excerpt: post.excerpt,
            body: post.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopicJson {
    pub slug: String,
    pub title: String,
    pub author_name: String,
    pub body: String,
    pub created_at: Option<String>,
    pub reply_count: u64,
}

impl From<TopicSummary> for TopicJson {
    fn from(summary: TopicSummary) -> Self {
        let topic = summary.topic;
        Self {
            created_at: rfc3339(topic.created_at),
            slug: topic.slug,
            title: topic.title,
            author_name: topic.author_name,
            body: topic.body,
            reply_count: summary.reply_count,
        }
    }
}

fn rfc3339(timestamp: OffsetDateTime) -> Option<String> {
    timestamp.format(&Rfc3339).ok()
}

fn resolve_limit(state: &HttpState, query: &ListQuery) -> u32 {
    query
        .limit
        .map(clamp_listing_limit)
        .unwrap_or(state.render.listing_limit)
}

pub(super) async fn get_post(
    State(state): State<HttpState>,
    Path(slug): Path<String>,
) -> Result<Json<PostJson>, ApiError> {
    state
        .render
        .posts
        .find_published_by_slug(&slug)
        .await?
        .map(|post| Json(PostJson::from(post)))
        .ok_or_else(|| ApiError::not_found("post not found"))
}

pub(super) async fn list_posts(
    State(state): State<HttpState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<PostJson>>, ApiError> {
    let Query(query) = query?;
    let limit = resolve_limit(&state, &query);
    let posts = state.render.posts.list_published(limit).await?;

    Ok(Json(ListResponse {
        items: posts.into_iter().map(PostJson::from).collect(),
    }))
}

pub(super) async fn list_topics(
    State(state): State<HttpState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<TopicJson>>, ApiError> {
    let Query(query) = query?;
    let limit = resolve_limit(&state, &query);
    let topics = state
        .render
        .topics
        .list_approved_with_reply_counts(limit)
        .await?;

    Ok(Json(ListResponse {
        items: topics.into_iter().map(TopicJson::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let formatted = rfc3339(datetime!(2025-03-04 10:15:30 UTC));
        assert_eq!(formatted.as_deref(), Some("2025-03-04T10:15:30Z"));
    }

    #[test]
    fn timeouts_map_to_service_unavailable() {
        let response = ApiError::from(RepoError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.extensions().get::<ErrorReport>().is_some());
    }
}
