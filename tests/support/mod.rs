#![allow(dead_code)]

use std::sync::Arc;

use agora::application::context::RenderContext;
use agora::application::repos::{PostsRepo, RepoError, StoreHealth, TopicsRepo};
use agora::domain::entities::{PostRecord, ReplyRecord, TopicRecord, TopicSummary, TopicThread};
use agora::domain::types::{ModerationStatus, PostStatus};
use agora::infra::http::{HttpState, build_router};
use agora::presentation::document::SiteChrome;
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use time::{Duration, OffsetDateTime, macros::datetime};
use tower::ServiceExt;
use uuid::Uuid;

pub const BASE: OffsetDateTime = datetime!(2025-05-01 09:00 UTC);

pub struct StoredTopic {
    pub topic: TopicRecord,
    pub replies: Vec<(ReplyRecord, ModerationStatus)>,
}

/// Store double that applies the same visibility rules as the Postgres queries.
#[derive(Default)]
pub struct InMemoryStore {
    pub posts: Vec<PostRecord>,
    pub topics: Vec<StoredTopic>,
    pub unavailable: bool,
}

impl InMemoryStore {
    fn check(&self) -> Result<(), RepoError> {
        if self.unavailable {
            Err(RepoError::from_persistence("connection refused"))
        } else {
            Ok(())
        }
    }

    fn approved_topics(&self) -> Vec<&StoredTopic> {
        let mut topics: Vec<&StoredTopic> = self
            .topics
            .iter()
            .filter(|stored| stored.topic.status == ModerationStatus::Approved)
            .collect();
        topics.sort_by(|a, b| b.topic.created_at.cmp(&a.topic.created_at));
        topics
    }

    fn approved_replies(stored: &StoredTopic) -> Vec<ReplyRecord> {
        stored
            .replies
            .iter()
            .filter(|(_, status)| *status == ModerationStatus::Approved)
            .map(|(reply, _)| reply.clone())
            .collect()
    }
}

#[async_trait]
impl PostsRepo for InMemoryStore {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .find(|post| {
                post.slug == slug
                    && post.status == PostStatus::Published
                    && post.published_at.is_some()
            })
            .cloned())
    }

    async fn list_published(&self, limit: u32) -> Result<Vec<PostRecord>, RepoError> {
        self.check()?;
        let mut posts: Vec<PostRecord> = self
            .posts
            .iter()
            .filter(|post| post.status == PostStatus::Published && post.published_at.is_some())
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(limit as usize);
        Ok(posts)
    }
}

#[async_trait]
impl TopicsRepo for InMemoryStore {
    async fn list_approved_with_reply_counts(
        &self,
        limit: u32,
    ) -> Result<Vec<TopicSummary>, RepoError> {
        self.check()?;
        Ok(self
            .approved_topics()
            .into_iter()
            .take(limit as usize)
            .map(|stored| TopicSummary {
                topic: stored.topic.clone(),
                reply_count: Self::approved_replies(stored).len() as u64,
            })
            .collect())
    }

    async fn find_approved_thread(&self, slug: &str) -> Result<Option<TopicThread>, RepoError> {
        self.check()?;
        Ok(self
            .approved_topics()
            .into_iter()
            .find(|stored| stored.topic.slug == slug)
            .map(|stored| TopicThread {
                topic: stored.topic.clone(),
                replies: Self::approved_replies(stored),
            }))
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> Result<(), RepoError> {
        self.check()
    }
}

pub fn post(slug: &str, title: &str, status: PostStatus, age_days: i64) -> PostRecord {
    let published_at = BASE - Duration::days(age_days);
    PostRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        author_name: "Noor".to_string(),
        excerpt: format!("Excerpt for {title}"),
        body: Some(format!("Body of {title}.\n\nSecond paragraph.")),
        custom_css: None,
        status,
        published_at: (status != PostStatus::Draft).then_some(published_at),
        created_at: published_at - Duration::hours(2),
        updated_at: published_at,
    }
}

pub fn topic(slug: &str, title: &str, status: ModerationStatus, age_hours: i64) -> StoredTopic {
    StoredTopic {
        topic: TopicRecord {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: title.to_string(),
            author_name: "Ines".to_string(),
            body: format!("Opening post of {title}.\n\nMore detail about {title}."),
            status,
            created_at: BASE - Duration::hours(age_hours),
        },
        replies: Vec::new(),
    }
}

pub fn with_replies(mut stored: StoredTopic, approved: usize, pending: usize) -> StoredTopic {
    let created = stored.topic.created_at;
    for idx in 0..approved + pending {
        let status = if idx < approved {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Pending
        };
        stored.replies.push((
            ReplyRecord {
                id: Uuid::new_v4(),
                author_name: format!("member-{idx}"),
                body: format!("reply number {idx}"),
                created_at: created + Duration::minutes(idx as i64 + 1),
            },
            status,
        ));
    }
    stored
}

pub fn router(store: InMemoryStore) -> Router {
    let store = Arc::new(store);
    let render = RenderContext::new(store.clone(), store.clone(), SiteChrome::new("Agora"));
    build_router(HttpState::new(render, store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}
