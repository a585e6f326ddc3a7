use std::sync::Arc;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime, macros::datetime};
use uuid::Uuid;

use super::*;
use crate::application::context::RenderContext;
use crate::application::repos::{PostsRepo, RepoError, TopicsRepo};
use crate::domain::entities::{PostRecord, ReplyRecord, TopicRecord, TopicSummary, TopicThread};
use crate::domain::types::{ModerationStatus, PostStatus};
use crate::presentation::assemble::EMPTY_STATE_HTML;
use crate::presentation::document::SiteChrome;

const BASE: OffsetDateTime = datetime!(2025-02-01 12:00 UTC);

#[derive(Default)]
struct StubPosts {
    posts: Vec<PostRecord>,
}

#[async_trait]
impl PostsRepo for StubPosts {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self
            .posts
            .iter()
            .find(|post| post.slug == slug && post.status == PostStatus::Published)
            .cloned())
    }

    async fn list_published(&self, limit: u32) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self
            .posts
            .iter()
            .filter(|post| post.status == PostStatus::Published)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct StubTopics {
    threads: Vec<TopicThread>,
}

#[async_trait]
impl TopicsRepo for StubTopics {
    async fn list_approved_with_reply_counts(
        &self,
        limit: u32,
    ) -> Result<Vec<TopicSummary>, RepoError> {
        Ok(self
            .threads
            .iter()
            .take(limit as usize)
            .map(|thread| TopicSummary {
                topic: thread.topic.clone(),
                reply_count: thread.replies.len() as u64,
            })
            .collect())
    }

    async fn find_approved_thread(&self, slug: &str) -> Result<Option<TopicThread>, RepoError> {
        Ok(self
            .threads
            .iter()
            .find(|thread| thread.topic.slug == slug)
            .cloned())
    }
}

struct FailingStore;

#[async_trait]
impl PostsRepo for FailingStore {
    async fn find_published_by_slug(&self, _slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Err(RepoError::from_persistence("connection refused"))
    }

    async fn list_published(&self, _limit: u32) -> Result<Vec<PostRecord>, RepoError> {
        Err(RepoError::Timeout)
    }
}

#[async_trait]
impl TopicsRepo for FailingStore {
    async fn list_approved_with_reply_counts(
        &self,
        _limit: u32,
    ) -> Result<Vec<TopicSummary>, RepoError> {
        Err(RepoError::Timeout)
    }

    async fn find_approved_thread(&self, _slug: &str) -> Result<Option<TopicThread>, RepoError> {
        Err(RepoError::Timeout)
    }
}

fn post(slug: &str, title: &str, status: PostStatus) -> PostRecord {
    PostRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        author_name: "ana".to_string(),
        excerpt: format!("About {title}"),
        body: Some("First paragraph.\n\nSecond paragraph.".to_string()),
        custom_css: None,
        status,
        published_at: Some(BASE),
        created_at: BASE - Duration::days(1),
        updated_at: BASE,
    }
}

fn thread(slug: &str, title: &str, replies: usize) -> TopicThread {
    TopicThread {
        topic: TopicRecord {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: title.to_string(),
            author_name: "rui".to_string(),
            body: "Opening words".to_string(),
            status: ModerationStatus::Approved,
            created_at: BASE,
        },
        replies: (0..replies)
            .map(|idx| ReplyRecord {
                id: Uuid::new_v4(),
                author_name: format!("replier-{idx}"),
                body: format!("reply body {idx}"),
                created_at: BASE + Duration::minutes(idx as i64),
            })
            .collect(),
    }
}

fn context(posts: StubPosts, topics: StubTopics) -> RenderContext {
    RenderContext::new(Arc::new(posts), Arc::new(topics), SiteChrome::new("Agora"))
}

fn document_html(outcome: RenderOutcome) -> (String, CachePolicy) {
    match outcome {
        RenderOutcome::Document { document, cache } => (document.into_string(), cache),
        other => panic!("expected document, got {other:?}"),
    }
}

#[tokio::test]
async fn published_post_renders_immutable_document() {
    let mut published = post("hello-world", "Hello World", PostStatus::Published);
    published.custom_css = Some("h1 { color: teal; }".to_string());
    let ctx = context(
        StubPosts {
            posts: vec![published],
        },
        StubTopics::default(),
    );

    let outcome = blog_post(&ctx, "hello-world").await.expect("render");
    let (html, cache) = document_html(outcome);

    assert_eq!(cache, CachePolicy::Immutable);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Hello World</title>"));
    assert!(html.contains("h1 { color: teal; }"));
    assert_eq!(html.matches("<p>").count(), 2);
    assert!(html.contains("href=\"/blog\""));
}

#[tokio::test]
async fn draft_post_is_not_found() {
    let ctx = context(
        StubPosts {
            posts: vec![post("secret", "Secret", PostStatus::Draft)],
        },
        StubTopics::default(),
    );

    let outcome = blog_post(&ctx, "secret").await.expect("render");
    assert_eq!(outcome, RenderOutcome::NotFound);
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let ctx = context(StubPosts::default(), StubTopics::default());
    let outcome = blog_post(&ctx, "missing").await.expect("render");
    assert_eq!(outcome, RenderOutcome::NotFound);
}

#[tokio::test]
async fn post_without_body_still_renders() {
    let mut bare = post("bare", "Bare", PostStatus::Published);
    bare.body = None;
    let ctx = context(StubPosts { posts: vec![bare] }, StubTopics::default());

    let (html, _) = document_html(blog_post(&ctx, "bare").await.expect("render"));
    assert!(html.contains("<title>Bare</title>"));
    assert!(!html.contains("<article class=\"body\">"));
}

#[tokio::test]
async fn blog_index_lists_published_posts_only() {
    let ctx = context(
        StubPosts {
            posts: vec![
                post("newest", "Newest", PostStatus::Published),
                post("hidden", "Hidden", PostStatus::Draft),
                post("older", "Older", PostStatus::Published),
            ],
        },
        StubTopics::default(),
    );

    let (html, cache) = document_html(blog_index(&ctx).await.expect("render"));
    assert_eq!(cache, CachePolicy::Listing);
    assert!(html.contains("/blog/newest"));
    assert!(html.contains("/blog/older"));
    assert!(!html.contains("Hidden"));
    assert!(html.contains("<section class=\"latest\">"));
}

#[tokio::test]
async fn empty_archive_renders_empty_state() {
    let ctx = context(StubPosts::default(), StubTopics::default());

    let (html, cache) = document_html(forum_archive(&ctx).await.expect("render"));
    assert_eq!(cache, CachePolicy::Listing);
    assert!(html.contains(EMPTY_STATE_HTML));
    assert!(!html.contains("<li class=\"item\""));
}

#[tokio::test]
async fn archive_shows_reply_counts() {
    let ctx = context(
        StubPosts::default(),
        StubTopics {
            threads: vec![thread("quiet", "Quiet", 0), thread("busy", "Busy", 3)],
        },
    );

    let (html, _) = document_html(forum_archive(&ctx).await.expect("render"));
    assert!(html.contains("data-replies=\"0\""));
    assert!(html.contains("data-replies=\"3\""));
    assert!(html.contains("3 replies"));
}

#[tokio::test]
async fn listing_limit_bounds_items() {
    let threads = (0..5)
        .map(|idx| thread(&format!("t{idx}"), &format!("Topic {idx}"), 0))
        .collect();
    let ctx = context(StubPosts::default(), StubTopics { threads }).with_listing_limit(2);

    let outcome = forum_topics_fragment(&ctx).await.expect("render");
    let RenderOutcome::Fragment { fragment, cache } = outcome else {
        panic!("expected fragment");
    };
    assert_eq!(cache, CachePolicy::Listing);
    assert_eq!(fragment.as_str().matches("<li class=\"item\"").count(), 2);
    assert!(!fragment.as_str().contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn thread_renders_replies_in_order() {
    let ctx = context(
        StubPosts::default(),
        StubTopics {
            threads: vec![thread("welcome", "Welcome", 2)],
        },
    );

    let (html, cache) = document_html(forum_thread(&ctx, "welcome").await.expect("render"));
    assert_eq!(cache, CachePolicy::Listing);
    assert!(html.contains("Opening words"));
    let first = html.find("reply body 0").expect("first reply");
    let second = html.find("reply body 1").expect("second reply");
    assert!(first < second);
    assert!(html.contains("href=\"/forum\""));
}

#[tokio::test]
async fn unknown_thread_is_not_found() {
    let ctx = context(StubPosts::default(), StubTopics::default());
    let outcome = forum_thread(&ctx, "nope").await.expect("render");
    assert_eq!(outcome, RenderOutcome::NotFound);
}

#[tokio::test]
async fn store_failures_surface_as_errors() {
    let store = Arc::new(FailingStore);
    let ctx = RenderContext::new(store.clone(), store, SiteChrome::new("Agora"));

    assert!(matches!(
        blog_post(&ctx, "any").await,
        Err(RenderError::Repo(RepoError::Persistence(_)))
    ));
    assert!(matches!(
        forum_archive(&ctx).await,
        Err(RenderError::Repo(RepoError::Timeout))
    ));
}
