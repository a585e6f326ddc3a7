//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::types::{ModerationStatus, PostStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub author_name: String,
    pub excerpt: String,
    pub body: Option<String>,
    pub custom_css: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl PostRecord {
    /// Timestamp shown to readers: publication time when present, creation time otherwise.
    pub fn display_time(&self) -> OffsetDateTime {
        self.published_at.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub author_name: String,
    /// Opening post of the topic.
    pub body: String,
    pub status: ModerationStatus,
    pub created_at: OffsetDateTime,
}

/// A forum topic together with the number of approved replies, fetched in one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub topic: TopicRecord,
    pub reply_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyRecord {
    pub id: Uuid,
    pub author_name: String,
    pub body: String,
    pub created_at: OffsetDateTime,
}

/// An approved topic with its approved replies, oldest reply first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicThread {
    pub topic: TopicRecord,
    pub replies: Vec<ReplyRecord>,
}
