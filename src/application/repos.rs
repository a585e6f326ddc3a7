//! Repository traits describing persistence adapters.
//!
//! Every read exposed here is already restricted to publicly visible content:
//! published posts and approved forum topics. Callers never filter by status.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PostRecord, TopicSummary, TopicThread};

pub const DEFAULT_LISTING_LIMIT: u32 = 50;
pub const MAX_LISTING_LIMIT: u32 = 200;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Clamp a requested listing size to the supported range.
pub fn clamp_listing_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LISTING_LIMIT)
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// Look up a published post by its slug. Drafts and archived posts yield `None`.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;

    /// Published posts, most recent first.
    async fn list_published(&self, limit: u32) -> Result<Vec<PostRecord>, RepoError>;
}

#[async_trait]
pub trait TopicsRepo: Send + Sync {
    /// Approved topics, most recent first, each with its approved reply count.
    ///
    /// The count is computed by the store in the same statement as the topic rows.
    async fn list_approved_with_reply_counts(
        &self,
        limit: u32,
    ) -> Result<Vec<TopicSummary>, RepoError>;

    /// An approved topic by slug with its approved replies, read in a single statement.
    async fn find_approved_thread(&self, slug: &str) -> Result<Option<TopicThread>, RepoError>;
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip a trivial statement through the store.
    async fn ping(&self) -> Result<(), RepoError>;
}
