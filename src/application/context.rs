use std::sync::Arc;

use crate::application::repos::{DEFAULT_LISTING_LIMIT, PostsRepo, TopicsRepo};
use crate::presentation::document::SiteChrome;

/// Everything a renderer needs, passed explicitly to each call.
///
/// Holds shared read-only handles only; every render reads the store afresh.
#[derive(Clone)]
pub struct RenderContext {
    pub posts: Arc<dyn PostsRepo>,
    pub topics: Arc<dyn TopicsRepo>,
    pub chrome: SiteChrome,
    pub listing_limit: u32,
}

impl RenderContext {
    pub fn new(posts: Arc<dyn PostsRepo>, topics: Arc<dyn TopicsRepo>, chrome: SiteChrome) -> Self {
        Self {
            posts,
            topics,
            chrome,
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }

    pub fn with_listing_limit(self, listing_limit: u32) -> Self {
        Self {
            listing_limit,
            ..self
        }
    }
}
