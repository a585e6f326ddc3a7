//! Route registration table.
//!
//! Every public feature is listed once here with its path and handler; the
//! router is folded from this table at startup.

use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};

use super::{
    HttpState, api,
    middleware::{log_responses, set_request_context},
    public,
};

pub struct RouteEntry {
    pub feature: &'static str,
    pub path: &'static str,
    pub handler: MethodRouter<HttpState>,
}

impl RouteEntry {
    fn new(feature: &'static str, path: &'static str, handler: MethodRouter<HttpState>) -> Self {
        Self {
            feature,
            path,
            handler,
        }
    }
}

pub fn registry() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("home", "/", get(public::blog_index)),
        RouteEntry::new("blog.index", "/blog", get(public::blog_index)),
        RouteEntry::new("blog.post", "/blog/{slug}", get(public::blog_post)),
        RouteEntry::new("forum.archive", "/forum", get(public::forum_archive)),
        RouteEntry::new("forum.thread", "/forum/{slug}", get(public::forum_thread)),
        RouteEntry::new(
            "forum.topics_fragment",
            "/ui/forum/topics",
            get(public::forum_topics_fragment),
        ),
        RouteEntry::new("api.blog.index", "/api/blog", get(api::list_posts)),
        RouteEntry::new("api.blog.post", "/api/blog/{slug}", get(api::get_post)),
        RouteEntry::new("api.forum.topics", "/api/forum/topics", get(api::list_topics)),
        RouteEntry::new("health.db", "/_health/db", get(public::public_health)),
    ]
}

pub fn build_router(state: HttpState) -> Router {
    registry()
        .into_iter()
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, entry.handler)
        })
        .fallback(public::fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}
