//! Server-rendered page pipeline.
//!
//! Each page resolves its data through the repositories in [`RenderContext`],
//! then either responds with assembled and wrapped markup or ends in
//! [`RenderOutcome::NotFound`]. Store and template failures are returned as
//! [`RenderError`] for the HTTP layer to translate.

mod blog;
mod forum;
mod outcome;

pub use blog::{blog_index, blog_post};
pub use forum::{forum_archive, forum_thread, forum_topics_fragment};
pub use outcome::{CachePolicy, RenderOutcome};

use metrics::counter;
use thiserror::Error;
use tracing::debug;

use crate::application::repos::RepoError;
use crate::presentation::views::TemplateRenderError;

pub const METRIC_RENDER_TOTAL: &str = "agora_render_total";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
}

fn observe(
    page: &'static str,
    result: Result<RenderOutcome, RenderError>,
) -> Result<RenderOutcome, RenderError> {
    let outcome = match &result {
        Ok(outcome) => outcome.label(),
        Err(_) => "error",
    };
    counter!(METRIC_RENDER_TOTAL, "page" => page, "outcome" => outcome).increment(1);

    if matches!(result, Ok(RenderOutcome::NotFound)) {
        debug!(target = "agora::render", page, "no published record for route key");
    }

    result
}

#[cfg(test)]
mod tests;
