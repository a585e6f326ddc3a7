use crate::application::context::RenderContext;
use crate::presentation::{
    assemble::{Fragment, assemble_body, assemble_highlight, assemble_items, assemble_replies},
    document::{BackLink, DocumentFields, wrap},
    styles,
};

use super::{CachePolicy, RenderError, RenderOutcome, observe};

const PAGE_FORUM_ARCHIVE: &str = "forum_archive";
const PAGE_FORUM_THREAD: &str = "forum_thread";
const PAGE_FORUM_TOPICS: &str = "forum_topics_fragment";

/// Render the approved topic archive with reply counts.
pub async fn forum_archive(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    observe(PAGE_FORUM_ARCHIVE, resolve_forum_archive(ctx).await)
}

/// Render one approved topic with its approved replies. New replies keep
/// arriving, so threads use the listing cache policy.
pub async fn forum_thread(ctx: &RenderContext, slug: &str) -> Result<RenderOutcome, RenderError> {
    observe(PAGE_FORUM_THREAD, resolve_forum_thread(ctx, slug).await)
}

/// The topic list alone, for embedding by client-side scripts.
pub async fn forum_topics_fragment(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    observe(PAGE_FORUM_TOPICS, resolve_forum_topics_fragment(ctx).await)
}

async fn resolve_forum_archive(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    let topics = ctx
        .topics
        .list_approved_with_reply_counts(ctx.listing_limit)
        .await?;

    let body = Fragment::join([assemble_highlight(&topics)?, assemble_items(&topics)?]);
    let fields = DocumentFields {
        title: "Forum".to_string(),
        body: Some(body),
        ..Default::default()
    };
    let document = wrap(fields, &styles::listing_styles(), &ctx.chrome)?;

    Ok(RenderOutcome::Document {
        document,
        cache: CachePolicy::Listing,
    })
}

async fn resolve_forum_thread(
    ctx: &RenderContext,
    slug: &str,
) -> Result<RenderOutcome, RenderError> {
    let Some(thread) = ctx.topics.find_approved_thread(slug).await? else {
        return Ok(RenderOutcome::NotFound);
    };

    let body = Fragment::join([
        assemble_body(&thread.topic.body)?,
        assemble_replies(&thread.replies)?,
    ]);
    let fields = DocumentFields {
        title: thread.topic.title,
        body: Some(body),
        css_override: None,
        back: Some(BackLink::new("/forum", "All topics")),
    };
    let document = wrap(fields, &styles::article_styles(), &ctx.chrome)?;

    Ok(RenderOutcome::Document {
        document,
        cache: CachePolicy::Listing,
    })
}

async fn resolve_forum_topics_fragment(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    let topics = ctx
        .topics
        .list_approved_with_reply_counts(ctx.listing_limit)
        .await?;

    Ok(RenderOutcome::Fragment {
        fragment: assemble_items(&topics)?,
        cache: CachePolicy::Listing,
    })
}
