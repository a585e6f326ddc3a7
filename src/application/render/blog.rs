use crate::application::context::RenderContext;
use crate::presentation::{
    assemble::{Fragment, assemble_body, assemble_highlight, assemble_items},
    document::{BackLink, DocumentFields, wrap},
    styles,
};

use super::{CachePolicy, RenderError, RenderOutcome, observe};

const PAGE_BLOG_POST: &str = "blog_post";
const PAGE_BLOG_INDEX: &str = "blog_index";

/// Render one published post. Slugs are immutable once published, so the
/// document is cacheable indefinitely.
pub async fn blog_post(ctx: &RenderContext, slug: &str) -> Result<RenderOutcome, RenderError> {
    observe(PAGE_BLOG_POST, resolve_blog_post(ctx, slug).await)
}

/// Render the latest published posts.
pub async fn blog_index(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    observe(PAGE_BLOG_INDEX, resolve_blog_index(ctx).await)
}

async fn resolve_blog_post(ctx: &RenderContext, slug: &str) -> Result<RenderOutcome, RenderError> {
    let Some(post) = ctx.posts.find_published_by_slug(slug).await? else {
        return Ok(RenderOutcome::NotFound);
    };

    let body = assemble_body(post.body.as_deref().unwrap_or_default())?;
    let fields = DocumentFields {
        title: post.title,
        body: Some(body),
        css_override: post.custom_css,
        back: Some(BackLink::new("/blog", "All posts")),
    };
    let document = wrap(fields, &styles::article_styles(), &ctx.chrome)?;

    Ok(RenderOutcome::Document {
        document,
        cache: CachePolicy::Immutable,
    })
}

async fn resolve_blog_index(ctx: &RenderContext) -> Result<RenderOutcome, RenderError> {
    let posts = ctx.posts.list_published(ctx.listing_limit).await?;

    let body = Fragment::join([assemble_highlight(&posts)?, assemble_items(&posts)?]);
    let fields = DocumentFields {
        title: "Blog".to_string(),
        body: Some(body),
        ..Default::default()
    };
    let document = wrap(fields, &styles::listing_styles(), &ctx.chrome)?;

    Ok(RenderOutcome::Document {
        document,
        cache: CachePolicy::Listing,
    })
}
