use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }
}

pub fn render_template<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err))
}

/// One listing entry, already flattened to display strings.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub href: String,
    pub title: String,
    pub author: String,
    pub iso_date: String,
    pub date_label: String,
    pub excerpt: String,
    pub show_replies: bool,
    pub reply_count: u64,
    pub reply_label: String,
}

#[derive(Template)]
#[template(path = "partials/items.html")]
pub struct ItemsPartial<'a> {
    pub items: &'a [ItemView],
}

#[derive(Template)]
#[template(path = "partials/highlight.html")]
pub struct HighlightPartial<'a> {
    pub item: &'a ItemView,
}

#[derive(Template)]
#[template(path = "partials/body.html")]
pub struct BodyPartial<'a> {
    pub paragraphs: &'a [&'a str],
}

#[derive(Debug, Clone)]
pub struct ReplyView {
    pub author: String,
    pub iso_date: String,
    pub date_label: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "partials/replies.html")]
pub struct RepliesPartial<'a> {
    pub replies: &'a [ReplyView],
    pub heading: &'a str,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate<'a> {
    pub site_name: &'a str,
    pub navigation: &'a [NavigationLinkView],
    pub back_href: &'a str,
    pub back_label: &'a str,
    pub title: &'a str,
    pub page_styles: &'a str,
    pub css_override: &'a str,
    pub body: &'a str,
}
