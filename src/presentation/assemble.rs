//! Markup assembly: records in, HTML fragments out.
//!
//! Everything here is pure. Record text reaches the output only through askama
//! templates, whose HTML escaping is the single injection defense for titles,
//! author names, excerpts and bodies.

use std::fmt;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::domain::entities::{PostRecord, ReplyRecord, TopicSummary};

use super::views::{
    BodyPartial, HighlightPartial, ItemView, ItemsPartial, RepliesPartial, ReplyView,
    TemplateRenderError, render_template,
};

pub const EMPTY_STATE_HTML: &str = "<p class=\"empty-state\">Nothing here yet.</p>";

const DATE_LABEL_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// HTML produced by the assembler. Only this module constructs non-empty fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Concatenate fragments in order.
    pub fn join<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        Self(fragments.into_iter().map(|fragment| fragment.0).collect())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record that can appear in a listing.
pub trait ContentItem {
    fn href(&self) -> String;
    fn title(&self) -> &str;
    fn author_name(&self) -> &str;
    fn excerpt(&self) -> &str;
    fn timestamp(&self) -> OffsetDateTime;

    fn reply_count(&self) -> Option<u64> {
        None
    }
}

impl ContentItem for PostRecord {
    fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.display_time()
    }
}

impl ContentItem for TopicSummary {
    fn href(&self) -> String {
        format!("/forum/{}", self.topic.slug)
    }

    fn title(&self) -> &str {
        &self.topic.title
    }

    fn author_name(&self) -> &str {
        &self.topic.author_name
    }

    /// First paragraph of the opening post.
    fn excerpt(&self) -> &str {
        split_paragraphs(&self.topic.body)
            .first()
            .copied()
            .unwrap_or_default()
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.topic.created_at
    }

    fn reply_count(&self) -> Option<u64> {
        Some(self.reply_count)
    }
}

/// Render records as an ordered list, preserving the caller's order.
///
/// An empty slice yields [`EMPTY_STATE_HTML`].
pub fn assemble_items<T: ContentItem>(records: &[T]) -> Result<Fragment, TemplateRenderError> {
    if records.is_empty() {
        return Ok(Fragment(EMPTY_STATE_HTML.to_string()));
    }

    let items: Vec<ItemView> = records.iter().map(item_view).collect();
    render_template(
        &ItemsPartial { items: &items },
        "presentation::assemble::assemble_items",
    )
    .map(Fragment)
}

/// Render the first record as the "latest" highlight. An empty slice yields an empty fragment.
pub fn assemble_highlight<T: ContentItem>(records: &[T]) -> Result<Fragment, TemplateRenderError> {
    let Some(latest) = records.first() else {
        return Ok(Fragment::empty());
    };

    let item = item_view(latest);
    render_template(
        &HighlightPartial { item: &item },
        "presentation::assemble::assemble_highlight",
    )
    .map(Fragment)
}

/// Render a free-text body as paragraphs separated by blank lines.
pub fn assemble_body(text: &str) -> Result<Fragment, TemplateRenderError> {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return Ok(Fragment::empty());
    }

    render_template(
        &BodyPartial {
            paragraphs: &paragraphs,
        },
        "presentation::assemble::assemble_body",
    )
    .map(Fragment)
}

/// Render the approved replies of a thread. No replies yields an empty fragment.
pub fn assemble_replies(replies: &[ReplyRecord]) -> Result<Fragment, TemplateRenderError> {
    if replies.is_empty() {
        return Ok(Fragment::empty());
    }

    let views: Vec<ReplyView> = replies
        .iter()
        .map(|reply| ReplyView {
            author: reply.author_name.clone(),
            iso_date: format_iso_date(reply.created_at),
            date_label: format_date_label(reply.created_at),
            body: reply.body.clone(),
        })
        .collect();
    let heading = reply_label(replies.len() as u64);

    render_template(
        &RepliesPartial {
            replies: &views,
            heading: &heading,
        },
        "presentation::assemble::assemble_replies",
    )
    .map(Fragment)
}

fn item_view<T: ContentItem>(record: &T) -> ItemView {
    let timestamp = record.timestamp();
    let reply_count = record.reply_count();

    ItemView {
        href: record.href(),
        title: record.title().to_string(),
        author: record.author_name().trim().to_string(),
        iso_date: format_iso_date(timestamp),
        date_label: format_date_label(timestamp),
        excerpt: record.excerpt().trim().to_string(),
        show_replies: reply_count.is_some(),
        reply_count: reply_count.unwrap_or(0),
        reply_label: reply_count.map(reply_label).unwrap_or_default(),
    }
}

fn split_paragraphs(text: &str) -> Vec<&str> {
    let normalized = text.trim();
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut blank_run = false;
    let mut offset = 0;

    for line in normalized.split_inclusive('\n') {
        let is_blank = line.trim().is_empty();
        if is_blank && !blank_run {
            push_paragraph(&mut paragraphs, &normalized[start..offset]);
        }
        if !is_blank && blank_run {
            start = offset;
        }
        blank_run = is_blank;
        offset += line.len();
    }
    if !blank_run {
        push_paragraph(&mut paragraphs, &normalized[start..]);
    }

    paragraphs
}

fn push_paragraph<'a>(paragraphs: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed);
    }
}

fn reply_label(count: u64) -> String {
    match count {
        1 => "1 reply".to_string(),
        n => format!("{n} replies"),
    }
}

fn format_date_label(timestamp: OffsetDateTime) -> String {
    timestamp.date().format(DATE_LABEL_FORMAT).unwrap_or_default()
}

fn format_iso_date(timestamp: OffsetDateTime) -> String {
    timestamp.date().format(ISO_DATE_FORMAT).unwrap_or_default()
}
