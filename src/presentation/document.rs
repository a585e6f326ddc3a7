//! Document shell: wraps one fragment in a complete HTML page.

use std::fmt;

use super::assemble::Fragment;
use super::views::{DocumentTemplate, NavigationLinkView, TemplateRenderError, render_template};

/// A complete, standalone HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Site-wide chrome shared by every document.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub site_name: String,
}

impl SiteChrome {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackLink {
    pub href: String,
    pub label: String,
}

impl BackLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Per-page inputs to [`wrap`]. Optional fields render as empty strings.
#[derive(Debug, Clone, Default)]
pub struct DocumentFields {
    pub title: String,
    pub body: Option<Fragment>,
    pub css_override: Option<String>,
    pub back: Option<BackLink>,
}

const NAVIGATION: &[NavigationLinkView] = &[
    NavigationLinkView {
        label: "Blog",
        href: "/blog",
    },
    NavigationLinkView {
        label: "Forum",
        href: "/forum",
    },
];

pub fn wrap(
    fields: DocumentFields,
    page_styles: &str,
    chrome: &SiteChrome,
) -> Result<Document, TemplateRenderError> {
    let css_override = fields
        .css_override
        .as_deref()
        .map(neutralize_css)
        .unwrap_or_default();
    let body = fields.body.unwrap_or_default();
    let (back_href, back_label) = fields
        .back
        .as_ref()
        .map(|back| (back.href.as_str(), back.label.as_str()))
        .unwrap_or(("", ""));

    let template = DocumentTemplate {
        site_name: &chrome.site_name,
        navigation: NAVIGATION,
        back_href,
        back_label,
        title: &fields.title,
        page_styles,
        css_override: &css_override,
        body: body.as_str(),
    };

    render_template(&template, "presentation::document::wrap").map(Document)
}

/// Strip `<` so stored CSS cannot close the surrounding `<style>` element.
fn neutralize_css(css: &str) -> String {
    css.chars().filter(|ch| *ch != '<').collect()
}
