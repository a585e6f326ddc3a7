//! HTML escaper registered for `.html` templates in `askama.toml`.

use std::fmt::{self, Write};

use askama::filters::Escaper;

/// Escapes `& < > " '` with named entities (`&lt;` rather than `&#60;`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedHtml;

impl Escaper for NamedHtml {
    fn write_escaped_str<W: Write>(&self, mut dest: W, string: &str) -> fmt::Result {
        dest.write_str(&html_escape::encode_quoted_attribute(string))
    }
}
