//! Inline stylesheets embedded in every rendered document.

/// Shared base styles: layout, chrome, typography.
const BASE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fbfaf7;--fg:#1d1d1b;--fg2:#5b5b57;--accent:#b4441c;--rule:rgba(0,0,0,.08)}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg)}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
.chrome{display:flex;justify-content:space-between;align-items:center;max-width:760px;margin:0 auto;padding:1.25rem 1rem}
.site-name{font-weight:700;color:var(--fg)}
.site-nav a{margin-left:1rem}
main{max-width:760px;margin:0 auto;padding:0 1rem 3rem}
.back-link{display:inline-block;margin-bottom:1rem;font-size:.9rem}
.page-title{font-size:2rem;line-height:1.25;margin-bottom:1.25rem}
.item-meta{font-size:.85rem;color:var(--fg2)}
.empty-state{color:var(--fg2);font-style:italic}
"#;

const LISTING_CSS: &str = r#"
.items{list-style:none}
.item{padding:1rem 0;border-top:1px solid var(--rule)}
.item-title{font-size:1.15rem;font-weight:600}
.item-excerpt{margin-top:.35rem;color:var(--fg2)}
.latest{padding:1.25rem;margin-bottom:1.5rem;background:#fff;border-radius:8px}
.latest-label{text-transform:uppercase;letter-spacing:.08em;font-size:.75rem;color:var(--fg2)}
.latest-title{font-size:1.4rem;font-weight:700}
.latest-excerpt{margin-top:.5rem}
"#;

const ARTICLE_CSS: &str = r#"
.body p{margin-bottom:1rem;white-space:pre-line}
.replies{margin-top:2rem}
.replies h2{font-size:1.1rem;margin-bottom:.75rem}
.reply-list{list-style:none}
.reply{padding:.75rem 0;border-top:1px solid var(--rule)}
.reply-body{white-space:pre-line}
"#;

/// Styles for listing pages (blog index, forum archive).
pub fn listing_styles() -> String {
    format!("{BASE_CSS}{LISTING_CSS}")
}

/// Styles for single-item pages (blog post, forum thread).
pub fn article_styles() -> String {
    format!("{BASE_CSS}{ARTICLE_CSS}")
}
