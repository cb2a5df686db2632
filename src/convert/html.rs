//! HTML converter: the one rich-markup pipeline, producing structural
//! tags instead of another plain-text dialect.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape;
use crate::rule::{self, Rule};

static H6: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{6}\s+(.+)$").unwrap());
static H5: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{5}\s+(.+)$").unwrap());
static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{4}\s+(.+)$").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{3}\s+(.+)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{2}\s+(.+)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

/// Greedy: one `<ul>` wraps the whole run of list items, ordered or not.
static UL_WRAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(<li>.*</li>)").unwrap());

/// A run of blank lines is a paragraph boundary.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

/// Escape characters with special meaning in HTML.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

fn render_code_block(caps: &Captures) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        &caps[1],
        escape_html(caps[2].trim())
    )
}

fn render_inline_code(caps: &Captures) -> String {
    format!("<code>{}</code>", escape_html(&caps[1]))
}

/// Fenced blocks are consumed before the inline-code rule can chew on
/// their fences; headings go from six hashes down to one so a shorter
/// pattern never takes a partial bite of a longer marker; images go
/// before links so `![alt](url)` is never half-matched as a link.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Render(&rule::CODE_BLOCK, render_code_block),
        Rule::Render(&rule::INLINE_CODE, render_inline_code),
        Rule::Replace(&H6, "<h6>$1</h6>"),
        Rule::Replace(&H5, "<h5>$1</h5>"),
        Rule::Replace(&H4, "<h4>$1</h4>"),
        Rule::Replace(&H3, "<h3>$1</h3>"),
        Rule::Replace(&H2, "<h2>$1</h2>"),
        Rule::Replace(&H1, "<h1>$1</h1>"),
        Rule::Replace(&rule::IMAGE_CAPTURE, "<img src=\"$2\" alt=\"$1\" />"),
        Rule::Replace(&rule::LINK, "<a href=\"$2\">$1</a>"),
        Rule::Replace(&rule::BOLD, "<strong>$1</strong>"),
        Rule::Emphasis('*', |content| format!("<em>{content}</em>")),
        Rule::Emphasis('_', |content| format!("<em>{content}</em>")),
        Rule::Replace(&rule::STRIKE, "<del>$1</del>"),
        Rule::Replace(&rule::QUOTE, "<blockquote>$1</blockquote>"),
        Rule::Replace(&rule::BULLET, "<li>$1</li>"),
        Rule::Replace(&UL_WRAP, "<ul>$1</ul>"),
        Rule::Replace(&rule::ORDERED, "<li>$1</li>"),
        Rule::Replace(&PARAGRAPH_BREAK, "</p><p>"),
    ]
});

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
