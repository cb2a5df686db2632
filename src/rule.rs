//! Rewrite rule primitives shared by the platform pipelines.
//!
//! A [`Rule`] pairs a detection pattern for one markdown construct with a
//! production: a capture template, a render function, or the inner content
//! alone. A pipeline is an ordered `Vec<Rule>` applied as a left-to-right
//! fold over the text, which makes rule order an explicit, testable value
//! rather than implicit code sequence.
//!
//! Patterns are compiled once into `once_cell` lazy statics. Rules here
//! are pure string-to-string transforms; none of them reads or writes
//! state outside the text it receives.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `**bold**`, across newlines.
pub static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());

/// `~~strikethrough~~`, across newlines.
pub static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)~~(.+?)~~").unwrap());

/// `` `inline code` ``, across newlines.
pub static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)`(.+?)`").unwrap());

/// Fenced code block with optional language tag, non-greedy to the
/// nearest closing fence.
pub static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w*)\n(.+?)```").unwrap());

/// `[text](url)`.
pub static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[(.+?)\]\((.+?)\)").unwrap());

/// `![alt](url)`, for removal; alt and url may be empty.
pub static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());

/// `![alt](url)` with captures, for rendering.
pub static IMAGE_CAPTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.+?)\]\((.+?)\)").unwrap());

/// Heading of any level, capturing the heading text.
pub static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap());

/// Heading marker and its trailing whitespace, for stripping.
pub static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());

/// Blockquote line, capturing the quoted text.
pub static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s+(.+)$").unwrap());

/// Blockquote marker at line start.
pub static QUOTE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s+").unwrap());

/// Unordered list item, capturing the item text.
pub static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*+]\s+(.+)$").unwrap());

/// Unordered list marker at line start.
pub static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*+]\s+").unwrap());

/// Ordered list item (`1.`, `2.`, ...), capturing the item text.
pub static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s+(.+)$").unwrap());

/// One rewrite step in a platform pipeline.
pub enum Rule {
    /// Replace every match with a capture template (`$1`, `$2`, ...).
    /// An empty template removes the construct entirely; `$1` alone keeps
    /// the inner content and drops the formatting.
    Replace(&'static Lazy<Regex>, &'static str),

    /// Replace every match with the output of a render function.
    Render(&'static Lazy<Regex>, fn(&Captures) -> String),

    /// Rewrite single-delimiter emphasis spans (`*italic*`, `_italic_`)
    /// without firing inside doubled runs like `**bold**`.
    Emphasis(char, fn(&str) -> String),
}

impl Rule {
    /// Apply this rule to the whole text, returning the rewritten text.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::Replace(pattern, template) => {
                pattern.replace_all(text, *template).into_owned()
            }
            Rule::Render(pattern, render) => pattern
                .replace_all(text, |caps: &Captures| render(caps))
                .into_owned(),
            Rule::Emphasis(delim, render) => rewrite_emphasis(text, *delim, *render),
        }
    }
}

/// Apply an ordered pipeline of rules left to right.
pub fn run(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_owned(), |acc, rule| rule.apply(&acc))
}

/// Rewrite `<delim>content<delim>` spans whose delimiters are single.
///
/// An opener must not touch another delimiter on either side; a closer
/// must not be followed by one. This mirrors lookaround-style matching
/// (`(?<!\*)\*(?!\*)(.+?)\*(?!\*)`) with a byte scan, so a rewritten
/// `**bold**` -> `*bold*` earlier in a pipeline is never re-matched as
/// italic when this rule runs first on the original delimiters.
fn rewrite_emphasis(text: &str, delim: char, render: fn(&str) -> String) -> String {
    debug_assert!(delim.is_ascii());
    let d = delim as u8;
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let opens = bytes[i] == d
            && (i == 0 || bytes[i - 1] != d)
            && i + 1 < bytes.len()
            && bytes[i + 1] != d;
        if opens {
            if let Some(close) = find_closer(bytes, i + 2, d) {
                out.push_str(&text[copied..i]);
                out.push_str(&render(&text[i + 1..close]));
                i = close + 1;
                copied = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}

/// Find the first closing delimiter at or after `from` that is not part
/// of a doubled run's leading edge.
fn find_closer(bytes: &[u8], from: usize, d: u8) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == d && (j + 1 == bytes.len() || bytes[j + 1] != d) {
            return Some(j);
        }
        j += 1;
    }
    None
}
