//! WhatsApp converter: single-asterisk bold, underscore italic, tilde
//! strikethrough, `• ` bullets, headings and quote markers stripped.

use once_cell::sync::Lazy;

use crate::escape;
use crate::rule::{self, Rule};

/// Line-start and removal rules run first so the emphasis scans never see
/// a `*` bullet as an opener; italic runs before bold so bold's
/// single-asterisk output is never re-matched as italic.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Replace(&rule::HEADING_MARKER, ""),
        Rule::Replace(&rule::IMAGE, ""),
        Rule::Replace(&rule::LINK, "$1 ($2)"),
        Rule::Replace(&rule::QUOTE_MARKER, ""),
        Rule::Replace(&rule::BULLET_MARKER, "\u{2022} "),
        Rule::Emphasis('*', |content| format!("_{content}_")),
        Rule::Emphasis('_', |content| format!("_{content}_")),
        Rule::Replace(&rule::BOLD, "*$1*"),
        Rule::Replace(&rule::STRIKE, "~$1~"),
    ]
});

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
