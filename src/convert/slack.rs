//! Slack converter: mrkdwn emphasis, `<url|text>` links, `• ` bullets,
//! headings rendered as bold.

use once_cell::sync::Lazy;
use regex::Captures;

use crate::escape;
use crate::rule::{self, Rule};

fn render_link(caps: &Captures) -> String {
    format!("<{}|{}>", &caps[2], &caps[1])
}

/// Image removal precedes the link rule so `![alt](url)` is dropped
/// whole instead of leaving a stray `!`. The heading rule runs last:
/// its single-asterisk bold output must not be visible to the emphasis
/// or bold rules.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Replace(&rule::IMAGE, ""),
        Rule::Render(&rule::LINK, render_link),
        Rule::Replace(&rule::QUOTE_MARKER, "> "),
        Rule::Replace(&rule::BULLET_MARKER, "\u{2022} "),
        Rule::Emphasis('*', |content| format!("_{content}_")),
        Rule::Emphasis('_', |content| format!("_{content}_")),
        Rule::Replace(&rule::BOLD, "*$1*"),
        Rule::Replace(&rule::STRIKE, "~$1~"),
        Rule::Replace(&rule::HEADING, "*$1*"),
    ]
});

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
