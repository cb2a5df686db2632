//! Plain-text stripper: removes every markdown construct, keeping only
//! the inner content.
//!
//! Unlike the platform converters this runs directly on the raw input
//! with no escape guarding; its rules only ever delete syntax, so there
//! is nothing an escaped literal could be mistaken for. Its inline
//! patterns are also deliberately single-line, where the converters
//! match across newlines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{self, Rule};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Link text is kept, the url dropped.
static LINK_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\(.*?\)").unwrap());

/// Quote and list markers at line start, removed together. The run is
/// matched as a whole so stacked markers like `> - x` strip in one pass.
static LINE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(?:[>\-*+]\s+)+").unwrap());

/// Bold strips before single-asterisk italic, so `**x**` never leaves a
/// stray pair behind; images go before links, whole construct and all.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Replace(&rule::HEADING_MARKER, ""),
        Rule::Replace(&rule::IMAGE, ""),
        Rule::Replace(&LINK_TEXT, "$1"),
        Rule::Replace(&BOLD, "$1"),
        Rule::Replace(&ITALIC_STAR, "$1"),
        Rule::Replace(&ITALIC_UNDERSCORE, "$1"),
        Rule::Replace(&STRIKE, "$1"),
        Rule::Replace(&CODE, "$1"),
        Rule::Replace(&LINE_MARKER, ""),
    ]
});

pub(crate) fn strip(markdown: &str) -> String {
    rule::run(&RULES, markdown)
}
