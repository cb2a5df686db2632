//! Discord converter. Discord's own dialect already matches the source
//! markdown for emphasis, code, and links; only headings (rendered as
//! bold) and images need rewriting.

use once_cell::sync::Lazy;

use crate::escape;
use crate::rule::{self, Rule};

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Replace(&rule::HEADING, "**$1**"),
        Rule::Replace(&rule::IMAGE, ""),
    ]
});

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
