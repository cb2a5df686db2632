//! Notion converter. Notion pastes markdown structure natively, so the
//! only rewrite is dropping image syntax, which does not survive a paste.

use once_cell::sync::Lazy;

use crate::escape;
use crate::rule::{self, Rule};

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![Rule::Replace(&rule::IMAGE, "")]);

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
