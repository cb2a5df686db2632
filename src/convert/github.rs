//! GitHub converter. GitHub-flavored markdown is the source dialect, so
//! this is the pass-through pipeline: the only rewrite is dropping image
//! syntax. The guard/restore pass still runs, which resolves backslash
//! escapes to their literal characters the same way every other
//! converter does.

use once_cell::sync::Lazy;

use crate::escape;
use crate::rule::{self, Rule};

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![Rule::Replace(&rule::IMAGE, "")]);

pub(crate) fn convert(markdown: &str) -> String {
    let (guarded, map) = escape::guard(markdown);
    let rewritten = rule::run(&RULES, &guarded);
    escape::restore(&rewritten, &map)
}
