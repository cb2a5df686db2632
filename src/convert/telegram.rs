//! Telegram converter. Like Discord, Telegram speaks a double-asterisk
//! bold dialect, so the source emphasis passes through as-is; headings
//! have no Telegram equivalent and are rendered as bold lines, and
//! images are dropped.

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_unchanged() {
        assert_eq!(
            convert("**bold**, *italic*, `code`, [t](u)"),
            "**bold**, *italic*, `code`, [t](u)"
        );
    }

    #[test]
    fn test_heading_becomes_bold() {
        assert_eq!(convert("## Changelog"), "**Changelog**");
    }

    #[test]
    fn test_image_removed() {
        assert_eq!(convert("text ![alt](u) more"), "text  more");
    }
}
