//! LinkedIn converter: bold survives as a single-asterisk marker, every
//! other inline style is flattened to its content, code blocks are
//! dropped entirely.

use once_cell::sync::Lazy;

use crate::escape;
use crate::rule::{self, Rule};

/// The fenced-block rule must run before the inline-code rule, or the
/// fence's own backticks would be eaten as inline spans. There is no
/// underscore-italic rule here: underscores are common in URLs and
/// identifiers, and LinkedIn renders them literally anyway.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::Replace(&rule::CODE_BLOCK, ""),
        Rule::Replace(&rule::INLINE_CODE, "$1"),
        Rule::Emphasis('*', |content| content.to_string()),
        Rule::Replace(&rule::BOLD, "*$1*"),
        Rule::Replace(&rule::STRIKE, "$1"),
        Rule::Replace(&rule::HEADING_MARKER, ""),
        Rule::Replace(&rule::IMAGE, ""),
        Rule::Replace(&rule::LINK, "$1 ($2)"),
        Rule::Replace(&rule::QUOTE_MARKER, ""),
        Rule::Replace(&rule::BULLET_MARKER, "\u{2022} "),
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
    fn test_bold_becomes_single_asterisk() {
        assert_eq!(convert("**important**"), "*important*");
    }

    #[test]
    fn test_other_inline_styles_flattened() {
        assert_eq!(convert("*italic*"), "italic");
        assert_eq!(convert("~~strike~~"), "strike");
        assert_eq!(convert("`code`"), "code");
    }

    #[test]
    fn test_code_block_removed_whole() {
        assert_eq!(convert("before\n```rust\nlet x = 1;\n```\nafter"), "before\n\nafter");
    }

    #[test]
    fn test_heading_and_markers() {
        assert_eq!(convert("## Update"), "Update");
        assert_eq!(convert("> note"), "note");
        assert_eq!(convert("- point"), "\u{2022} point");
    }

    #[test]
    fn test_link_with_underscores_in_url() {
        assert_eq!(
            convert("[post](http://x/my_great_post)"),
            "post (http://x/my_great_post)"
        );
    }

    #[test]
    fn test_image_removed() {
        assert_eq!(convert("![chart](http://x/c.png)"), "");
    }
}
