//! End-to-end conversion tests across the full platform registry.

use mdshift::{convert, convert_to, strip, Platform};

#[test]
fn test_unknown_platform_falls_back_to_plain_text() {
    assert_eq!(convert("nonexistent", "**x**"), strip("**x**"));
    assert_eq!(convert("nonexistent", "**x**"), "x");
    assert_eq!(convert("", "# Title"), "Title");
}

#[test]
fn test_bold_italic_distinction() {
    // Discord's dialect matches the source, so both markers survive.
    assert_eq!(
        convert("discord", "**bold** and *italic*"),
        "**bold** and *italic*"
    );
    // WhatsApp rewrites both, and the rewritten bold's single asterisks
    // must not be re-matched as italic.
    assert_eq!(
        convert("whatsapp", "**bold** and *italic*"),
        "*bold* and _italic_"
    );
}

#[test]
fn test_link_transforms() {
    assert_eq!(convert("slack", "[text](http://x)"), "<http://x|text>");
    assert_eq!(
        convert("html", "[text](http://x)"),
        "<a href=\"http://x\">text</a>"
    );
    assert_eq!(convert("whatsapp", "[text](http://x)"), "text (http://x)");
}

#[test]
fn test_heading_stripping() {
    assert_eq!(convert("whatsapp", "# Title"), "Title");
    assert_eq!(convert("linkedin", "## Title"), "Title");
}

#[test]
fn test_image_removed_everywhere_except_html() {
    for platform in Platform::ALL {
        let out = convert_to(platform, "![alt](http://x/i.png)");
        if platform == Platform::Html {
            assert_eq!(out, "<img src=\"http://x/i.png\" alt=\"alt\" />");
        } else {
            assert_eq!(out, "", "image should vanish for {platform}");
        }
    }
}

#[test]
fn test_strip_is_idempotent() {
    let input = "# H1\n\n**bold** *it* _u_ ~~s~~ `c`\n[t](http://u) ![a](http://u)\n- li\n> q\n1. one";
    let once = strip(input);
    assert_eq!(strip(&once), once);
}

#[test]
fn test_plaintext_platform_equals_strip() {
    let input = "# H\n**b** [t](u)";
    assert_eq!(convert("plaintext", input), strip(input));
}

#[test]
fn test_full_document_whatsapp() {
    let input = "\
# Weekly update

**Done**: shipped the *new* parser.
See [the docs](https://docs.example.com).

- item one
- item two

> remember the retro";
    let expected = "\
Weekly update

*Done*: shipped the _new_ parser.
See the docs (https://docs.example.com).

\u{2022} item one
\u{2022} item two

remember the retro";
    assert_eq!(convert("whatsapp", input), expected);
}

#[test]
fn test_full_document_html() {
    let input = "# Title\n\ntext with **bold**\n\n- a\n- b";
    assert_eq!(
        convert("html", input),
        "<h1>Title</h1></p><p>text with <strong>bold</strong></p><p><ul><li>a</li>\n<li>b</li></ul>"
    );
}

#[test]
fn test_unterminated_markdown_degrades_gracefully() {
    for platform in Platform::ALL {
        let out = convert_to(platform, "**unterminated and `open");
        assert!(
            out.contains("unterminated") && out.contains("open"),
            "content lost for {platform}: {out:?}"
        );
    }
}

#[test]
fn test_empty_input() {
    for platform in Platform::ALL {
        assert_eq!(convert_to(platform, ""), "");
    }
}

#[test]
fn test_strip_flattens_stacked_line_markers() {
    assert_eq!(strip("> - x"), "x");
    assert_eq!(convert("plaintext", "> > nested"), "nested");
}

#[test]
fn test_token_shaped_input_text_preserved() {
    // Text that happens to look like an internal placeholder must come
    // through untouched while real escapes still resolve.
    assert_eq!(convert("github", r"EscTok0X and \*"), "EscTok0X and *");
}

#[test]
fn test_no_state_leaks_between_calls() {
    // Two conversions in a row see fresh escape counters.
    assert_eq!(convert("whatsapp", r"\*a\*"), "*a*");
    assert_eq!(convert("whatsapp", r"\*b\*"), "*b*");
}
