//! Escape guard: protects backslash-escaped punctuation through rewriting.
//!
//! Rewrite rules cannot tell a user-escaped `\*` from an emphasis marker
//! once the backslash is gone, so escaped characters are swapped for
//! placeholder tokens before any rule runs and swapped back afterwards.
//! Running the guard/restore pair outside the pipeline keeps escape state
//! out of the individual rules; it also means a rule's output can safely
//! contain markdown-significant characters without them being mistaken for
//! escaped literals later in the chain.
//!
//! Placeholders are purely alphanumeric, so no rule pattern can match into
//! them, and self-terminating, so restoring token `n` never corrupts token
//! `n0`. The token tag is extended until it no longer occurs in the input,
//! so text that happens to contain a token-shaped string is never rewritten
//! by [`restore`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Backslash followed by one of the guarded punctuation characters.
/// Pairs outside this set (`\z`, `\n`, ...) are left untouched.
static ESCAPED_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([*_~`\[\]()#\-+.!\\])").unwrap());

/// Ordered placeholder-to-literal mapping built by [`guard`].
///
/// Created fresh per conversion call and discarded after [`restore`];
/// the placeholder counter is local to one call, never process-wide.
#[derive(Debug, Default)]
pub struct EscapeMap {
    entries: Vec<(String, String)>,
}

impl EscapeMap {
    /// Number of escaped characters found during guarding.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace every guarded escape sequence with a placeholder token.
///
/// Returns the guarded text and the map needed to undo the substitution.
/// Outside of substituted spans the text is byte-identical to the input.
pub fn guard(text: &str) -> (String, EscapeMap) {
    // Grow the tag until the input cannot contain any placeholder, so a
    // literal token-shaped string in the source survives restore untouched.
    let mut tag = String::from("EscTok");
    while text.contains(tag.as_str()) {
        tag.push('Q');
    }
    let mut entries = Vec::new();
    let guarded = ESCAPED_CHAR.replace_all(text, |caps: &Captures| {
        let placeholder = format!("{tag}{}X", entries.len());
        entries.push((placeholder.clone(), caps[1].to_string()));
        placeholder
    });
    (guarded.into_owned(), EscapeMap { entries })
}

/// Replace every placeholder with its literal character, in discovery order.
///
/// Applied exactly once, after the entire pipeline has run. The backslash
/// itself is consumed: `\*` in the source becomes a literal `*`.
pub fn restore(text: &str, map: &EscapeMap) -> String {
    let mut result = text.to_owned();
    for (placeholder, literal) in &map.entries {
        result = result.replace(placeholder.as_str(), literal);
    }
    result
}
