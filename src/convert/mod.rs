//! Platform converters: one pipeline module per output format.
//!
//! Every converter follows the same shape: guard escaped punctuation,
//! fold the platform's ordered rule list over the text, restore the
//! literals. The plain-text stripper is the one exception; it runs on the
//! raw input with no guarding, since its rules only ever drop syntax.

use crate::platform::Platform;

pub(crate) mod discord;
pub(crate) mod github;
pub(crate) mod html;
pub(crate) mod linkedin;
pub(crate) mod notion;
pub(crate) mod plain;
pub(crate) mod slack;
pub(crate) mod telegram;
pub(crate) mod whatsapp;

/// Convert markdown for the platform named by `platform_id`.
///
/// Unrecognized identifiers fall back to the plain-text stripper; hosts
/// are expected to treat unknown platforms as "no formatting", never as
/// an error.
pub fn convert(platform_id: &str, markdown: &str) -> String {
    match Platform::from_id(platform_id) {
        Some(platform) => convert_to(platform, markdown),
        None => strip(markdown),
    }
}

/// Convert markdown for a known platform.
pub fn convert_to(platform: Platform, markdown: &str) -> String {
    match platform {
        Platform::WhatsApp => whatsapp::convert(markdown),
        Platform::Slack => slack::convert(markdown),
        Platform::Discord => discord::convert(markdown),
        Platform::Telegram => telegram::convert(markdown),
        Platform::Notion => notion::convert(markdown),
        Platform::GitHub => github::convert(markdown),
        Platform::LinkedIn => linkedin::convert(markdown),
        Platform::Html => html::convert(markdown),
        Platform::PlainText => plain::strip(markdown),
    }
}

/// Remove all markdown syntax, keeping only the inner content.
pub fn strip(markdown: &str) -> String {
    plain::strip(markdown)
}
