//! The closed registry of output platforms.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An output format with its own converter pipeline.
///
/// The registry is closed: every variant maps to exactly one pipeline,
/// and [`crate::convert`] treats any identifier outside this set as
/// [`Platform::PlainText`] rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
pub enum Platform {
    WhatsApp,
    Slack,
    Discord,
    Telegram,
    Notion,
    GitHub,
    LinkedIn,
    Html,
    PlainText,
}

impl Platform {
    /// Every supported platform, in presentation order.
    pub const ALL: [Platform; 9] = [
        Platform::WhatsApp,
        Platform::Slack,
        Platform::Discord,
        Platform::Telegram,
        Platform::Notion,
        Platform::GitHub,
        Platform::LinkedIn,
        Platform::Html,
        Platform::PlainText,
    ];

    /// The stable string identifier used by hosts and persisted sessions.
    pub fn id(self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::Slack => "slack",
            Platform::Discord => "discord",
            Platform::Telegram => "telegram",
            Platform::Notion => "notion",
            Platform::GitHub => "github",
            Platform::LinkedIn => "linkedin",
            Platform::Html => "html",
            Platform::PlainText => "plaintext",
        }
    }

    /// Look up a platform by identifier, case-insensitively.
    ///
    /// Returns `None` for unrecognized identifiers; callers decide whether
    /// that means fallback ([`crate::convert`]) or an error ([`FromStr`]).
    pub fn from_id(id: &str) -> Option<Platform> {
        match id.to_ascii_lowercase().as_str() {
            "whatsapp" => Some(Platform::WhatsApp),
            "slack" => Some(Platform::Slack),
            "discord" => Some(Platform::Discord),
            "telegram" => Some(Platform::Telegram),
            "notion" => Some(Platform::Notion),
            "github" => Some(Platform::GitHub),
            "linkedin" => Some(Platform::LinkedIn),
            "html" => Some(Platform::Html),
            "plaintext" => Some(Platform::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_id(s).ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}
