//! # mdshift
//!
//! A fast, lightweight library for converting a single markdown text into
//! platform-specific dialects (WhatsApp, Slack, Discord, Telegram, Notion,
//! GitHub, LinkedIn, HTML, and plain text).
//!
//! ## Features
//!
//! - Nine independent converter pipelines, one per output format
//! - Backslash-escaped punctuation survives every pipeline intact
//! - A standalone stripper that removes all markdown syntax
//! - Pure, synchronous string-to-string conversion with no shared state
//!
//! ## Quick Start
//!
//! ```
//! use mdshift::{convert, strip};
//!
//! // Convert for a chat platform
//! assert_eq!(convert("whatsapp", "**bold** and *italic*"), "*bold* and _italic_");
//! assert_eq!(convert("slack", "[text](http://x)"), "<http://x|text>");
//!
//! // Unknown platforms fall back to plain text
//! assert_eq!(convert("nonexistent", "**x**"), "x");
//!
//! // Strip all markdown syntax
//! assert_eq!(strip("# Title"), "Title");
//! ```
//!
//! ## Working with Platforms
//!
//! The [`Platform`] enum is the closed registry of supported output
//! formats. Hosts that want strict handling of unrecognized identifiers
//! can parse one explicitly:
//!
//! ```
//! use mdshift::{convert_to, Platform};
//!
//! let platform: Platform = "discord".parse().unwrap();
//! assert_eq!(convert_to(platform, "# Title"), "**Title**");
//!
//! assert!("myspace".parse::<Platform>().is_err());
//! ```

pub mod convert;
pub mod error;
pub mod escape;
pub mod platform;
pub mod rule;

#[cfg(feature = "cli")]
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{convert, convert_to, strip};
pub use error::{Error, Result};
pub use platform::Platform;

#[cfg(feature = "cli")]
pub use session::Session;
