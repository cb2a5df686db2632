//! Session persistence: remembers the last input and platform between
//! runs so a host can restore them and re-convert.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::Platform;

/// A saved `{text, platform}` pair, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub text: String,
    pub platform: Platform,
    /// Seconds since the Unix epoch at save time.
    pub timestamp: u64,
}

impl Session {
    /// Create a session stamped with the current time.
    pub fn new(text: impl Into<String>, platform: Platform) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Session {
            text: text.into(),
            platform,
            timestamp,
        }
    }

    /// Load a session from `path`. A missing file is not an error; it
    /// just means there is nothing to restore.
    pub fn load(path: &Path) -> Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Write the session to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::new("# hello", Platform::Slack);
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap().unwrap();
        assert_eq!(loaded.text, "# hello");
        assert_eq!(loaded.platform, Platform::Slack);
        assert_eq!(loaded.timestamp, session.timestamp);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(Session::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Session::load(&path).is_err());
    }

    #[test]
    fn test_platform_serialized_as_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        Session::new("x", Platform::WhatsApp).save(&path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"whatsapp\""));
    }
}
