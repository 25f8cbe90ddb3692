use serde::{Deserialize, Serialize};

const SESSION_KEY_MAX_LENGTH: usize = 128;

/// Represents a browser session identifier.
/// Used to isolate comparison selections between visitors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    /// Parses a session key from an untrusted header value.
    /// The key is trimmed; empty or oversized keys are rejected.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err("Invalid session key: empty".to_string());
        }
        if trimmed.len() > SESSION_KEY_MAX_LENGTH {
            return Err(format!(
                "Invalid session key: longer than {} characters",
                SESSION_KEY_MAX_LENGTH
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
