use std::fmt::Debug;

/// Opaque bearer credential issued by the backend on login
///
/// The value is never shown by [`Debug`] so sessions can be logged safely
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// An empty token is the same as having no credential at all. Any other
    /// value, whitespace included, is sent as is.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Only for building the credential that goes on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = if self.is_empty() { "[EMPTY]" } else { "[REDACTED]" };
        f.debug_tuple("AuthToken").field(&shown).finish()
    }
}
