//! Decides per request whether the live backend can be used.

/// Credential value shipped in sample configs; treated as "no credential".
pub const PLACEHOLDER_CREDENTIAL: &str = "dummy-key-for-demo";

/// Environment variable holding the live-backend credential.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Source of the live-backend credential, injected into the chat service.
pub trait BackendAvailability: Send + Sync {
    /// Current credential, if any. Called once per request.
    fn credential(&self) -> Option<String>;
}

/// Reads the credential from the process environment on every call, so a
/// changed key is picked up without a restart.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(CREDENTIAL_VAR)
    }
}

impl BackendAvailability for EnvCredential {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Fixed credential.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

#[cfg(test)]
impl StaticCredential {
    pub fn live(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[cfg(test)]
impl BackendAvailability for StaticCredential {
    fn credential(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    Live { api_key: String },
    Fallback,
}

pub fn select_backend(availability: &dyn BackendAvailability) -> BackendChoice {
    match availability.credential() {
        Some(key) if !key.trim().is_empty() && key != PLACEHOLDER_CREDENTIAL => {
            BackendChoice::Live { api_key: key }
        }
        _ => BackendChoice::Fallback,
    }
}
