use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FALLBACK_DELAY_MS: u64 = 1000;

/// Process settings read once at startup. The live-backend credential is
/// deliberately absent: it is looked up per request.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// Artificial latency of the offline fallback path.
    pub fallback_delay: Duration,
    /// Overrides the OpenAI API endpoint (proxies, compatible servers).
    pub openai_base_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let fallback_delay_ms = lookup("FALLBACK_DELAY_MS")
            .and_then(|ms| ms.parse().ok())
            .unwrap_or(DEFAULT_FALLBACK_DELAY_MS);
        let openai_base_url = lookup("OPENAI_BASE_URL").filter(|url| !url.trim().is_empty());

        Self {
            port,
            fallback_delay: Duration::from_millis(fallback_delay_ms),
            openai_base_url,
        }
    }
}
