use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Poll loop bounds: first retry delay, the cap the exponential backoff
/// grows to, and the overall deadline after which the run times out.
#[derive(Clone, Debug)]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub deadline: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(1),
            deadline: Duration::from_secs(30),
        }
    }
}

impl PollPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_delay: env_millis("PROBE_POLL_INITIAL_DELAY_MS").unwrap_or(defaults.initial_delay),
            max_delay: env_millis("PROBE_POLL_MAX_DELAY_MS").unwrap_or(defaults.max_delay),
            deadline: env_millis("PROBE_POLL_TIMEOUT_MS").unwrap_or(defaults.deadline),
        }
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Probe configuration, resolved once and passed in at construction.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub base_url: String,
    pub poll: PollPolicy,
}

impl ProbeConfig {
    pub fn new(base_url: impl Into<String>, poll: PollPolicy) -> Self {
        Self {
            base_url: base_url.into(),
            poll,
        }
    }

    /// Base URL resolution: explicit override, then a deployment-provided
    /// hostname, then the local default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("QUOTEBENCH_URL")
            .ok()
            .or_else(|| {
                std::env::var("QUOTEBENCH_DEPLOY_HOST")
                    .ok()
                    .map(|host| format!("https://{host}"))
            })
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            poll: PollPolicy::from_env(),
        }
    }
}
