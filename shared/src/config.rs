use tracing::warn;

use crate::TtlMs;

/// Server configuration, resolved once at startup from the environment.
pub struct Config {
    pub host: String,
    pub http_port: u16,
    /// TTL applied to cached quote reads.
    pub cache_ttl: TtlMs,
    /// Minimum interval the store enforces between invalidation calls.
    pub invalidate_min_interval_ms: u64,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_HTTP_PORT: u16 = 8080;
    const DEFAULT_CACHE_TTL_MS: u64 = 60_000;
    const DEFAULT_INVALIDATE_MIN_INTERVAL_MS: u64 = 5_000;

    pub fn from_env() -> Self {
        let host =
            std::env::var("QUOTEBENCH_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let http_port = std::env::var("QUOTEBENCH_HTTP_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_HTTP_PORT.to_string())
            .parse::<u16>()
            .unwrap_or_else(|_| {
                warn!(
                    "QUOTEBENCH_HTTP_PORT is not a valid port, using {}",
                    Self::DEFAULT_HTTP_PORT
                );
                Self::DEFAULT_HTTP_PORT
            });
        let cache_ttl_ms = std::env::var("QUOTEBENCH_CACHE_TTL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_CACHE_TTL_MS);
        let invalidate_min_interval_ms = std::env::var("QUOTEBENCH_INVALIDATE_MIN_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_INVALIDATE_MIN_INTERVAL_MS);

        Self {
            host,
            http_port,
            cache_ttl: TtlMs(cache_ttl_ms),
            invalidate_min_interval_ms,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}
