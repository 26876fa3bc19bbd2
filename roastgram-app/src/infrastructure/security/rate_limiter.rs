use crate::config::RateLimitConfig;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
struct WindowRecord {
    count: u32,
    window_start: Instant,
}

/// Fixed-window request counter keyed by client.
///
/// Entries live for the lifetime of the process. Rejected attempts still
/// count towards the current window.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<String, WindowRecord>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            max_requests,
            window,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window)
    }

    pub fn consume(&self, key: &str) -> Result<(), RateLimitError> {
        self.consume_at(key, Instant::now())
    }

    pub fn try_consume(&self, key: &str) -> bool {
        self.consume(key).is_ok()
    }

    fn consume_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        // The entry guard holds the shard lock, so reset, increment and check
        // happen atomically for this key.
        let mut record = self
            .requests
            .entry(key.to_string())
            .or_insert(WindowRecord {
                count: 0,
                window_start: now,
            });

        if now.saturating_duration_since(record.window_start) > self.window {
            record.count = 0;
            record.window_start = now;
        }

        record.count = record.count.saturating_add(1);

        if record.count > self.max_requests {
            let elapsed = now.saturating_duration_since(record.window_start);
            let retry_after = self.window.saturating_sub(elapsed).as_secs();
            tracing::debug!("Rate limit exceeded for {} ({} requests)", key, record.count);
            return Err(RateLimitError::Exceeded { retry_after });
        }

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded, retry in {retry_after}s")]
    Exceeded { retry_after: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_after_quota() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        for _ in 0..100 {
            assert!(limiter.consume_at("10.0.0.1", start).is_ok());
        }
        assert!(limiter.consume_at("10.0.0.1", start).is_err());
        assert!(limiter.consume_at("10.0.0.2", start).is_ok());
    }

    #[test]
    fn test_window_reset() {
        let limiter = RateLimiter::new(2, Duration::from_secs(180));
        let start = Instant::now();

        assert!(limiter.consume_at("ip", start).is_ok());
        assert!(limiter.consume_at("ip", start).is_ok());
        assert!(limiter.consume_at("ip", start + Duration::from_secs(180)).is_err());
        assert!(limiter.consume_at("ip", start + Duration::from_secs(181)).is_ok());
        assert!(limiter.consume_at("ip", start + Duration::from_secs(182)).is_ok());
        assert!(limiter.consume_at("ip", start + Duration::from_secs(183)).is_err());
    }

    #[test]
    fn test_rejected_attempts_count() {
        let limiter = RateLimiter::new(1, Duration::from_secs(180));
        let start = Instant::now();

        assert!(limiter.consume_at("ip", start).is_ok());
        for _ in 0..5 {
            assert!(limiter.consume_at("ip", start).is_err());
        }
        assert_eq!(limiter.requests.get("ip").map(|r| r.count), Some(6));
    }

    #[test]
    fn test_retry_after() {
        let limiter = RateLimiter::new(1, Duration::from_secs(180));
        let start = Instant::now();

        limiter.consume_at("ip", start).unwrap();
        assert_eq!(
            limiter.consume_at("ip", start + Duration::from_secs(30)),
            Err(RateLimitError::Exceeded { retry_after: 150 })
        );
    }

    #[test]
    fn test_concurrent_consumers_respect_quota() {
        let limiter = RateLimiter::new(100, Duration::from_secs(180));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || (0..50).filter(|_| limiter.try_consume("shared")).count())
            })
            .collect();

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(accepted, 100);
        assert_eq!(limiter.requests.len(), 1);
    }
}
