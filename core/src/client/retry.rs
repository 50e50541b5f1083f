//! Response classification and bounded exponential backoff

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use reqwest::StatusCode;
use tokio::time::{Duration, Instant};

use super::error::ApiError;

/// Google error reasons that signal quota exhaustion on a 403.
const RATE_LIMIT_REASONS: [&str; 4] = [
    "rateLimitExceeded",
    "userRateLimitExceeded",
    "quotaExceeded",
    "dailyLimitExceeded",
];

static RETRY_DELAY_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"(?:"retryDelay"|"retry_delay")\s*:\s*"?(\d+)"#).ok());

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub multiplier: f64,
    /// Upper bound on total time spent in one call, sleeps included.
    pub max_elapsed: Duration,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(32),
            multiplier: 2.0,
            max_elapsed: Duration::from_secs(300),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Base delay before retry number `retry` (0-based), capped at `max_backoff`.
    ///
    /// Jitter adds at most 10% of the exponential term, which is less than the
    /// growth to the next step, so delays stay non-decreasing.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let exp = self.initial_backoff.as_secs_f64() * self.multiplier.max(1.0).powi(retry as i32);
        let mut secs = exp;
        if self.jitter && exp > 0.0 {
            secs += rand::rng().random_range(0.0..=exp * 0.1);
        }
        Duration::from_secs_f64(secs.min(self.max_backoff.as_secs_f64()))
    }
}

/// Per-call retry budget.
pub struct Backoff<'a> {
    policy: &'a RetryPolicy,
    retries: u32,
    started: Instant,
    last_delay: Duration,
}

impl<'a> Backoff<'a> {
    pub fn new(policy: &'a RetryPolicy) -> Self {
        Self {
            policy,
            retries: 0,
            started: Instant::now(),
            last_delay: Duration::ZERO,
        }
    }

    /// Delay before the next attempt, or `None` once the retry count or
    /// elapsed-time budget would be exceeded.
    pub fn next_delay(&mut self, hint: Option<Duration>) -> Option<Duration> {
        if self.retries >= self.policy.max_retries {
            return None;
        }

        let mut delay = self.policy.backoff_for(self.retries);
        if let Some(hint) = hint {
            delay = delay.max(hint.min(self.policy.max_backoff));
        }
        delay = delay.max(self.last_delay);

        if self.started.elapsed() + delay > self.policy.max_elapsed {
            return None;
        }

        self.retries += 1;
        self.last_delay = delay;
        Some(delay)
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}

/// Reasons listed in a Google error body (`error.errors[].reason`).
pub fn google_error_reasons(body: &str) -> Vec<String> {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    parsed
        .get("error")
        .and_then(|e| e.get("errors"))
        .and_then(|e| e.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("reason").and_then(|r| r.as_str()))
                .map(|r| r.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Server-suggested wait from a `Retry-After` header or Google `retryDelay`.
pub fn parse_retry_hint(retry_after_header: Option<&str>, body: &str) -> Option<Duration> {
    if let Some(secs) = retry_after_header.and_then(|v| v.trim().parse::<u64>().ok()) {
        return Some(Duration::from_secs(secs));
    }

    if body.contains("retryDelay") || body.contains("retry_delay") {
        let re = RETRY_DELAY_RE.as_ref()?;
        return re
            .captures(body)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .map(Duration::from_secs);
    }

    None
}

/// Map a non-success response to its error class.
pub fn classify(status: StatusCode, retry_after_header: Option<&str>, body: String) -> ApiError {
    let code = status.as_u16();

    let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && google_error_reasons(&body)
                .iter()
                .any(|r| RATE_LIMIT_REASONS.contains(&r.as_str())));

    if rate_limited {
        let retry_after = parse_retry_hint(retry_after_header, &body);
        return ApiError::RateLimited {
            status: code,
            body,
            retry_after,
        };
    }

    if status.is_server_error() {
        ApiError::Server { status: code, body }
    } else {
        ApiError::Client { status: code, body }
    }
}
