//! Process-wide token-bucket admission control.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Token bucket shared by every request-handling task.
///
/// The bucket starts full. Each admitted request consumes one token, and one
/// token is returned per elapsed `refill_interval`, never exceeding
/// `max_tokens`. The limit is global to the process, not per client.
///
/// Refill and consume run inside a single critical section, so concurrent
/// callers can never both observe the same token. The section is O(1) and
/// does not allocate; it must never be held across an `.await`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tinylink::application::rate_limiter::TokenBucket;
///
/// let limiter = TokenBucket::new(2, Duration::from_secs(1));
/// assert!(limiter.allow());
/// assert!(limiter.allow());
/// assert!(!limiter.allow());
/// ```
#[derive(Debug)]
pub struct TokenBucket {
    max_tokens: u32,
    refill_interval: Duration,
    state: Mutex<BucketState>,
}

#[derive(Debug)]
struct BucketState {
    tokens: u32,
    last_refill: Instant,
}

impl TokenBucket {
    /// Creates a full bucket holding `max_tokens`, refilled by one token per
    /// `refill_interval`.
    ///
    /// A zero `refill_interval` refills the bucket completely on every call.
    /// A zero `max_tokens` refuses everything.
    pub fn new(max_tokens: u32, refill_interval: Duration) -> Self {
        Self {
            max_tokens,
            refill_interval,
            state: Mutex::new(BucketState {
                tokens: max_tokens,
                last_refill: Instant::now(),
            }),
        }
    }

    /// Tries to take one token. Returns `false` when the bucket is empty.
    ///
    /// A refusal must be surfaced to the client; callers never retry.
    pub fn allow(&self) -> bool {
        let mut state = self.state.lock();
        self.refill(&mut state, Instant::now());

        if state.tokens > 0 {
            state.tokens -= 1;
            true
        } else {
            false
        }
    }

    /// Tokens an `allow()` call made now could draw on.
    ///
    /// Read-only: the refill anchor is left untouched, so observing the
    /// bucket never changes later admissions.
    pub fn available(&self) -> u32 {
        let state = self.state.lock();
        let due = self.whole_intervals(&state, Instant::now());
        state.tokens.saturating_add(due).min(self.max_tokens)
    }

    pub fn capacity(&self) -> u32 {
        self.max_tokens
    }

    pub fn refill_interval(&self) -> Duration {
        self.refill_interval
    }

    fn refill(&self, state: &mut BucketState, now: Instant) {
        let due = self.whole_intervals(state, now);

        if due > 0 {
            state.tokens = state.tokens.saturating_add(due).min(self.max_tokens);
            state.last_refill = now;
        }
    }

    /// Whole refill intervals elapsed since the last refill, saturating.
    fn whole_intervals(&self, state: &BucketState, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(state.last_refill);
        let intervals = elapsed
            .as_nanos()
            .checked_div(self.refill_interval.as_nanos())
            .unwrap_or(u128::MAX);

        u32::try_from(intervals).unwrap_or(u32::MAX)
    }
}
