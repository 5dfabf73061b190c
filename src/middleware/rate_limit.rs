use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, info, warn};

use crate::error::AppError;

/// Concurrency limiter shared through application state.
///
/// Bounds how many submissions are in flight at once; a submission that
/// cannot get a permit immediately is rejected rather than queued. Counters
/// feed the health endpoint.
pub struct RequestLimiter {
    semaphore: Semaphore,
    total_requests: AtomicU64,
    rejected_requests: AtomicU64,
}

/// Snapshot of the limiter's counters.
#[derive(Debug, Clone, Copy)]
pub struct LimiterMetrics {
    pub total_requests: u64,
    pub rejected_requests: u64,
    pub available_permits: usize,
}

impl RequestLimiter {
    pub fn new(max_concurrent_requests: usize) -> Self {
        info!(
            max_concurrent_requests = max_concurrent_requests,
            "Initializing request limiter"
        );
        Self {
            semaphore: Semaphore::new(max_concurrent_requests),
            total_requests: AtomicU64::new(0),
            rejected_requests: AtomicU64::new(0),
        }
    }

    /// Try to claim a slot for one submission. The permit releases the slot
    /// when dropped.
    pub fn acquire(&self) -> Result<SemaphorePermit<'_>, AppError> {
        let total = self.total_requests.fetch_add(1, Ordering::Relaxed) + 1;

        let permit = self.semaphore.try_acquire().map_err(|_| {
            let rejected = self.rejected_requests.fetch_add(1, Ordering::Relaxed) + 1;
            warn!(
                total_requests = total,
                rejected_requests = rejected,
                "Rate limit exceeded - too many concurrent requests"
            );
            AppError::RateLimitExceeded
        })?;

        debug!(
            total_requests = total,
            available_permits = self.semaphore.available_permits(),
            "Request permit acquired"
        );

        Ok(permit)
    }

    pub fn metrics(&self) -> LimiterMetrics {
        LimiterMetrics {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
            available_permits: self.semaphore.available_permits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_when_all_permits_are_held() {
        let limiter = RequestLimiter::new(2);

        let first = limiter.acquire().unwrap();
        let _second = limiter.acquire().unwrap();

        match limiter.acquire() {
            Err(AppError::RateLimitExceeded) => {}
            other => panic!("expected RateLimitExceeded, got {:?}", other.map(|_| ())),
        }

        let metrics = limiter.metrics();
        assert_eq!(metrics.total_requests, 3);
        assert_eq!(metrics.rejected_requests, 1);
        assert_eq!(metrics.available_permits, 0);

        drop(first);
        assert!(limiter.acquire().is_ok());
    }
}
