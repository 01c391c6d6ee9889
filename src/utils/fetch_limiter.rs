use std::sync::Arc;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// FetchLimiter bounds the number of upstream requests in flight at once
#[derive(Clone, Debug)]
pub struct FetchLimiter {
    semaphore: Arc<Semaphore>,
}

impl FetchLimiter {
    /// Create a new FetchLimiter allowing `max_concurrent` requests at a time
    pub fn new(max_concurrent: usize) -> Self {
        FetchLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Acquire a permit to make a request
    /// Returns a guard that will release the permit when dropped
    pub async fn acquire(&self) -> Result<FetchGuard, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;
        tracing::trace!(
            available = self.semaphore.available_permits(),
            "Upstream fetch permit acquired"
        );
        Ok(FetchGuard { _permit: permit })
    }

    /// Get the current number of available permits
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

/// Guard that releases the fetch permit when dropped
pub struct FetchGuard {
    _permit: OwnedSemaphorePermit,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        tracing::trace!("Upstream fetch permit released");
    }
}
