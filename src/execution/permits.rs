use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Bounded pool of chunk permits.
///
/// Limits how many chunks run at once, independently of the thread count.
pub struct ChunkPermits {
    available: Mutex<usize>,
    cv: Condvar,
}

/// Returns its permit to the pool when dropped.
pub struct ChunkPermit<'a> {
    permits: &'a ChunkPermits,
}

impl ChunkPermits {
    pub fn new(limit: usize) -> Self {
        Self {
            available: Mutex::new(limit.max(1)),
            cv: Condvar::new(),
        }
    }

    /// Block until a permit is free.
    ///
    /// Also returns the time spent waiting (zero if a permit was free right away).
    pub fn acquire(&self) -> (ChunkPermit<'_>, Duration) {
        let start = Instant::now();
        let mut available = self.available.lock().unwrap_or_else(PoisonError::into_inner);
        let waited = *available == 0;
        while *available == 0 {
            available = self.cv.wait(available).unwrap_or_else(PoisonError::into_inner);
        }
        *available -= 1;
        let wait = if waited { start.elapsed() } else { Duration::ZERO };
        (ChunkPermit { permits: self }, wait)
    }

    fn release(&self) {
        let mut available = self.available.lock().unwrap_or_else(PoisonError::into_inner);
        *available += 1;
        self.cv.notify_one();
    }
}

impl Drop for ChunkPermit<'_> {
    fn drop(&mut self) {
        self.permits.release();
    }
}
