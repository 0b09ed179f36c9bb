//! Explicit snapshot cache with an injected time source.
//!
//! The dashboards used to memoize HTTP responses behind a module-level
//! wall-clock TTL, which makes expiry untestable. This is the explicit
//! version: readers take an `Arc` snapshot with one atomic load, writers
//! swap a fresh snapshot in, and expiry is judged against an injected
//! [`Clock`] so tests can advance time deterministically. Invalidation
//! is an explicit call; the submit path clears the cache after a
//! successful POST.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Duration, Utc};

/// Time source consulted on every read and store.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time; the production clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct Entry<T> {
    value: Arc<T>,
    fetched_at: DateTime<Utc>,
}

/// Read-mostly cache holding one snapshot behind an atomic pointer.
///
/// [`get`](Self::get) never blocks. A snapshot whose age has reached the
/// TTL reads as absent; the caller refetches and
/// [`store`](Self::store)s the replacement.
pub struct SnapshotCache<T, C = SystemClock> {
    slot: ArcSwapOption<Entry<T>>,
    ttl: Duration,
    clock: C,
}

impl<T> SnapshotCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<T, C: Clock> SnapshotCache<T, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            slot: ArcSwapOption::empty(),
            ttl,
            clock,
        }
    }

    /// Returns the current snapshot while it is still fresh.
    pub fn get(&self) -> Option<Arc<T>> {
        let entry = self.slot.load_full()?;
        if self.clock.now() - entry.fetched_at < self.ttl {
            Some(Arc::clone(&entry.value))
        } else {
            None
        }
    }

    /// Swaps a new snapshot in, restarting its age, and returns a handle
    /// to it.
    pub fn store(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.slot.store(Some(Arc::new(Entry {
            value: Arc::clone(&value),
            fetched_at: self.clock.now(),
        })));
        value
    }

    /// Drops the snapshot immediately, regardless of age.
    pub fn invalidate(&self) {
        self.slot.store(None);
    }
}
