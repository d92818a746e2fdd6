//! Per-element try-acquire reader/writer guard
//!
//! A [`ResourceGuard`] never blocks indefinitely. Acquisition either succeeds
//! immediately, succeeds within the configured bounded wait, or fails and the
//! caller reports a collision. There is no retry inside the guard.
//!
//! Sections are RAII values: dropping a [`ReadSection`] or [`WriteSection`]
//! releases it exactly once on every exit path, including unwinding.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Which section an acquisition attempt asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
        }
    }
}

/// Reader/writer lock with try-acquire semantics
pub struct ResourceGuard<T> {
    lock: RwLock<T>,
    /// Bounded wait; zero means a single non-blocking attempt
    timeout: Duration,
}

impl<T> ResourceGuard<T> {
    /// Guard that only ever makes one non-blocking attempt
    pub fn new(value: T) -> Self {
        Self::with_timeout(value, Duration::ZERO)
    }

    /// Guard that waits at most `timeout` before reporting contention
    pub fn with_timeout(value: T, timeout: Duration) -> Self {
        Self {
            lock: RwLock::new(value),
            timeout,
        }
    }

    /// Try to enter a shared read section.
    ///
    /// Readers never exclude each other; `None` means a writer held the
    /// section for longer than the bounded wait.
    pub fn try_read(&self) -> Option<ReadSection<'_, T>> {
        let inner = if self.timeout.is_zero() {
            self.lock.try_read()
        } else {
            self.lock.try_read_for(self.timeout)
        };
        inner.map(|inner| ReadSection { inner })
    }

    /// Try to enter the exclusive write section.
    pub fn try_write(&self) -> Option<WriteSection<'_, T>> {
        let inner = if self.timeout.is_zero() {
            self.lock.try_write()
        } else {
            self.lock.try_write_for(self.timeout)
        };
        inner.map(|inner| WriteSection { inner })
    }

    /// Whether any section is currently held
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn is_write_locked(&self) -> bool {
        self.lock.is_locked_exclusive()
    }
}

impl<T: fmt::Debug> fmt::Debug for ResourceGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("ResourceGuard");
        match self.lock.try_read() {
            Some(value) => dbg.field("value", &*value),
            None => dbg.field("value", &format_args!("<write-locked>")),
        };
        dbg.field("timeout", &self.timeout).finish()
    }
}

/// A held read section; released on drop
pub struct ReadSection<'a, T> {
    inner: RwLockReadGuard<'a, T>,
}

impl<T> ReadSection<'_, T> {
    /// Release explicitly; equivalent to dropping the section
    pub fn release(self) {}
}

impl<T> Deref for ReadSection<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

/// A held write section; released on drop
pub struct WriteSection<'a, T> {
    inner: RwLockWriteGuard<'a, T>,
}

impl<T> WriteSection<'_, T> {
    pub fn release(self) {}
}

impl<T> Deref for WriteSection<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for WriteSection<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_readers_share() {
        let guard = ResourceGuard::new(5);
        let r1 = guard.try_read().unwrap();
        let r2 = guard.try_read().unwrap();
        assert_eq!(*r1 + *r2, 10);
        assert!(guard.try_write().is_none());
        r1.release();
        drop(r2);
        assert!(guard.try_write().is_some());
    }

    #[test]
    fn test_writer_excludes_all() {
        let guard = ResourceGuard::new(Vec::<i32>::new());
        let mut w = guard.try_write().unwrap();
        w.push(1);
        assert!(guard.is_write_locked());
        assert!(guard.try_read().is_none());
        assert!(guard.try_write().is_none());
        w.release();
        assert!(!guard.is_locked());
        assert_eq!(*guard.try_read().unwrap(), vec![1]);
    }

    #[test]
    fn test_bounded_wait_gives_up() {
        let guard = ResourceGuard::with_timeout(0u8, Duration::from_millis(20));
        let _w = guard.try_write().unwrap();
        let start = Instant::now();
        assert!(guard.try_read().is_none());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_bounded_wait_acquires_after_release() {
        let guard = ResourceGuard::with_timeout(0u32, Duration::from_secs(5));
        let barrier = Barrier::new(2);
        thread::scope(|s| {
            s.spawn(|| {
                let mut w = guard.try_write().unwrap();
                barrier.wait();
                thread::sleep(Duration::from_millis(10));
                *w = 9;
            });
            barrier.wait();
            let r = guard.try_read().expect("bounded wait should outlast writer");
            assert_eq!(*r, 9);
        });
    }

    #[test]
    fn test_released_on_panic() {
        let guard = ResourceGuard::new(0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _w = guard.try_write().unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!guard.is_locked());
    }

    #[test]
    fn test_access_display() {
        assert_eq!(Access::Read.to_string(), "read");
        assert_eq!(Access::Write.to_string(), "write");
    }
}
