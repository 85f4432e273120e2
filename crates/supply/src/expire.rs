//! Time-bounded memoization.

use std::fmt;
use std::time::{Duration, Instant};

use keel_contract::{ContractResult, check_argument_fmt};
use parking_lot::RwLock;

use crate::supplier::Supplier;

struct Cached<T> {
    value: T,
    expires_at: Instant,
}

/// A [`Supplier`] that caches its delegate's result for a fixed window.
/// Built with [`memoize_with_expiration`].
///
/// The fast path takes a read lock and serves the cached value while the
/// current instant is before the stored expiry. A caller that finds the
/// cache empty or expired takes the write lock and re-checks the expiry it
/// observed: if another caller advanced it in the meantime, the race is
/// lost and the winner's value is reused without recomputing.
///
/// Recomputation is not exactly-once across threads: two uncontended
/// sequential recomputations from different callers remain possible.
/// Callers that need a stronger guarantee must synchronize externally.
pub struct ExpiringMemoize<S: Supplier> {
    delegate: S,
    duration: Duration,
    cached: RwLock<Option<Cached<S::Output>>>,
}

/// Cache `delegate`'s result and recompute it once `duration` has passed
/// since the value was stored.
///
/// # Errors
///
/// Returns [`keel_contract::ContractError::IllegalArgument`] when
/// `duration` is not strictly positive.
pub fn memoize_with_expiration<S: Supplier>(
    delegate: S,
    duration: Duration,
) -> ContractResult<ExpiringMemoize<S>> {
    check_argument_fmt(
        duration > Duration::ZERO,
        "duration (%s ms) must be positive",
        &[&duration.as_millis()],
    )?;
    Ok(ExpiringMemoize {
        delegate,
        duration,
        cached: RwLock::new(None),
    })
}

impl<S: Supplier> ExpiringMemoize<S> {
    /// The expiration window applied after every recomputation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<S> Supplier for ExpiringMemoize<S>
where
    S: Supplier,
    S::Output: Clone,
{
    type Output = S::Output;

    fn get(&self) -> S::Output {
        let now = Instant::now();
        let seen_expiry = {
            let cached = self.cached.read();
            match &*cached {
                Some(entry) if now < entry.expires_at => return entry.value.clone(),
                Some(entry) => Some(entry.expires_at),
                None => None,
            }
        };

        let mut cached = self.cached.write();
        match &*cached {
            // The expiry moved while we waited for the write lock: another
            // caller already recomputed, its value is current enough.
            Some(entry) if seen_expiry != Some(entry.expires_at) => entry.value.clone(),
            _ => {
                tracing::trace!(duration = ?self.duration, "refreshing expired value");
                let value = self.delegate.get();
                *cached = Some(Cached {
                    value: value.clone(),
                    expires_at: Instant::now() + self.duration,
                });
                value
            }
        }
    }
}

impl<S: Supplier + fmt::Debug> fmt::Debug for ExpiringMemoize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringMemoize")
            .field("delegate", &self.delegate)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use keel_contract::ContractError;

    use super::*;
    use crate::supplier::from_fn;

    #[test]
    fn zero_duration_is_rejected() {
        let result = memoize_with_expiration(from_fn(|| 1), Duration::ZERO);
        let err = result.err().expect("zero duration must be rejected");
        assert!(matches!(err, ContractError::IllegalArgument { .. }));
        assert_eq!(err.message(), "duration (0 ms) must be positive");
    }

    #[test]
    fn value_is_cached_within_the_window() {
        let calls = AtomicUsize::new(0);
        let supplier = memoize_with_expiration(
            from_fn(|| calls.fetch_add(1, Ordering::SeqCst) + 1),
            Duration::from_secs(3600),
        )
        .expect("positive duration");

        assert_eq!(supplier.get(), 1);
        assert_eq!(supplier.get(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn expiry_triggers_recomputation() {
        let calls = AtomicUsize::new(0);
        let supplier = memoize_with_expiration(
            from_fn(|| calls.fetch_add(1, Ordering::SeqCst) + 1),
            Duration::from_millis(10),
        )
        .expect("positive duration");

        assert_eq!(supplier.get(), 1);
        assert_eq!(supplier.get(), 1);
        std::thread::sleep(Duration::from_millis(15));
        assert_eq!(supplier.get(), 2);
    }
}
