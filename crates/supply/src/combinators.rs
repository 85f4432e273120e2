//! Stateless supplier decorators: constants, composition, serialization.

use std::fmt;

use parking_lot::Mutex;

use crate::supplier::Supplier;

/// A [`Supplier`] that always produces the same value. Built with
/// [`of_instance`].
///
/// Equality and hashing are derived from the value, so two constant
/// suppliers of equal values compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfInstance<T> {
    instance: T,
}

/// A supplier that clones out `instance` on every call.
///
/// An "instance that may be missing" is expressed as
/// `of_instance(None::<T>)`, which produces an `Option<T>` per call.
pub fn of_instance<T: Clone>(instance: T) -> OfInstance<T> {
    OfInstance { instance }
}

impl<T: Clone> Supplier for OfInstance<T> {
    type Output = T;

    fn get(&self) -> T {
        self.instance.clone()
    }
}

/// A [`Supplier`] applying a function to another supplier's result on
/// every call. Built with [`compose`]. No caching.
#[derive(Clone)]
pub struct Compose<F, S> {
    function: F,
    supplier: S,
}

/// Produce `function(supplier.get())` on every call.
pub fn compose<A, B, F, S>(function: F, supplier: S) -> Compose<F, S>
where
    F: Fn(A) -> B,
    S: Supplier<Output = A>,
{
    Compose { function, supplier }
}

impl<B, F, S> Supplier for Compose<F, S>
where
    S: Supplier,
    F: Fn(S::Output) -> B,
{
    type Output = B;

    fn get(&self) -> B {
        (self.function)(self.supplier.get())
    }
}

impl<F, S: fmt::Debug> fmt::Debug for Compose<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("supplier", &self.supplier)
            .finish_non_exhaustive()
    }
}

/// A [`Supplier`] that serializes every call through one mutex owning the
/// delegate. Built with [`synchronized`].
///
/// At most one invocation of the delegate's `get` executes at a time; the
/// lock is scoped to this wrapper, not shared process-wide.
pub struct Synchronized<S> {
    delegate: Mutex<S>,
}

/// Serialize all calls to `delegate` behind a mutual-exclusion lock.
pub fn synchronized<S: Supplier>(delegate: S) -> Synchronized<S> {
    Synchronized {
        delegate: Mutex::new(delegate),
    }
}

impl<S: Supplier> Supplier for Synchronized<S> {
    type Output = S::Output;

    fn get(&self) -> S::Output {
        self.delegate.lock().get()
    }
}

impl<S: fmt::Debug> fmt::Debug for Synchronized<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronized")
            .field("delegate", &self.delegate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplier::from_fn;

    #[test]
    fn of_instance_clones_the_value_out() {
        let supplier = of_instance("constant".to_owned());
        assert_eq!(supplier.get(), "constant");
        assert_eq!(supplier.get(), "constant");
    }

    #[test]
    fn of_instance_equality_follows_the_value() {
        assert_eq!(of_instance(5), of_instance(5));
        assert_ne!(of_instance(5), of_instance(6));
    }

    #[test]
    fn of_instance_carries_missing_values_as_options() {
        let missing = of_instance(None::<String>);
        assert_eq!(missing.get(), None);
    }

    #[test]
    fn compose_applies_the_function_each_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let counter = from_fn(|| calls.fetch_add(1, Ordering::SeqCst) + 1);
        let doubled = compose(|n| n * 2, counter);

        assert_eq!(doubled.get(), 2);
        assert_eq!(doubled.get(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn synchronized_forwards_results() {
        let supplier = synchronized(of_instance(7));
        assert_eq!(supplier.get(), 7);
        assert_eq!(supplier.get(), 7);
    }
}
