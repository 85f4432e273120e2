//! Compute-once caching.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::combinators::{Compose, OfInstance, Synchronized};
use crate::expire::ExpiringMemoize;
use crate::supplier::{FnSupplier, Supplier};

/// A [`Supplier`] that invokes its delegate at most once and serves the
/// cached value on every later call. Built with [`memoize`].
///
/// The cell follows the check-lock-check shape: an already-filled cell is
/// read without taking a lock, a first call (or a caller losing the fill
/// race) blocks until exactly one delegate invocation completes, and the
/// fill is immediately visible to all threads.
pub struct Memoize<S: Supplier> {
    delegate: S,
    cell: OnceCell<S::Output>,
}

impl<S: Supplier> Memoize<S> {
    pub(crate) fn new(delegate: S) -> Self {
        Self {
            delegate,
            cell: OnceCell::new(),
        }
    }
}

impl<S> Supplier for Memoize<S>
where
    S: Supplier,
    S::Output: Clone,
{
    type Output = S::Output;

    fn get(&self) -> S::Output {
        self.cell
            .get_or_init(|| {
                tracing::trace!("computing memoized value");
                self.delegate.get()
            })
            .clone()
    }
}

impl<S: Supplier + fmt::Debug> fmt::Debug for Memoize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("delegate", &self.delegate)
            .field("computed", &self.cell.get().is_some())
            .finish()
    }
}

/// Conversion into a memoizing supplier.
///
/// Every base supplier memoizes to [`Memoize<Self>`]; [`Memoize`] itself
/// memoizes to `Self` and hands back the same instance, so wrapping an
/// already-memoized supplier never nests a second cache. The guarantee is
/// carried by the `Memoized` associated type rather than a runtime check.
pub trait Memoizable: Supplier + Sized {
    /// The memoized form of this supplier.
    type Memoized: Supplier<Output = Self::Output>;

    /// Wrap this supplier in a compute-once cache.
    fn memoized(self) -> Self::Memoized;
}

/// Cache `delegate`'s first result and serve it on every later call.
///
/// Idempotent: `memoize(memoize(s))` is the same instance as
/// `memoize(s)`, not a nested wrapper.
pub fn memoize<S: Memoizable>(delegate: S) -> S::Memoized {
    delegate.memoized()
}

impl<S> Memoizable for Memoize<S>
where
    S: Supplier,
    S::Output: Clone,
{
    type Memoized = Self;

    fn memoized(self) -> Self {
        self
    }
}

impl<T, F> Memoizable for FnSupplier<F>
where
    F: Fn() -> T,
    T: Clone,
{
    type Memoized = Memoize<Self>;

    fn memoized(self) -> Memoize<Self> {
        Memoize::new(self)
    }
}

impl<T: Clone> Memoizable for OfInstance<T> {
    type Memoized = Memoize<Self>;

    fn memoized(self) -> Memoize<Self> {
        Memoize::new(self)
    }
}

impl<B, F, S> Memoizable for Compose<F, S>
where
    S: Supplier,
    F: Fn(S::Output) -> B,
    B: Clone,
{
    type Memoized = Memoize<Self>;

    fn memoized(self) -> Memoize<Self> {
        Memoize::new(self)
    }
}

impl<S> Memoizable for Synchronized<S>
where
    S: Supplier,
    S::Output: Clone,
{
    type Memoized = Memoize<Self>;

    fn memoized(self) -> Memoize<Self> {
        Memoize::new(self)
    }
}

impl<S> Memoizable for ExpiringMemoize<S>
where
    S: Supplier,
    S::Output: Clone,
{
    type Memoized = Memoize<Self>;

    fn memoized(self) -> Memoize<Self> {
        Memoize::new(self)
    }
}
