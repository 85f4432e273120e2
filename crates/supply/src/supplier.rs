//! The [`Supplier`] trait and the closure adapter.

use std::fmt;
use std::sync::Arc;

/// A zero-argument capability that produces a value on demand.
///
/// `get` takes `&self`, so one supplier instance can serve any number of
/// callers concurrently. Whether calls are recomputed, cached or serialized
/// is a property of the concrete implementation, not of the trait.
pub trait Supplier {
    /// The type of value produced.
    type Output;

    /// Produce a value.
    fn get(&self) -> Self::Output;
}

impl<S: Supplier + ?Sized> Supplier for &S {
    type Output = S::Output;

    fn get(&self) -> Self::Output {
        (**self).get()
    }
}

impl<S: Supplier + ?Sized> Supplier for Arc<S> {
    type Output = S::Output;

    fn get(&self) -> Self::Output {
        (**self).get()
    }
}

/// A [`Supplier`] backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnSupplier<F> {
    function: F,
}

/// Adapt a closure into a [`Supplier`].
///
/// A blanket `impl Supplier for F: Fn() -> T` would collide with the
/// decorator impls under coherence, so closures go through this adapter
/// instead, mirroring `std::iter::from_fn`.
pub fn from_fn<T, F>(function: F) -> FnSupplier<F>
where
    F: Fn() -> T,
{
    FnSupplier { function }
}

impl<T, F> Supplier for FnSupplier<F>
where
    F: Fn() -> T,
{
    type Output = T;

    fn get(&self) -> T {
        (self.function)()
    }
}

impl<F> fmt::Debug for FnSupplier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSupplier").finish_non_exhaustive()
    }
}
