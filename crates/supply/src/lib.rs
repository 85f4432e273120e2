//! Zero-argument value producers and their decorators.
//!
//! A [`Supplier`] produces a value on demand through a shared reference,
//! which makes the decorators in this crate safe to hand across threads:
//!
//! - [`from_fn`] — adapt a closure into a supplier
//! - [`of_instance`] — always produce the same value
//! - [`compose`] — apply a function to another supplier's result
//! - [`synchronized`] — serialize every call through one mutex
//! - [`memoize`] — compute once, serve the cached value forever
//! - [`memoize_with_expiration`] — compute at most once per time window
//!
//! ## Usage
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use keel_supply::{Supplier, from_fn, memoize};
//!
//! let calls = AtomicUsize::new(0);
//! let expensive = from_fn(|| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     "derived".to_owned()
//! });
//!
//! let cached = memoize(expensive);
//! assert_eq!(cached.get(), "derived");
//! assert_eq!(cached.get(), "derived");
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod combinators;
mod expire;
mod memoize;
mod supplier;

pub use combinators::{Compose, OfInstance, Synchronized, compose, of_instance, synchronized};
pub use expire::{ExpiringMemoize, memoize_with_expiration};
pub use memoize::{Memoizable, Memoize, memoize};
pub use supplier::{FnSupplier, Supplier, from_fn};
