//! Present/absent values as a distinct type.
//!
//! An [`Optional`] either contains a value or contains nothing; it never
//! "contains null". The point of carrying a dedicated type instead of a
//! bare `Option` is API clarity at boundaries: a return type of
//! `Optional<T>` says absence is an expected, first-class answer, and the
//! combinators ([`Optional::or`], [`Optional::transform`],
//! [`Optional::as_set`]) keep callers out of the unwrap business.
//!
//! - [`Optional`] — the present/absent sum type
//! - [`ImmutableSet`] — the read-only set returned by [`Optional::as_set`]
//! - [`present_instances`] — lazy projection of the present payloads of a
//!   sequence of optionals
//!
//! ## Usage
//!
//! ```
//! use keel_optional::Optional;
//!
//! fn lookup(id: u32) -> Optional<&'static str> {
//!     match id {
//!         1 => Optional::of("bob"),
//!         _ => Optional::absent(),
//!     }
//! }
//!
//! assert_eq!(lookup(1).or("nobody"), "bob");
//! assert_eq!(lookup(7).or("nobody"), "nobody");
//! ```

mod iter;
mod optional;
mod set;

pub use iter::{PresentInstances, present_instances};
pub use optional::Optional;
pub use set::ImmutableSet;

// Re-exported so the supplier-based fallbacks can be used without a direct
// dependency on the supply crate.
pub use keel_supply::Supplier;
