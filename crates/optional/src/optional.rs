//! The present/absent sum type.

use std::fmt;
use std::hash::{Hash, Hasher};

use keel_contract::{ContractError, ContractResult, check_not_null_msg};
use keel_supply::Supplier;

use crate::set::ImmutableSet;

/// Hash seed shared by every `Optional`, so absent values hash identically
/// across payload types and a present hash stays tied to its payload.
const HASH_SEED: u32 = 0x598d_f91c;

/// An immutable value that is either present or absent.
///
/// Absence is a distinct variant, never an embedded null: a
/// [`Optional::Present`] payload exists by construction, and the
/// combinators below never observe a missing payload inside a present
/// value. Nullable references live at the boundary only, as `Option`, via
/// [`Optional::from_nullable`] and [`Optional::into_nullable`].
///
/// Instances are immutable after construction and safe to share across
/// threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value, held exclusively by this instance.
    Present(T),
}

impl<T> Optional<T> {
    /// The absent value.
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Wrap a value that is known to exist.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// `None` becomes absent, `Some(value)` becomes present.
    #[must_use]
    pub fn from_nullable(nullable: Option<T>) -> Self {
        match nullable {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Whether this instance contains a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the contained value, which must be present.
    ///
    /// When absence is an expected answer, use [`Optional::or`] or
    /// [`Optional::into_nullable`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::IllegalState`] when the value is absent.
    pub fn get(&self) -> ContractResult<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ContractError::illegal_state(
                "Optional.get() cannot be called on an absent value",
            )),
        }
    }

    /// The contained value if present, `default` otherwise.
    #[must_use]
    pub fn or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// This instance if present, `second_choice` otherwise.
    #[must_use]
    pub fn or_optional(self, second_choice: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => second_choice,
        }
    }

    /// The contained value if present; otherwise whatever `supplier`
    /// produces. A present value short-circuits without invoking the
    /// supplier.
    pub fn or_supply<S>(self, supplier: &S) -> T
    where
        S: Supplier<Output = T> + ?Sized,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier.get(),
        }
    }

    /// Fall back to a producer that may itself come up empty.
    ///
    /// A present value short-circuits without invoking the supplier.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullArgument`] when the value is absent
    /// and the invoked supplier yields `None`.
    pub fn or_supply_nullable<S>(self, supplier: &S) -> ContractResult<T>
    where
        S: Supplier<Output = Option<T>> + ?Sized,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => check_not_null_msg(
                supplier.get(),
                "use Optional.into_nullable() instead of a supplier that returns None",
            ),
        }
    }

    /// The contained value if present, `None` otherwise. Never fails.
    #[must_use]
    pub fn into_nullable(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Borrowing form of [`Optional::into_nullable`].
    #[must_use]
    pub fn as_nullable(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Apply `function` to the contained value, if any.
    ///
    /// Absent values pass through untouched and `function` is not invoked.
    #[must_use]
    pub fn transform<R>(self, function: impl FnOnce(T) -> R) -> Optional<R> {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> Optional<T>
where
    T: Clone + Eq + Hash,
{
    /// A one-element immutable set of the contained value, or the empty
    /// immutable set when absent.
    #[must_use]
    pub fn as_set(&self) -> ImmutableSet<T> {
        match self {
            Self::Present(value) => ImmutableSet::unit(value.clone()),
            Self::Absent => ImmutableSet::new(),
        }
    }
}

// The absent hash is one fixed constant regardless of the payload type;
// present values mix the payload in on top of the same constant, keeping
// equal optionals hashing equal.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(HASH_SEED);
        if let Self::Present(value) = self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Optional.Absent()"),
            Self::Present(value) => write!(f, "Optional.Of({value})"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(nullable: Option<T>) -> Self {
        Self::from_nullable(nullable)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_nullable()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use keel_supply::of_instance;

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn absent_is_not_present() {
        assert!(!Optional::<String>::absent().is_present());
    }

    #[test]
    fn of_holds_the_value() {
        let optional = Optional::of("training");
        assert!(optional.is_present());
        assert_eq!(optional.get(), Ok(&"training"));
    }

    #[test]
    fn from_nullable_maps_both_ways() {
        assert_eq!(Optional::from_nullable(Some("bob")), Optional::of("bob"));
        assert_eq!(
            Optional::<String>::from_nullable(None),
            Optional::<String>::absent()
        );
    }

    #[test]
    fn get_on_absent_is_an_illegal_state() {
        let err = Optional::<String>::absent().get().unwrap_err();
        assert!(matches!(err, ContractError::IllegalState { .. }));
        assert_eq!(
            err.message(),
            "Optional.get() cannot be called on an absent value"
        );
    }

    #[test]
    fn or_prefers_the_present_value() {
        assert_eq!(Optional::of("a").or("default"), "a");
        assert_eq!(Optional::absent().or("default"), "default");
    }

    #[test]
    fn or_optional_prefers_self() {
        assert_eq!(
            Optional::of("a").or_optional(Optional::of("fallback")),
            Optional::of("a")
        );
        assert_eq!(
            Optional::absent().or_optional(Optional::of("fallback")),
            Optional::of("fallback")
        );
    }

    #[test]
    fn or_supply_invokes_only_when_absent() {
        let fallback = of_instance("fallback");
        assert_eq!(Optional::of("a").or_supply(&fallback), "a");
        assert_eq!(Optional::absent().or_supply(&fallback), "fallback");
    }

    #[test]
    fn or_supply_nullable_rejects_an_empty_producer() {
        let empty = of_instance(None::<&str>);
        let err = Optional::absent().or_supply_nullable(&empty).unwrap_err();
        assert!(matches!(err, ContractError::NullArgument { .. }));

        // A present value never consults the producer.
        assert_eq!(Optional::of("a").or_supply_nullable(&empty), Ok("a"));
    }

    #[test]
    fn into_nullable_round_trips() {
        assert_eq!(Optional::of("a").into_nullable(), Some("a"));
        assert_eq!(Optional::<&str>::absent().into_nullable(), None);
        assert_eq!(Optional::of("a").as_nullable(), Some(&"a"));
    }

    #[test]
    fn transform_maps_the_present_value() {
        assert_eq!(Optional::of("a").transform(|v| v), Optional::of("a"));
        assert_eq!(
            Optional::of(42).transform(|n: i32| n.to_string()),
            Optional::of("42".to_owned())
        );
    }

    #[test]
    fn transform_on_absent_skips_the_function() {
        let mut invoked = false;
        let transformed = Optional::<i32>::absent().transform(|n| {
            invoked = true;
            n.to_string()
        });
        assert_eq!(transformed, Optional::absent());
        assert!(!invoked);
    }

    #[test]
    fn equality_follows_the_payload() {
        assert_eq!(Optional::of("training"), Optional::of("training"));
        assert_ne!(Optional::of("a"), Optional::of("b"));
        assert_ne!(Optional::of("a"), Optional::absent());
        assert_eq!(Optional::<String>::absent(), Optional::<String>::absent());
    }

    #[test]
    fn absent_hash_is_constant_across_payload_types() {
        assert_eq!(
            hash_of(&Optional::<String>::absent()),
            hash_of(&Optional::<i64>::absent())
        );
    }

    #[test]
    fn equal_optionals_hash_equal() {
        assert_eq!(
            hash_of(&Optional::of("training")),
            hash_of(&Optional::of("training"))
        );
    }

    #[test]
    fn display_matches_the_rendering_contract() {
        assert_eq!(Optional::<String>::absent().to_string(), "Optional.Absent()");
        assert_eq!(Optional::of("training").to_string(), "Optional.Of(training)");
    }

    #[test]
    fn as_set_has_at_most_one_element() {
        let present = Optional::of("a").as_set();
        assert_eq!(present.len(), 1);
        assert!(present.contains(&"a"));

        let absent = Optional::<&str>::absent().as_set();
        assert!(absent.is_empty());
    }

    #[test]
    fn option_conversions_are_symmetric() {
        let optional: Optional<u8> = Some(3).into();
        assert_eq!(optional, Optional::of(3));

        let nullable: Option<u8> = Optional::of(3).into();
        assert_eq!(nullable, Some(3));
    }
}
