//! Type constructors as generic associated types.
//!
//! The type class traits need to talk about "the same container, holding a
//! different payload". Rust has no syntax for `Outcome<E, _>` on its own,
//! so each container names its current payload (`Inner`) and how to swap it
//! (`WithType<B>`).
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::TypeConstructor;
//!
//! type Parsed = Outcome<String, u16>;
//! type Validated = <Parsed as TypeConstructor>::WithType<bool>;
//!
//! let checked: Validated = Outcome::Success(true);
//! assert!(checked.is_success());
//! ```

use crate::Outcome;

/// A container that can be re-targeted at another payload type.
///
/// The failure type of `Outcome<E, A>` belongs to the container, so only
/// the success payload `A` is swapped: `WithType<B>` is `Outcome<E, B>`.
///
/// Re-targeting at the current payload yields the original type:
/// `<T as TypeConstructor>::WithType<T::Inner>` is `T`.
pub trait TypeConstructor {
    /// The payload currently held.
    type Inner;

    /// This container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<E, A> TypeConstructor for Outcome<E, A> {
    type Inner = A;
    type WithType<B> = Outcome<E, B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
