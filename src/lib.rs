//! # outcome
//!
//! A two-branch result algebra for Rust.
//!
//! ## Overview
//!
//! [`Outcome<E, A>`](Outcome) is either a `Failure(E)` or a `Success(A)`.
//! Around it this crate provides the usual functional combinator suite and
//! the type class instances that let `Outcome` take part in generic code:
//!
//! - **Core**: construction, folding, swapping, mapping, short-circuiting `flat_map`
//! - **Applicative**: fail-fast `ap`/`map2`/`lift2`, plus a validated variant
//!   that accumulates failures with a semigroup
//! - **Alt**: left-biased fallback, plus a validated variant
//! - **Traversal**: array traversal that stops at the first failure, and a
//!   generic `Traversable` over any applicative
//! - **Filtering**: `compact`, `separate`, `filter_or_else`, `partition`
//! - **Interop**: conversions with `Option` and `std::result::Result`, and
//!   panic capture with `try_catch`
//! - **Effects**: the same algebra lifted through Reader, State and Async contexts
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Traversable, etc.)
//! - `effect`: `ReaderOutcome`, `StateOutcome` and the `chain!` macro
//! - `async`: `AsyncOutcome` (pulls in `futures`)
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn non_empty(field: &str, value: &str) -> Outcome<Vec<String>, String> {
//!     if value.is_empty() {
//!         Outcome::fail(vec![format!("{field} is empty")])
//!     } else {
//!         Outcome::succeed(value.to_string())
//!     }
//! }
//!
//! // Fail-fast: only the first problem is reported.
//! let fast = non_empty("name", "").map2(non_empty("email", ""), |n, e| (n, e));
//! assert_eq!(fast, Outcome::Failure(vec!["name is empty".to_string()]));
//!
//! // Validated: every problem is reported.
//! type Errors = Vec<String>;
//! let validated = ValidatedApplicative::<fn(Errors, Errors) -> Errors>::from_semigroup();
//! let all = validated.map2(non_empty("name", ""), non_empty("email", ""), |n, e| (n, e));
//! assert_eq!(
//!     all,
//!     Outcome::Failure(vec!["name is empty".to_string(), "email is empty".to_string()]),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
///
/// let value: Outcome<String, i32> = Outcome::succeed(1);
/// assert!(value.is_success());
/// ```
pub mod prelude {
    pub use crate::outcome::{
        Outcome, PanicError, ValidatedAlt, ValidatedApplicative, lift2, lift3, sequence_array,
        traverse_array, traverse_array_with_index, validated_alt, validated_applicative,
    };

    #[cfg(feature = "typeclass")]
    pub use crate::outcome::{OutcomeEquivalence, OutcomeShow};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod outcome;

pub use outcome::{
    Outcome, PanicError, ValidatedAlt, ValidatedApplicative, lift2, lift3, sequence_array,
    traverse_array, traverse_array_with_index, validated_alt, validated_applicative,
};

#[cfg(feature = "typeclass")]
pub use outcome::{OutcomeEquivalence, OutcomeShow};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
