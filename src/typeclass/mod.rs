//! Type class traits and their instances for `Outcome` and its neighbours.
//!
//! This module provides the type classes (traits) through which `Outcome`
//! takes part in generic code:
//!
//! - [`Functor`]: Mapping over the success payload
//! - [`Bifunctor`]: Mapping over both payloads
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing dependent computations
//! - [`MonadRec`]: Stack-safe monadic loops
//! - [`Alt`]: Left-biased choice
//! - [`Foldable`]: Folding to a summary value
//! - [`Traversable`]: Threading an applicative effect through a structure
//! - [`Semigroup`], [`Monoid`]: Combining values
//! - [`Equivalence`], [`Show`]: Caller-supplied equality and rendering
//!
//! Instances are provided for `Outcome<E, A>`, `Option<A>` and [`Identity<A>`].
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name "the same
//! container holding a different type", which is all the traits here need.
//!
//! # Examples
//!
//! ## Traversing with an arbitrary applicative
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Traversable;
//!
//! let present: Outcome<String, i32> = Outcome::succeed(4);
//! let halved: Option<Outcome<String, i32>> =
//!     present.traverse(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(Outcome::Success(2)));
//!
//! // A failure never calls the function and is lifted with `pure`.
//! let failed: Outcome<String, i32> = Outcome::fail("e".to_string());
//! let lifted: Option<Outcome<String, i32>> = failed.traverse(|_| None::<i32>);
//! assert_eq!(lifted, Some(Outcome::Failure("e".to_string())));
//! ```
//!
//! ## Using Semigroup
//!
//! ```rust
//! use outcome::typeclass::Semigroup;
//!
//! let errors = vec!["a".to_string()].combine(vec!["b".to_string()]);
//! assert_eq!(errors, vec!["a".to_string(), "b".to_string()]);
//! ```

mod alt;
mod applicative;
mod bifunctor;
mod equivalence;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod show;
mod traversable;

pub use alt::Alt;
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use equivalence::{Equivalence, PartialEqEquivalence};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadRec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use show::{DebugShow, DisplayShow, Show};
pub use traversable::Traversable;
