//! `chain!` macro for do-notation over `flat_map`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the success payload of `expression`
//! - `let pattern = expression;` is an ordinary binding
//! - the last expression is the result and must already be wrapped
//!
//! `<-` is not a single token in `macro_rules!`, so `<=` stands in for it.
//!
//! The macro only requires a `flat_map` method on each bound expression, so
//! it works with [`Outcome`](crate::Outcome) and with the lifted types in
//! [`crate::effect`] alike.
//!
//! # Expansion
//!
//! ```rust,ignore
//! chain! { x <= m; rest }
//! // becomes
//! m.flat_map(move |x| chain! { rest })
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Outcome, chain};
//!
//! let short_circuited: Outcome<&str, i32> = chain! {
//!     x <= Outcome::succeed(1);
//!     _ <= Outcome::<&str, ()>::fail("stop");
//!     Outcome::succeed(x + 1)
//! };
//! assert_eq!(short_circuited, Outcome::Failure("stop"));
//! ```
//!
//! With [`StateOutcome`](crate::effect::StateOutcome):
//!
//! ```rust
//! use outcome::{Outcome, chain};
//! use outcome::effect::StateOutcome;
//!
//! let next_id: StateOutcome<u32, String, u32> = chain! {
//!     current <= StateOutcome::get();
//!     _ <= StateOutcome::put(current + 1);
//!     StateOutcome::succeed(current)
//! };
//! assert_eq!(next_id.run(7), Outcome::Success((7, 8)));
//! ```

/// Monadic do-notation over any type with a `flat_map` method.
///
/// See the [module documentation](crate::effect) for the syntax.
#[macro_export]
macro_rules! chain {
    // Final expression.
    ($result:expr) => {
        $result
    };

    // x <= m; rest
    ($binding:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$binding| $crate::chain!($($rest)+))
    };

    // mut x <= m; rest
    (mut $binding:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |mut $binding| $crate::chain!($($rest)+))
    };

    // (a, b) <= m; rest
    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| $crate::chain!($($rest)+))
    };

    // _ <= m; rest
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| $crate::chain!($($rest)+))
    };

    // let x = e; rest
    (let $binding:ident = $value:expr ; $($rest:tt)+) => {{
        let $binding = $value;
        $crate::chain!($($rest)+)
    }};

    // let x: T = e; rest
    (let $binding:ident : $annotation:ty = $value:expr ; $($rest:tt)+) => {{
        let $binding: $annotation = $value;
        $crate::chain!($($rest)+)
    }};

    // let (a, b) = e; rest
    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $value;
        $crate::chain!($($rest)+)
    }};
}
