//! Mapping the failure side and the success side independently.
//!
//! For `Outcome<E, A>` the first parameter is the failure payload and the
//! second is the success payload, so [`Bifunctor::first`] is `map_error` and
//! [`Bifunctor::second`] is `map`.
//!
//! # Laws
//!
//! ```text
//! x.bimap(|a| a, |b| b) == x
//! x.bimap(|a| f2(f1(a)), |b| g2(g1(b))) == x.bimap(f1, g1).bimap(f2, g2)
//! x.bimap(f, g) == x.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Bifunctor;
//!
//! let failure: Outcome<&str, i32> = Outcome::fail("bad");
//! assert_eq!(failure.bimap(str::len, |n| n * 2), Outcome::Failure(3));
//!
//! let success: Outcome<&str, i32> = Outcome::succeed(21);
//! assert_eq!(success.bimap(str::len, |n| n * 2), Outcome::Success(42));
//! ```

use crate::Outcome;

/// A two-sided container whose sides can each be transformed.
///
/// `A` is the left (failure) payload and `B` the right (success) payload.
pub trait Bifunctor<A, B> {
    /// The same container with both payload types replaced.
    type Target<C, D>;

    /// Transforms whichever side is present with the matching function.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Transforms the left side, leaving a right value untouched.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C;

    /// Transforms the right side, leaving a left value untouched.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D;

    /// Like [`Bifunctor::bimap`], reading through a borrow.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<E, A> Bifunctor<E, A> for Outcome<E, A> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        self.map_both(first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<C, A>
    where
        F: FnOnce(E) -> C,
    {
        self.map_error(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<E, D>
    where
        G: FnOnce(A) -> D,
    {
        self.map(function)
    }

    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&A) -> D,
    {
        self.as_ref().map_both(first_function, second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_maps_only_failure() {
        let failure: Outcome<i32, &str> = Outcome::fail(2);
        assert_eq!(failure.first(|n| n + 1), Outcome::Failure(3));

        let success: Outcome<i32, &str> = Outcome::succeed("kept");
        assert_eq!(success.first(|n| n + 1), Outcome::Success("kept"));
    }

    #[rstest]
    fn second_maps_only_success() {
        let success: Outcome<&str, i32> = Outcome::succeed(2);
        assert_eq!(success.second(|n| n * 10), Outcome::Success(20));
    }

    #[rstest]
    fn bimap_equals_first_then_second() {
        let value: Outcome<i32, i32> = Outcome::fail(4);
        let direct = value.bimap(|e| e * 2, |a| a + 1);
        let stepwise = value.first(|e| e * 2).second(|a| a + 1);
        assert_eq!(direct, stepwise);
    }

    #[rstest]
    fn bimap_ref_leaves_original() {
        let value: Outcome<String, String> = Outcome::succeed(String::from("abc"));
        let lengths = value.bimap_ref(String::len, String::len);
        assert_eq!(lengths, Outcome::Success(3));
        assert_eq!(value, Outcome::Success(String::from("abc")));
    }
}
