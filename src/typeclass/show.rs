//! Show type class - caller-supplied rendering to a `String`.
//!
//! Like [`Equivalence`](super::Equivalence), a `Show<T>` is a value rather
//! than a trait on `T`, so the same type can be rendered differently in
//! different places. Any `Fn(&T) -> String` is a `Show`, and [`DisplayShow`]
//! and [`DebugShow`] defer to the formatting traits.
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::{DebugShow, Show};
//!
//! let quoted = |s: &str| format!("'{s}'");
//! assert_eq!(quoted.show("id"), "'id'");
//! assert_eq!(DebugShow.show("id"), "\"id\"");
//! ```

use std::fmt;

/// A caller-supplied rendering of `T`.
pub trait Show<T: ?Sized> {
    /// Renders `value`.
    fn show(&self, value: &T) -> String;
}

impl<T: ?Sized, F> Show<T> for F
where
    F: Fn(&T) -> String,
{
    #[inline]
    fn show(&self, value: &T) -> String {
        self(value)
    }
}

/// Renders with [`fmt::Display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayShow;

impl<T: fmt::Display + ?Sized> Show<T> for DisplayShow {
    fn show(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Renders with [`fmt::Debug`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugShow;

impl<T: fmt::Debug + ?Sized> Show<T> for DebugShow {
    fn show(&self, value: &T) -> String {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_show_uses_display() {
        assert_eq!(DisplayShow.show(&42), "42");
    }

    #[rstest]
    fn debug_show_quotes_strings() {
        assert_eq!(DebugShow.show(&String::from("x")), "\"x\"");
    }

    #[rstest]
    fn closure_show() {
        let hex = |n: &u8| format!("{n:#04x}");
        assert_eq!(hex.show(&255), "0xff");
    }
}
