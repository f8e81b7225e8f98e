//! Caller-supplied argument values and their conversions.

use crate::view::StrView;

/// A single caller-supplied value, reduced to the destination type of the
/// semantic type that will render it.
#[derive(Debug, Clone, Copy)]
pub enum Argument<'a> {
    /// An integral value, widened to `i64`.
    Int(i64),
    /// A textual value borrowing from the caller.
    Str(StrView<'a>),
}

impl Argument<'_> {
    /// The kind of this argument, as checked by the validator and reported
    /// in type-mismatch diagnostics.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Argument::Int(_) => ArgKind::Int,
            Argument::Str(_) => ArgKind::Str,
        }
    }
}

/// The shape of an [`Argument`], independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// An integral argument.
    Int,
    /// A textual argument.
    Str,
}

/// Adapter from a concrete caller type to an [`Argument`].
///
/// There is one inherent `into_argument` impl per supported concrete type,
/// so the conversion table is closed and compile-resolved: wrapping a value
/// of an unsupported type has no `into_argument` method at all, and the
/// mistake surfaces at the call site. Every integer type widens into
/// [`Argument::Int`]; `&str` and [`StrView`] convert exactly into
/// [`Argument::Str`].
pub struct ArgValue<T>(
    /// The wrapped value.
    pub T,
);

macro_rules! widening_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ArgValue<$ty> {
            /// Widens the wrapped integer into an [`Argument::Int`].
            #[must_use]
            pub const fn into_argument(self) -> Argument<'static> {
                Argument::Int(self.0 as i64)
            }
        }
    )*};
}

widening_int!(i8, i16, i32, i64, isize, u8, u16, u32);

macro_rules! checked_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl ArgValue<$ty> {
            /// Widens the wrapped integer into an [`Argument::Int`].
            ///
            /// # Panics
            ///
            /// Panics if the value exceeds `i64::MAX` and therefore does
            /// not fit the integral destination type. In a const context
            /// this is a compile error.
            #[must_use]
            pub const fn into_argument(self) -> Argument<'static> {
                assert!(
                    self.0 as u128 <= i64::MAX as u128,
                    "unsigned argument does not fit the integral destination type"
                );
                Argument::Int(self.0 as i64)
            }
        }
    )*};
}

checked_unsigned!(u64, usize);

impl<'a> ArgValue<&'a str> {
    /// Views the wrapped text as an [`Argument::Str`].
    #[must_use]
    pub const fn into_argument(self) -> Argument<'a> {
        Argument::Str(StrView::new(self.0))
    }
}

impl<'a> ArgValue<StrView<'a>> {
    /// Passes the wrapped view through as an [`Argument::Str`].
    #[must_use]
    pub const fn into_argument(self) -> Argument<'a> {
        Argument::Str(self.0)
    }
}
