//! Compile-time validation and rendering of printf-style format templates.
//!
//! A template is parsed into a typed sequence of [`Directive`]s, the
//! supplied arguments are checked against that sequence in count and type,
//! and only a template that passes both checks renders — into a
//! [`FixedStr`] whose length is itself a compile-known constant. The whole
//! pipeline is `const fn`, so driven through [`cfmt!`] a malformed
//! template, a missing argument or a mismatched type is a build error, and
//! the rendered string costs nothing at run time.
//!
//! ```
//! use constfmt::{FixedStr, cfmt};
//!
//! const STATUS: FixedStr<10> = cfmt!("%d%% of %d", 75, 100);
//! assert_eq!(STATUS.as_str(), "75% of 100");
//! ```
//!
//! Every stage is also an ordinary function returning a [`Result`], so the
//! same checks are observable as values: [`parse`] produces the directive
//! sequence, [`validate`] the arity/type verdict, [`rendered_len`] the
//! exact output size, and [`render_into`]/[`format_into`] write into a
//! caller buffer.
//!
//! Registering a new specifier is purely additive: one arm in
//! [`TypeTag::for_specifier`], one in [`TypeTag::consumes_argument`] and
//! [`TypeTag::accepts`], and one length/render arm in the renderer —
//! exhaustiveness checking finds every spot.

#![no_std]

#[cfg(test)]
extern crate std;

mod argument;
mod buffer;
mod directive;
mod error;
mod parser;
mod render;
mod validate;
mod view;

#[cfg(test)]
mod tests;

pub use argument::{ArgKind, ArgValue, Argument};
pub use buffer::FixedStr;
pub use directive::{Directive, TypeTag};
pub use error::FormatError;
pub use parser::{SIGIL, Template, parse, parse_capacity};
pub use render::{format_into, render, render_into, rendered_len};
pub use validate::validate;
pub use view::StrView;

/// Parses, validates and renders a format template during constant
/// evaluation.
///
/// The template must be a string literal and the arguments compile-known
/// values. An unknown specifier, an arity mismatch or a type mismatch
/// aborts the build with a diagnostic; otherwise the expansion is a
/// [`FixedStr`] whose length equals the rendered length.
///
/// ```
/// use constfmt::{FixedStr, cfmt};
///
/// const GREETING: FixedStr<36> =
///     cfmt!("Hello %%%s%%, this is number %d and %d", "USER", 1, 5);
/// assert_eq!(GREETING.as_str(), "Hello %USER%, this is number 1 and 5");
/// ```
#[macro_export]
macro_rules! cfmt {
    ($template:literal $(, $argument:expr)* $(,)?) => {{
        const __CFMT_TEMPLATE: $crate::StrView<'static> =
            $crate::StrView::new($template);
        const __CFMT_CAP: usize = $crate::parse_capacity(__CFMT_TEMPLATE);
        const __CFMT_ARGS: &[$crate::Argument<'static>] =
            &[$($crate::ArgValue($argument).into_argument()),*];
        const __CFMT_PARSED: $crate::Template<'static, __CFMT_CAP> =
            match $crate::parse::<__CFMT_CAP>(__CFMT_TEMPLATE) {
                Ok(template) => template,
                Err(error) => error.panic(),
            };
        const __CFMT_LEN: usize =
            match $crate::rendered_len(&__CFMT_PARSED, __CFMT_ARGS) {
                Ok(len) => len,
                Err(error) => error.panic(),
            };
        const __CFMT_OUT: $crate::FixedStr<__CFMT_LEN> =
            $crate::render::<__CFMT_CAP, __CFMT_LEN>(&__CFMT_PARSED, __CFMT_ARGS);
        __CFMT_OUT
    }};
}
