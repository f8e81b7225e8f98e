//! Error taxonomy for template parsing, validation and rendering.

use thiserror::Error;

use crate::{argument::ArgKind, directive::TypeTag};

/// Why a template failed to parse, validate or render.
///
/// Every pipeline stage reports through this enum as an ordinary value, so
/// positions, counts and kinds stay observable at run time. In the const
/// pipeline driven by [`cfmt!`](crate::cfmt) an `Err` is mapped through
/// [`FormatError::panic`] and becomes a build diagnostic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A sigil introduced a specifier character with no registry entry.
    #[error("no directive is registered for specifier `{specifier}` (byte {position})")]
    UnknownSpecifier {
        /// The unrecognized specifier character.
        specifier: char,
        /// Byte position of the specifier in the template.
        position: usize,
    },

    /// The template ended immediately after a sigil, leaving no specifier
    /// character to resolve.
    #[error("template ends with a bare sigil (byte {position})")]
    DanglingSigil {
        /// Byte position of the trailing sigil.
        position: usize,
    },

    /// Fewer arguments were supplied than the template consumes.
    #[error("too few arguments: the template consumes {expected}, {supplied} supplied")]
    TooFewArguments {
        /// Number of argument-consuming directives in the template.
        expected: usize,
        /// Number of arguments actually supplied.
        supplied: usize,
    },

    /// More arguments were supplied than the template consumes.
    #[error("too many arguments: the template consumes {expected}, {supplied} supplied")]
    TooManyArguments {
        /// Number of argument-consuming directives in the template.
        expected: usize,
        /// Number of arguments actually supplied.
        supplied: usize,
    },

    /// An argument's kind cannot satisfy the semantic type of the
    /// directive that consumes it.
    #[error("argument {argument} is {found:?} but its directive expects {expected:?}")]
    TypeMismatch {
        /// Zero-based position of the offending argument.
        argument: usize,
        /// The directive's declared semantic type.
        expected: TypeTag,
        /// The kind of the supplied argument.
        found: ArgKind,
    },
}

impl FormatError {
    /// Aborts constant evaluation with a diagnostic for this error.
    ///
    /// `panic!` in a const context cannot format values, so each variant
    /// maps to a distinct static message; the precise positions and counts
    /// remain available on the `Err` value for run-time callers.
    pub const fn panic(self) -> ! {
        match self {
            FormatError::UnknownSpecifier { .. } => {
                panic!("format template uses a specifier with no registered directive")
            }
            FormatError::DanglingSigil { .. } => {
                panic!("format template ends with a bare sigil")
            }
            FormatError::TooFewArguments { .. } => {
                panic!("too few arguments for format template")
            }
            FormatError::TooManyArguments { .. } => {
                panic!("too many arguments for format template")
            }
            FormatError::TypeMismatch { .. } => {
                panic!("format argument type does not match its directive")
            }
        }
    }
}
