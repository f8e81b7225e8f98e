//! Static checks of an argument sequence against a parsed template.

use crate::{argument::Argument, error::FormatError, parser::Template};

/// Checks that `arguments` satisfies `template` in count and type.
///
/// Arity is checked first and reported directionally, so a caller can tell
/// "too few" from "too many". Type compatibility is then checked for every
/// consuming directive — all directives are visited, nothing
/// short-circuits, and the first offending directive's argument index is
/// the one reported.
///
/// # Errors
///
/// [`FormatError::TooFewArguments`], [`FormatError::TooManyArguments`], or
/// [`FormatError::TypeMismatch`] for the first directive whose argument
/// kind its semantic type does not accept.
pub const fn validate<const CAP: usize>(
    template: &Template<'_, CAP>,
    arguments: &[Argument<'_>],
) -> Result<(), FormatError> {
    let expected = template.argument_count();
    let supplied = arguments.len();
    if supplied < expected {
        return Err(FormatError::TooFewArguments { expected, supplied });
    }
    if supplied > expected {
        return Err(FormatError::TooManyArguments { expected, supplied });
    }

    let mut first_mismatch = None;
    let mut i = 0;
    while i < template.directive_count() {
        let directive = template.directive(i);
        if let Some(argument) = directive.argument {
            let found = arguments[argument].kind();
            if !directive.tag.accepts(found) && first_mismatch.is_none() {
                first_mismatch = Some(FormatError::TypeMismatch {
                    argument,
                    expected: directive.tag,
                    found,
                });
            }
        }
        i += 1;
    }

    match first_mismatch {
        None => Ok(()),
        Some(error) => Err(error),
    }
}
