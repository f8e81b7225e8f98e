//! The template parser: literal runs split around typed directives.

use crate::{
    directive::{Directive, TypeTag},
    error::FormatError,
    view::StrView,
};

/// The character that introduces a format directive.
pub const SIGIL: u8 = b'%';

/// Tight capacity bound for [`parse`]'s backing arrays.
///
/// A directive consumes at least two bytes of template text, so a template
/// of length `n` holds at most `n / 2` directives and `n / 2 + 1` literal
/// runs.
#[must_use]
pub const fn parse_capacity(template: StrView<'_>) -> usize {
    template.len() / 2 + 1
}

/// A parsed template: the ordered directives plus the literal runs between
/// them, in source order.
///
/// Both sequences live in fixed arrays of capacity `CAP` with live counts,
/// so a `Template` is a plain value that exists during constant
/// evaluation. Two invariants hold for every parsed template:
///
/// - `literal_count() == directive_count() + 1`: a leading literal, then
///   one literal after each directive (possibly empty).
/// - The argument indices of consuming directives are exactly
///   `0, 1, 2, …` in source order — no gaps, no reuse.
#[derive(Clone, Copy)]
pub struct Template<'a, const CAP: usize> {
    directives: [Directive; CAP],
    directive_count: usize,
    literals: [StrView<'a>; CAP],
    literal_count: usize,
}

impl<'a, const CAP: usize> Template<'a, CAP> {
    /// Number of parsed directives.
    #[must_use]
    pub const fn directive_count(&self) -> usize {
        self.directive_count
    }

    /// Number of literal runs. Always `directive_count() + 1`.
    #[must_use]
    pub const fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// The directive at `index`, in source order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= directive_count()`.
    #[must_use]
    pub const fn directive(&self, index: usize) -> Directive {
        assert!(index < self.directive_count, "directive index out of bounds");
        self.directives[index]
    }

    /// The literal run at `index`. Literal `i` precedes directive `i`; the
    /// last literal trails the final directive.
    ///
    /// # Panics
    ///
    /// Panics if `index >= literal_count()`.
    #[must_use]
    pub const fn literal(&self, index: usize) -> StrView<'a> {
        assert!(index < self.literal_count, "literal index out of bounds");
        self.literals[index]
    }

    /// Number of arguments the template consumes: its argument-consuming
    /// directive count.
    #[must_use]
    pub const fn argument_count(&self) -> usize {
        let mut consuming = 0;
        let mut i = 0;
        while i < self.directive_count {
            if self.directives[i].argument.is_some() {
                consuming += 1;
            }
            i += 1;
        }
        consuming
    }

    /// The parsed directives as a slice.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives[..self.directive_count]
    }

    /// The literal runs as a slice.
    #[must_use]
    pub fn literals(&self) -> &[StrView<'a>] {
        &self.literals[..self.literal_count]
    }
}

impl<const CAP: usize> core::fmt::Debug for Template<'_, CAP> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Template")
            .field("directives", &self.directives())
            .field("literals", &self.literals())
            .finish()
    }
}

/// Parses a template into its directive sequence.
///
/// One directive is consumed per step: the literal run before the sigil is
/// split off, a doubled sigil becomes a non-consuming [`TypeTag::Sigil`]
/// directive, and any other specifier is resolved through the registry,
/// with consuming directives taking the next sequential argument index.
/// The remainder after the last directive is the trailing literal. Every
/// step consumes at least two bytes past the sigil, so the scan terminates
/// for any finite template.
///
/// # Errors
///
/// [`FormatError::UnknownSpecifier`] for a specifier with no registry
/// entry; [`FormatError::DanglingSigil`] when the template ends on a bare
/// sigil.
///
/// # Panics
///
/// `CAP` must be at least [`parse_capacity`]`(template)`; a smaller
/// capacity is a caller contract violation and panics.
pub const fn parse<const CAP: usize>(
    template: StrView<'_>,
) -> Result<Template<'_, CAP>, FormatError> {
    assert!(
        CAP >= parse_capacity(template),
        "parse capacity is below the bound computed by parse_capacity"
    );

    let placeholder = Directive {
        tag: TypeTag::Sigil,
        argument: None,
    };
    let mut directives = [placeholder; CAP];
    let mut directive_count = 0;
    let mut literals = [StrView::empty(); CAP];
    let mut literal_count = 0;

    let mut next_argument = 0;
    let mut rest = template;
    // Absolute byte offset of `rest` within `template`, for diagnostics.
    let mut offset = 0;

    loop {
        let at = rest.find(SIGIL);
        if at == rest.len() {
            literals[literal_count] = rest;
            literal_count += 1;
            break;
        }

        literals[literal_count] = rest.prefix(at);
        literal_count += 1;

        if at + 1 == rest.len() {
            return Err(FormatError::DanglingSigil {
                position: offset + at,
            });
        }

        let specifier = rest.at(at + 1);
        let directive = if specifier == SIGIL {
            // Doubled sigil: a literal sigil character, no argument.
            Directive {
                tag: TypeTag::Sigil,
                argument: None,
            }
        } else {
            match TypeTag::for_specifier(specifier) {
                Some(tag) => {
                    if tag.consumes_argument() {
                        let argument = next_argument;
                        next_argument += 1;
                        Directive {
                            tag,
                            argument: Some(argument),
                        }
                    } else {
                        Directive { tag, argument: None }
                    }
                }
                None => {
                    return Err(FormatError::UnknownSpecifier {
                        specifier: specifier as char,
                        position: offset + at + 1,
                    });
                }
            }
        };

        directives[directive_count] = directive;
        directive_count += 1;

        rest = rest.drop_prefix(at + 2);
        offset += at + 2;
    }

    Ok(Template {
        directives,
        directive_count,
        literals,
        literal_count,
    })
}
