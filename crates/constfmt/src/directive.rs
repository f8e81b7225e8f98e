//! The directive registry: specifier characters mapped to semantic types.

use crate::argument::ArgKind;

/// The semantic formatting behavior a directive selects.
///
/// Each tag carries its own length/render strategy in the renderer and its
/// own argument-compatibility predicate in the validator, both as
/// exhaustive matches: registering a new specifier means adding one enum
/// variant and one arm to each match, with no change to existing mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// An integral value; the destination type is `i64`.
    Int,
    /// A textual value; the destination type is [`StrView`].
    ///
    /// [`StrView`]: crate::StrView
    Str,
    /// A literal sigil character produced by the doubled-sigil escape.
    /// Never accepts a value.
    Sigil,
}

impl TypeTag {
    /// Registry lookup: the semantic type for a specifier character.
    ///
    /// This is a pure, total function; unknown specifiers map to `None`
    /// and are diagnosed by the parser. The doubled-sigil escape is not a
    /// registry entry — the parser recognizes it before consulting the
    /// registry.
    #[must_use]
    pub const fn for_specifier(specifier: u8) -> Option<TypeTag> {
        match specifier {
            b'd' => Some(TypeTag::Int),
            b's' => Some(TypeTag::Str),
            _ => None,
        }
    }

    /// Whether a directive of this type consumes one supplied argument.
    #[must_use]
    pub const fn consumes_argument(self) -> bool {
        match self {
            TypeTag::Int | TypeTag::Str => true,
            TypeTag::Sigil => false,
        }
    }

    /// The tag's own compatibility predicate: whether an argument of
    /// `kind` can satisfy a directive of this type.
    ///
    /// Widening from every concrete integer type happens when the argument
    /// is wrapped (see [`ArgValue`]), so the integral tag accepts exactly
    /// the integral kind; the textual tag requires the view kind; the
    /// sigil tag accepts nothing.
    ///
    /// [`ArgValue`]: crate::ArgValue
    #[must_use]
    pub const fn accepts(self, kind: ArgKind) -> bool {
        matches!(
            (self, kind),
            (TypeTag::Int, ArgKind::Int) | (TypeTag::Str, ArgKind::Str)
        )
    }
}

/// One parsed unit of a template: a semantic type and, for consuming
/// directives, the zero-based position of the argument it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// The semantic type selected by the specifier character.
    pub tag: TypeTag,
    /// `Some(i)` for the `i`-th supplied argument, `None` for directives
    /// that do not consume an argument (the escaped sigil).
    pub argument: Option<usize>,
}
