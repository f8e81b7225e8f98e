//! The renderer: literal runs and formatted directives replayed in
//! template order.
//!
//! Each semantic type carries a length/render strategy pair, dispatched by
//! an exhaustive match: the sigil escape renders a fixed one-byte string,
//! while the consuming types compute the rendered length of their argument
//! first and then produce exactly that many bytes. That equality is the
//! load-bearing contract — it is what lets the final buffer size be known
//! before any byte is written — and the renderer asserts it.

use crate::{
    argument::Argument,
    buffer::FixedStr,
    directive::{Directive, TypeTag},
    error::FormatError,
    parser::{SIGIL, Template, parse},
    validate::validate,
    view::StrView,
};

/// Rendered length of an integral value: an optional sign plus base-10
/// digits.
pub(crate) const fn int_len(value: i64) -> usize {
    let sign = if value < 0 { 1 } else { 0 };
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return 1;
    }
    let mut digits = 0;
    while magnitude > 0 {
        digits += 1;
        magnitude /= 10;
    }
    sign + digits
}

/// Writes `value` at `out[at..]`, returning the position one past the last
/// byte written.
///
/// The sign is handled separately from the magnitude; `unsigned_abs` keeps
/// the split overflow-free at `i64::MIN`. Digits are extracted least
/// significant first and laid down back to front inside the span reserved
/// by [`int_len`], which reverses them into final order.
pub(crate) const fn write_int(out: &mut [u8], at: usize, value: i64) -> usize {
    let end = at + int_len(value);
    let mut magnitude = value.unsigned_abs();
    let mut cursor = end;
    if magnitude == 0 {
        cursor -= 1;
        out[cursor] = b'0';
    }
    while magnitude > 0 {
        cursor -= 1;
        out[cursor] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
    }
    if value < 0 {
        cursor -= 1;
        out[cursor] = b'-';
    }
    assert!(
        cursor == at,
        "integer renderer must fill exactly the measured span"
    );
    end
}

const fn write_bytes(out: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        out[at + i] = bytes[i];
        i += 1;
    }
    at + bytes.len()
}

/// Length strategy for one directive.
const fn directive_len(directive: Directive, arguments: &[Argument<'_>]) -> usize {
    match directive.argument {
        None => match directive.tag {
            TypeTag::Sigil => 1,
            TypeTag::Int | TypeTag::Str => {
                panic!("consuming directive carries no argument index")
            }
        },
        Some(index) => match (directive.tag, arguments[index]) {
            (TypeTag::Int, Argument::Int(value)) => int_len(value),
            (TypeTag::Str, Argument::Str(view)) => view.len(),
            _ => panic!("argument kind was checked during validation"),
        },
    }
}

/// Render strategy for one directive; returns the new write position.
const fn write_directive(
    out: &mut [u8],
    at: usize,
    directive: Directive,
    arguments: &[Argument<'_>],
) -> usize {
    match directive.argument {
        None => match directive.tag {
            TypeTag::Sigil => {
                out[at] = SIGIL;
                at + 1
            }
            TypeTag::Int | TypeTag::Str => {
                panic!("consuming directive carries no argument index")
            }
        },
        Some(index) => match (directive.tag, arguments[index]) {
            (TypeTag::Int, Argument::Int(value)) => write_int(out, at, value),
            (TypeTag::Str, Argument::Str(view)) => write_bytes(out, at, view.as_bytes()),
            _ => panic!("argument kind was checked during validation"),
        },
    }
}

/// Validates `arguments` against `template` and computes the exact length
/// of the rendered output.
///
/// # Errors
///
/// Any error [`validate`] reports.
pub const fn rendered_len<const CAP: usize>(
    template: &Template<'_, CAP>,
    arguments: &[Argument<'_>],
) -> Result<usize, FormatError> {
    match validate(template, arguments) {
        Ok(()) => {}
        Err(error) => return Err(error),
    }
    let mut total = 0;
    let mut i = 0;
    while i < template.directive_count() {
        total += template.literal(i).len();
        total += directive_len(template.directive(i), arguments);
        i += 1;
    }
    total += template.literal(i).len();
    Ok(total)
}

/// Validates and renders `template` into `out`, returning the number of
/// bytes written.
///
/// The output interleaves literal runs with rendered directives in
/// template order: leading literal, first directive, next literal, and so
/// on through the trailing literal.
///
/// # Errors
///
/// Any error [`validate`] reports.
///
/// # Panics
///
/// `out` must hold at least [`rendered_len`] bytes; a smaller buffer is a
/// caller contract violation and panics.
pub const fn render_into<const CAP: usize>(
    template: &Template<'_, CAP>,
    arguments: &[Argument<'_>],
    out: &mut [u8],
) -> Result<usize, FormatError> {
    let needed = match rendered_len(template, arguments) {
        Ok(len) => len,
        Err(error) => return Err(error),
    };
    assert!(
        out.len() >= needed,
        "output buffer is smaller than the rendered length"
    );

    let mut at = 0;
    let mut i = 0;
    while i < template.directive_count() {
        at = write_bytes(out, at, template.literal(i).as_bytes());
        at = write_directive(out, at, template.directive(i), arguments);
        i += 1;
    }
    at = write_bytes(out, at, template.literal(i).as_bytes());

    assert!(
        at == needed,
        "renderer wrote a different length than it measured"
    );
    Ok(at)
}

/// Renders a validated template into a [`FixedStr`] of exactly the
/// rendered length.
///
/// `N` must equal [`rendered_len`]`(template, arguments)`; the
/// [`cfmt!`](crate::cfmt) macro computes both from the same inputs.
///
/// # Panics
///
/// Panics — a compile error in const contexts — when validation fails or
/// when `N` differs from the rendered length.
#[must_use]
pub const fn render<const CAP: usize, const N: usize>(
    template: &Template<'_, CAP>,
    arguments: &[Argument<'_>],
) -> FixedStr<N> {
    let mut bytes = [0u8; N];
    match render_into(template, arguments, &mut bytes) {
        Ok(written) => {
            assert!(written == N, "render target size must equal rendered_len");
        }
        Err(error) => error.panic(),
    }
    FixedStr::from_raw(bytes)
}

/// End-to-end rendering over a raw template: parse, validate, render into
/// `out`, returning the number of bytes written.
///
/// `CAP` bounds the parse arrays; [`parse_capacity`] computes the tight
/// bound for a given template.
///
/// [`parse_capacity`]: crate::parse_capacity
///
/// # Errors
///
/// Any error [`parse`] or [`validate`] reports.
///
/// # Panics
///
/// As for [`parse`] (capacity contract) and [`render_into`] (output buffer
/// size contract).
pub const fn format_into<const CAP: usize>(
    template: StrView<'_>,
    arguments: &[Argument<'_>],
    out: &mut [u8],
) -> Result<usize, FormatError> {
    let template = match parse::<CAP>(template) {
        Ok(template) => template,
        Err(error) => return Err(error),
    };
    render_into(&template, arguments, out)
}
