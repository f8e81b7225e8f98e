use crate::{ArgKind, Argument, FormatError, StrView, Template, TypeTag, parse, validate};

const I: Argument<'static> = Argument::Int(1);
const S: Argument<'static> = Argument::Str(StrView::new("x"));

fn template<const CAP: usize>(text: &str) -> Template<'_, CAP> {
    parse::<CAP>(StrView::new(text)).unwrap()
}

#[test]
fn exact_arity_passes() {
    let t = template::<8>("%d and %s");
    assert_eq!(validate(&t, &[I, S]), Ok(()));
}

#[test]
fn too_few_is_directional() {
    let t = template::<4>("%d%d");
    assert_eq!(
        validate(&t, &[I]),
        Err(FormatError::TooFewArguments {
            expected: 2,
            supplied: 1
        })
    );
}

#[test]
fn too_many_is_directional() {
    let t = template::<4>("%d%d");
    assert_eq!(
        validate(&t, &[I, I, I]),
        Err(FormatError::TooManyArguments {
            expected: 2,
            supplied: 3
        })
    );
}

#[test]
fn escapes_consume_no_arguments() {
    let t = template::<2>("%%");
    assert_eq!(validate(&t, &[]), Ok(()));
    assert_eq!(
        validate(&t, &[I]),
        Err(FormatError::TooManyArguments {
            expected: 0,
            supplied: 1
        })
    );
}

#[test]
fn mismatch_reports_the_offending_argument() {
    let t = template::<8>("%d %s");
    assert_eq!(
        validate(&t, &[I, I]),
        Err(FormatError::TypeMismatch {
            argument: 1,
            expected: TypeTag::Str,
            found: ArgKind::Int
        })
    );
}

#[test]
fn mismatch_position_is_independent_of_other_directives() {
    // the first directive is satisfied; only the second offends
    let t = template::<8>("%s%d");
    assert_eq!(
        validate(&t, &[S, S]),
        Err(FormatError::TypeMismatch {
            argument: 1,
            expected: TypeTag::Int,
            found: ArgKind::Str
        })
    );
}

#[test]
fn first_of_several_mismatches_wins() {
    let t = template::<8>("%d%d");
    assert_eq!(
        validate(&t, &[S, S]),
        Err(FormatError::TypeMismatch {
            argument: 0,
            expected: TypeTag::Int,
            found: ArgKind::Str
        })
    );
}

#[test]
fn arity_counts_only_consuming_directives() {
    let t = template::<8>("%%%d%%");
    assert_eq!(t.argument_count(), 1);
    assert_eq!(validate(&t, &[I]), Ok(()));
}
