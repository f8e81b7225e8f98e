use std::format;

use crate::{FixedStr, StrView};

#[test]
fn concat_joins_in_order() {
    const A: FixedStr<3> = FixedStr::from_str("abc");
    const B: FixedStr<2> = FixedStr::from_str("de");
    const AB: FixedStr<5> = A.concat::<2, 5>(&B);
    assert_eq!(AB, "abcde");
    assert_eq!(AB.len(), 5);
}

#[test]
fn concat_is_associative() {
    const A: FixedStr<5> = FixedStr::from_str("Hello");
    const B: FixedStr<2> = FixedStr::from_str(", ");
    const C: FixedStr<5> = FixedStr::from_str("world");
    const LEFT: FixedStr<12> = A.concat::<2, 7>(&B).concat::<5, 12>(&C);
    const RIGHT: FixedStr<12> = A.concat::<7, 12>(&B.concat::<5, 7>(&C));
    const _: () = assert!(LEFT.const_eq("Hello, world"));
    assert_eq!(LEFT, RIGHT);
}

#[test]
fn concat_with_empty_operands() {
    const EMPTY: FixedStr<0> = FixedStr::from_str("");
    const A: FixedStr<3> = FixedStr::from_str("abc");
    assert_eq!(EMPTY.concat::<3, 3>(&A), "abc");
    assert_eq!(A.concat::<0, 3>(&EMPTY), "abc");
}

#[test]
#[should_panic(expected = "view length must equal the buffer length")]
fn from_str_rejects_wrong_length() {
    let _ = FixedStr::<4>::from_str("abc");
}

#[test]
fn with_nul_feeds_c_string_consumers() {
    const HI: FixedStr<2> = FixedStr::from_str("hi");
    const BYTES: [u8; 3] = HI.with_nul::<3>();
    let cstr = core::ffi::CStr::from_bytes_with_nul(&BYTES).unwrap();
    assert_eq!(cstr.to_str().unwrap(), "hi");
}

#[test]
fn buffer_and_view_round_trip() {
    const A: FixedStr<3> = FixedStr::from_str("abc");
    let view = A.as_view();
    assert_eq!(view.len(), 3);
    assert_eq!(FixedStr::<3>::from_view(view), A);
}

#[test]
fn equality_against_literals_views_and_buffers() {
    let a = FixedStr::<3>::from_str("abc");
    assert_eq!(a, "abc");
    assert_eq!(a, StrView::new("abc"));
    assert_ne!(a, FixedStr::<3>::from_str("abd"));
    assert!(a.const_eq("abc"));
    assert!(!a.const_eq("abd"));
    assert!(!a.const_eq("ab"));
}

#[test]
fn display_and_debug_render_content() {
    let a = FixedStr::<3>::from_str("abc");
    assert_eq!(format!("{a}"), "abc");
    assert_eq!(format!("{a:?}"), "\"abc\"");
}
