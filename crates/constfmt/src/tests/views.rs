use crate::StrView;

#[test]
fn find_returns_len_when_absent() {
    let v = StrView::new("abc");
    assert_eq!(v.find(b'%'), 3);
    assert_eq!(v.find(b'b'), 1);
    assert_eq!(StrView::empty().find(b'x'), 0);
}

#[test]
fn prefix_and_drop_prefix_split() {
    let v = StrView::new("hello world");
    assert_eq!(v.prefix(5), "hello");
    assert_eq!(v.drop_prefix(6), "world");
    assert_eq!(v.drop_prefix(0), "hello world");
}

// Clamping is a documented boundary contract: out-of-range lengths
// saturate instead of failing.
#[test]
fn prefix_clamps_past_the_end() {
    let v = StrView::new("abc");
    assert_eq!(v.prefix(10), "abc");
    assert_eq!(v.prefix(3), "abc");
    assert_eq!(v.prefix(0), "");
}

#[test]
fn drop_prefix_clamps_to_empty() {
    let v = StrView::new("abc");
    assert!(v.drop_prefix(10).is_empty());
    assert!(v.drop_prefix(3).is_empty());
}

#[test]
fn trailing_nul_is_excluded_from_byte_sources() {
    let v = StrView::from_bytes(b"abc\0");
    assert_eq!(v.len(), 3);
    assert_eq!(v, "abc");

    // only a single terminator is dropped
    let v = StrView::from_bytes(b"abc\0\0");
    assert_eq!(v.len(), 4);
}

#[test]
fn at_reads_single_bytes() {
    let v = StrView::new("abc");
    assert_eq!(v.at(0), b'a');
    assert_eq!(v.at(2), b'c');
}

#[test]
fn equality_is_exact() {
    assert_eq!(StrView::new("abc"), StrView::new("abc"));
    assert_ne!(StrView::new("abc"), StrView::new("abd"));
    assert_ne!(StrView::new("abc"), StrView::new("ab"));
    assert!(StrView::new("abc").const_eq("abc"));
    assert!(!StrView::new("abc").const_eq("abcd"));
}
