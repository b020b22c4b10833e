use pdf_jig::range::RangeToken;
use pdf_jig::*;

#[test]
fn test_empty_expression_resolves_to_nothing() {
    for page_count in [0, 1, 10] {
        assert!(resolve_range("", page_count).is_empty());
    }
}

#[test]
fn test_resolve_basic_forms() {
    assert_eq!(resolve_range("1-3", 10), vec![0, 1, 2]);
    assert_eq!(resolve_range("-1", 10), vec![9]);
    assert_eq!(resolve_range("7-", 10), vec![6, 7, 8, 9]);
    assert_eq!(resolve_range("-3--1", 10), vec![7, 8, 9]);
}

#[test]
fn test_reversed_range_is_empty() {
    assert!(resolve_range("3-1", 10).is_empty());
    assert!(resolve_range("-1--3", 10).is_empty());
}

#[test]
fn test_token_order_and_duplicates_are_kept() {
    assert_eq!(resolve_range("3,1-2,3", 5), vec![2, 0, 1, 2]);
}

#[test]
fn test_malformed_tokens_are_dropped() {
    assert_eq!(resolve_range("x,2,,1-y,4", 5), vec![1, 3]);
}

#[test]
fn test_out_of_range_indices_are_not_filtered() {
    assert_eq!(resolve_range("4-6", 5), vec![3, 4, 5]);
    assert_eq!(resolve_range("0", 5), vec![-1]);
    assert_eq!(resolve_range("-7", 5), vec![-2]);
}

#[test]
fn test_whole_document_range() {
    assert_eq!(resolve_range("1--1", 4), vec![0, 1, 2, 3]);
    assert!(resolve_range("1--1", 0).is_empty());
}

#[test]
fn test_select_pages_filters_to_document() {
    assert_eq!(select_pages("0,1,4-6", 5).unwrap(), vec![0, 3, 4]);
    assert_eq!(select_pages("1,-1", 1).unwrap(), vec![0, 0]);
}

#[test]
fn test_select_pages_with_huge_bounds_on_small_document() {
    assert_eq!(
        select_pages("1-9223372036854775807", 3).unwrap(),
        vec![0, 1, 2]
    );
    assert_eq!(select_pages("-9223372036854775808-2", 3).unwrap(), vec![0, 1]);
    assert!(matches!(
        select_pages("4-9223372036854775807", 3),
        Err(JigError::InvalidRange(_))
    ));
}

#[test]
fn test_select_pages_rejects_empty_selection() {
    match select_pages("9-12", 5) {
        Err(JigError::InvalidRange(expr)) => assert_eq!(expr, "9-12"),
        other => panic!("Expected InvalidRange, got {:?}", other),
    }
    assert!(select_pages("", 5).is_err());
    assert!(select_pages("1", 0).is_err());
}

#[test]
fn test_token_bounds() {
    assert_eq!(RangeToken::Single(-2).bounds(10), (8, 8));
    assert_eq!(RangeToken::Closed(2, -2).bounds(10), (1, 8));
}
