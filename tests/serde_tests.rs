#![cfg(feature = "serde")]

//! Integration tests for serde support in zipper-list.

use rstest::rstest;
use zipper_list::persistent::ZipperList;

#[rstest]
fn test_zipper_list_json_roundtrip() {
    let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
    let json = serde_json::to_string(&zipper).unwrap();
    let restored: ZipperList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(zipper, restored);
}

#[rstest]
fn test_zipper_list_json_shape() {
    let zipper = ZipperList::new(vec!["a".to_string()], "b".to_string(), vec![]);
    let json = serde_json::to_string(&zipper).unwrap();
    assert_eq!(json, r#"{"first":["a"],"current":"b","rest":[]}"#);
}

#[rstest]
fn test_zipper_list_deserialize_keeps_cursor() {
    let json = r#"{"first":[1,2],"current":3,"rest":[4]}"#;
    let zipper: ZipperList<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(zipper.cursor_index(), 2);
    assert_eq!(zipper.current(), &3);
}

#[rstest]
fn test_zipper_list_deserialize_missing_current_fails() {
    let json = r#"{"first":[1],"rest":[]}"#;
    let result: Result<ZipperList<i32>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
