//! Integration tests for the unary bindings.

use pipe_operator::prelude::*;
use rstest::rstest;
use std::collections::HashMap;

#[test]
fn test_unary_ops() {
    assert_eq!(5_i32.pipe(neg()), -5);
    assert_eq!((-7_i32).pipe(pos()), -7);
    assert_eq!((-7_i32).pipe(abs()), 7);
    assert_eq!(0b1010_u8.pipe(invert()), 0b1111_0101);
    assert_eq!(5_i32.pipe(invert()), -6);
}

#[test]
fn test_not_index_truth() {
    assert!(!true.pipe(not()));
    assert!(false.pipe(not()));
    assert_eq!(10_i32.pipe(index()), Ok(10));
    assert!(!Vec::<i32>::new().pipe(truth()));
    assert!(vec![0].pipe(truth()));
}

#[test]
fn test_index_rejects_negative_values() {
    assert!((-1_i64).pipe(index()).is_err());
}

#[rstest]
#[case(0_i32, false)]
#[case(-3_i32, true)]
fn test_integer_truthiness(#[case] value: i32, #[case] expected: bool) {
    assert_eq!(value.pipe(truth()), expected);
    assert_eq!(value.pipe(not()), !expected);
}

#[test]
fn test_container_truthiness() {
    assert!(!"".pipe(truth()));
    assert!(String::from("x").pipe(truth()));
    assert!(!HashMap::<u8, u8>::new().pipe_ref(truth()));
    assert!(!None::<i32>.pipe(truth()));
    assert!(Some(0).pipe(truth()));
    assert!(!0.0_f64.pipe(truth()));
}
