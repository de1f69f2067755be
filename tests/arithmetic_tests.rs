//! Integration tests for the arithmetic bindings.
//!
//! Covers the binary operators, their in-place forms and the numeric
//! operations `std` has no operator for (`true_div`, `floor_div`,
//! `modulo`, `pow`, `matmul`).

use pipe_operator::prelude::*;
use rstest::rstest;

// =============================================================================
// Binary operators
// =============================================================================

#[test]
fn test_basic_arithmetic() {
    assert_eq!(2_i32.pipe(add(3)), 5);
    assert_eq!(5_i32.pipe(sub(2)), 3);
    assert_eq!(4_i32.pipe(mul(3)), 12);
    assert_eq!(7_i32.pipe(floor_div(2)), 3);
    assert!((7_i32.pipe(true_div(2)) - 3.5).abs() < f64::EPSILON);
    assert_eq!(7_i32.pipe(modulo(3)), 1);
    assert_eq!(2_i32.pipe(pow(3)), 8);
}

#[rstest]
#[case(7, 2, 3, 1)]
#[case(-7, 2, -4, 1)]
#[case(7, -2, -4, -1)]
#[case(-7, -2, 3, -1)]
fn test_floor_semantics(
    #[case] left: i64,
    #[case] right: i64,
    #[case] quotient: i64,
    #[case] remainder: i64,
) {
    assert_eq!(left.pipe(floor_div(right)), quotient);
    assert_eq!(left.pipe(modulo(right)), remainder);
}

#[rstest]
#[case(-7, 2, -3, -1)]
#[case(7, -2, -3, 1)]
fn test_truncating_div_and_rem(
    #[case] left: i32,
    #[case] right: i32,
    #[case] quotient: i32,
    #[case] remainder: i32,
) {
    assert_eq!(left.pipe(div(right)), quotient);
    assert_eq!(left.pipe(rem(right)), remainder);
}

#[test]
fn test_float_operations() {
    assert!((7.5_f64.pipe(floor_div(2.0)) - 3.0).abs() < f64::EPSILON);
    assert!(((-7.5_f64).pipe(modulo(2.0)) - 0.5).abs() < f64::EPSILON);
    assert!((2.0_f64.pipe(pow(0.5)) - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[rstest]
#[case(1.0, 0.1, 9.0)]
#[case(-1.0, 0.1, -10.0)]
#[case(0.5, -0.2, -3.0)]
fn test_float_floor_div_is_exact(#[case] left: f64, #[case] right: f64, #[case] quotient: f64) {
    assert!((left.pipe(floor_div(right)) - quotient).abs() < f64::EPSILON);
    let rebuilt = left.pipe(floor_div(right)) * right + left.pipe(modulo(right));
    assert!((rebuilt - left).abs() < 1e-12);
}

#[test]
fn test_string_addition() {
    assert_eq!(String::from("ab").pipe(add("cd")), "abcd");
}

#[test]
fn test_matmul_matrix_and_vector() {
    let left = [[1_i32, 2], [3, 4]];
    let right = [[5_i32, 6], [7, 8]];
    assert_eq!(left.pipe(matmul(right)), [[19, 22], [43, 50]]);
    assert_eq!([1_i32, 2, 3].pipe(matmul([4, 5, 6])), 32);
}

// =============================================================================
// Failures surface unchanged
// =============================================================================

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_integer_true_div_by_zero_panics() {
    let divisor = std::hint::black_box(0_i32);
    let _ = 1_i32.pipe(true_div(divisor));
}

#[test]
fn test_float_true_div_by_zero_follows_ieee() {
    assert!(1.0_f64.pipe(true_div(0.0)).is_infinite());
    assert!(0.0_f64.pipe(true_div(0.0)).is_nan());
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_integer_division_by_zero_panics() {
    let divisor = std::hint::black_box(0_i32);
    let _ = 1_i32.pipe(div(divisor));
}

#[test]
#[should_panic]
fn test_floor_div_by_zero_panics() {
    let divisor = std::hint::black_box(0_i32);
    let _ = 1_i32.pipe(floor_div(divisor));
}

// =============================================================================
// In-place forms
// =============================================================================

#[test]
fn test_assign_returns_the_same_target() {
    let mut total = 10_i32;
    let returned: *const i32 = total.pipe_mut(add_assign(5));
    assert!(std::ptr::eq(returned, &total));
    assert_eq!(total, 15);
}

#[test]
fn test_assign_chain() {
    let mut total = 2_i32;
    total
        .pipe_mut(add_assign(3))
        .pipe_mut(mul_assign(4))
        .pipe_mut(sub_assign(6))
        .pipe_mut(pow_assign(2));
    assert_eq!(total, 196);
}

#[test]
fn test_std_assign_forms() {
    let mut quotient = 7_i32;
    quotient.pipe_mut(div_assign(2));
    assert_eq!(quotient, 3);

    let mut remainder = 7_i32;
    remainder.pipe_mut(rem_assign(4));
    assert_eq!(remainder, 3);
}

#[test]
fn test_floor_assign_forms() {
    let mut quotient = -7_i32;
    quotient.pipe_mut(floor_div_assign(2));
    assert_eq!(quotient, -4);

    let mut remainder = -7_i32;
    remainder.pipe_mut(modulo_assign(2));
    assert_eq!(remainder, 1);
}

#[test]
fn test_true_div_assign_returns_the_same_target() {
    let mut ratio = 2.0_f64;
    let returned: *const f64 = ratio.pipe_mut(true_div_assign(4.0));
    assert!(std::ptr::eq(returned, &ratio));
    assert!((ratio - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_string_add_assign() {
    let mut greeting = String::from("hello");
    greeting.pipe_mut(add_assign(", world"));
    assert_eq!(greeting, "hello, world");
}

#[test]
fn test_matmul_assign() {
    let mut matrix = [[1_i32, 1], [0, 1]];
    matrix.pipe_mut(matmul_assign([[1, 1], [0, 1]]));
    assert_eq!(matrix, [[1, 2], [0, 1]]);
}
