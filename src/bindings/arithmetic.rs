//! Arithmetic bindings and their in-place forms.

use crate::compose::{FirstArg, first_arg};
use crate::operator::function;

macro_rules! arithmetic_bindings {
    ($($(#[$attribute:meta])* $name:ident => $function:ident;)*) => {
        paste::paste! {
            $(
                $(#[$attribute])*
                #[inline]
                #[must_use]
                pub const fn $name<Right>(right: Right) -> FirstArg<function::$function, (Right,)> {
                    first_arg(function::$function, (right,))
                }

                #[doc = concat!(
                    "In-place [`", stringify!($name), "`]: updates `*target` and returns `target`.\n\n",
                    "Apply it with [`Pipe::pipe_mut`](crate::compose::Pipe::pipe_mut) ",
                    "or to a `&mut` value."
                )]
                #[inline]
                #[must_use]
                pub const fn [<$name _assign>]<Right>(
                    right: Right,
                ) -> FirstArg<function::[<$function Assign>], (Right,)> {
                    first_arg(function::[<$function Assign>], (right,))
                }
            )*
        }
    };
}

arithmetic_bindings! {
    /// `value + right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!(2_i32.pipe(add(3)), 5);
    /// assert_eq!(String::from("pipe").pipe(add("line")), "pipeline");
    /// ```
    add => Add;
    /// `value - right`.
    sub => Sub;
    /// `value * right`.
    mul => Mul;
    /// `value / right`.
    ///
    /// Integer division truncates toward zero and panics when `right` is
    /// zero, exactly like the `/` operator.
    ///
    /// ```should_panic
    /// use pipe_operator::prelude::*;
    ///
    /// let zero = 0_i32;
    /// let _ = 1_i32.pipe(div(zero));
    /// ```
    div => Div;
    /// `value % right`, with the sign of `value`.
    rem => Rem;
    /// `value.floor_div(right)`: the quotient rounded toward negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!(7_i32.pipe(floor_div(2)), 3);
    /// assert_eq!((-7_i32).pipe(floor_div(2)), -4);
    /// ```
    floor_div => FloorDiv;
    /// `value.floor_mod(right)`: the remainder with the sign of `right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!((-7_i32).pipe(modulo(3)), 2);
    /// assert_eq!((-7_i32).pipe(rem(3)), -1);
    /// ```
    modulo => Modulo;
    /// `value.pow(right)`.
    ///
    /// Integers take a `u32` exponent, floats an `i32` or a float.
    pow => Pow;
    /// Matrix product of fixed-size arrays.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// let rotated = [[0_i32, -1], [1, 0]].pipe(matmul([[1], [0]]));
    /// assert_eq!(rotated, [[0], [1]]);
    /// ```
    matmul => MatMul;
}

/// `value.true_div(right)`: a floating point quotient even for integers.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert_eq!(7_i32.pipe(true_div(2)), 3.5);
/// ```
#[inline]
#[must_use]
pub const fn true_div<Right>(right: Right) -> FirstArg<function::TrueDiv, (Right,)> {
    first_arg(function::TrueDiv, (right,))
}

/// In-place [`true_div`]: updates `*target` and returns `target`.
///
/// Only floats qualify, since the quotient of two integers is an `f64`.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// let mut ratio = 2.0_f64;
/// ratio.pipe_mut(true_div_assign(4.0));
/// assert_eq!(ratio, 0.5);
/// ```
#[inline]
#[must_use]
pub const fn true_div_assign<Right>(
    right: Right,
) -> FirstArg<function::TrueDivAssign, (Right,)> {
    first_arg(function::TrueDivAssign, (right,))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;
    use rstest::rstest;

    #[rstest]
    #[case(10, 3, 13, 7, 30, 3, 1)]
    #[case(-10, 3, -7, -13, -30, -3, -1)]
    #[case(0, 5, 5, -5, 0, 0, 0)]
    fn test_integer_arithmetic_matches_operators(
        #[case] value: i64,
        #[case] right: i64,
        #[case] sum: i64,
        #[case] difference: i64,
        #[case] product: i64,
        #[case] quotient: i64,
        #[case] remainder: i64,
    ) {
        assert_eq!(value.pipe(add(right)), sum);
        assert_eq!(value.pipe(sub(right)), difference);
        assert_eq!(value.pipe(mul(right)), product);
        assert_eq!(value.pipe(div(right)), quotient);
        assert_eq!(value.pipe(rem(right)), remainder);
    }

    #[test]
    fn test_assign_returns_same_reference() {
        let mut value = 4_u32;
        let address: *const u32 = &value;
        let returned: *const u32 = value.pipe_mut(mul_assign(5));
        assert_eq!(returned, address);
        assert_eq!(value, 20);
    }

    #[test]
    fn test_crate_assign_forms() {
        let mut value = -7_i32;
        value.pipe_mut(floor_div_assign(2));
        assert_eq!(value, -4);

        value.pipe_mut(modulo_assign(3));
        assert_eq!(value, 2);

        value.pipe_mut(pow_assign(10));
        assert_eq!(value, 1024);
    }

    #[test]
    fn test_float_pow_with_integer_and_float_exponents() {
        assert!((2.0_f64.pipe(pow(3)) - 8.0).abs() < f64::EPSILON);
        assert!((4.0_f64.pipe(pow(0.5)) - 2.0).abs() < f64::EPSILON);
    }
}
