//! Unary bindings. These take no construction arguments.

use crate::compose::{FirstArg, first_arg};
use crate::operator::function;

macro_rules! unary_bindings {
    ($($(#[$attribute:meta])* $name:ident => $function:ident;)*) => {
        $(
            $(#[$attribute])*
            #[inline]
            #[must_use]
            pub const fn $name() -> FirstArg<function::$function, ()> {
                first_arg(function::$function, ())
            }
        )*
    };
}

unary_bindings! {
    /// `-value`.
    neg => Neg;
    /// `+value`: a numeric value, unchanged.
    pos => Pos;
    /// The absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!((-7_i32).pipe(abs()), 7);
    /// assert_eq!((-2.5_f64).pipe(abs()), 2.5);
    /// ```
    abs => Abs;
    /// `!value`: the bitwise complement of an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!(5_i32.pipe(invert()), -6);
    /// assert_eq!(0b1010_u8.pipe(invert()), 0b1111_0101);
    /// ```
    invert => Invert;
    /// Logical negation of the value's truthiness.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert!(false.pipe(not()));
    /// assert!(!true.pipe(not()));
    /// assert!(Vec::<i32>::new().pipe(not()));
    /// ```
    not => Not;
    /// The value as a `usize` index, or the conversion error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!(10_i64.pipe(index()), Ok(10));
    /// assert!((-1_i64).pipe(index()).is_err());
    /// ```
    index => Index;
    /// Whether the value is truthy, see [`Truthy`](crate::operator::Truthy).
    truth => Truth;
}
