//! Shift and bitwise bindings and their in-place forms.

use crate::compose::{FirstArg, first_arg};
use crate::operator::function;

macro_rules! bitwise_bindings {
    ($($(#[$attribute:meta])* $name:ident => $function:ident;)*) => {
        paste::paste! {
            $(
                $(#[$attribute])*
                #[inline]
                #[must_use]
                pub const fn $name<Right>(right: Right) -> FirstArg<function::$function, (Right,)> {
                    first_arg(function::$function, (right,))
                }

                #[doc = concat!("In-place [`", stringify!($name), "`]: updates `*target` and returns `target`.")]
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

bitwise_bindings! {
    /// `value << right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert_eq!(1_u32.pipe(shl(3_u32)), 8);
    /// ```
    shl => Shl;
    /// `value >> right`.
    shr => Shr;
    /// `value & right`.
    bitand => BitAnd;
    /// `value | right`.
    bitor => BitOr;
    /// `value ^ right`.
    bitxor => BitXor;
}
