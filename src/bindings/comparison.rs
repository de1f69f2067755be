//! Comparison and identity bindings.

use crate::compose::{FirstArg, first_arg};
use crate::operator::function;

macro_rules! comparison_bindings {
    ($($(#[$attribute:meta])* $name:ident => $function:ident;)*) => {
        $(
            $(#[$attribute])*
            #[inline]
            #[must_use]
            pub const fn $name<Right>(right: Right) -> FirstArg<function::$function, (Right,)> {
                first_arg(function::$function, (right,))
            }
        )*
    };
}

comparison_bindings! {
    /// `value == right`.
    eq => Eq;
    /// `value != right`.
    ne => Ne;
    /// `value < right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// assert!(2_i32.pipe(lt(3)));
    /// assert!("apple".pipe(lt("banana")));
    /// ```
    lt => Lt;
    /// `value <= right`.
    le => Le;
    /// `value > right`.
    gt => Gt;
    /// `value >= right`.
    ge => Ge;
    /// Whether the piped reference and `right` point at the same value.
    ///
    /// Equal values in different places are not identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe_operator::prelude::*;
    ///
    /// let first = vec![1];
    /// let second = vec![1];
    /// assert!(first.pipe_ref(is(&first)));
    /// assert!(!first.pipe_ref(is(&second)));
    /// ```
    is => Is;
    /// Negation of [`is`].
    is_not => IsNot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;

    #[test]
    fn test_comparisons() {
        assert!(2_i32.pipe(eq(2)));
        assert!(2_i32.pipe(ne(3)));
        assert!(2_i32.pipe(le(2)));
        assert!(3_i32.pipe(gt(2)));
        assert!(3_i32.pipe(ge(3)));
    }

    #[test]
    fn test_comparison_across_types() {
        let owned = String::from("abc");
        assert!(owned.pipe(eq("abc")));
    }

    #[test]
    fn test_nan_is_unordered() {
        assert!(!f64::NAN.pipe(eq(f64::NAN)));
        assert!(!f64::NAN.pipe(lt(1.0)));
        assert!(!f64::NAN.pipe(ge(1.0)));
    }

    #[test]
    fn test_is_not_on_distinct_values() {
        let left = 1_u8;
        let right = 1_u8;
        assert!(left.pipe_ref(is_not(&right)));
    }
}
