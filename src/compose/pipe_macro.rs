//! The `pipe!` macro for left-to-right application of several operations.
//!
//! This module provides the [`pipe!`] macro which threads a value through
//! a series of [`Callable`](crate::compose::Callable)s.

/// Pipes a value through a series of operations from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `x.pipe(f).pipe(g).pipe(h)`.
///
/// Any [`Callable`](crate::compose::Callable) taking one argument can
/// appear in the chain: the bindings of this crate, closures, and fn items.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Examples
///
/// ## Bindings
///
/// ```
/// use pipe_operator::pipe;
/// use pipe_operator::bindings::{add, mul, pow};
///
/// // (2 + 3) * 4 = 20, then 20^2 = 400
/// let result = pipe!(2_i64, add(3), mul(4), pow(2));
/// assert_eq!(result, 400);
/// ```
///
/// ## Mixing bindings and plain functions
///
/// ```
/// use pipe_operator::pipe;
/// use pipe_operator::bindings::{modulo, true_div};
///
/// fn describe(value: f64) -> String { format!("{value:.2}") }
///
/// let result = pipe!(-7_i32, modulo(3), true_div(4), describe);
/// assert_eq!(result, "0.50");
/// ```
///
/// ## Type conversion through the chain
///
/// ```
/// use pipe_operator::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single operation: apply it
    ($value:expr, $operation:expr $(,)?) => {
        $crate::compose::Callable::call($operation, ($value,))
    };

    // Multiple operations: apply left to right recursively
    ($value:expr, $operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::pipe!(
            $crate::compose::Callable::call($operation, ($value,)),
            $($remaining_operations),+
        )
    };
}
