//! Helper combinators.
//!
//! - [`identity`]: The identity function (I combinator), used by
//!   [`pos`](crate::bindings::pos) and as the neutral element of
//!   [`chain`](crate::compose::chain)

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `chain(identity, f)` behaves like `f`
/// - `chain(f, identity)` behaves like `f`
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::identity;
/// use pipe_operator::prelude::*;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(7_i32.pipe(identity), 7);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
