//! The [`Callable`] trait and argument-tuple plumbing.
//!
//! Closures in Rust are monomorphic: a closure built by `add(3)` cannot be
//! generic over the type of the value it is later applied to. `Callable`
//! is the call interface used throughout this crate instead. It is
//! implemented for every [`FnOnce`] of arity zero to four, and unit structs
//! (see [`crate::operator::function`]) implement it generically over their
//! argument types, which is what lets a single binding accept any operand
//! type the underlying operator supports.
//!
//! Arguments are passed as a tuple, mirroring the `Fn*` family.

/// A callable taking its arguments as a tuple.
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::Callable;
///
/// let add = |left: i32, right: i32| left + right;
/// assert_eq!(add.call((2, 3)), 5);
/// ```
pub trait Callable<Args> {
    /// The result of the call.
    type Output;

    /// Invokes the callable, consuming it.
    fn call(self, arguments: Args) -> Self::Output;
}

impl<F, R> Callable<()> for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline]
    fn call(self, (): ()) -> R {
        self()
    }
}

impl<F, A, R> Callable<(A,)> for F
where
    F: FnOnce(A) -> R,
{
    type Output = R;

    #[inline]
    fn call(self, (first,): (A,)) -> R {
        self(first)
    }
}

impl<F, A, B, R> Callable<(A, B)> for F
where
    F: FnOnce(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn call(self, (first, second): (A, B)) -> R {
        self(first, second)
    }
}

impl<F, A, B, C, R> Callable<(A, B, C)> for F
where
    F: FnOnce(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn call(self, (first, second, third): (A, B, C)) -> R {
        self(first, second, third)
    }
}

impl<F, A, B, C, D, R> Callable<(A, B, C, D)> for F
where
    F: FnOnce(A, B, C, D) -> R,
{
    type Output = R;

    #[inline]
    fn call(self, (first, second, third, fourth): (A, B, C, D)) -> R {
        self(first, second, third, fourth)
    }
}

/// Argument tuples that can have a value inserted in front.
///
/// Implemented for tuples of arity zero to three, so the extended tuple
/// always fits a [`Callable`] of arity one to four.
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::Prepend;
///
/// assert_eq!((2, 3).prepend(1), (1, 2, 3));
/// assert_eq!(().prepend("only"), ("only",));
/// ```
pub trait Prepend<T> {
    /// The tuple with `T` in first position.
    type Extended;

    /// Returns the tuple with `value` inserted in front.
    fn prepend(self, value: T) -> Self::Extended;
}

impl<T> Prepend<T> for () {
    type Extended = (T,);

    #[inline]
    fn prepend(self, value: T) -> (T,) {
        (value,)
    }
}

impl<T, A> Prepend<T> for (A,) {
    type Extended = (T, A);

    #[inline]
    fn prepend(self, value: T) -> (T, A) {
        (value, self.0)
    }
}

impl<T, A, B> Prepend<T> for (A, B) {
    type Extended = (T, A, B);

    #[inline]
    fn prepend(self, value: T) -> (T, A, B) {
        (value, self.0, self.1)
    }
}

impl<T, A, B, C> Prepend<T> for (A, B, C) {
    type Extended = (T, A, B, C);

    #[inline]
    fn prepend(self, value: T) -> (T, A, B, C) {
        (value, self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_nullary_closure() {
        let produce = || 42;
        assert_eq!(produce.call(()), 42);
    }

    #[test]
    fn test_call_fn_item_with_four_arguments() {
        fn sum(first: i32, second: i32, third: i32, fourth: i32) -> i32 {
            first + second + third + fourth
        }
        assert_eq!(sum.call((1, 2, 3, 4)), 10);
    }

    #[test]
    fn test_call_consumes_captured_environment() {
        let owned = String::from("moved");
        let consume = move |suffix: &str| owned + suffix;
        assert_eq!(consume.call(("!",)), "moved!");
    }

    #[test]
    fn test_prepend_keeps_order() {
        assert_eq!((2,).prepend(1), (1, 2));
        assert_eq!(("b", 'c', 3.0).prepend(1), (1, "b", 'c', 3.0));
    }
}
