//! The two generic adapters every binding is built from.
//!
//! - [`FirstArg`]: applies a function with the piped value as its first
//!   argument, followed by the arguments captured at construction.
//! - [`CurryThenApply`]: calls a factory with the captured arguments, then
//!   applies the callable it returns to the piped value.
//!
//! Both are immutable once built. They never inspect, catch or translate
//! what the wrapped operation returns or panics with.

use super::callable::{Callable, Prepend};

/// Applies `function` with the piped value prepended to `arguments`.
///
/// Built by [`first_arg`].
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::{Callable, first_arg};
///
/// let clamp = first_arg(|value: i32, low: i32, high: i32| value.clamp(low, high), (0, 10));
/// assert_eq!(clamp.call((42,)), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FirstArg<F, Args> {
    function: F,
    arguments: Args,
}

impl<F, Args> FirstArg<F, Args> {
    /// Returns the wrapped function and the captured arguments.
    pub fn into_parts(self) -> (F, Args) {
        (self.function, self.arguments)
    }
}

/// Builds a [`FirstArg`] adapter.
///
/// `arguments` is a tuple of arity zero to three; applying the result to
/// `value` calls `function(value, arguments...)`.
#[inline]
#[must_use]
pub const fn first_arg<F, Args>(function: F, arguments: Args) -> FirstArg<F, Args> {
    FirstArg {
        function,
        arguments,
    }
}

impl<T, F, Args> Callable<(T,)> for FirstArg<F, Args>
where
    Args: Prepend<T>,
    F: Callable<<Args as Prepend<T>>::Extended>,
{
    type Output = <F as Callable<<Args as Prepend<T>>::Extended>>::Output;

    #[inline]
    fn call(self, (value,): (T,)) -> Self::Output {
        #[cfg(feature = "trace")]
        tracing::trace!(
            operation = std::any::type_name::<F>(),
            operand = std::any::type_name::<T>(),
            "first_arg"
        );
        self.function.call(self.arguments.prepend(value))
    }
}

/// Builds a callable from `factory` and `arguments`, then applies it to the
/// piped value.
///
/// Built by [`curry_then_apply`].
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::{Callable, curry_then_apply};
///
/// let scale_by = |factor: i32| move |value: i32| value * factor;
/// let triple = curry_then_apply(scale_by, (3,));
/// assert_eq!(triple.call((7,)), 21);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CurryThenApply<Factory, Args> {
    factory: Factory,
    arguments: Args,
}

/// Builds a [`CurryThenApply`] adapter.
///
/// Applying the result to `value` calls `factory(arguments...)(value)`.
/// The factory runs at application time, not here.
#[inline]
#[must_use]
pub const fn curry_then_apply<Factory, Args>(
    factory: Factory,
    arguments: Args,
) -> CurryThenApply<Factory, Args> {
    CurryThenApply { factory, arguments }
}

impl<T, Factory, Args> Callable<(T,)> for CurryThenApply<Factory, Args>
where
    Factory: Callable<Args>,
    Factory::Output: Callable<(T,)>,
{
    type Output = <Factory::Output as Callable<(T,)>>::Output;

    #[inline]
    fn call(self, (value,): (T,)) -> Self::Output {
        #[cfg(feature = "trace")]
        tracing::trace!(
            factory = std::any::type_name::<Factory>(),
            operand = std::any::type_name::<T>(),
            "curry_then_apply"
        );
        self.factory.call(self.arguments).call((value,))
    }
}

/// Left-to-right composition of two unary callables.
///
/// `chain(first, second)` applied to `value` is `second(first(value))`,
/// the reusable counterpart of [`pipe!`](crate::pipe).
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::{Callable, chain};
/// use pipe_operator::bindings::{add, mul};
///
/// let double_then_increment = chain(mul(2), add(1));
/// assert_eq!(double_then_increment.call((5_i32,)), 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chain<First, Second> {
    first: First,
    second: Second,
}

/// Builds a [`Chain`] running `first`, then `second`.
#[inline]
#[must_use]
pub const fn chain<First, Second>(first: First, second: Second) -> Chain<First, Second> {
    Chain { first, second }
}

impl<T, First, Second> Callable<(T,)> for Chain<First, Second>
where
    First: Callable<(T,)>,
    Second: Callable<(First::Output,)>,
{
    type Output = Second::Output;

    #[inline]
    fn call(self, (value,): (T,)) -> Self::Output {
        self.second.call((self.first.call((value,)),))
    }
}
