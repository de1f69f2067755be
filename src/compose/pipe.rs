//! The [`Pipe`] extension trait: `value.pipe(operation)`.

use super::callable::Callable;

/// Applies a unary [`Callable`] to the receiver, reading left to right.
///
/// Implemented for every type. `pipe` moves the receiver into the
/// operation; `pipe_ref` and `pipe_mut` hand it a shared or mutable borrow,
/// which is what lookups (`get_item`, `attr_getter`) and in-place operations
/// (`add_assign`, `concat_assign`) expect.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert_eq!(2_i32.pipe(add(3)), 5);
///
/// let mut values = vec![1];
/// values.pipe_mut(concat_assign([2, 3]));
/// assert_eq!(values, [1, 2, 3]);
///
/// let word = String::from("banana");
/// assert!(word.pipe_ref(contains("nan")));
/// ```
pub trait Pipe {
    /// Passes `self` by value to `operation`.
    #[inline]
    fn pipe<O>(self, operation: O) -> O::Output
    where
        Self: Sized,
        O: Callable<(Self,)>,
    {
        operation.call((self,))
    }

    /// Passes `&self` to `operation`.
    #[inline]
    fn pipe_ref<'a, O>(&'a self, operation: O) -> O::Output
    where
        O: Callable<(&'a Self,)>,
    {
        operation.call((self,))
    }

    /// Passes `&mut self` to `operation`.
    #[inline]
    fn pipe_mut<'a, O>(&'a mut self, operation: O) -> O::Output
    where
        O: Callable<(&'a mut Self,)>,
    {
        operation.call((self,))
    }
}

impl<T: ?Sized> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_closure() {
        assert_eq!(21_i32.pipe(|value: i32| value * 2), 42);
    }

    #[test]
    fn test_pipe_ref_on_unsized_receiver() {
        let text: &str = "hello";
        assert_eq!(text.pipe_ref(|borrowed: &str| borrowed.len()), 5);
        assert_eq!(text.pipe(str::len), 5);
    }

    #[test]
    fn test_pipe_mut_observes_mutation() {
        let mut counter = 1_u8;
        counter.pipe_mut(|target: &mut u8| *target += 1);
        assert_eq!(counter, 2);
    }
}
