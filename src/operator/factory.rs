//! Callables produced by the factory functions.
//!
//! - [`ItemGetter`]: looks up a fixed key through [`std::ops::Index`]
//! - [`AttrGetter`]: reads a field through an optics [`Getter`]
//! - [`MethodCaller`]: invokes a fixed method with fixed trailing arguments
//!
//! These are normally built by [`function::MakeItemGetter`] and friends
//! inside [`curry_then_apply`](crate::compose::curry_then_apply), but can be
//! constructed and called directly; both routes give identical results.
//!
//! [`function::MakeItemGetter`]: super::function::MakeItemGetter

use std::ops::Index;

use crate::compose::{Callable, FirstArg, Prepend, first_arg};
use crate::optics::Getter;

/// Looks up `key` in the collection it is applied to.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pipe_operator::compose::Callable;
/// use pipe_operator::operator::ItemGetter;
///
/// let scores = HashMap::from([("x", 10)]);
/// assert_eq!(*ItemGetter::new("x").call((&scores,)), 10);
/// assert_eq!(*ItemGetter::new(1).call((&[4, 5, 6],)), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemGetter<Key> {
    key: Key,
}

impl<Key> ItemGetter<Key> {
    /// Creates a getter for `key`.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self { key }
    }

    /// Returns the key this getter looks up.
    pub const fn key(&self) -> &Key {
        &self.key
    }
}

impl<'a, Collection, Key> Callable<(&'a Collection,)> for ItemGetter<Key>
where
    Collection: Index<Key> + ?Sized,
    <Collection as Index<Key>>::Output: 'a,
{
    type Output = &'a <Collection as Index<Key>>::Output;

    #[inline]
    fn call(self, (collection,): (&'a Collection,)) -> Self::Output {
        &collection[self.key]
    }
}

/// Reads the field focused by an optics getter.
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::Callable;
/// use pipe_operator::operator::AttrGetter;
/// use pipe_operator::optics::FunctionGetter;
///
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 3, y: 4 };
/// let read_y = AttrGetter::new(FunctionGetter::new(|point: &Point| &point.y));
/// assert_eq!(*read_y.call((&point,)), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttrGetter<G> {
    getter: G,
}

impl<G> AttrGetter<G> {
    /// Wraps `getter`.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self { getter }
    }
}

impl<'a, Source, G> Callable<(&'a Source,)> for AttrGetter<G>
where
    G: Getter<Source>,
    G::Focus: 'a,
{
    type Output = &'a G::Focus;

    #[inline]
    fn call(self, (source,): (&'a Source,)) -> Self::Output {
        self.getter.get(source)
    }
}

/// Calls `method` with the receiver first, then the stored arguments.
///
/// `method` is a path such as `str::to_uppercase` or `Vec::len`; the
/// receiver type must match the method's `self` parameter, so a `&self`
/// method is applied to a reference.
///
/// # Examples
///
/// ```
/// use pipe_operator::compose::Callable;
/// use pipe_operator::operator::MethodCaller;
///
/// let shout = MethodCaller::new(str::to_uppercase, ());
/// assert_eq!(shout.call(("abc",)), "ABC");
///
/// let pad = MethodCaller::new(str::repeat, (3,));
/// assert_eq!(pad.call(("ab",)), "ababab");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MethodCaller<M, Args> {
    invocation: FirstArg<M, Args>,
}

impl<M, Args> MethodCaller<M, Args> {
    /// Stores `method` and its trailing `arguments`.
    #[must_use]
    pub const fn new(method: M, arguments: Args) -> Self {
        Self {
            invocation: first_arg(method, arguments),
        }
    }
}

impl<Receiver, M, Args> Callable<(Receiver,)> for MethodCaller<M, Args>
where
    Args: Prepend<Receiver>,
    M: Callable<<Args as Prepend<Receiver>>::Extended>,
{
    type Output = <M as Callable<<Args as Prepend<Receiver>>::Extended>>::Output;

    #[inline]
    fn call(self, (receiver,): (Receiver,)) -> Self::Output {
        self.invocation.call((receiver,))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_getter_on_vec() {
        let values = vec![10, 20, 30];
        assert_eq!(*ItemGetter::new(2).call((&values,)), 30);
        assert_eq!(ItemGetter::new(2).key(), &2);
    }

    #[test]
    fn test_item_getter_range_on_str() {
        let text = "pipeline";
        assert_eq!(ItemGetter::new(0..4).call((text,)), "pipe");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_item_getter_out_of_range_panics() {
        let values = [1, 2];
        let _ = ItemGetter::new(9).call((&values[..],));
    }

    #[test]
    fn test_method_caller_with_two_arguments() {
        let replace = MethodCaller::new(str::replace::<&str>, ("a", "o"));
        assert_eq!(replace.call(("banana",)), "bonono");
    }
}
