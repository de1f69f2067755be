//! Factory bindings: build a callable, then apply it.
//!
//! Each of these defers to [`curry_then_apply`]: at application time the
//! factory in [`function`] builds an [`ItemGetter`], [`AttrGetter`] or
//! [`MethodCaller`] from the construction arguments and applies it to the
//! piped value. The result is identical to building that callable by hand.
//!
//! [`ItemGetter`]: crate::operator::ItemGetter
//! [`AttrGetter`]: crate::operator::AttrGetter
//! [`MethodCaller`]: crate::operator::MethodCaller

use crate::compose::{CurryThenApply, curry_then_apply};
use crate::operator::function;

/// Looks `key` up in the piped collection.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pipe_operator::prelude::*;
///
/// let data = HashMap::from([("x", 10)]);
/// assert_eq!(*data.pipe_ref(item_getter("x")), 10);
/// ```
#[inline]
#[must_use]
pub const fn item_getter<Key>(key: Key) -> CurryThenApply<function::MakeItemGetter, (Key,)> {
    curry_then_apply(function::MakeItemGetter, (key,))
}

/// Reads the field `getter` focuses on from the piped value.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
/// use pipe_operator::optics::FunctionGetter;
///
/// struct Config { retries: u8 }
///
/// let config = Config { retries: 3 };
/// let retries = config.pipe_ref(attr_getter(FunctionGetter::new(|config: &Config| &config.retries)));
/// assert_eq!(*retries, 3);
/// ```
#[inline]
#[must_use]
pub const fn attr_getter<G>(getter: G) -> CurryThenApply<function::MakeAttrGetter, (G,)> {
    curry_then_apply(function::MakeAttrGetter, (getter,))
}

/// Calls `method` on the piped value with `arguments` after it.
///
/// `arguments` is a tuple of up to three values.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert_eq!("abc".pipe(method_caller(str::to_uppercase, ())), "ABC");
/// assert_eq!("a-b-c".pipe(method_caller(str::splitn::<char>, (2, '-'))).last(), Some("b-c"));
/// ```
#[inline]
#[must_use]
pub const fn method_caller<M, Args>(
    method: M,
    arguments: Args,
) -> CurryThenApply<function::MakeMethodCaller, (M, Args)> {
    curry_then_apply(function::MakeMethodCaller, (method, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Callable, Pipe};
    use crate::operator::{ItemGetter, MethodCaller};

    #[test]
    fn test_item_getter_matches_manual_construction() {
        let values = [5, 6, 7];
        assert_eq!(
            values.pipe_ref(item_getter(1)),
            ItemGetter::new(1).call((&values,))
        );
    }

    #[test]
    fn test_method_caller_matches_manual_construction() {
        let text = "  padded  ";
        assert_eq!(
            text.pipe(method_caller(str::trim, ())),
            MethodCaller::new(str::trim, ()).call((text,))
        );
    }

    #[test]
    fn test_method_caller_on_mutable_receiver() {
        let mut values = vec![3, 1, 2];
        values.pipe_mut(method_caller(Vec::push, (4,)));
        assert_eq!(values, [3, 1, 2, 4]);
    }
}
