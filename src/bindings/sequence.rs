//! Sequence, mapping and item-access bindings.

use crate::compose::{FirstArg, first_arg};
use crate::operator::function;

/// The piped collection extended with `items`.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert_eq!(vec![1].pipe(concat([2, 3])), [1, 2, 3]);
/// assert_eq!(String::from("ab").pipe(concat(["cd", "ef"])), "abcdef");
/// ```
#[inline]
#[must_use]
pub const fn concat<Items>(items: Items) -> FirstArg<function::Concat, (Items,)> {
    first_arg(function::Concat, (items,))
}

/// In-place [`concat`]: extends `*target` and returns `target`.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// let mut values = vec![1];
/// let returned: *const Vec<i32> = values.pipe_mut(concat_assign([2, 3]));
/// assert!(std::ptr::eq(returned, &values));
/// assert_eq!(values, [1, 2, 3]);
/// ```
#[inline]
#[must_use]
pub const fn concat_assign<Items>(items: Items) -> FirstArg<function::ConcatAssign, (Items,)> {
    first_arg(function::ConcatAssign, (items,))
}

/// Whether `needle` occurs in the piped collection.
///
/// Strings match substrings or `char`s, sequences match elements by
/// reference, maps match keys.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert!("banana".pipe(contains("na")));
/// assert!(vec![1, 2].pipe_ref(contains(&2)));
/// ```
#[inline]
#[must_use]
pub const fn contains<Needle>(needle: Needle) -> FirstArg<function::Contains, (Needle,)> {
    first_arg(function::Contains, (needle,))
}

/// How many times `needle` occurs in the piped collection.
///
/// A `&str` needle counts non-overlapping substrings, so
/// `"banana"` holds `"na"` twice.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// assert_eq!("banana".pipe(count_of("na")), 2);
/// assert_eq!("aaaa".pipe(count_of("aa")), 2);
/// ```
#[inline]
#[must_use]
pub const fn count_of<Needle>(needle: Needle) -> FirstArg<function::CountOf, (Needle,)> {
    first_arg(function::CountOf, (needle,))
}

/// Position of the first `needle` in the piped collection, or `None`.
#[inline]
#[must_use]
pub const fn index_of<Needle>(needle: Needle) -> FirstArg<function::IndexOf, (Needle,)> {
    first_arg(function::IndexOf, (needle,))
}

/// Estimated length of the piped iterable, or `default` when unknown.
///
/// # Examples
///
/// ```
/// use pipe_operator::prelude::*;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(values.pipe_ref(length_hint(0)), 3);
/// assert_eq!(values.iter().filter(|value| **value > 1).pipe(length_hint(7)), 7);
/// ```
#[inline]
#[must_use]
pub const fn length_hint(default: usize) -> FirstArg<function::LengthHint, (usize,)> {
    first_arg(function::LengthHint, (default,))
}

/// `&collection[key]`.
///
/// A missing key or out-of-range index panics as `Index` does.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pipe_operator::prelude::*;
///
/// let data = HashMap::from([("x", 1)]);
/// assert_eq!(*data.pipe_ref(get_item("x")), 1);
/// ```
#[inline]
#[must_use]
pub const fn get_item<Key>(key: Key) -> FirstArg<function::GetItem, (Key,)> {
    first_arg(function::GetItem, (key,))
}

/// Stores `value` under `key`, returning the value it replaced.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pipe_operator::prelude::*;
///
/// let mut data = HashMap::from([("x", 1)]);
/// assert_eq!(data.pipe_mut(set_item("y", 2)), None);
/// assert_eq!(data["y"], 2);
/// ```
#[inline]
#[must_use]
pub const fn set_item<Key, Value>(
    key: Key,
    value: Value,
) -> FirstArg<function::SetItem, (Key, Value)> {
    first_arg(function::SetItem, (key, value))
}

/// Removes the item under `key`, returning what the collection's removal
/// returns.
#[inline]
#[must_use]
pub const fn delete_item<Key>(key: Key) -> FirstArg<function::DeleteItem, (Key,)> {
    first_arg(function::DeleteItem, (key,))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;
    use std::collections::BTreeMap;

    #[test]
    fn test_count_and_index_of_string() {
        assert_eq!("banana".pipe(count_of('a')), 3);
        assert_eq!("banana".pipe(index_of('a')), Some(1));
        assert_eq!("banana".pipe(index_of('z')), None);
    }

    #[test]
    fn test_delete_item_from_map() {
        let mut data = BTreeMap::from([("x", 1), ("y", 2)]);
        assert_eq!(data.pipe_mut(delete_item("x")), Some(1));
        assert_eq!(data.pipe_mut(delete_item("x")), None);
        assert_eq!(data.len(), 1);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_delete_item_out_of_range_panics() {
        let mut values = vec![1];
        let _ = values.pipe_mut(delete_item(3_usize));
    }
}
