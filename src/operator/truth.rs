//! Truthiness.
//!
//! A value is truthy unless it is "empty" for its kind: `false`, zero,
//! an empty string or collection, `None`, or `()`.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Types with a boolean interpretation.
///
/// # Examples
///
/// ```
/// use pipe_operator::operator::Truthy;
///
/// assert!(!0_i32.truth());
/// assert!(7_u8.truth());
/// assert!(!"".truth());
/// assert!(vec![0].truth());
/// assert!(!None::<i32>.truth());
/// ```
pub trait Truthy {
    /// Returns whether `self` is truthy.
    fn truth(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn truth(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn truth(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn truth(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_float {
    ($($type:ty),* $(,)?) => {
        $(
            impl Truthy for $type {
                // NaN compares unequal to zero, so it is truthy.
                #[inline]
                fn truth(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

macro_rules! impl_truthy_collection {
    ($([$($generics:tt)*] $type:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Truthy for $type {
                #[inline]
                fn truth(&self) -> bool {
                    !self.is_empty()
                }
            }
        )*
    };
}

impl_truthy_collection!(
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
);

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn truth(&self) -> bool {
        N != 0
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn truth(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn truth(&self) -> bool {
        (**self).truth()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    #[inline]
    fn truth(&self) -> bool {
        (**self).truth()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn truth(&self) -> bool {
        (**self).truth()
    }
}
