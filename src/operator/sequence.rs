//! Sequence and mapping operator traits.
//!
//! Membership, counting, searching, item assignment and item removal over
//! the standard collections. Each impl forwards to the collection's own
//! method (`contains`, `contains_key`, `insert`, `remove`, ...), so
//! out-of-range indices panic exactly where the std method panics.
//!
//! Lookups take the collection by `&self` and have blanket impls for
//! references, so a borrowed collection can be piped by value.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Membership test.
///
/// Strings test for a substring or a `char`; sequences for an element;
/// maps for a key; sets for a member.
pub trait Contains<Needle> {
    /// Returns whether `needle` occurs in `self`.
    fn contains(&self, needle: Needle) -> bool;
}

/// Number of occurrences.
///
/// Sequences count equal elements; strings count a `char`, or
/// non-overlapping occurrences of a substring.
pub trait CountOf<Needle> {
    /// Returns how many times `needle` occurs in `self`.
    fn count_of(&self, needle: Needle) -> usize;
}

/// Position of the first occurrence.
///
/// Positions are in iteration order: element index for sequences and
/// `char` index (not byte offset) for strings.
pub trait IndexOf<Needle> {
    /// Returns the position of the first `needle`, or `None`.
    fn index_of(&self, needle: Needle) -> Option<usize>;
}

/// Item assignment.
pub trait SetItem<Key, Value> {
    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Sequences panic when `key` is out of range and always return
    /// `Some`; maps insert and return the previous value, if any.
    fn set_item(&mut self, key: Key, value: Value) -> Option<Value>;
}

/// Item removal.
pub trait DeleteItem<Key> {
    /// What the underlying removal returns.
    type Removed;

    /// Removes the item under `key`.
    fn delete_item(&mut self, key: Key) -> Self::Removed;
}

// ---------------------------------------------------------------------------
// Contains
// ---------------------------------------------------------------------------

impl Contains<&str> for str {
    #[inline]
    fn contains(&self, needle: &str) -> bool {
        <str>::contains(self, needle)
    }
}

impl Contains<char> for str {
    #[inline]
    fn contains(&self, needle: char) -> bool {
        <str>::contains(self, needle)
    }
}

impl<N> Contains<N> for String
where
    str: Contains<N>,
{
    #[inline]
    fn contains(&self, needle: N) -> bool {
        Contains::contains(self.as_str(), needle)
    }
}

impl<T: PartialEq> Contains<&T> for [T] {
    #[inline]
    fn contains(&self, needle: &T) -> bool {
        <[T]>::contains(self, needle)
    }
}

impl<T: PartialEq> Contains<&T> for VecDeque<T> {
    #[inline]
    fn contains(&self, needle: &T) -> bool {
        Self::contains(self, needle)
    }
}

impl<K, V, S, Q> Contains<&Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, needle: &Q) -> bool {
        self.contains_key(needle)
    }
}

impl<T, S, Q> Contains<&Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, needle: &Q) -> bool {
        Self::contains(self, needle)
    }
}

impl<K, V, Q> Contains<&Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains(&self, needle: &Q) -> bool {
        self.contains_key(needle)
    }
}

impl<T, Q> Contains<&Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains(&self, needle: &Q) -> bool {
        Self::contains(self, needle)
    }
}

// ---------------------------------------------------------------------------
// CountOf / IndexOf
// ---------------------------------------------------------------------------

impl CountOf<char> for str {
    #[inline]
    fn count_of(&self, needle: char) -> usize {
        self.chars().filter(|character| *character == needle).count()
    }
}

impl CountOf<&str> for str {
    #[inline]
    fn count_of(&self, needle: &str) -> usize {
        self.matches(needle).count()
    }
}

impl IndexOf<char> for str {
    #[inline]
    fn index_of(&self, needle: char) -> Option<usize> {
        self.chars().position(|character| character == needle)
    }
}

impl<T: PartialEq> CountOf<&T> for [T] {
    #[inline]
    fn count_of(&self, needle: &T) -> usize {
        self.iter().filter(|element| *element == needle).count()
    }
}

impl<T: PartialEq> IndexOf<&T> for [T] {
    #[inline]
    fn index_of(&self, needle: &T) -> Option<usize> {
        self.iter().position(|element| element == needle)
    }
}

impl<T: PartialEq> CountOf<&T> for VecDeque<T> {
    #[inline]
    fn count_of(&self, needle: &T) -> usize {
        self.iter().filter(|element| *element == needle).count()
    }
}

impl<T: PartialEq> IndexOf<&T> for VecDeque<T> {
    #[inline]
    fn index_of(&self, needle: &T) -> Option<usize> {
        self.iter().position(|element| element == needle)
    }
}

macro_rules! forward_lookups_to {
    ($target:ty => $([$($generics:tt)*] $type:ty),* $(,)?) => {
        $(
            impl<N, $($generics)*> Contains<N> for $type
            where
                $target: Contains<N>,
            {
                #[inline]
                fn contains(&self, needle: N) -> bool {
                    Contains::contains(self.as_slice(), needle)
                }
            }

            impl<N, $($generics)*> CountOf<N> for $type
            where
                $target: CountOf<N>,
            {
                #[inline]
                fn count_of(&self, needle: N) -> usize {
                    CountOf::count_of(self.as_slice(), needle)
                }
            }

            impl<N, $($generics)*> IndexOf<N> for $type
            where
                $target: IndexOf<N>,
            {
                #[inline]
                fn index_of(&self, needle: N) -> Option<usize> {
                    IndexOf::index_of(self.as_slice(), needle)
                }
            }
        )*
    };
}

forward_lookups_to!([T] => [T] Vec<T>, [T, const M: usize] [T; M]);

impl<N> CountOf<N> for String
where
    str: CountOf<N>,
{
    #[inline]
    fn count_of(&self, needle: N) -> usize {
        CountOf::count_of(self.as_str(), needle)
    }
}

impl<N> IndexOf<N> for String
where
    str: IndexOf<N>,
{
    #[inline]
    fn index_of(&self, needle: N) -> Option<usize> {
        IndexOf::index_of(self.as_str(), needle)
    }
}

macro_rules! forward_lookups_through_reference {
    ($($reference:ty),* $(,)?) => {
        $(
            impl<C: Contains<N> + ?Sized, N> Contains<N> for $reference {
                #[inline]
                fn contains(&self, needle: N) -> bool {
                    (**self).contains(needle)
                }
            }

            impl<C: CountOf<N> + ?Sized, N> CountOf<N> for $reference {
                #[inline]
                fn count_of(&self, needle: N) -> usize {
                    (**self).count_of(needle)
                }
            }

            impl<C: IndexOf<N> + ?Sized, N> IndexOf<N> for $reference {
                #[inline]
                fn index_of(&self, needle: N) -> Option<usize> {
                    (**self).index_of(needle)
                }
            }
        )*
    };
}

forward_lookups_through_reference!(&C, &mut C);

// ---------------------------------------------------------------------------
// SetItem / DeleteItem
// ---------------------------------------------------------------------------

impl<T> SetItem<usize, T> for [T] {
    #[inline]
    fn set_item(&mut self, key: usize, value: T) -> Option<T> {
        Some(std::mem::replace(&mut self[key], value))
    }
}

impl<T> SetItem<usize, T> for Vec<T> {
    #[inline]
    fn set_item(&mut self, key: usize, value: T) -> Option<T> {
        self.as_mut_slice().set_item(key, value)
    }
}

impl<T, const N: usize> SetItem<usize, T> for [T; N] {
    #[inline]
    fn set_item(&mut self, key: usize, value: T) -> Option<T> {
        self.as_mut_slice().set_item(key, value)
    }
}

impl<T> SetItem<usize, T> for VecDeque<T> {
    #[inline]
    fn set_item(&mut self, key: usize, value: T) -> Option<T> {
        Some(std::mem::replace(&mut self[key], value))
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> SetItem<K, V> for HashMap<K, V, S> {
    #[inline]
    fn set_item(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord, V> SetItem<K, V> for BTreeMap<K, V> {
    #[inline]
    fn set_item(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<T> DeleteItem<usize> for Vec<T> {
    type Removed = T;

    #[inline]
    fn delete_item(&mut self, key: usize) -> T {
        self.remove(key)
    }
}

impl<T> DeleteItem<usize> for VecDeque<T> {
    type Removed = Option<T>;

    #[inline]
    fn delete_item(&mut self, key: usize) -> Option<T> {
        self.remove(key)
    }
}

impl DeleteItem<usize> for String {
    type Removed = char;

    /// `key` is a byte offset; panics unless it lies on a `char` boundary.
    #[inline]
    fn delete_item(&mut self, key: usize) -> char {
        self.remove(key)
    }
}

impl<K, V, S, Q> DeleteItem<&Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Removed = Option<V>;

    #[inline]
    fn delete_item(&mut self, key: &Q) -> Option<V> {
        self.remove(key)
    }
}

impl<T, S, Q> DeleteItem<&Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Removed = bool;

    #[inline]
    fn delete_item(&mut self, key: &Q) -> bool {
        self.remove(key)
    }
}

impl<K, V, Q> DeleteItem<&Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Removed = Option<V>;

    #[inline]
    fn delete_item(&mut self, key: &Q) -> Option<V> {
        self.remove(key)
    }
}

impl<T, Q> DeleteItem<&Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Removed = bool;

    #[inline]
    fn delete_item(&mut self, key: &Q) -> bool {
        self.remove(key)
    }
}
