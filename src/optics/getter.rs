//! Getter optics for focusing on struct fields.
//!
//! A Getter is the read-only half of a lens: it borrows one field out of a
//! larger structure. Getters compose, so nested fields are reached by
//! chaining a getter for the intermediate structure with one for the field
//! inside it. They are what [`attr_getter`](crate::bindings::attr_getter)
//! is built from.
//!
//! # Laws
//!
//! 1. **Stability**: `getter.get(&source)` returns the same field every time
//!    for the same `source`.
//! 2. **Composition**: `first.compose(second).get(&source)
//!    == second.get(first.get(&source))`.
//!
//! # Examples
//!
//! ```
//! use pipe_operator::optics::{FunctionGetter, Getter};
//!
//! struct Point { x: i32, y: i32 }
//!
//! let x_getter = FunctionGetter::new(|point: &Point| &point.x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_getter.get(&point), 10);
//! ```

use std::marker::PhantomData;

/// A Getter focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
///
/// The focused type is the associated [`Getter::Focus`], so a value that
/// implements `Getter<S>` fully determines what it reads.
pub trait Getter<S: ?Sized> {
    /// The type of the focused field.
    type Focus: ?Sized;

    /// Gets a reference to the focused field.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// A reference to the focused field
    fn get<'a>(&self, source: &'a S) -> &'a Self::Focus;

    /// Composes this getter with another getter to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_operator::optics::{FunctionGetter, Getter};
    ///
    /// struct Address { street: String }
    /// struct Person { address: Address }
    ///
    /// let address = FunctionGetter::new(|person: &Person| &person.address);
    /// let street = FunctionGetter::new(|address: &Address| &address.street);
    /// let person_street = address.compose(street);
    ///
    /// let person = Person {
    ///     address: Address { street: "Main St".to_string() },
    /// };
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<G>(self, other: G) -> ComposedGetter<Self, G>
    where
        Self: Sized,
        G: Getter<Self::Focus>,
    {
        ComposedGetter::new(self, other)
    }
}

/// A getter implemented with an accessor function.
///
/// `#[derive(Getters)]` generates one of these per named field.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The accessor function type
pub struct FunctionGetter<S: ?Sized, A: ?Sized, G>
where
    G: Fn(&S) -> &A,
{
    accessor: G,
    _marker: PhantomData<fn(&S) -> &A>,
}

impl<S: ?Sized, A: ?Sized, G> FunctionGetter<S, A, G>
where
    G: Fn(&S) -> &A,
{
    /// Creates a new `FunctionGetter` from an accessor.
    ///
    /// # Arguments
    ///
    /// * `accessor` - A function that borrows the focused field from the source
    #[must_use]
    pub const fn new(accessor: G) -> Self {
        Self {
            accessor,
            _marker: PhantomData,
        }
    }
}

impl<S: ?Sized, A: ?Sized, G> Getter<S> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> &A,
{
    type Focus = A;

    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.accessor)(source)
    }
}

impl<S: ?Sized, A: ?Sized, G> Clone for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> &A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S: ?Sized, A: ?Sized, G> Copy for FunctionGetter<S, A, G> where G: Fn(&S) -> &A + Copy {}

impl<S: ?Sized, A: ?Sized, G> std::fmt::Debug for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> &A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// A getter composed of two getters.
///
/// # Type Parameters
///
/// - `G1`: The outer getter (focuses on the intermediate structure)
/// - `G2`: The inner getter (focuses on the final field)
///
/// The intermediate focus must be `'static`.
#[derive(Clone, Copy, Debug)]
pub struct ComposedGetter<G1, G2> {
    first: G1,
    second: G2,
}

impl<G1, G2> ComposedGetter<G1, G2> {
    /// Creates a new composed getter.
    #[must_use]
    pub const fn new(first: G1, second: G2) -> Self {
        Self { first, second }
    }
}

impl<S: ?Sized, G1, G2> Getter<S> for ComposedGetter<G1, G2>
where
    G1: Getter<S>,
    G1::Focus: 'static,
    G2: Getter<G1::Focus>,
{
    type Focus = G2::Focus;

    fn get<'a>(&self, source: &'a S) -> &'a Self::Focus {
        self.second.get(self.first.get(source))
    }
}
