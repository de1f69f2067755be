//! Derive macros for pipe-operator getters.
//!
//! # Available Derive Macros
//!
//! - [`Getters`]: Generates a read-only getter for each struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use pipe_operator::optics::Getters;
//! use pipe_operator::prelude::*;
//!
//! #[derive(Getters)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_getter() -> impl Getter<Point, Focus = i32>
//! // - Point::y_getter() -> impl Getter<Point, Focus = i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*point.pipe_ref(attr_getter(Point::x_getter())), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod getters;

use proc_macro::TokenStream;

/// Derive macro for generating Getter implementations for struct fields.
///
/// This macro generates a method for each field in the struct that returns
/// a getter focusing on that field. The method name follows the pattern
/// `{field_name}_getter()`.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_getter() -> impl Getter<StructName, Focus = T> + Clone + Copy { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the getter method on the concrete
/// type:
///
/// ```rust,ignore
/// #[derive(Getters)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let getter = Container::<i32>::value_getter();
/// assert_eq!(*getter.get(&container), 42);
/// ```
#[proc_macro_derive(Getters)]
pub fn derive_getters(input: TokenStream) -> TokenStream {
    getters::derive_getters_impl(input)
}
