//! # pipe-operator
//!
//! Left-to-right function application for Rust, with the standard
//! operators as pipeable values.
//!
//! ## Overview
//!
//! Every operator in the language, plus the handful of numeric and
//! container operations `std` lacks, is exposed as a function that takes
//! its non-primary arguments up front and returns a unary callable. The
//! [`Pipe`](compose::Pipe) extension trait then applies that callable to
//! the value on the left:
//!
//! - **Compose**: the [`Callable`](compose::Callable) trait, the
//!   `first_arg` and `curry_then_apply` adapters, `Pipe` and [`pipe!`]
//! - **Operator**: the traits and function objects behind each operation
//! - **Optics**: read-only [`Getter`](optics::Getter)s and
//!   `#[derive(Getters)]`
//! - **Bindings**: the public table of pipeable operations
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Getters)]`
//! - `trace`: emit a `tracing` event each time an adapter is applied
//!
//! ## Example
//!
//! ```rust
//! use pipe_operator::prelude::*;
//!
//! let total = 2_i32.pipe(add(3)).pipe(mul(4)).pipe(pow(2));
//! assert_eq!(total, 400);
//!
//! let shout = "hello".pipe(method_caller(str::to_uppercase, ())).pipe(concat(["!"]));
//! assert_eq!(shout, "HELLO!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every binding together with the traits needed to pipe them.
///
/// # Usage
///
/// ```rust
/// use pipe_operator::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bindings::*;
    pub use crate::compose::{Callable, Pipe, chain, identity};
    pub use crate::optics::Getter;
    pub use crate::pipe;
}

pub mod bindings;
pub mod compose;
pub mod operator;
pub mod optics;
