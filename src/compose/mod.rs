//! Callables, adapters, and left-to-right application.
//!
//! This module holds the machinery every binding is built from. The
//! bindings themselves live in [`crate::bindings`].
//!
//! # Overview
//!
//! - [`Callable`]: call trait that unit structs can implement generically
//! - [`first_arg`]: apply a function with the piped value as first argument
//! - [`curry_then_apply`]: build a callable from a factory, then apply it
//! - [`chain`]: compose two callables left to right
//! - [`Pipe`]: `value.pipe(op)`, `value.pipe_ref(op)`, `value.pipe_mut(op)`
//! - [`pipe!`]: `pipe!(value, op1, op2, ...)`
//!
//! # Examples
//!
//! ## Method-call style
//!
//! ```
//! use pipe_operator::prelude::*;
//!
//! let result = 2_i32.pipe(add(3)).pipe(mul(10));
//! assert_eq!(result, 50);
//! ```
//!
//! ## Macro style
//!
//! ```
//! use pipe_operator::pipe;
//! use pipe_operator::bindings::{add, mul};
//!
//! assert_eq!(pipe!(2_i32, add(3), mul(10)), 50);
//! ```
//!
//! # Laws
//!
//! - **First argument**: `first_arg(f, (a, b)).call((x,)) == f(x, a, b)`
//! - **Curry then apply**: `curry_then_apply(g, (a,)).call((x,)) == g(a)(x)`
//! - **Chain**: `chain(f, g).call((x,)) == g(f(x))`
//! - **Pipe consistency**: `pipe!(x, f, g) == x.pipe(f).pipe(g)`

mod adapters;
mod callable;
mod pipe;
mod pipe_macro;
mod utils;

pub use adapters::{Chain, CurryThenApply, FirstArg, chain, curry_then_apply, first_arg};
pub use callable::{Callable, Prepend};
pub use pipe::Pipe;
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
