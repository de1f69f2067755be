//! The operations the bindings delegate to.
//!
//! This is the crate's counterpart of a standard operator library: the
//! callable form of every arithmetic, comparison, bitwise, sequence and
//! lookup operation, plus the few operator traits std does not define.
//!
//! # Layout
//!
//! - [`function`]: one unit struct per operation, implementing
//!   [`Callable`](crate::compose::Callable) over any operand types the
//!   underlying operator supports
//! - Operator traits for operations without a `std::ops` trait:
//!   [`Abs`], [`Pow`], [`TrueDiv`], [`FloorDiv`], [`MatMul`],
//!   [`MatMulAssign`], [`Truthy`], [`Contains`], [`CountOf`], [`IndexOf`],
//!   [`SetItem`], [`DeleteItem`]
//! - Factory products: [`ItemGetter`], [`AttrGetter`], [`MethodCaller`]
//!
//! # Failures
//!
//! Nothing here catches or translates a failure. Integer division by zero,
//! out-of-range indices and missing keys under `Index` panic with the
//! standard library's own message; lookups that return `Option` or
//! `Result` in std return them here too.

mod arithmetic;
mod factory;
pub mod function;
mod sequence;
mod truth;

pub use arithmetic::{Abs, FloorDiv, MatMul, MatMulAssign, Pow, Scalar, TrueDiv};
pub use factory::{AttrGetter, ItemGetter, MethodCaller};
pub use sequence::{Contains, CountOf, DeleteItem, IndexOf, SetItem};
pub use truth::Truthy;
