//! The public binding table.
//!
//! Every function here takes the construction-time arguments of one
//! operation and returns a unary [`Callable`](crate::compose::Callable)
//! ready to be piped. Each is either [`first_arg`](crate::compose::first_arg)
//! or [`curry_then_apply`](crate::compose::curry_then_apply) partially
//! applied to one [`operator::function`](crate::operator::function); none
//! has behavior of its own.
//!
//! | Group | Bindings |
//! |---|---|
//! | Arithmetic | [`add`], [`sub`], [`mul`], [`matmul`], [`div`], [`true_div`], [`floor_div`], [`rem`], [`modulo`], [`pow`] |
//! | In-place arithmetic | [`add_assign`], [`sub_assign`], [`mul_assign`], [`matmul_assign`], [`div_assign`], [`true_div_assign`], [`floor_div_assign`], [`rem_assign`], [`modulo_assign`], [`pow_assign`] |
//! | Unary | [`neg`], [`pos`], [`abs`], [`invert`], [`not`], [`index`], [`truth`] |
//! | Bitwise | [`shl`], [`shr`], [`bitand`], [`bitor`], [`bitxor`] and their `_assign` forms |
//! | Comparison | [`eq`], [`ne`], [`lt`], [`le`], [`gt`], [`ge`], [`is`], [`is_not`] |
//! | Sequences | [`concat`], [`concat_assign`], [`contains`], [`count_of`], [`index_of`], [`length_hint`], [`get_item`], [`set_item`], [`delete_item`] |
//! | Factories | [`item_getter`], [`attr_getter`], [`method_caller`] |
//!
//! Operations that mutate take the piped value as `&mut T` (use
//! [`Pipe::pipe_mut`](crate::compose::Pipe::pipe_mut)) and return that same
//! reference, so further in-place operations can be chained on it.
//!
//! # Examples
//!
//! ```
//! use pipe_operator::prelude::*;
//!
//! assert_eq!(2_i32.pipe(add(3)), 5);
//! assert_eq!("abc".pipe(method_caller(str::to_uppercase, ())), "ABC");
//!
//! let mut total = 1_i32;
//! total.pipe_mut(add_assign(4)).pipe_mut(mul_assign(10));
//! assert_eq!(total, 50);
//! ```

mod arithmetic;
mod bitwise;
mod comparison;
mod factory;
mod sequence;
mod unary;

pub use arithmetic::*;
pub use bitwise::*;
pub use comparison::*;
pub use factory::*;
pub use sequence::*;
pub use unary::*;
