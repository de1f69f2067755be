//! Read-only optics for attribute access.
//!
//! Rust has no runtime attribute lookup by name, so attribute access is
//! expressed with getters: values that borrow one field out of a
//! structure. [`attr_getter`](crate::bindings::attr_getter) wraps a getter
//! so it can be piped.
//!
//! # Deriving getters
//!
//! With the `derive` feature (on by default), `#[derive(Getters)]`
//! generates a `<field>_getter()` constructor per named field:
//!
//! ```
//! use pipe_operator::optics::{Getter, Getters};
//! use pipe_operator::prelude::*;
//!
//! #[derive(Getters)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! let account = Account { owner: "sam".to_string(), balance: 120 };
//! assert_eq!(*account.pipe_ref(attr_getter(Account::balance_getter())), 120);
//! assert_eq!(Account::owner_getter().get(&account), "sam");
//! ```

mod getter;

pub use getter::{ComposedGetter, FunctionGetter, Getter};

#[cfg(feature = "derive")]
pub use pipe_operator_derive::Getters;
