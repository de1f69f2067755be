//! Operator functions: one unit struct per underlying operation.
//!
//! Each struct is the callable form of an operator, implementing
//! [`Callable`] generically over its operand types by delegating to the
//! `std::ops`/`std::cmp` trait, std method, or [`crate::operator`] trait
//! behind it. They are what the bindings partially apply:
//! `bindings::add(3)` is `first_arg(function::Add, (3,))`.
//!
//! In-place variants take `&mut T` as their first argument and return the
//! same `&mut T` after mutating through it.
//!
//! # Examples
//!
//! ```
//! use pipe_operator::compose::Callable;
//! use pipe_operator::operator::function;
//!
//! assert_eq!(function::Add.call((2_i32, 3)), 5);
//! assert!(function::Lt.call((2_i32, 3)));
//!
//! let mut total = 10_i32;
//! let returned = function::SubAssign.call((&mut total, 4));
//! *returned += 1;
//! assert_eq!(total, 7);
//! ```

use std::ops;

use super::arithmetic::{self, Scalar};
use super::factory::{AttrGetter, ItemGetter, MethodCaller};
use super::sequence;
use super::truth::Truthy;
use crate::compose::{Callable, identity};

macro_rules! std_binary_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<Left, Right> Callable<(Left, Right)> for $name
            where
                Left: ops::$trait<Right>,
            {
                type Output = <Left as ops::$trait<Right>>::Output;

                #[inline]
                fn call(self, (left, right): (Left, Right)) -> Self::Output {
                    ops::$trait::$method(left, right)
                }
            }
        )*
    };
}

macro_rules! std_assign_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<'a, Target, Right> Callable<(&'a mut Target, Right)> for $name
            where
                Target: ops::$trait<Right> + ?Sized,
            {
                type Output = &'a mut Target;

                #[inline]
                fn call(self, (target, right): (&'a mut Target, Right)) -> &'a mut Target {
                    ops::$trait::$method(&mut *target, right);
                    target
                }
            }
        )*
    };
}

macro_rules! crate_binary_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<Left, Right> Callable<(Left, Right)> for $name
            where
                Left: arithmetic::$trait<Right>,
            {
                type Output = <Left as arithmetic::$trait<Right>>::Output;

                #[inline]
                fn call(self, (left, right): (Left, Right)) -> Self::Output {
                    arithmetic::$trait::$method(left, right)
                }
            }
        )*
    };
}

macro_rules! crate_assign_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<'a, Target, Right> Callable<(&'a mut Target, Right)> for $name
            where
                Target: arithmetic::$trait<Right, Output = Target> + Copy,
            {
                type Output = &'a mut Target;

                #[inline]
                fn call(self, (target, right): (&'a mut Target, Right)) -> &'a mut Target {
                    *target = arithmetic::$trait::$method(*target, right);
                    target
                }
            }
        )*
    };
}

macro_rules! comparison_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<Left, Right> Callable<(Left, Right)> for $name
            where
                Left: std::cmp::$trait<Right>,
            {
                type Output = bool;

                #[inline]
                fn call(self, (left, right): (Left, Right)) -> bool {
                    std::cmp::$trait::$method(&left, &right)
                }
            }
        )*
    };
}

macro_rules! std_unary_operators {
    ($($(#[$attribute:meta])* $name:ident => $trait:ident :: $method:ident;)*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<Operand> Callable<(Operand,)> for $name
            where
                Operand: ops::$trait,
            {
                type Output = <Operand as ops::$trait>::Output;

                #[inline]
                fn call(self, (operand,): (Operand,)) -> Self::Output {
                    ops::$trait::$method(operand)
                }
            }
        )*
    };
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

std_binary_operators! {
    /// `left + right`.
    Add => Add::add;
    /// `left - right`.
    Sub => Sub::sub;
    /// `left * right`.
    Mul => Mul::mul;
    /// `left / right`; integer division truncates and panics on zero.
    Div => Div::div;
    /// `left % right`; the remainder takes the sign of the dividend.
    Rem => Rem::rem;
}

crate_binary_operators! {
    /// Matrix product, see [`arithmetic::MatMul`].
    MatMul => MatMul::matmul;
    /// Floating point quotient, see [`arithmetic::TrueDiv`].
    TrueDiv => TrueDiv::true_div;
    /// Quotient rounded toward negative infinity, see [`arithmetic::FloorDiv`].
    FloorDiv => FloorDiv::floor_div;
    /// Remainder taking the sign of the divisor, see [`arithmetic::FloorDiv`].
    Modulo => FloorDiv::floor_mod;
    /// Exponentiation, see [`arithmetic::Pow`].
    Pow => Pow::pow;
}

std_assign_operators! {
    /// `*target += right`.
    AddAssign => AddAssign::add_assign;
    /// `*target -= right`.
    SubAssign => SubAssign::sub_assign;
    /// `*target *= right`.
    MulAssign => MulAssign::mul_assign;
    /// `*target /= right`.
    DivAssign => DivAssign::div_assign;
    /// `*target %= right`.
    RemAssign => RemAssign::rem_assign;
    /// `*target <<= right`.
    ShlAssign => ShlAssign::shl_assign;
    /// `*target >>= right`.
    ShrAssign => ShrAssign::shr_assign;
    /// `*target &= right`.
    BitAndAssign => BitAndAssign::bitand_assign;
    /// `*target |= right`.
    BitOrAssign => BitOrAssign::bitor_assign;
    /// `*target ^= right`.
    BitXorAssign => BitXorAssign::bitxor_assign;
}

crate_assign_operators! {
    /// `*target = target.true_div(right)`; the quotient must have the
    /// target's type, so this applies to floats.
    TrueDivAssign => TrueDiv::true_div;
    /// `*target = target.floor_div(right)`.
    FloorDivAssign => FloorDiv::floor_div;
    /// `*target = target.floor_mod(right)`.
    ModuloAssign => FloorDiv::floor_mod;
    /// `*target = target.pow(right)`.
    PowAssign => Pow::pow;
}

/// `target.matmul_assign(right)` for square matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatMulAssign;

impl<'a, Target, Right> Callable<(&'a mut Target, Right)> for MatMulAssign
where
    Target: arithmetic::MatMulAssign<Right>,
{
    type Output = &'a mut Target;

    #[inline]
    fn call(self, (target, right): (&'a mut Target, Right)) -> &'a mut Target {
        target.matmul_assign(right);
        target
    }
}

// ---------------------------------------------------------------------------
// Unary
// ---------------------------------------------------------------------------

std_unary_operators! {
    /// `-operand`.
    Neg => Neg::neg;
    /// `!operand`: bitwise complement for integers, negation for `bool`.
    Invert => Not::not;
}

/// Unary plus: returns a numeric operand unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos;

impl<Operand: Scalar> Callable<(Operand,)> for Pos {
    type Output = Operand;

    #[inline]
    fn call(self, (operand,): (Operand,)) -> Operand {
        identity(operand)
    }
}

/// Absolute value, see [`arithmetic::Abs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Abs;

impl<Operand: arithmetic::Abs> Callable<(Operand,)> for Abs {
    type Output = Operand::Output;

    #[inline]
    fn call(self, (operand,): (Operand,)) -> Self::Output {
        operand.abs()
    }
}

/// Logical negation of [`Truthy::truth`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Not;

impl<Operand: Truthy> Callable<(Operand,)> for Not {
    type Output = bool;

    #[inline]
    fn call(self, (operand,): (Operand,)) -> bool {
        !operand.truth()
    }
}

/// [`Truthy::truth`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Truth;

impl<Operand: Truthy> Callable<(Operand,)> for Truth {
    type Output = bool;

    #[inline]
    fn call(self, (operand,): (Operand,)) -> bool {
        operand.truth()
    }
}

/// Lossless conversion to `usize` through `usize::try_from`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index;

impl<Operand> Callable<(Operand,)> for Index
where
    usize: TryFrom<Operand>,
{
    type Output = Result<usize, <usize as TryFrom<Operand>>::Error>;

    #[inline]
    fn call(self, (operand,): (Operand,)) -> Self::Output {
        usize::try_from(operand)
    }
}

// ---------------------------------------------------------------------------
// Bitwise
// ---------------------------------------------------------------------------

std_binary_operators! {
    /// `left << right`.
    Shl => Shl::shl;
    /// `left >> right`.
    Shr => Shr::shr;
    /// `left & right`.
    BitAnd => BitAnd::bitand;
    /// `left | right`.
    BitOr => BitOr::bitor;
    /// `left ^ right`.
    BitXor => BitXor::bitxor;
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

comparison_operators! {
    /// `left == right`.
    Eq => PartialEq::eq;
    /// `left != right`.
    Ne => PartialEq::ne;
    /// `left < right`.
    Lt => PartialOrd::lt;
    /// `left <= right`.
    Le => PartialOrd::le;
    /// `left > right`.
    Gt => PartialOrd::gt;
    /// `left >= right`.
    Ge => PartialOrd::ge;
}

/// Identity comparison: whether two references point at the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Is;

impl<'a, 'b, T: ?Sized> Callable<(&'a T, &'b T)> for Is {
    type Output = bool;

    #[inline]
    fn call(self, (left, right): (&'a T, &'b T)) -> bool {
        std::ptr::eq(left, right)
    }
}

/// Negated [`Is`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IsNot;

impl<'a, 'b, T: ?Sized> Callable<(&'a T, &'b T)> for IsNot {
    type Output = bool;

    #[inline]
    fn call(self, (left, right): (&'a T, &'b T)) -> bool {
        !std::ptr::eq(left, right)
    }
}

// ---------------------------------------------------------------------------
// Sequences and mappings
// ---------------------------------------------------------------------------

/// Returns `collection` extended with `items`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl<Collection, Items> Callable<(Collection, Items)> for Concat
where
    Collection: Extend<Items::Item>,
    Items: IntoIterator,
{
    type Output = Collection;

    #[inline]
    fn call(self, (mut collection, items): (Collection, Items)) -> Collection {
        collection.extend(items);
        collection
    }
}

/// Extends `*target` with `items` in place and returns `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConcatAssign;

impl<'a, Target, Items> Callable<(&'a mut Target, Items)> for ConcatAssign
where
    Target: Extend<Items::Item>,
    Items: IntoIterator,
{
    type Output = &'a mut Target;

    #[inline]
    fn call(self, (target, items): (&'a mut Target, Items)) -> &'a mut Target {
        target.extend(items);
        target
    }
}

/// [`sequence::Contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contains;

impl<Collection, Needle> Callable<(Collection, Needle)> for Contains
where
    Collection: sequence::Contains<Needle>,
{
    type Output = bool;

    #[inline]
    fn call(self, (collection, needle): (Collection, Needle)) -> bool {
        collection.contains(needle)
    }
}

/// [`sequence::CountOf`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CountOf;

impl<Collection, Needle> Callable<(Collection, Needle)> for CountOf
where
    Collection: sequence::CountOf<Needle>,
{
    type Output = usize;

    #[inline]
    fn call(self, (collection, needle): (Collection, Needle)) -> usize {
        collection.count_of(needle)
    }
}

/// [`sequence::IndexOf`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexOf;

impl<Collection, Needle> Callable<(Collection, Needle)> for IndexOf
where
    Collection: sequence::IndexOf<Needle>,
{
    type Output = Option<usize>;

    #[inline]
    fn call(self, (collection, needle): (Collection, Needle)) -> Option<usize> {
        collection.index_of(needle)
    }
}

/// Estimated length from [`Iterator::size_hint`].
///
/// Returns the exact length when the bounds agree, otherwise a non-zero
/// lower bound, otherwise `default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LengthHint;

impl<Collection> Callable<(Collection, usize)> for LengthHint
where
    Collection: IntoIterator,
{
    type Output = usize;

    #[inline]
    fn call(self, (collection, default): (Collection, usize)) -> usize {
        match collection.into_iter().size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            (0, _) => default,
            (lower, _) => lower,
        }
    }
}

/// `&collection[key]` through [`std::ops::Index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GetItem;

impl<'a, Collection, Key> Callable<(&'a Collection, Key)> for GetItem
where
    Collection: ops::Index<Key> + ?Sized,
    <Collection as ops::Index<Key>>::Output: 'a,
{
    type Output = &'a <Collection as ops::Index<Key>>::Output;

    #[inline]
    fn call(self, (collection, key): (&'a Collection, Key)) -> Self::Output {
        &collection[key]
    }
}

/// [`sequence::SetItem`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetItem;

impl<'a, Collection, Key, Value> Callable<(&'a mut Collection, Key, Value)> for SetItem
where
    Collection: sequence::SetItem<Key, Value> + ?Sized,
{
    type Output = Option<Value>;

    #[inline]
    fn call(self, (collection, key, value): (&'a mut Collection, Key, Value)) -> Option<Value> {
        collection.set_item(key, value)
    }
}

/// [`sequence::DeleteItem`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeleteItem;

impl<'a, Collection, Key> Callable<(&'a mut Collection, Key)> for DeleteItem
where
    Collection: sequence::DeleteItem<Key> + ?Sized,
{
    type Output = Collection::Removed;

    #[inline]
    fn call(self, (collection, key): (&'a mut Collection, Key)) -> Self::Output {
        collection.delete_item(key)
    }
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// Builds an [`ItemGetter`] from a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MakeItemGetter;

impl<Key> Callable<(Key,)> for MakeItemGetter {
    type Output = ItemGetter<Key>;

    #[inline]
    fn call(self, (key,): (Key,)) -> ItemGetter<Key> {
        ItemGetter::new(key)
    }
}

/// Builds an [`AttrGetter`] from an optics getter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MakeAttrGetter;

impl<G> Callable<(G,)> for MakeAttrGetter {
    type Output = AttrGetter<G>;

    #[inline]
    fn call(self, (getter,): (G,)) -> AttrGetter<G> {
        AttrGetter::new(getter)
    }
}

/// Builds a [`MethodCaller`] from a method and its trailing arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MakeMethodCaller;

impl<M, Args> Callable<(M, Args)> for MakeMethodCaller {
    type Output = MethodCaller<M, Args>;

    #[inline]
    fn call(self, (method, arguments): (M, Args)) -> MethodCaller<M, Args> {
        MethodCaller::new(method, arguments)
    }
}
