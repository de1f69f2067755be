//! Arithmetic operator traits the standard library does not define.
//!
//! `std::ops` covers `+ - * / %`, shifts and bitwise operators. The
//! operations below have no `std::ops` trait, so they are declared here and
//! implemented for the primitive numeric types:
//!
//! - [`Abs`]: absolute value
//! - [`Pow`]: exponentiation
//! - [`TrueDiv`]: division that always yields a floating point quotient
//! - [`FloorDiv`]: division and modulo rounding toward negative infinity
//! - [`MatMul`] / [`MatMulAssign`]: matrix product over fixed-size arrays

/// Primitive numeric types.
///
/// Bounds the element type of [`MatMul`] and the operand of
/// [`pos`](crate::bindings::pos).
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
{
}

/// Absolute value.
///
/// Signed integer overflow (`i32::MIN.abs()`) panics in debug builds, as
/// the inherent method does.
pub trait Abs {
    /// The resulting type.
    type Output;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self::Output;
}

/// Exponentiation.
///
/// Integers take a `u32` exponent (`i32::pow`); floats take either an `i32`
/// (`powi`) or a float (`powf`) exponent.
pub trait Pow<Exponent> {
    /// The resulting type.
    type Output;

    /// Raises `self` to `exponent`.
    fn pow(self, exponent: Exponent) -> Self::Output;
}

/// Division with a floating point quotient.
///
/// Integer operands are converted to `f64` first, so `7.true_div(2)` is
/// `3.5`. Float operands follow IEEE 754, so dividing them by zero yields
/// an infinity or NaN.
pub trait TrueDiv<Rhs = Self> {
    /// The resulting type.
    type Output;

    /// Divides `self` by `rhs`.
    ///
    /// # Panics
    ///
    /// Panics if integer operands have a zero `rhs`, as integer `/` does.
    fn true_div(self, rhs: Rhs) -> Self::Output;
}

/// Division and modulo rounding toward negative infinity.
///
/// For signed integers `7.floor_div(-2) == -4` and `7.floor_mod(-2) == -1`:
/// the remainder takes the sign of the divisor and
/// `a == a.floor_div(b) * b + a.floor_mod(b)`. Integer division by zero
/// panics.
pub trait FloorDiv<Rhs = Self> {
    /// The resulting type.
    type Output;

    /// Divides and rounds the quotient toward negative infinity.
    fn floor_div(self, rhs: Rhs) -> Self::Output;

    /// Remainder of [`FloorDiv::floor_div`].
    fn floor_mod(self, rhs: Rhs) -> Self::Output;
}

/// Matrix multiplication.
///
/// Implemented for row-major fixed-size arrays: `[[T; K]; M]` times
/// `[[T; N]; K]` is `[[T; N]; M]`, and `[T; N]` times `[T; N]` is their dot
/// product. Dimensions are checked by the type system.
pub trait MatMul<Rhs = Self> {
    /// The resulting type.
    type Output;

    /// Multiplies `self` by `rhs`.
    fn matmul(self, rhs: Rhs) -> Self::Output;
}

/// In-place matrix multiplication for square matrices.
pub trait MatMulAssign<Rhs = Self> {
    /// Replaces `self` with `self.matmul(rhs)`.
    fn matmul_assign(&mut self, rhs: Rhs);
}

macro_rules! impl_scalar {
    ($($type:ty),* $(,)?) => {
        $(impl Scalar for $type {})*
    };
}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

macro_rules! impl_signed_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Abs for $type {
                type Output = Self;

                #[inline]
                fn abs(self) -> Self {
                    <$type>::abs(self)
                }
            }

            impl FloorDiv for $type {
                type Output = Self;

                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    let quotient = self / rhs;
                    if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                        quotient - 1
                    } else {
                        quotient
                    }
                }

                #[inline]
                fn floor_mod(self, rhs: Self) -> Self {
                    let remainder = self % rhs;
                    if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
                        remainder + rhs
                    } else {
                        remainder
                    }
                }
            }
        )*
    };
}

impl_signed_integer!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_unsigned_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Abs for $type {
                type Output = Self;

                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }

            impl FloorDiv for $type {
                type Output = Self;

                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn floor_mod(self, rhs: Self) -> Self {
                    self % rhs
                }
            }
        )*
    };
}

impl_unsigned_integer!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Pow<u32> for $type {
                type Output = Self;

                #[inline]
                fn pow(self, exponent: u32) -> Self {
                    <$type>::pow(self, exponent)
                }
            }

            impl TrueDiv for $type {
                type Output = f64;

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn true_div(self, rhs: Self) -> f64 {
                    assert!(rhs != 0, "attempt to divide by zero");
                    self as f64 / rhs as f64
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_float {
    ($($type:ty),* $(,)?) => {
        $(
            impl Abs for $type {
                type Output = Self;

                #[inline]
                fn abs(self) -> Self {
                    <$type>::abs(self)
                }
            }

            impl Pow<i32> for $type {
                type Output = Self;

                #[inline]
                fn pow(self, exponent: i32) -> Self {
                    self.powi(exponent)
                }
            }

            impl Pow<$type> for $type {
                type Output = Self;

                #[inline]
                fn pow(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }

            impl TrueDiv for $type {
                type Output = Self;

                #[inline]
                fn true_div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }

            impl FloorDiv for $type {
                type Output = Self;

                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    // The quotient is exact up to rounding once the remainder is removed.
                    let remainder = self % rhs;
                    let mut quotient = (self - remainder) / rhs;
                    if remainder != 0.0 && ((remainder < 0.0) != (rhs < 0.0)) {
                        quotient -= 1.0;
                    }
                    if quotient == 0.0 {
                        return <$type>::copysign(0.0, self / rhs);
                    }
                    let floored = quotient.floor();
                    if quotient - floored > 0.5 {
                        floored + 1.0
                    } else {
                        floored
                    }
                }

                #[inline]
                fn floor_mod(self, rhs: Self) -> Self {
                    let remainder = self % rhs;
                    if remainder == 0.0 {
                        <$type>::copysign(0.0, rhs)
                    } else if (remainder < 0.0) != (rhs < 0.0) {
                        remainder + rhs
                    } else {
                        remainder
                    }
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl<T: Scalar, const M: usize, const K: usize, const N: usize> MatMul<[[T; N]; K]>
    for [[T; K]; M]
{
    type Output = [[T; N]; M];

    fn matmul(self, rhs: [[T; N]; K]) -> Self::Output {
        std::array::from_fn(|row| {
            std::array::from_fn(|column| {
                (0..K).fold(T::default(), |sum, inner| {
                    sum + self[row][inner] * rhs[inner][column]
                })
            })
        })
    }
}

impl<T: Scalar, const N: usize> MatMul for [T; N] {
    type Output = T;

    fn matmul(self, rhs: Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::default(), |sum, (left, right)| sum + *left * *right)
    }
}

impl<T: Scalar, const N: usize> MatMulAssign for [[T; N]; N] {
    fn matmul_assign(&mut self, rhs: Self) {
        *self = (*self).matmul(rhs);
    }
}
