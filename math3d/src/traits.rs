
use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

/// Scalar types which vectors and matrices can be built from
pub trait Number:
    Copy + PartialEq + PartialOrd +
    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
    AddAssign + SubAssign + MulAssign + DivAssign
{
    const ZERO: Self;
    const ONE: Self;
}

/// Scalars with a sign, needed for negation and absolute values
pub trait Signed: Number + Neg<Output = Self> {
    fn abs(self) -> Self {
        if self < Self::ZERO { -self } else { self }
    }
}

/// Scalars which support the trigonometry needed for rotations and projections
pub trait Float: Signed {
    fn sqrt(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn atan2(self, x: Self) -> Self;
    fn to_radians(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! number {
    ($($ty:ty: $zero:expr, $one:expr;)*) => { $(
        impl Number for $ty {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    )* };
}

number! {
    u8: 0, 1;
    u32: 0, 1;
    i32: 0, 1;
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
}

impl Signed for i32 {}
impl Signed for f32 {}
impl Signed for f64 {}

macro_rules! float {
    ($($ty:ident),*) => { $(
        impl Float for $ty {
            #[inline(always)] fn sqrt(self) -> Self { $ty::sqrt(self) }
            #[inline(always)] fn tan(self) -> Self { $ty::tan(self) }
            #[inline(always)] fn acos(self) -> Self { $ty::acos(self) }
            #[inline(always)] fn sin_cos(self) -> (Self, Self) { $ty::sin_cos(self) }
            #[inline(always)] fn atan2(self, x: Self) -> Self { $ty::atan2(self, x) }
            #[inline(always)] fn to_radians(self) -> Self { $ty::to_radians(self) }
            #[inline(always)] fn min(self, other: Self) -> Self { $ty::min(self, other) }
            #[inline(always)] fn max(self, other: Self) -> Self { $ty::max(self, other) }
        }
    )* };
}

float!(f32, f64);
