use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point element type shared by every vector, matrix and quaternion.
///
/// Implemented for f32 (the usual GPU upload type) and f64.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn recip(self) -> Self;
    fn is_finite(self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("ortho needs either the `std` or the `libm` feature for float intrinsics");

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        x.abs()
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        x.tan()
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    pub fn tan_f64(x: f64) -> f64 {
        libm::tan(x)
    }
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $eps:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $eps;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $suffix>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $suffix>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $suffix>](self) }
            #[inline] fn tan(self) -> Self { float_ops::[<tan_ $suffix>](self) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $suffix>](self) }

            #[inline] fn recip(self) -> Self { 1.0 as $t / self }
            #[inline] fn is_finite(self) -> bool { <$t>::is_finite(self) }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(f32, f32, f32::EPSILON);
impl_scalar_float!(f64, f64, f64::EPSILON);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_basics() {
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f64::ONE, 1.0);
        assert_eq!(f64::HALF * f64::TWO, 1.0);
        assert_eq!(Scalar::sqrt(4.0_f64), 2.0);
        assert_eq!(Scalar::abs(-3.0_f64), 3.0);
    }

    #[test]
    fn f32_basics() {
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert_eq!(Scalar::recip(4.0_f32), 0.25);
    }

    #[test]
    fn finiteness() {
        assert!(Scalar::is_finite(1.0_f32));
        assert!(!Scalar::is_finite(f32::INFINITY));
        assert!(!Scalar::is_finite(f64::NAN));
    }
}
