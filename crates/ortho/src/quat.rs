use crate::{Mat3, Mat4, MathError, Scalar, Vec3};
use core::ops::Mul;

/// Quaternion: w + xi + yj + zk
///
/// Stored as scalar part `w` and vector part `v = (x, y, z)`.
/// Represents a rotation when unit-length. Every constructor that yields a
/// rotation (`from_axis_angle`, `normalize`, `mul`) returns a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Quat<S> {
    pub w: S,
    pub v: Vec3<S>,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self { w, v: Vec3::new(x, y, z) }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { w: S::ONE, v: Vec3::zero() }
    }

    /// Rotation of `angle` radians about `axis` (expected unit-length).
    /// The result is renormalized so a slightly-off axis still gives a unit
    /// quaternion.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let half = angle * S::HALF;
        let (s, c) = half.sin_cos();
        Self { w: c, v: axis * s }.normalize()
    }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.w * self.w + self.v.norm_sq()
    }

    /// Magnitude over all four components.
    #[inline]
    pub fn norm(&self) -> S { self.norm_sq().sqrt() }

    /// Unguarded: a zero quaternion yields non-finite components.
    pub fn normalize(&self) -> Self {
        let inv = self.norm().recip();
        Self { w: self.w * inv, v: self.v * inv }
    }

    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let n = self.norm();
        if n > S::EPSILON {
            Ok(Self { w: self.w / n, v: self.v / n })
        } else {
            Err(MathError::ZeroMagnitude)
        }
    }

    /// Hamilton product without renormalization.
    #[inline]
    pub fn hamilton(&self, other: &Quat<S>) -> Quat<S> {
        Quat {
            w: self.w * other.w - self.v.dot(other.v),
            v: self.v.cross(other.v) + other.v * self.w + self.v * other.w,
        }
    }

    /// Composition: rotating by the result equals rotating by `other`
    /// first, then by `self`. Renormalized to counter drift.
    pub fn compose(&self, other: &Quat<S>) -> Quat<S> {
        self.hamilton(other).normalize()
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { w: self.w, v: -self.v }
    }

    /// Rotate a vector by this quaternion: q * v * q^-1
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        let qv = Quat { w: S::ZERO, v };
        self.hamilton(&qv).hamilton(&self.conjugate()).v
    }

    /// Convert to 3x3 rotation matrix. Assumes a unit quaternion.
    pub fn to_mat3(&self) -> Mat3<S> {
        let two = S::TWO;
        let Vec3 { x, y, z } = self.v;
        let w = self.w;

        let (xx, xy, xz, xw) = (x * x, x * y, x * z, x * w);
        let (yy, yz, yw) = (y * y, y * z, y * w);
        let (zz, zw) = (z * z, z * w);

        Mat3::new(
            S::ONE - two * (yy + zz), two * (xy - zw),          two * (xz + yw),
            two * (xy + zw),          S::ONE - two * (xx + zz), two * (yz - xw),
            two * (xz - yw),          two * (yz + xw),          S::ONE - two * (xx + yy),
        )
    }

    /// 4x4 rotation with zero translation and `m33 = 1`.
    pub fn to_mat4(&self) -> Mat4<S> {
        Mat4::from_rotation_translation(self.to_mat3(), Vec3::zero())
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.compose(&rhs) }
}

impl<S: Scalar> From<Quat<S>> for Mat3<S> {
    fn from(q: Quat<S>) -> Self { q.to_mat3() }
}

impl<S: Scalar> From<Quat<S>> for Mat4<S> {
    fn from(q: Quat<S>) -> Self { q.to_mat4() }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[ {} {} ]", self.w, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3<f64>, b: Vec3<f64>) {
        assert!((a - b).norm() < 1e-10, "{} vs {}", a, b);
    }

    #[test]
    fn identity_rotation() {
        let q = Quat::<f64>::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec_eq(q.rotate(v), v);
        assert_eq!(q.to_mat3(), Mat3::identity());
        assert_eq!(q.to_mat4(), Mat4::identity());
    }

    #[test]
    fn axis_angle_90_degrees() {
        let q = Quat::from_axis_angle(Vec3::z(), FRAC_PI_2);
        assert!((q.norm() - 1.0).abs() < 1e-12);
        assert_vec_eq(q.rotate(Vec3::x()), Vec3::y());
    }

    #[test]
    fn axis_angle_normalizes_sloppy_axis() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), 1.0);
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -1.0).normalize(), 0.8);
        let v = Vec3::new(0.3, -1.0, 2.0);
        assert_vec_eq(q.conjugate().rotate(q.rotate(v)), v);
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn mul_composes_rotations() {
        let a = Quat::from_axis_angle(Vec3::z(), FRAC_PI_2);
        let b = Quat::from_axis_angle(Vec3::x(), FRAC_PI_2);
        let ab = a * b;
        assert_eq!(ab, a.compose(&b));
        assert!((ab.norm() - 1.0).abs() < 1e-12);

        let v = Vec3::new(0.2, 0.7, -1.1);
        assert_vec_eq(ab.rotate(v), a.rotate(b.rotate(v)));
    }

    #[test]
    fn mul_same_axis_adds_angles() {
        let a = Quat::from_axis_angle(Vec3::y(), 0.4);
        let b = Quat::from_axis_angle(Vec3::y(), 0.5);
        let c = Quat::from_axis_angle(Vec3::y(), 0.9);
        let ab = a * b;
        assert!((ab.w - c.w).abs() < 1e-12);
        assert_vec_eq(ab.v, c.v);
    }

    #[test]
    fn mul_renormalizes() {
        let a = Quat::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(a * Quat::identity(), Quat::identity());
    }

    #[test]
    fn matrix_agrees_with_rotate() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 1.0).normalize(), 1.2);
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_vec_eq(q.to_mat3() * v, q.rotate(v));
        assert_vec_eq(Mat4::from(q).transform_point(v), q.rotate(v));
    }

    #[test]
    fn matrix_agrees_with_axis_rotation() {
        let axis = Vec3::new(0.0, 0.6, 0.8);
        let q = Quat::from_axis_angle(axis, 0.75);
        let m = Mat4::rotation_axis(axis, 0.75);
        for r in 0..4 {
            for c in 0..4 {
                assert!((q.to_mat4().get(r, c) - m.get(r, c)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn normalize_and_try_normalize() {
        let q = Quat::new(1.0, 1.0, 1.0, 1.0).normalize();
        assert!((q.w - 0.5).abs() < 1e-12);
        assert_eq!(Quat::new(0.0f32, 0.0, 0.0, 0.0).try_normalize(), Err(MathError::ZeroMagnitude));
        assert!(!Quat::new(0.0f32, 0.0, 0.0, 0.0).normalize().w.is_finite());
    }
}
