use crate::{MathError, Scalar, Vec3, INVERSE_THRESHOLD};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 3x3 matrix, column-major storage.
///
/// Used for rotations and the linear part of affine transforms. Stored as
/// three column vectors; element (row r, column c) sits at flat index
/// `c * 3 + r` (see [`flat_index`](Self::flat_index)).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3<S> {
    /// Column 0
    pub c0: Vec3<S>,
    /// Column 1
    pub c1: Vec3<S>,
    /// Column 2
    pub c2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    /// Construct from column vectors
    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Construct from a flat column-major array.
    #[inline]
    pub fn from_cols_array(m: &[S; 9]) -> Self {
        Self::from_cols(
            Vec3::new(m[0], m[1], m[2]),
            Vec3::new(m[3], m[4], m[5]),
            Vec3::new(m[6], m[7], m[8]),
        )
    }

    /// Flatten to a column-major array, ready for `glUniformMatrix3fv`.
    #[inline]
    pub fn to_cols_array(&self) -> [S; 9] {
        [
            self.c0.x, self.c0.y, self.c0.z,
            self.c1.x, self.c1.y, self.c1.z,
            self.c2.x, self.c2.y, self.c2.z,
        ]
    }

    /// Position of element (row, col) in [`to_cols_array`](Self::to_cols_array).
    #[inline]
    pub const fn flat_index(row: usize, col: usize) -> usize {
        col * 3 + row
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE, S::ZERO, S::ZERO,
            S::ZERO, S::ONE, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,
        )
    }

    #[inline]
    pub fn diagonal(d: Vec3<S>) -> Self {
        Self::new(
            d.x, S::ZERO, S::ZERO,
            S::ZERO, d.y, S::ZERO,
            S::ZERO, S::ZERO, d.z,
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z,
            self.c1.x, self.c1.y, self.c1.z,
            self.c2.x, self.c2.y, self.c2.z,
        )
    }

    /// Cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * (self.c1.y * self.c2.z - self.c2.y * self.c1.z)
            - self.c0.y * (self.c1.x * self.c2.z - self.c2.x * self.c1.z)
            + self.c0.z * (self.c1.x * self.c2.y - self.c2.x * self.c1.y)
    }

    /// Inverse, or identity when `|det| < INVERSE_THRESHOLD`.
    ///
    /// The fallback keeps NaN/inf out of render and physics pipelines at
    /// the cost of a silently wrong answer for near-singular input.
    /// Use [`try_inverse`](Self::try_inverse) to detect that case.
    pub fn inverse(&self) -> Self {
        self.inverse_with_threshold(S::from_f64(INVERSE_THRESHOLD))
    }

    /// [`inverse`](Self::inverse) with a caller-chosen degeneracy threshold.
    pub fn inverse_with_threshold(&self, threshold: S) -> Self {
        match self.try_inverse_with_threshold(threshold) {
            Ok(inv) => inv,
            Err(err) => {
                crate::log_identity_fallback("mat3", &err);
                Self::identity()
            }
        }
    }

    pub fn try_inverse(&self) -> Result<Self, MathError> {
        self.try_inverse_with_threshold(S::from_f64(INVERSE_THRESHOLD))
    }

    /// Adjugate over determinant. Fails when `|det| < threshold`.
    pub fn try_inverse_with_threshold(&self, threshold: S) -> Result<Self, MathError> {
        let det = self.determinant();
        if det.abs() < threshold || !det.is_finite() {
            return Err(MathError::Singular { determinant: det.to_f64() });
        }
        let inv_det = det.recip();
        Ok(Self::new(
            (self.c1.y * self.c2.z - self.c2.y * self.c1.z) * inv_det,
            (self.c2.x * self.c1.z - self.c1.x * self.c2.z) * inv_det,
            (self.c1.x * self.c2.y - self.c2.x * self.c1.y) * inv_det,
            (self.c2.y * self.c0.z - self.c0.y * self.c2.z) * inv_det,
            (self.c0.x * self.c2.z - self.c2.x * self.c0.z) * inv_det,
            (self.c2.x * self.c0.y - self.c0.x * self.c2.y) * inv_det,
            (self.c0.y * self.c1.z - self.c1.y * self.c0.z) * inv_det,
            (self.c1.x * self.c0.z - self.c0.x * self.c1.z) * inv_det,
            (self.c0.x * self.c1.y - self.c1.x * self.c0.y) * inv_det,
        ))
    }

    /// Matrix-vector product (linear only, a 3x3 carries no translation)
    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }

    /// Matrix-matrix product. Column c of the result is `self * rhs.c`.
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_cols(
            self.mul_vec(rhs.c0),
            self.mul_vec(rhs.c1),
            self.mul_vec(rhs.c2),
        )
    }

    /// Trace
    #[inline]
    pub fn trace(&self) -> S {
        self.c0.x + self.c1.y + self.c2.z
    }

    /// Rotation matrix about a unit axis (Rodrigues' formula).
    ///
    /// The axis is not normalized here; a non-unit axis yields a sheared matrix.
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let c = match col {
            0 => &self.c0,
            1 => &self.c1,
            _ => &self.c2,
        };
        match row {
            0 => &c.x,
            1 => &c.y,
            _ => &c.z,
        }
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for r in 0..3 {
            writeln!(f, "{}", self.row(r))?;
        }
        Ok(())
    }
}
