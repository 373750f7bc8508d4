use crate::{Mat3, MathError, Scalar, Vec3, Vec4, INVERSE_THRESHOLD};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms (rotation + translation + scale) and
/// projections. Element (row r, column c) sits at flat index `c * 4 + r`,
/// so the translation of an affine matrix occupies flat indices 12..15.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat4<S> {
    pub c0: Vec4<S>,
    pub c1: Vec4<S>,
    pub c2: Vec4<S>,
    pub c3: Vec4<S>,
}

impl<S: Scalar> Mat4<S> {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            c0: Vec4::new(m00, m10, m20, m30),
            c1: Vec4::new(m01, m11, m21, m31),
            c2: Vec4::new(m02, m12, m22, m32),
            c3: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// Construct from a flat column-major array.
    pub fn from_cols_array(m: &[S; 16]) -> Self {
        Self::from_cols(
            Vec4::new(m[0], m[1], m[2], m[3]),
            Vec4::new(m[4], m[5], m[6], m[7]),
            Vec4::new(m[8], m[9], m[10], m[11]),
            Vec4::new(m[12], m[13], m[14], m[15]),
        )
    }

    /// Flatten to a column-major array, ready for `glUniformMatrix4fv`.
    pub fn to_cols_array(&self) -> [S; 16] {
        [
            self.c0.x, self.c0.y, self.c0.z, self.c0.w,
            self.c1.x, self.c1.y, self.c1.z, self.c1.w,
            self.c2.x, self.c2.y, self.c2.z, self.c2.w,
            self.c3.x, self.c3.y, self.c3.z, self.c3.w,
        ]
    }

    #[inline]
    pub const fn flat_index(row: usize, col: usize) -> usize {
        col * 4 + row
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, S::ONE,  S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,  S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Build from rotation (3x3) and translation
    pub fn from_rotation_translation(rot: Mat3<S>, trans: Vec3<S>) -> Self {
        Self::new(
            rot.c0.x, rot.c1.x, rot.c2.x, trans.x,
            rot.c0.y, rot.c1.y, rot.c2.y, trans.y,
            rot.c0.z, rot.c1.z, rot.c2.z, trans.z,
            S::ZERO,  S::ZERO,  S::ZERO,  S::ONE,
        )
    }

    /// Translation matrix: identity 3x3 block, `trans` in the last column.
    pub fn translation(trans: Vec3<S>) -> Self {
        let mut m = Self::identity();
        m.set_translation(trans);
        m
    }

    /// Overwrite the translation column in place, leaving the 3x3 block and
    /// bottom row untouched.
    #[inline]
    pub fn set_translation(&mut self, trans: Vec3<S>) {
        self.c3.x = trans.x;
        self.c3.y = trans.y;
        self.c3.z = trans.z;
    }

    /// Uniform scale matrix (homogeneous corner stays 1)
    pub fn scale(s: S) -> Self {
        Self::new(
            s,       S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, s,       S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, s,       S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about a unit axis (Rodrigues' formula). The axis must be
    /// normalized by the caller.
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_axis(axis, angle), Vec3::zero())
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4<S> {
        Vec4::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3))
    }

    /// Upper-left 3x3 block (rotation and scale); drops translation and
    /// the bottom row.
    #[inline]
    pub fn rotation_matrix(&self) -> Mat3<S> {
        Mat3::from_cols(
            self.c0.truncate(),
            self.c1.truncate(),
            self.c2.truncate(),
        )
    }

    /// Extract the translation column
    #[inline]
    pub fn translation_vec(&self) -> Vec3<S> {
        self.c3.truncate()
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c0.w,
            self.c1.x, self.c1.y, self.c1.z, self.c1.w,
            self.c2.x, self.c2.y, self.c2.z, self.c2.w,
            self.c3.x, self.c3.y, self.c3.z, self.c3.w,
        )
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }

    /// Transform a point (implicit w=1, includes translation). The result's
    /// w is discarded without a perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(p.extend(S::ONE)).truncate()
    }

    /// Transform a direction (w=0, ignores translation)
    #[inline]
    pub fn transform_vector(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(v.extend(S::ZERO)).truncate()
    }

    /// Matrix-matrix product
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_cols(
            self.mul_vec4(rhs.c0),
            self.mul_vec4(rhs.c1),
            self.mul_vec4(rhs.c2),
            self.mul_vec4(rhs.c3),
        )
    }

    pub fn determinant(&self) -> S {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
    fn minors(&self) -> ([S; 6], [S; 6]) {
        let m = |r, c| self.get(r, c);
        let s = [
            m(0,0) * m(1,1) - m(1,0) * m(0,1),
            m(0,0) * m(1,2) - m(1,0) * m(0,2),
            m(0,0) * m(1,3) - m(1,0) * m(0,3),
            m(0,1) * m(1,2) - m(1,1) * m(0,2),
            m(0,1) * m(1,3) - m(1,1) * m(0,3),
            m(0,2) * m(1,3) - m(1,2) * m(0,3),
        ];
        let c = [
            m(2,0) * m(3,1) - m(3,0) * m(2,1),
            m(2,0) * m(3,2) - m(3,0) * m(2,2),
            m(2,0) * m(3,3) - m(3,0) * m(2,3),
            m(2,1) * m(3,2) - m(3,1) * m(2,2),
            m(2,1) * m(3,3) - m(3,1) * m(2,3),
            m(2,2) * m(3,3) - m(3,2) * m(2,3),
        ];
        (s, c)
    }

    /// Transposed cofactor matrix. `self * self.adjugate() == det * I`.
    pub fn adjugate(&self) -> Self {
        let m = |r, c| self.get(r, c);
        let (s, c) = self.minors();
        Self::new(
             m(1,1) * c[5] - m(1,2) * c[4] + m(1,3) * c[3],
            -m(0,1) * c[5] + m(0,2) * c[4] - m(0,3) * c[3],
             m(3,1) * s[5] - m(3,2) * s[4] + m(3,3) * s[3],
            -m(2,1) * s[5] + m(2,2) * s[4] - m(2,3) * s[3],
            -m(1,0) * c[5] + m(1,2) * c[2] - m(1,3) * c[1],
             m(0,0) * c[5] - m(0,2) * c[2] + m(0,3) * c[1],
            -m(3,0) * s[5] + m(3,2) * s[2] - m(3,3) * s[1],
             m(2,0) * s[5] - m(2,2) * s[2] + m(2,3) * s[1],
             m(1,0) * c[4] - m(1,1) * c[2] + m(1,3) * c[0],
            -m(0,0) * c[4] + m(0,1) * c[2] - m(0,3) * c[0],
             m(3,0) * s[4] - m(3,1) * s[2] + m(3,3) * s[0],
            -m(2,0) * s[4] + m(2,1) * s[2] - m(2,3) * s[0],
            -m(1,0) * c[3] + m(1,1) * c[1] - m(1,2) * c[0],
             m(0,0) * c[3] - m(0,1) * c[1] + m(0,2) * c[0],
            -m(3,0) * s[3] + m(3,1) * s[1] - m(3,2) * s[0],
             m(2,0) * s[3] - m(2,1) * s[1] + m(2,2) * s[0],
        )
    }

    /// Inverse, or identity when `|det| < INVERSE_THRESHOLD`.
    pub fn inverse(&self) -> Self {
        self.inverse_with_threshold(S::from_f64(INVERSE_THRESHOLD))
    }

    pub fn inverse_with_threshold(&self, threshold: S) -> Self {
        match self.try_inverse_with_threshold(threshold) {
            Ok(inv) => inv,
            Err(err) => {
                crate::log_identity_fallback("mat4", &err);
                Self::identity()
            }
        }
    }

    pub fn try_inverse(&self) -> Result<Self, MathError> {
        self.try_inverse_with_threshold(S::from_f64(INVERSE_THRESHOLD))
    }

    /// 4x4 inverse via cofactor expansion. The determinant is the first
    /// column of `self` dotted with the first row of the adjugate.
    pub fn try_inverse_with_threshold(&self, threshold: S) -> Result<Self, MathError> {
        let adj = self.adjugate();
        let det = self.c0.dot(adj.row(0));
        if det.abs() < threshold || !det.is_finite() {
            return Err(MathError::Singular { determinant: det.to_f64() });
        }
        Ok(adj * det.recip())
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let c = match col { 0 => &self.c0, 1 => &self.c1, 2 => &self.c2, _ => &self.c3 };
        match row { 0 => &c.x, 1 => &c.y, 2 => &c.z, _ => &c.w }
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2, self.c3 + rhs.c3)
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2, self.c3 - rhs.c3)
    }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.mul_vec4(rhs) }
}

// Mat4 * Vec3 treats the vector as a point (w=1)
impl<S: Scalar> Mul<Vec3<S>> for Mat4<S> {
    type Output = Vec3<S>;
    #[inline] fn mul(self, rhs: Vec3<S>) -> Vec3<S> { self.transform_point(rhs) }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

impl<S: Scalar> core::fmt::Display for Mat4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for r in 0..4 {
            writeln!(f, "{}", self.row(r))?;
        }
        Ok(())
    }
}
