//! Projection and view matrices in the OpenGL convention: right-handed
//! eye space looking down -z, clip-space depth in [-1, 1].

use crate::{Mat3, Mat4, Scalar, Vec3};

impl<S: Scalar> Mat4<S> {
    /// Perspective projection from a vertical field of view (radians).
    ///
    /// Clip-space w is taken from -z, so points in front of the camera
    /// (negative eye-space z) end up with positive w.
    pub fn perspective(fovy: S, aspect: S, near: S, far: S) -> Self {
        let f = (fovy * S::HALF).tan().recip();
        let nmf = near - far;
        Self::new(
            f / aspect, S::ZERO, S::ZERO,             S::ZERO,
            S::ZERO,    f,       S::ZERO,             S::ZERO,
            S::ZERO,    S::ZERO, (near + far) / nmf,  S::TWO * far * near / nmf,
            S::ZERO,    S::ZERO, -S::ONE,             S::ZERO,
        )
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// `up` only needs to be non-parallel to the view direction; it is
    /// re-orthogonalized against it.
    pub fn look_at(eye: Vec3<S>, center: Vec3<S>, up: Vec3<S>) -> Self {
        let forward = (center - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        // Basis vectors as rows; Mat3::from_cols + transpose puts them there
        // in column-major storage.
        let rotation = Mat3::from_cols(side, up, -forward).transpose();
        Self::from_rotation_translation(rotation, Vec3::zero()) * Self::translation(-eye)
    }
}
