//! ortho: fixed-size linear algebra for graphics
//!
//! 3D/4D vectors, 3x3/4x4 matrices, quaternions, ray/plane intersection and
//! camera matrices. Everything is a small `Copy` value type and every
//! operation is a pure function.
//!
//! # Conventions
//! - Matrices are column-major: element (row r, col c) of a `Mat4` is at
//!   flat index `c * 4 + r` (`c * 3 + r` for `Mat3`), matching
//!   `glUniformMatrix*fv` with `transpose = GL_FALSE`.
//! - Right-handed coordinates, OpenGL clip space.
//! - `#[repr(C)]` everywhere for GPU upload.
//! - Generic over `Scalar` (f32, f64); the `*f` aliases pick f32.
//!
//! # Degenerate input
//! `inverse` returns identity when `|det| < INVERSE_THRESHOLD` and
//! `normalize` divides by zero length without checking. The `try_*`
//! variants report both cases as [`MathError`].

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod camera;
mod error;
mod mat3;
mod mat4;
mod quat;
mod ray;
mod scalar;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use ray::{Plane, Ray};
pub use scalar::Scalar;
pub use vec3::Vec3;
pub use vec4::Vec4;

pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;
pub type Quatf = Quat<f32>;
pub type Rayf = Ray<f32>;
pub type Planef = Plane<f32>;

/// Determinant magnitude below which `inverse` substitutes the identity.
///
/// Absolute, not relative to the matrix scale: a uniform scale by 0.05
/// (det 1.25e-4) already counts as degenerate. Use
/// `inverse_with_threshold` for matrices that legitimately get that small.
pub const INVERSE_THRESHOLD: f64 = 0.0005;

#[inline]
fn log_identity_fallback(kind: &'static str, err: &MathError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(matrix = kind, %err, "inverse fell back to identity");
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, err);
}

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Vec4<f32>);
    impl_pod!(Vec4<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
    impl_pod!(Mat4<f32>);
    impl_pod!(Mat4<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
    impl_pod!(Ray<f32>);
    impl_pod!(Ray<f64>);
    impl_pod!(Plane<f32>);
    impl_pod!(Plane<f64>);

}
