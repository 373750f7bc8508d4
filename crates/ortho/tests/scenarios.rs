//! End-to-end checks on the f32 instantiation, the one shipped to shaders.
//!
//! Property sweeps use a fixed-seed generator so failures reproduce.

use ortho::{
    Mat3, Mat3f, Mat4, Mat4f, MathError, Plane, Planef, Quat, Quatf, Ray, Rayf, Vec3, Vec3f,
    Vec4f, INVERSE_THRESHOLD,
};

use std::f32::consts::FRAC_PI_2;

/// SplitMix64, enough for reproducible inputs.
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform f32 in [-1, 1]
    fn f32(&mut self) -> f32 {
        ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0) as f32
    }

    fn vec3(&mut self) -> Vec3f {
        Vec3::new(self.f32(), self.f32(), self.f32())
    }

    fn mat3(&mut self) -> Mat3f {
        Mat3::from_cols(self.vec3(), self.vec3(), self.vec3())
    }

    fn mat4(&mut self) -> Mat4f {
        let mut flat = [0.0f32; 16];
        for v in &mut flat {
            *v = self.f32();
        }
        Mat4::from_cols_array(&flat)
    }
}

fn near(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

fn assert_vec_near(a: Vec3f, b: Vec3f, tol: f32) {
    assert!((a - b).norm() <= tol, "{a} vs {b}");
}

fn assert_mat4_near_identity(m: &Mat4f, tol: f32) {
    let id = Mat4f::identity();
    for r in 0..4 {
        for c in 0..4 {
            assert!(near(m.get(r, c), id.get(r, c), tol), "({r}, {c}) off:\n{m}");
        }
    }
}

#[test]
fn translation_moves_origin() {
    let m = Mat4f::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m * Vec3f::zero(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn quarter_turn_about_z() {
    let m = Mat4f::rotation_axis(Vec3::z(), FRAC_PI_2);
    assert_vec_near(m * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 1e-6);
}

#[test]
fn ray_toward_plane_hits_origin() {
    let plane: Planef = Plane::new(Vec3::zero(), Vec3::z());
    let ray: Rayf = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(ray.intersect_plane(&plane), Some(Vec3::zero()));
}

#[test]
fn ray_away_from_plane_misses() {
    let plane: Planef = Plane::new(Vec3::zero(), Vec3::z());
    let ray: Rayf = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray.intersect_plane(&plane), None);
}

#[test]
fn unnormalized_directions_hit() {
    let plane: Planef = Plane::new(Vec3::zero(), Vec3::z());
    for scale in [1e-8f32, 1e-3, 1.0, 1e4] {
        let ray: Rayf = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, scale));
        let hit = ray.intersect_plane(&plane).unwrap();
        assert!(hit.norm() < 1e-5, "scale {scale}: {hit}");
    }
}

#[test]
fn mat3_determinants() {
    assert_eq!(Mat3f::identity().determinant(), 1.0);
    let equal_rows = Mat3f::new(1.5, -2.0, 0.25, 1.5, -2.0, 0.25, 3.0, 7.0, -1.0);
    assert_eq!(equal_rows.determinant(), 0.0);
}

#[test]
fn identity_quat_gives_identity_matrix() {
    assert_eq!(Quatf::identity().to_mat3(), Mat3f::identity());
}

#[test]
fn normalize_yields_unit_vectors() {
    let mut rng = Rng(1);
    for _ in 0..500 {
        let v = rng.vec3() * 10.0;
        if v.norm() <= f32::EPSILON {
            continue;
        }
        assert!(near(v.normalize().norm(), 1.0, 1e-5));
        assert!(near(v.try_normalize().unwrap().norm(), 1.0, 1e-5));
    }
}

#[test]
fn zero_vector_normalization_is_reported() {
    assert_eq!(Vec3f::zero().try_normalize(), Err(MathError::ZeroLength));
    assert_eq!(Vec4f::zero().try_normalize(), Err(MathError::ZeroLength));
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = Rng(2);
    for _ in 0..100 {
        let m3 = rng.mat3();
        assert_eq!(m3.transpose().transpose(), m3);
        let m4 = rng.mat4();
        assert_eq!(m4.transpose().transpose(), m4);
    }
}

#[test]
fn well_conditioned_inverse_roundtrips() {
    let mut rng = Rng(3);
    let mut checked = 0;
    for _ in 0..300 {
        // Strictly diagonally dominant, so never near-singular
        let m = rng.mat4() + Mat4f::identity() * 5.0;
        if (m.determinant() as f64).abs() < INVERSE_THRESHOLD {
            continue;
        }
        assert_mat4_near_identity(&(m * m.inverse()), 1e-4);
        checked += 1;

        let m3 = m.rotation_matrix();
        let prod = m3 * m3.inverse();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!(near(prod.get(r, c), expected, 1e-4));
            }
        }
    }
    assert!(checked > 250);
}

#[test]
fn degenerate_inverse_is_exact_identity() {
    let mut rng = Rng(4);
    for _ in 0..50 {
        // Rank-deficient: third column is a combination of the first two
        let a = rng.vec3();
        let b = rng.vec3();
        let m = Mat3::from_cols(a, b, a * 2.0 - b);
        assert!((m.determinant() as f64).abs() < INVERSE_THRESHOLD);
        assert_eq!(m.inverse(), Mat3f::identity());
        assert!(matches!(m.try_inverse(), Err(MathError::Singular { .. })));
    }

    let flat = Mat4f::scale(0.01);
    assert_eq!(flat.inverse(), Mat4f::identity());
}

#[test]
fn rotation_quaternions_stay_unit_length() {
    let mut rng = Rng(5);
    let mut acc = Quatf::identity();
    for _ in 0..1000 {
        let axis = match rng.vec3().try_normalize() {
            Ok(axis) => axis,
            Err(_) => continue,
        };
        let q = Quat::from_axis_angle(axis, rng.f32() * 3.0);
        assert!(near(q.norm(), 1.0, 1e-5));
        acc = acc * q;
        assert!(near(acc.norm(), 1.0, 1e-5));
    }
}

#[test]
fn quaternion_and_matrix_rotations_agree() {
    let mut rng = Rng(6);
    for _ in 0..100 {
        let axis = rng.vec3().try_normalize().unwrap();
        let angle = rng.f32() * 3.0;
        let q = Quat::from_axis_angle(axis, angle);
        let m = Mat4::rotation_axis(axis, angle);
        let v = rng.vec3();
        assert_vec_near(q.rotate(v), m * v, 1e-5);
        assert_vec_near(q.to_mat3() * v, m.rotation_matrix() * v, 1e-5);
    }
}

#[test]
fn view_projection_puts_target_at_screen_center() {
    let eye = Vec3::new(4.0, 3.0, 5.0);
    let target = Vec3::new(0.5, 0.0, -1.0);
    let view = Mat4f::look_at(eye, target, Vec3::y());
    let proj = Mat4f::perspective(FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);

    let clip = (proj * view) * target.extend(1.0);
    assert!(clip.w > 0.0);
    assert!(near(clip.x / clip.w, 0.0, 1e-5));
    assert!(near(clip.y / clip.w, 0.0, 1e-5));
    assert!(clip.z.abs() < clip.w);
}

#[test]
fn display_formats() {
    assert_eq!(Vec3::new(1.0f32, -2.5, 0.0).to_string(), "( 1 -2.5 0 )");
    assert_eq!(Vec4f::new(1.0, 2.0, 3.0, 4.0).to_string(), "( 1 2 3 4 )");
    assert_eq!(
        Mat3f::identity().to_string(),
        "( 1 0 0 )\n( 0 1 0 )\n( 0 0 1 )\n"
    );
    assert_eq!(Quatf::identity().to_string(), "[ 1 ( 0 0 0 ) ]");
}

#[test]
fn error_messages() {
    let err: Box<dyn std::error::Error> = Box::new(MathError::Singular { determinant: 0.0 });
    assert!(err.to_string().starts_with("matrix is singular"));
    assert_eq!(
        MathError::ZeroMagnitude.to_string(),
        "cannot normalize a zero-magnitude quaternion"
    );
}

#[test]
fn f64_instantiation_matches() {
    let m = Mat4::<f64>::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::scale(2.0);
    let inv = m.inverse();
    let p = Vec3::new(0.5, -0.25, 4.0);
    let back = inv.transform_point(m.transform_point(p));
    assert!((back - p).norm() < 1e-12);
}
