//! Shared helpers for ortho benchmarks: seeded RNG, input generators.

use ortho::{Mat3, Mat4, Plane, Quat, Ray, Vec3};

/// xoshiro256** PRNG so every run benchmarks the same inputs.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = x ^ (x >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        self.f64() as f32
    }

    fn triple(&mut self) -> [f32; 3] {
        [self.f32(), self.f32(), self.f32()]
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

// --- ortho generators ---

pub fn random_vec3f32(n: usize) -> Vec<Vec3<f32>> {
    let mut rng = make_rng();
    (0..n).map(|_| Vec3::from(rng.triple())).collect()
}

pub fn random_vec3f64(n: usize) -> Vec<Vec3<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f64(), rng.f64(), rng.f64()))
        .collect()
}

/// Diagonally dominant, so inversion takes the full path rather than the
/// identity fallback.
pub fn random_mat3f32(n: usize) -> Vec<Mat3<f32>> {
    random_f32_mat3s(n)
        .iter()
        .map(Mat3::from_cols_array)
        .collect()
}

pub fn random_mat4f32(n: usize) -> Vec<Mat4<f32>> {
    random_f32_mat4s(n)
        .iter()
        .map(Mat4::from_cols_array)
        .collect()
}

pub fn random_quatf32(n: usize) -> Vec<Quat<f32>> {
    random_f32_triples(2 * n)
        .chunks_exact(2)
        .map(|p| {
            let axis = Vec3::from(p[0]).try_normalize().unwrap_or(Vec3::z());
            Quat::from_axis_angle(axis, p[1][0] * 3.0)
        })
        .collect()
}

/// Rays from above the xy plane aimed down at it, paired with that plane.
pub fn random_ray_hits(n: usize) -> Vec<(Ray<f32>, Plane<f32>)> {
    let plane = Plane::new(Vec3::zero(), Vec3::z());
    random_f32_triples(2 * n)
        .chunks_exact(2)
        .map(|p| {
            let origin = Vec3::new(p[0][0], p[0][1], 2.0 + p[0][2]);
            let dir = Vec3::new(p[1][0], p[1][1], -1.0);
            (Ray::new(origin, dir), plane)
        })
        .collect()
}

// --- raw data for glam ---

pub fn random_f32_triples(n: usize) -> Vec<[f32; 3]> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.triple()).collect()
}

/// Column-major, diagonal boosted by 4.
pub fn random_f32_mat3s(n: usize) -> Vec<[f32; 9]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = [0.0f32; 9];
            for (i, v) in m.iter_mut().enumerate() {
                *v = rng.f32() + if i % 4 == 0 { 4.0 } else { 0.0 };
            }
            m
        })
        .collect()
}

/// Column-major, diagonal boosted by 5.
pub fn random_f32_mat4s(n: usize) -> Vec<[f32; 16]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = [0.0f32; 16];
            for (i, v) in m.iter_mut().enumerate() {
                *v = rng.f32() + if i % 5 == 0 { 5.0 } else { 0.0 };
            }
            m
        })
        .collect()
}
