use crate::{Scalar, Vec3};

/// Infinite plane through `point` with normal `normal`.
///
/// The normal is not normalized on construction; `signed_distance` is only
/// a true distance when it is unit-length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Plane<S> {
    pub point: Vec3<S>,
    pub normal: Vec3<S>,
}

impl<S: Scalar> Plane<S> {
    #[inline]
    pub fn new(point: Vec3<S>, normal: Vec3<S>) -> Self {
        Self { point, normal }
    }

    /// Positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, p: Vec3<S>) -> S {
        (p - self.point).dot(self.normal)
    }
}

/// Half-line starting at `origin`. `dir` need not be unit-length; distances
/// returned by [`Ray::plane_distance`] are in units of `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Ray<S> {
    pub origin: Vec3<S>,
    pub dir: Vec3<S>,
}

impl<S: Scalar> Ray<S> {
    #[inline]
    pub fn new(origin: Vec3<S>, dir: Vec3<S>) -> Self {
        Self { origin, dir }
    }

    /// Point at parameter `t`: `origin + dir * t`
    #[inline]
    pub fn at(&self, t: S) -> Vec3<S> {
        self.origin + self.dir * t
    }

    /// Ray parameter of the plane crossing.
    ///
    /// `None` when the ray runs parallel to the plane or the crossing is not
    /// strictly in front of the origin. Parallelism is judged on the angle
    /// between `dir` and `normal`, so neither needs to be unit-length.
    pub fn plane_distance(&self, plane: &Plane<S>) -> Option<S> {
        let denom = self.dir.dot(plane.normal);
        if denom.abs() <= S::EPSILON * self.dir.norm() * plane.normal.norm() {
            return None;
        }
        let t = -plane.signed_distance(self.origin) / denom;
        if t > S::ZERO && t.is_finite() { Some(t) } else { None }
    }

    /// Point where the ray hits `plane`, if it does.
    pub fn intersect_plane(&self, plane: &Plane<S>) -> Option<Vec3<S>> {
        self.plane_distance(plane).map(|t| self.at(t))
    }
}
