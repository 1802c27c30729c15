use crate::{Radians, Vec3};
use std::ops::Mul;

/// Unit quaternion, only used to rotate points around an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// axis must be normalized
    #[inline]
    pub fn angle_axis(angle: impl Into<Radians>, axis: Vec3) -> Self {
        let half = angle.into().0 * 0.5;
        let (s, c) = half.sin_cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Rotation around the vertical axis. A positive angle sends +Z towards +X,
    /// which is a clockwise turn when looking down on the ground plane.
    #[inline]
    pub fn around_up(angle: impl Into<Radians>) -> Self {
        Self::angle_axis(angle, Vec3::Y)
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let qs = self.w;
        2.0 * qv.dot(v) * qv + (qs * qs - qv.dot(qv)) * v + 2.0 * qs * qv.cross(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Degrees, Quaternion, Vec3};

    #[test]
    fn no_turn_keeps_points() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::around_up(Degrees(0.0)) * v, v);
    }

    #[test]
    fn clockwise_quarter_turn() {
        let q = Quaternion::around_up(Degrees(90.0));
        assert!((q * Vec3::Z).is_close(Vec3::X, 1e-5));
        assert!((q * Vec3::X).is_close(-Vec3::Z, 1e-5));
        assert!((q * Vec3::Y).is_close(Vec3::Y, 1e-5));
    }

    #[test]
    fn counter_clockwise_quarter_turn() {
        let q = Quaternion::around_up(Degrees(-90.0));
        assert!((q * Vec3::Z).is_close(-Vec3::X, 1e-5));
    }
}
