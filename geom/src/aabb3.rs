use super::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AABB3 {
    pub ll: Vec3,
    pub ur: Vec3,
}

impl AABB3 {
    #[inline]
    pub const fn point(p: Vec3) -> Self {
        Self { ll: p, ur: p }
    }

    /// Size along x
    #[inline]
    pub fn w(&self) -> f32 {
        self.ur.x - self.ll.x
    }

    /// Size along z, the other ground axis
    #[inline]
    pub fn d(&self) -> f32 {
        self.ur.z - self.ll.z
    }

    #[inline]
    pub fn union_vec(self, other: Vec3) -> Self {
        Self {
            ll: self.ll.min(other),
            ur: self.ur.max(other),
        }
    }
}
