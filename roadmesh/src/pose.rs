use geom::{Degrees, Quaternion, Vec3};
use serde::{Deserialize, Serialize};

/// Where the next segment attaches: the center of the previous trailing edge
/// and the accumulated heading.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    /// Sum of the `theta` of every segment placed so far
    pub heading: Degrees,
}

impl Pose {
    pub const ORIGIN: Self = Self {
        position: Vec3::ZERO,
        heading: Degrees::ZERO,
    };

    pub fn new(position: Vec3, heading: Degrees) -> Self {
        Self { position, heading }
    }

    #[inline]
    pub fn rotation(&self) -> Quaternion {
        Quaternion::around_up(self.heading)
    }

    /// Direction the road is heading towards
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Local segment space to world space
    #[inline]
    pub fn project(&self, local: Vec3) -> Vec3 {
        self.rotation() * local + self.position
    }

    pub fn project_all<'a>(&self, local: &'a [Vec3]) -> impl Iterator<Item = Vec3> + 'a {
        let rot = self.rotation();
        let pos = self.position;
        local.iter().map(move |&v| rot * v + pos)
    }

    /// Pose after a segment whose world trailing edge is `(left, right)` and
    /// which turned by `theta`.
    #[inline]
    pub fn advance(self, left: Vec3, right: Vec3, theta: Degrees) -> Self {
        Self {
            position: left.midpoint(right),
            heading: self.heading + theta,
        }
    }
}
