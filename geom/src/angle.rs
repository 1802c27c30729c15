use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::ops::Add;

/// Signed angle in degrees. Headings and turn angles are expressed in degrees,
/// positive being clockwise when seen from above.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
#[serde(from = "f32", into = "f32")]
#[repr(transparent)]
pub struct Degrees(pub f32);

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
#[repr(transparent)]
pub struct Radians(pub f32);

impl Radians {
    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
}

impl Degrees {
    pub const ZERO: Self = Degrees(0.0);

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * (PI / 180.0))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Degrees {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<f32> for Degrees {
    #[inline]
    fn from(v: f32) -> Self {
        Self(v)
    }
}

impl From<Degrees> for f32 {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.0
    }
}
