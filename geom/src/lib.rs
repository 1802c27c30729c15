//! Small f32 math toolbox used by the road mesh generator.
//!
//! The world is y-up: roads lie on the `y = 0` plane and headings rotate
//! around [`Vec3::Y`].

mod aabb3;
mod angle;
mod quaternion;
mod v2;
mod v3;

pub use aabb3::*;
pub use angle::*;
pub use quaternion::*;
pub use v2::*;
pub use v3::*;
