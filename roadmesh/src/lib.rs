//! Procedural road ribbon meshes.
//!
//! A road is described as an ordered list of [`RoadSegment`]s, each one a
//! straight run optionally followed by a circular arc. [`assemble`] places the
//! segments one after the other, welds them together and derives the triangle
//! strip and its texture coordinates. The result is a [`RoadMesh`] that can be
//! handed to any [`MeshSink`].

mod assemble;
mod error;
mod mesh;
mod pose;
mod road;
mod segment;
mod sink;

#[cfg(test)]
mod tests;

pub use assemble::*;
pub use error::*;
pub use mesh::*;
pub use pose::*;
pub use road::*;
pub use segment::*;
pub use sink::*;

/// Type of the triangle indices
pub type IndexType = u32;
