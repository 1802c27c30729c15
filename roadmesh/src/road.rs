use crate::{assemble, MeshSink, RoadError, RoadMesh, RoadSegment};

/// A road attached to a sink. The mesh is rebuilt from scratch each time the
/// segments change, and only published when the build succeeds so a bad edit
/// leaves the previous mesh on display.
pub struct Road<S: MeshSink> {
    segments: Vec<RoadSegment>,
    sink: S,
    generation: u64,
}

impl<S: MeshSink> Road<S> {
    /// Doesn't build anything yet, call [`Road::regenerate`]
    pub fn new(segments: Vec<RoadSegment>, sink: S) -> Self {
        Self {
            segments,
            sink,
            generation: 0,
        }
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of meshes successfully published
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the segments and rebuilds
    pub fn set_segments(&mut self, segments: Vec<RoadSegment>) -> Result<&mut Self, RoadError> {
        self.segments = segments;
        self.regenerate()
    }

    /// Edits the segments in place and rebuilds
    pub fn edit(&mut self, f: impl FnOnce(&mut Vec<RoadSegment>)) -> Result<&mut Self, RoadError> {
        f(&mut self.segments);
        self.regenerate()
    }

    pub fn build(&self) -> Result<RoadMesh, RoadError> {
        let mesh = assemble(&self.segments)?;
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn regenerate(&mut self) -> Result<&mut Self, RoadError> {
        let mesh = match self.build() {
            Ok(mesh) => mesh,
            Err(e) => {
                log::warn!("road not regenerated, keeping previous mesh: {}", e);
                return Err(e);
            }
        };
        self.sink.display(&mesh)?;
        self.generation += 1;
        Ok(self)
    }
}
