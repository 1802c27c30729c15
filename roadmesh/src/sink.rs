use crate::{RoadMesh, SinkError};

/// Something that can show a road mesh: a renderer, an exporter...
///
/// `display` is only ever called with a mesh that passed
/// [`RoadMesh::validate`].
pub trait MeshSink {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError>;
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        (**self).display(mesh)
    }
}

impl<S: MeshSink + ?Sized> MeshSink for Box<S> {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        (**self).display(mesh)
    }
}

/// Keeps the last displayed mesh in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub current: Option<RoadMesh>,
    pub n_displayed: usize,
}

impl MeshSink for MemorySink {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        self.current = Some(mesh.clone());
        self.n_displayed += 1;
        Ok(())
    }
}

/// Only logs a summary of the mesh
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl MeshSink for LogSink {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        match mesh.bounds() {
            Some(b) => log::info!(
                "road mesh: {} vertices, {} triangles, {} stations, {}x{} from {} to {}",
                mesh.vertices.len(),
                mesh.n_triangles(),
                mesh.n_stations(),
                b.w(),
                b.d(),
                b.ll,
                b.ur
            ),
            None => log::info!("road mesh: empty"),
        }
        Ok(())
    }
}
