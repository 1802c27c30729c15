use roadmesh::{MeshSink, RoadMesh, SinkError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes the road as a Wavefront OBJ file, overwriting it on every display.
pub struct ObjSink {
    path: PathBuf,
}

impl ObjSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Positions, texture coordinates, then faces with 1-based `v/vt` indices.
pub fn write_obj(mesh: &RoadMesh, w: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        w,
        "# road: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.n_triangles()
    )?;
    writeln!(w, "o road")?;
    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(w, "vt {} {}", uv.x, uv.y)?;
    }
    for [a, b, c] in mesh.triangle_iter() {
        writeln!(w, "f {0}/{0} {1}/{1} {2}/{2}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

impl MeshSink for ObjSink {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        let mut w = BufWriter::new(File::create(&self.path)?);
        write_obj(mesh, &mut w)?;
        w.flush()?;
        log::info!("wrote {}", self.path.display());
        Ok(())
    }
}
