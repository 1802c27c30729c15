use common::logger::MyLog;
use common::unwrap_or;
use roadmesh::{LogSink, MeshSink, Road, RoadMesh, RoadSegment, SinkError};
use std::path::PathBuf;
use structopt::StructOpt;

mod obj;

use obj::ObjSink;

#[derive(StructOpt, Debug)]
#[structopt(name = "roadmesh headless", no_version)]
struct Opt {
    /// Json file holding the list of road segments
    #[structopt(parse(from_os_str))]
    segments: PathBuf,

    /// Export the mesh as a Wavefront OBJ file
    #[structopt(long, parse(from_os_str))]
    obj: Option<PathBuf>,

    /// Export the mesh as json
    #[structopt(long, parse(from_os_str))]
    json: Option<PathBuf>,

    /// Config file
    #[structopt(long, default_value = "assets/config.json", parse(from_os_str))]
    config: PathBuf,
}

/// Writes the mesh as json
struct JsonSink {
    path: PathBuf,
}

impl MeshSink for JsonSink {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        common::saveload::save_json(mesh, &self.path)
            .ok_or_else(|| SinkError::Rejected(format!("could not write {}", self.path.display())))
    }
}

/// Displays on every sink in order, stopping at the first failure.
/// Sinks that can fail go first so a rejected mesh is never half published.
struct Fanout(Vec<Box<dyn MeshSink>>);

impl MeshSink for Fanout {
    fn display(&mut self, mesh: &RoadMesh) -> Result<(), SinkError> {
        for sink in &mut self.0 {
            sink.display(mesh)?;
        }
        Ok(())
    }
}

/// The exports asked for on the command line
fn file_sinks(obj: Option<PathBuf>, json: Option<PathBuf>) -> Vec<Box<dyn MeshSink>> {
    let mut sinks: Vec<Box<dyn MeshSink>> = vec![];
    if let Some(path) = obj {
        sinks.push(Box::new(ObjSink::new(path)));
    }
    if let Some(path) = json {
        sinks.push(Box::new(JsonSink { path }));
    }
    sinks
}

fn main() {
    let opt: Opt = Opt::from_args();
    MyLog::init(common::config::peek_config(&opt.config).log_to_file);
    let config = common::config::load_config(&opt.config);

    log::info!(
        "default half width {}, reading segments from {}",
        config.default_width,
        opt.segments.display()
    );

    let segments: Vec<RoadSegment> =
        unwrap_or!(common::saveload::load_json(&opt.segments), {
            log::error!("could not read segments from {}", opt.segments.display());
            std::process::exit(1);
        });

    let mut sinks = file_sinks(opt.obj, opt.json);
    sinks.push(Box::new(LogSink));

    let mut road = Road::new(segments, Fanout(sinks));
    if let Err(e) = road.regenerate() {
        log::error!("could not build road: {}", e);
        std::process::exit(1);
    }
}
