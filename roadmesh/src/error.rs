use common::error::MultiError;
use thiserror::Error;

/// What is wrong with a single segment's parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SegmentError {
    #[error("width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("length must not be negative, got {0}")]
    NegativeLength(f32),
    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
    #[error("an arc of {0} degrees has more facets than a mesh can index")]
    TooManyFacets(f32),
}

/// A [`SegmentError`] located in the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("segment #{index}: {error}")]
pub struct InvalidSegment {
    pub index: usize,
    #[source]
    pub error: SegmentError,
}

/// A built mesh breaking one of its structural invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("vertex count {0} is odd")]
    OddVertexCount(usize),
    #[error("{uvs} uvs for {vertices} vertices")]
    UvCountMismatch { vertices: usize, uvs: usize },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("mesh rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum RoadError {
    #[error("invalid road segments:\n{0}")]
    InvalidParameter(#[from] MultiError<InvalidSegment>),
    #[error("segment #{index} produced {n_vertices} vertices, at least 2 are needed")]
    DegenerateSegment { index: usize, n_vertices: usize },
    #[error("the road has more vertices than can be indexed with 32 bits")]
    TooManyVertices,
    #[error("malformed mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("sink failed: {0}")]
    Sink(#[from] SinkError),
}

impl RoadError {
    /// Segment-level errors carried by this error, if any
    pub fn invalid_segments(&self) -> &[InvalidSegment] {
        match self {
            RoadError::InvalidParameter(m) => &m.0,
            _ => &[],
        }
    }
}
