use crate::{IndexType, InvalidSegment, Pose, RoadError, RoadMesh, RoadSegment};
use common::error::MultiError;
use geom::{vec2, Vec2, Vec3};

/// A segment placed in the world, before welding
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub vertices: Vec<Vec3>,
    /// Pose the next segment starts from
    pub next: Pose,
}

/// Builds the mesh of a whole road starting at the origin, heading towards +Z.
///
/// An empty road gives an empty mesh. If any segment has invalid parameters
/// nothing is built and every offending segment is reported.
pub fn assemble(segments: &[RoadSegment]) -> Result<RoadMesh, RoadError> {
    assemble_from(Pose::ORIGIN, segments).map(|(mesh, _)| mesh)
}

/// Same as [`assemble`] from an arbitrary starting pose.
/// Also returns the pose at the end of the road.
pub fn assemble_from(
    start: Pose,
    segments: &[RoadSegment],
) -> Result<(RoadMesh, Pose), RoadError> {
    validate_all(segments)?;

    let n = welded_len(segments).ok_or(RoadError::TooManyVertices)?;
    let mut vertices: Vec<Vec3> = Vec::with_capacity(n);

    let end = segments
        .iter()
        .enumerate()
        .try_fold(start, |pose, (index, segment)| {
            if segment.is_degenerate() {
                log::debug!("skipping zero-extent segment #{}", index);
                return Ok(pose);
            }
            let placed = place(pose, index, segment)?;
            weld(&mut vertices, &placed.vertices);
            Ok::<_, RoadError>(placed.next)
        })?;

    let n = vertices.len();
    let mesh = RoadMesh {
        triangles: strip_triangles(n),
        uvs: strip_uvs(n),
        vertices,
    };

    log::debug!(
        "assembled {} segments into {} vertices, {} triangles",
        segments.len(),
        mesh.vertices.len(),
        mesh.n_triangles()
    );

    Ok((mesh, end))
}

/// Vertex count of the assembled road, one station less per seam.
/// `None` if it cannot be indexed with [`IndexType`].
pub fn welded_len(segments: &[RoadSegment]) -> Option<usize> {
    let mut n: usize = 0;
    for s in segments.iter().filter(|s| !s.is_degenerate()) {
        let local = s.n_local_vertices()?;
        n = match n {
            0 => local,
            _ => n.checked_add(local.saturating_sub(2))?,
        };
    }
    IndexType::try_from(n).ok()?;
    Some(n)
}

/// Reports every invalid segment, not just the first one.
pub fn validate_all(segments: &[RoadSegment]) -> Result<(), MultiError<InvalidSegment>> {
    segments
        .iter()
        .enumerate()
        .flat_map(|(index, s)| {
            s.check()
                .into_iter()
                .map(move |error| InvalidSegment { index, error })
        })
        .collect::<MultiError<_>>()
        .into_result()
}

/// Moves a segment's local geometry to `pose` and computes the pose after it.
pub fn place(pose: Pose, index: usize, segment: &RoadSegment) -> Result<Placement, RoadError> {
    let local = segment.local_vertices().map_err(|error| {
        RoadError::InvalidParameter(MultiError(vec![InvalidSegment { index, error }]))
    })?;

    let vertices: Vec<Vec3> = pose.project_all(&local).collect();

    let &[.., left, right] = vertices.as_slice() else {
        return Err(RoadError::DegenerateSegment {
            index,
            n_vertices: vertices.len(),
        });
    };
    let next = pose.advance(left, right, segment.heading_change());

    Ok(Placement { vertices, next })
}

/// Appends `placed` to `vertices`, replacing the previous trailing edge by the
/// new leading edge so the seam has a single station.
pub fn weld(vertices: &mut Vec<Vec3>, placed: &[Vec3]) {
    if vertices.len() >= 2 {
        vertices.truncate(vertices.len() - 2);
    }
    vertices.extend_from_slice(placed);
}

/// Two triangles per pair of consecutive stations.
pub fn strip_triangles(n_vertices: usize) -> Vec<IndexType> {
    let n_quads = n_vertices.saturating_sub(2) / 2;
    let mut triangles = Vec::with_capacity(n_quads * 6);
    for i in (0..n_quads).map(|q| (q * 2) as IndexType) {
        triangles.extend_from_slice(&[i, i + 2, i + 1, i + 1, i + 2, i + 3]);
    }
    triangles
}

/// u is 0 on the left edge and 1 on the right one, v is the station index so
/// the texture repeats once per station.
pub fn strip_uvs(n_vertices: usize) -> Vec<Vec2> {
    (0..n_vertices / 2)
        .flat_map(|station| {
            let v = station as f32;
            [vec2(0.0, v), vec2(1.0, v)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentError;
    use geom::{vec3, Degrees};

    #[test]
    fn triangles_of_small_strips() {
        assert!(strip_triangles(0).is_empty());
        assert!(strip_triangles(2).is_empty());
        assert_eq!(strip_triangles(4), vec![0, 2, 1, 1, 2, 3]);
        assert_eq!(
            strip_triangles(6),
            vec![0, 2, 1, 1, 2, 3, 2, 4, 3, 3, 4, 5]
        );
    }

    #[test]
    fn uvs_follow_stations() {
        assert_eq!(
            strip_uvs(6),
            vec![
                vec2(0.0, 0.0),
                vec2(1.0, 0.0),
                vec2(0.0, 1.0),
                vec2(1.0, 1.0),
                vec2(0.0, 2.0),
                vec2(1.0, 2.0),
            ]
        );
    }

    #[test]
    fn weld_replaces_trailing_edge() {
        let mut v = vec![];
        weld(&mut v, &[vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)]);
        assert_eq!(v.len(), 2);
        weld(
            &mut v,
            &[
                vec3(0.0, 0.0, 0.1),
                vec3(1.0, 0.0, 0.1),
                vec3(0.0, 0.0, 1.0),
                vec3(1.0, 0.0, 1.0),
            ],
        );
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], vec3(0.0, 0.0, 0.1));
    }

    #[test]
    fn place_straight_after_turn() {
        let pose = Pose::new(vec3(0.0, 0.0, 10.0), Degrees(90.0));
        let placed = place(pose, 3, &RoadSegment::straight(4.0, 1.0)).unwrap();
        assert_eq!(placed.vertices.len(), 4);
        // heading +X, left edge is towards +Z
        assert!(placed.vertices[0].is_close(vec3(0.0, 0.0, 11.0), 1e-5));
        assert!(placed.next.position.is_close(vec3(4.0, 0.0, 10.0), 1e-5));
        assert_eq!(placed.next.heading, Degrees(90.0));
    }

    #[test]
    fn welded_len_matches_assembly() {
        let s = [
            RoadSegment::straight(5.0, 1.0),
            RoadSegment::straight(0.0, 1.0),
            RoadSegment::new(2.0, 6.0, 37.0, 1.0),
        ];
        assert_eq!(welded_len(&s), Some(assemble(&s).unwrap().vertices.len()));
        assert_eq!(welded_len(&[]), Some(0));
    }

    #[test]
    fn huge_arc_is_an_error() {
        let err = assemble(&[
            RoadSegment::straight(1.0, 1.0),
            RoadSegment::new(0.0, 10.0, 1e30, 1.0),
        ])
        .unwrap_err();
        assert_eq!(
            err.invalid_segments(),
            &[InvalidSegment {
                index: 1,
                error: SegmentError::TooManyFacets(1e30)
            }]
        );
    }

    #[test]
    fn road_too_long_to_index_is_an_error() {
        // each arc alone fits in 32 bit indices, both together do not
        let big = RoadSegment::arc(10.0, 5.0 * 1.5e9, 1.0);
        assert!(big.validate().is_ok());
        assert_eq!(welded_len(&[big, big]), None);
        assert!(matches!(
            assemble(&[big, big]),
            Err(RoadError::TooManyVertices)
        ));
    }

    #[test]
    fn place_reports_index() {
        let err = place(Pose::ORIGIN, 7, &RoadSegment::straight(1.0, -1.0)).unwrap_err();
        assert_eq!(err.invalid_segments()[0].index, 7);
    }
}
