use crate::{IndexType, MeshError};
use geom::{Vec2, Vec3, AABB3};
use serde::{Deserialize, Serialize};

/// Road surface ready to be displayed.
///
/// `vertices` is a sequence of stations, each one a (left, right) pair.
/// `uvs` is parallel to `vertices`, `triangles` indexes into it three by three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<IndexType>,
    pub uvs: Vec<Vec2>,
}

impl RoadMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn n_stations(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn n_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    /// (left, right) vertex pairs along the road
    pub fn stations(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.vertices.chunks_exact(2).map(|w| (w[0], w[1]))
    }

    /// Middle of every station
    pub fn center_line(&self) -> Vec<Vec3> {
        self.stations().map(|(l, r)| l.midpoint(r)).collect()
    }

    pub fn triangle_iter(&self) -> impl Iterator<Item = [IndexType; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn bounds(&self) -> Option<AABB3> {
        let (first, rest) = self.vertices.split_first()?;
        Some(
            rest.iter()
                .fold(AABB3::point(*first), |acc, &v| acc.union_vec(v)),
        )
    }

    /// Checks what a renderer relies on: paired vertices, one uv per vertex,
    /// whole triangles and in-range indices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let n = self.vertices.len();
        if n % 2 != 0 {
            return Err(MeshError::OddVertexCount(n));
        }
        if self.uvs.len() != n {
            return Err(MeshError::UvCountMismatch {
                vertices: n,
                uvs: self.uvs.len(),
            });
        }
        if self.triangles.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.triangles.len()));
        }
        if let Some(&index) = self.triangles.iter().find(|&&i| i as usize >= n) {
            return Err(MeshError::IndexOutOfRange { index, vertices: n });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RoadMesh;
    use crate::MeshError;
    use geom::{vec2, vec3};

    fn quad() -> RoadMesh {
        RoadMesh {
            vertices: vec![
                vec3(-1.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(-1.0, 0.0, 3.0),
                vec3(1.0, 0.0, 3.0),
            ],
            triangles: vec![0, 2, 1, 1, 2, 3],
            uvs: vec![
                vec2(0.0, 0.0),
                vec2(1.0, 0.0),
                vec2(0.0, 1.0),
                vec2(1.0, 1.0),
            ],
        }
    }

    #[test]
    fn empty_mesh_is_valid() {
        let m = RoadMesh::default();
        assert!(m.is_empty());
        assert_eq!(m.validate(), Ok(()));
        assert!(m.bounds().is_none());
    }

    #[test]
    fn quad_accessors() {
        let m = quad();
        assert_eq!(m.validate(), Ok(()));
        assert_eq!(m.n_stations(), 2);
        assert_eq!(m.n_triangles(), 2);
        assert_eq!(
            m.center_line(),
            vec![vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 3.0)]
        );
        let b = m.bounds().unwrap();
        assert_eq!(b.ll, vec3(-1.0, 0.0, 0.0));
        assert_eq!(b.ur, vec3(1.0, 0.0, 3.0));
        assert_eq!(m.triangle_iter().last(), Some([1, 2, 3]));
    }

    #[test]
    fn validate_catches_broken_meshes() {
        let mut m = quad();
        m.triangles.push(4);
        assert_eq!(m.validate(), Err(MeshError::PartialTriangle(7)));
        m.triangles.extend([4, 4]);
        assert_eq!(
            m.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 4,
                vertices: 4
            })
        );

        let mut m = quad();
        m.uvs.pop();
        assert_eq!(
            m.validate(),
            Err(MeshError::UvCountMismatch {
                vertices: 4,
                uvs: 3
            })
        );

        let mut m = quad();
        m.vertices.pop();
        assert_eq!(m.validate(), Err(MeshError::OddVertexCount(3)));
    }
}
