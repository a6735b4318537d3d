use crate::math::{Point, Real};
use std::collections::hash_map::{Entry, HashMap};

/// Topological defects detected by [`HullMesh::check_closed`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshTopologyError {
    /// A triangle references a vertex that does not exist.
    #[error("Triangle {0} references a vertex out of bounds")]
    IndexOutOfBounds(usize),

    /// A triangle references the same vertex twice.
    #[error("Triangle {0} is degenerate")]
    DegenerateTriangle(usize),

    /// An edge is shared by more than two triangles.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),

    /// An edge belongs to a single triangle, so the mesh has a hole.
    #[error("Detected unfinished edge ({0}, {1})")]
    UnfinishedEdge(u32, u32),

    /// `V − E + F` is not 2, so the mesh is not a topological sphere.
    #[error("Euler characteristic is {0}, expected 2")]
    EulerCharacteristic(isize),
}

/// A triangle mesh produced by a [`HullBuilder`](super::HullBuilder).
///
/// Triangles index into a shared vertex buffer and are wound counter-clockwise when
/// seen from outside. The empty mesh is the result of degenerate input and means
/// "nothing to render".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl HullMesh {
    /// Creates a mesh from its vertex and index buffers, without any check.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        HullMesh { vertices, indices }
    }

    /// The mesh without any vertex or triangle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Is this mesh free of triangles?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertex buffer.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer, one entry per triangle.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The three corners of the `i`-th triangle.
    pub fn triangle(&self, i: usize) -> [Point<Real>; 3] {
        let idx = self.indices[i];
        [
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        ]
    }

    /// Iterates through the corners of every triangle, in index-buffer order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        (0..self.indices.len()).map(|i| self.triangle(i))
    }

    /// Consumes this mesh, returning its vertex and index buffers.
    pub fn into_parts(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// Positive for a closed mesh with outward-facing triangles.
    pub fn volume(&self) -> Real {
        self.triangles()
            .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)))
            .sum::<Real>()
            / 6.0
    }

    /// The largest side of the axis-aligned box enclosing all the vertices.
    pub fn extent(&self) -> Real {
        let Some(first) = self.vertices.first() else {
            return 0.0;
        };

        let (mins, maxs) = self
            .vertices
            .iter()
            .fold((first.coords, first.coords), |(mins, maxs), pt| {
                (mins.inf(&pt.coords), maxs.sup(&pt.coords))
            });

        (maxs - mins).max()
    }

    /// Checks that every vertex lies behind or on the plane of every triangle,
    /// up to `tolerance`.
    pub fn is_convex(&self, tolerance: Real) -> bool {
        self.triangles().all(|[a, b, c]| {
            let Some(normal) = (b - a).cross(&(c - a)).try_normalize(Real::EPSILON) else {
                return true;
            };

            self.vertices
                .iter()
                .all(|pt| normal.dot(&(pt - a)) <= tolerance)
        })
    }

    /// Checks that this mesh is a closed 2-manifold with the topology of a sphere.
    ///
    /// Every edge must be shared by exactly two triangles and the Euler
    /// characteristic must be 2.
    pub fn check_closed(&self) -> Result<(), MeshTopologyError> {
        let mut edges = HashMap::new();

        for (itri, tri) in self.indices.iter().enumerate() {
            if tri.iter().any(|i| *i as usize >= self.vertices.len()) {
                return Err(MeshTopologyError::IndexOutOfBounds(itri));
            }

            if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
                return Err(MeshTopologyError::DegenerateTriangle(itri));
            }

            for i in 0..3 {
                let ivtx1 = tri[i];
                let ivtx2 = tri[(i + 1) % 3];
                let edge_key = (ivtx1.min(ivtx2), ivtx1.max(ivtx2));

                match edges.entry(edge_key) {
                    Entry::Vacant(e) => {
                        let _ = e.insert(1u32);
                    }
                    Entry::Occupied(mut e) => {
                        if *e.get() >= 2 {
                            return Err(MeshTopologyError::TJunction(itri, ivtx1, ivtx2));
                        }

                        *e.get_mut() += 1;
                    }
                }
            }
        }

        if let Some(((a, b), _)) = edges.iter().find(|(_, count)| **count != 2) {
            return Err(MeshTopologyError::UnfinishedEdge(*a, *b));
        }

        let euler = self.vertices.len() as isize + self.indices.len() as isize
            - edges.len() as isize;

        if euler != 2 {
            return Err(MeshTopologyError::EulerCharacteristic(euler));
        }

        Ok(())
    }
}
