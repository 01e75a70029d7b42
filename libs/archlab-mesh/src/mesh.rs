//! # Mesh Data Structure
//!
//! Core mesh representation: vertices, wire edges and polygon faces.

use crate::error::MeshError;
use glam::DVec3;

/// A polygon mesh with vertices, optional wire edges and n-gon faces.
///
/// Faces are wound counter-clockwise when viewed from the outward side.
/// All geometry uses f64 internally; export to f32 only happens when the
/// buffers are handed to the host for display.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(&[0, 1, 2]);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Undirected wire edges, used by face-less primitives
    edges: Vec<[u32; 2]>,
    /// Polygon faces as vertex index loops
    faces: Vec<Vec<u32>>,
    /// Surface this mesh was thickened from, if it is a solidified shell
    shell_source: Option<Box<Mesh>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::new(),
            faces: Vec::with_capacity(face_count),
            shell_source: None,
        }
    }

    /// Builds a mesh from raw arrays, checking that every index is in range
    /// and every face has at least three corners.
    ///
    /// # Example
    ///
    /// ```rust
    /// use archlab_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    /// assert!(Mesh::from_parts(vertices.clone(), vec![], vec![vec![0, 1, 2]]).is_ok());
    /// assert!(Mesh::from_parts(vertices, vec![], vec![vec![0, 1, 3]]).is_err());
    /// ```
    pub fn from_parts(
        vertices: Vec<DVec3>,
        edges: Vec<[u32; 2]>,
        faces: Vec<Vec<u32>>,
    ) -> Result<Self, MeshError> {
        let count = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            if edge.iter().any(|&v| v as usize >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "edge {i} references a vertex out of range ({count} vertices): {edge:?}"
                )));
            }
        }
        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "face {i} has {} corners, at least 3 required",
                    face.len()
                )));
            }
            if face.iter().any(|&v| v as usize >= count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {i} references a vertex out of range ({count} vertices): {face:?}"
                )));
            }
        }
        Ok(Self {
            vertices,
            edges,
            faces,
            shell_source: None,
        })
    }

    /// Builds a mesh from arrays whose indices are valid by construction.
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<DVec3>,
        edges: Vec<[u32; 2]>,
        faces: Vec<Vec<u32>>,
    ) -> Self {
        debug_assert!(faces.iter().flatten().all(|&v| (v as usize) < vertices.len()));
        Self {
            vertices,
            edges,
            faces,
            shell_source: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of wire edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a wire edge between two vertices.
    ///
    /// Indices are not range checked here; call [`Mesh::validate`] after
    /// building, or use [`Mesh::from_parts`] for checked construction.
    pub fn add_edge(&mut self, v0: u32, v1: u32) {
        self.edges.push([v0, v1]);
    }

    /// Adds a face by vertex indices.
    ///
    /// A face needs at least 3 corners. Indices may refer to vertices added
    /// later, so they are only checked by [`Mesh::validate`].
    pub fn add_face(&mut self, indices: &[u32]) {
        debug_assert!(
            indices.len() >= 3,
            "face needs at least 3 corners, got {}",
            indices.len()
        );
        self.faces.push(indices.to_vec());
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the wire edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Returns the surface a solidified shell was built from.
    #[inline]
    pub fn shell_source(&self) -> Option<&Mesh> {
        self.shell_source.as_deref()
    }

    pub(crate) fn set_shell_source(&mut self, source: Mesh) {
        self.shell_source = Some(Box::new(source));
    }

    /// Consumes the mesh and returns its raw arrays.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 2]>, Vec<Vec<u32>>) {
        (self.vertices, self.edges, self.faces)
    }

    /// Computes the area-weighted normal of a face.
    ///
    /// The length of the returned vector is twice the face area; it is zero
    /// for degenerate faces.
    pub fn face_area_vector(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        let origin = self.vertices[face[0] as usize];
        let mut sum = DVec3::ZERO;
        for pair in face[1..].windows(2) {
            let b = self.vertices[pair[0] as usize] - origin;
            let c = self.vertices[pair[1] as usize] - origin;
            sum += b.cross(c);
        }
        sum
    }

    /// Computes the unit normal of a face, or zero for degenerate faces.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        self.face_area_vector(index).normalize_or_zero()
    }

    /// Computes the average of a face's corner positions.
    pub fn face_centroid(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        let sum: DVec3 = face.iter().map(|&v| self.vertices[v as usize]).sum();
        sum / face.len() as f64
    }

    /// Splits every face into a triangle fan around its first corner.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            for pair in face[1..].windows(2) {
                triangles.push([face[0], pair[0], pair[1]]);
            }
        }
        triangles
    }

    /// Computes the signed volume enclosed by the faces, measured from the
    /// origin.
    ///
    /// Positive for closed meshes with outward winding.
    pub fn signed_volume(&self) -> f64 {
        self.triangulate()
            .iter()
            .map(|&[a, b, c]| {
                let a = self.vertices[a as usize];
                let b = self.vertices[b as usize];
                let c = self.vertices[c as usize];
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Computes per-vertex normals by summing adjacent area-weighted face
    /// normals.
    pub fn compute_normals(&self) -> Vec<DVec3> {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for (i, face) in self.faces.iter().enumerate() {
            let normal = self.face_area_vector(i);
            for &v in face {
                normals[v as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        normals
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face and edge indices are valid
    /// - Every face has at least three corners
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let count = self.vertices.len() as u32;
        let edges_ok = self.edges.iter().all(|e| e[0] < count && e[1] < count);
        let faces_ok = self
            .faces
            .iter()
            .all(|f| f.len() >= 3 && f.iter().all(|&v| v < count));
        edges_ok && faces_ok
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports fan-triangulated face indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }
}
