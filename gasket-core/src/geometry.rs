//! Geometry primitives for gasket generation
use nalgebra::{Matrix4, Point3, Vector3};

use crate::palette::Color;

/// A 3D corner point
pub type Vertex = Point3<f32>;

/// Exact coordinate-wise mean of two vertices
pub fn midpoint(p: &Vertex, q: &Vertex) -> Vertex {
    Point3::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0, (p.z + q.z) / 2.0)
}

/// Four corner points `a, b, c, d`.
///
/// No check is made that the corners span a volume; a flat or NaN-valued
/// tetrahedron subdivides into equally flat or NaN-valued geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
    pub d: Vertex,
}

impl Tetrahedron {
    pub fn new(a: Vertex, b: Vertex, c: Vertex, d: Vertex) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_corners(corners: [[f32; 3]; 4]) -> Self {
        let [a, b, c, d] = corners.map(Point3::from);
        Self::new(a, b, c, d)
    }

    /// The regular tetrahedron every scene instance starts from
    pub fn seed() -> Self {
        Self::from_corners([
            [0.0, 0.0, 1.0],
            [0.0, 0.942809, -0.33333],
            [-0.816497, -0.471405, -0.333333],
            [0.816497, -0.471405, -0.333333],
        ])
    }

    /// Split into the four corner tetrahedra of the Sierpinski construction.
    ///
    /// Each child keeps one original corner and three edge midpoints; the
    /// central octahedron is dropped.
    pub fn subdivide(&self) -> [Tetrahedron; 4] {
        let ab = midpoint(&self.a, &self.b);
        let ac = midpoint(&self.a, &self.c);
        let ad = midpoint(&self.a, &self.d);
        let bc = midpoint(&self.b, &self.c);
        let cd = midpoint(&self.c, &self.d);
        let bd = midpoint(&self.b, &self.d);

        [
            Tetrahedron::new(self.a, ab, ac, ad),
            Tetrahedron::new(ab, self.b, bc, bd),
            Tetrahedron::new(ac, bc, self.c, cd),
            Tetrahedron::new(ad, cd, self.d, bd),
        ]
    }

    /// Faces in emission order: (a,b,c), (a,c,d), (a,d,b), (b,d,c)
    pub fn faces(&self) -> [[Vertex; 3]; 4] {
        [
            [self.a, self.b, self.c],
            [self.a, self.c, self.d],
            [self.a, self.d, self.b],
            [self.b, self.d, self.c],
        ]
    }
}

impl Default for Tetrahedron {
    fn default() -> Self {
        Self::seed()
    }
}

/// A colored triangle face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex, color: Color) -> Self {
        Self {
            vertices: [v0, v1, v2],
            color,
        }
    }

    /// Calculate the face normal from the triangle's vertices.
    ///
    /// Degenerate triangles have no direction and yield the zero vector.
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0];
        let v1 = self.vertices[1];
        let v2 = self.vertices[2];

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1
            .cross(&edge2)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// The same face with every vertex mapped through `model`
    pub fn transformed(&self, model: &Matrix4<f32>) -> Self {
        Self {
            vertices: self.vertices.map(|v| model.transform_point(&v)),
            color: self.color,
        }
    }
}

/// A collected triangle stream
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_is_exact_mean() {
        let p = Point3::new(1.0, -3.0, 0.25);
        let q = Point3::new(2.0, 5.0, -0.75);
        assert_eq!(midpoint(&p, &q), Point3::new(1.5, 1.0, -0.25));
    }

    #[test]
    fn test_subdivide_keeps_original_corners() {
        let tetra = Tetrahedron::seed();
        let children = tetra.subdivide();
        assert_eq!(children[0].a, tetra.a);
        assert_eq!(children[1].b, tetra.b);
        assert_eq!(children[2].c, tetra.c);
        assert_eq!(children[3].c, tetra.d);
    }

    #[test]
    fn test_children_share_midpoints() {
        let tetra = Tetrahedron::seed();
        let [first, second, third, fourth] = tetra.subdivide();
        // mid(a,b) is shared by the a- and b-corner children
        assert_eq!(first.b, second.a);
        // mid(b,d) is shared by the b- and d-corner children
        assert_eq!(second.d, fourth.d);
        // mid(c,d) is shared by the c- and d-corner children
        assert_eq!(third.d, fourth.b);
    }

    #[test]
    fn test_face_order() {
        let tetra = Tetrahedron::seed();
        let faces = tetra.faces();
        assert_eq!(faces[0], [tetra.a, tetra.b, tetra.c]);
        assert_eq!(faces[1], [tetra.a, tetra.c, tetra.d]);
        assert_eq!(faces[2], [tetra.a, tetra.d, tetra.b]);
        assert_eq!(faces[3], [tetra.b, tetra.d, tetra.c]);
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let triangle = Triangle::new(p, p, p, Color::RED);
        assert_eq!(triangle.calculate_normal(), Vector3::zeros());
    }

    #[test]
    fn test_transformed_moves_vertices() {
        let triangle = Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Color::GREEN,
        );
        let model = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 2.0));
        let moved = triangle.transformed(&model);
        assert_eq!(moved.vertices[0], Point3::new(0.0, 0.0, 2.0));
        assert_eq!(moved.color, Color::GREEN);
    }
}
