//! Recursive tetrahedron subdivision into a Sierpinski gasket.
//!
//! A call at depth `m > 0` splits the tetrahedron into its four corner
//! children and recurses on each at depth `m - 1`. At depth zero the
//! tetrahedron is emitted as four colored faces. The output of a call is
//! therefore exactly `4 * 4^depth` triangles, in a fixed depth-first order.

use serde::Deserialize;

use crate::error::{GasketError, Result};
use crate::geometry::{Tetrahedron, Triangle};
use crate::palette::Palette;
use crate::sink::TriangleSink;

/// Deepest subdivision accepted. Depth 10 already emits over four million
/// triangles per instance.
pub const MAX_DEPTH: u32 = 10;

/// How leaf faces pick their color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColoringMode {
    /// Every leaf paints its four faces with palette slots 0, 1, 2 and 3.
    /// The branch color index is carried through the recursion but unused.
    #[default]
    PerFace,
    /// Every leaf paints all four faces with the color of its branch index,
    /// which advances by one palette slot per level.
    PerBranch,
}

/// Reject depths the recursion is not allowed to reach
pub fn validate_depth(depth: u32) -> Result<u32> {
    if depth > MAX_DEPTH {
        return Err(GasketError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(depth)
}

/// Leaf tetrahedra produced at `depth`
pub fn leaf_count(depth: u32) -> u64 {
    4u64.saturating_pow(depth)
}

/// Triangles emitted at `depth`
pub fn triangle_count(depth: u32) -> u64 {
    leaf_count(depth).saturating_mul(4)
}

/// Drives the recursion for one palette and coloring mode
#[derive(Debug, Clone, Copy)]
pub struct Subdivider<'a> {
    palette: &'a Palette,
    coloring: ColoringMode,
}

impl<'a> Subdivider<'a> {
    pub fn new(palette: &'a Palette, coloring: ColoringMode) -> Self {
        Self { palette, coloring }
    }

    pub fn palette(&self) -> &Palette {
        self.palette
    }

    pub fn coloring(&self) -> ColoringMode {
        self.coloring
    }

    /// Emit the gasket of `tetra` at `depth` into `sink`.
    ///
    /// The depth is validated before anything is emitted, so an error
    /// leaves the sink untouched.
    pub fn subdivide<S: TriangleSink + ?Sized>(
        &self,
        tetra: &Tetrahedron,
        depth: u32,
        color_index: usize,
        sink: &mut S,
    ) -> Result<()> {
        validate_depth(depth)?;
        self.divide(tetra, depth, color_index % self.palette.len(), sink);
        Ok(())
    }

    fn divide<S: TriangleSink + ?Sized>(
        &self,
        tetra: &Tetrahedron,
        depth: u32,
        color_index: usize,
        sink: &mut S,
    ) {
        if depth == 0 {
            self.emit_leaf(tetra, color_index, sink);
            return;
        }

        let next_color = (color_index + 1) % self.palette.len();
        for child in &tetra.subdivide() {
            self.divide(child, depth - 1, next_color, sink);
        }
    }

    fn emit_leaf<S: TriangleSink + ?Sized>(
        &self,
        tetra: &Tetrahedron,
        color_index: usize,
        sink: &mut S,
    ) {
        for (slot, [v0, v1, v2]) in tetra.faces().into_iter().enumerate() {
            let color = match self.coloring {
                ColoringMode::PerFace => self.palette.color_at(slot as i64),
                ColoringMode::PerBranch => self.palette.color_at(color_index as i64),
            };
            sink.emit(&Triangle::new(v0, v1, v2, color));
        }
    }
}

/// Emit the gasket of `tetra` with per-face coloring
pub fn subdivide<S: TriangleSink + ?Sized>(
    tetra: &Tetrahedron,
    depth: u32,
    color_index: usize,
    palette: &Palette,
    sink: &mut S,
) -> Result<()> {
    Subdivider::new(palette, ColoringMode::PerFace).subdivide(tetra, depth, color_index, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Mesh;
    use crate::palette::Color;
    use crate::sink::CountingSink;

    #[test]
    fn test_depth_zero_emits_four_faces() {
        let palette = Palette::reference();
        let tetra = Tetrahedron::seed();
        let mut mesh = Mesh::new();
        subdivide(&tetra, 0, 0, &palette, &mut mesh).unwrap();

        assert_eq!(mesh.len(), 4);
        let faces = tetra.faces();
        let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
        for (i, triangle) in mesh.triangles.iter().enumerate() {
            assert_eq!(triangle.vertices, faces[i]);
            assert_eq!(triangle.color, colors[i]);
        }
    }

    #[test]
    fn test_depth_one_emits_sixteen() {
        let palette = Palette::reference();
        let mut counter = CountingSink::default();
        subdivide(&Tetrahedron::seed(), 1, 0, &palette, &mut counter).unwrap();
        assert_eq!(counter.count, 16);
    }

    #[test]
    fn test_depth_one_leaves_are_corner_children() {
        let palette = Palette::reference();
        let tetra = Tetrahedron::seed();
        let mut mesh = Mesh::new();
        subdivide(&tetra, 1, 0, &palette, &mut mesh).unwrap();

        for (leaf, child) in mesh.triangles.chunks(4).zip(tetra.subdivide()) {
            assert_eq!(leaf[0].vertices, child.faces()[0]);
            assert_eq!(leaf[3].vertices, child.faces()[3]);
        }
    }

    #[test]
    fn test_per_face_ignores_color_index() {
        let palette = Palette::reference();
        let tetra = Tetrahedron::seed();
        let mut from_zero = Mesh::new();
        let mut from_three = Mesh::new();
        subdivide(&tetra, 2, 0, &palette, &mut from_zero).unwrap();
        subdivide(&tetra, 2, 3, &palette, &mut from_three).unwrap();

        assert_eq!(from_zero.triangles, from_three.triangles);
        for leaf in from_zero.triangles.chunks(4) {
            let colors: Vec<Color> = leaf.iter().map(|t| t.color).collect();
            assert_eq!(
                colors,
                vec![Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW]
            );
        }
    }

    #[test]
    fn test_per_branch_colors_follow_depth() {
        let palette = Palette::reference();
        let subdivider = Subdivider::new(&palette, ColoringMode::PerBranch);
        let mut mesh = Mesh::new();
        subdivider
            .subdivide(&Tetrahedron::seed(), 2, 0, &mut mesh)
            .unwrap();

        // two levels below index 0 lands on slot 2
        assert!(mesh.triangles.iter().all(|t| t.color == Color::BLUE));

        let mut wrapped = Mesh::new();
        subdivider
            .subdivide(&Tetrahedron::seed(), 1, 4, &mut wrapped)
            .unwrap();
        assert!(wrapped.triangles.iter().all(|t| t.color == Color::RED));
    }

    #[test]
    fn test_excessive_depth_rejected_before_emitting() {
        let palette = Palette::reference();
        let mut counter = CountingSink::default();
        let result = subdivide(&Tetrahedron::seed(), MAX_DEPTH + 1, 0, &palette, &mut counter);

        assert!(matches!(
            result,
            Err(GasketError::DepthTooLarge { depth, max }) if depth == MAX_DEPTH + 1 && max == MAX_DEPTH
        ));
        assert_eq!(counter.count, 0);
    }

    #[test]
    fn test_degenerate_seed_is_accepted() {
        let palette = Palette::reference();
        let flat = Tetrahedron::from_corners([[0.0, 0.0, 0.0]; 4]);
        let mut counter = CountingSink::default();
        subdivide(&flat, 2, 0, &palette, &mut counter).unwrap();
        assert_eq!(counter.count, triangle_count(2));
    }

    #[test]
    fn test_counts() {
        assert_eq!(leaf_count(0), 1);
        assert_eq!(triangle_count(0), 4);
        assert_eq!(triangle_count(3), 256);
        assert_eq!(leaf_count(MAX_DEPTH), 1_048_576);
    }
}
