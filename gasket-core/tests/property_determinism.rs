//! Property 3: Deterministic emission
//!
//! Two subdivisions with identical inputs produce identical ordered triangle
//! and color sequences, down to the bit pattern of every coordinate.

use gasket_core::{ColoringMode, Mesh, Palette, Subdivider, Tetrahedron, Triangle};
use proptest::prelude::*;

fn arb_tetrahedron() -> impl Strategy<Value = Tetrahedron> {
    proptest::array::uniform4(proptest::array::uniform3(-10.0f32..10.0))
        .prop_map(Tetrahedron::from_corners)
}

fn arb_coloring() -> impl Strategy<Value = ColoringMode> {
    prop_oneof![Just(ColoringMode::PerFace), Just(ColoringMode::PerBranch)]
}

fn bits(triangle: &Triangle) -> Vec<u32> {
    triangle
        .vertices
        .iter()
        .flat_map(|v| v.coords.iter().copied())
        .chain(triangle.color.to_array())
        .map(f32::to_bits)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeated_runs_match(
        tetra in arb_tetrahedron(),
        depth in 0u32..=4,
        color_index in 0usize..5,
        coloring in arb_coloring(),
    ) {
        let palette = Palette::reference();
        let subdivider = Subdivider::new(&palette, coloring);

        let mut first = Mesh::new();
        let mut second = Mesh::new();
        subdivider.subdivide(&tetra, depth, color_index, &mut first).unwrap();
        subdivider.subdivide(&tetra, depth, color_index, &mut second).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.triangles.iter().zip(&second.triangles) {
            prop_assert_eq!(bits(a), bits(b));
        }
    }
}
