//! Scene composition: several independently placed gaskets under one clock
use nalgebra::{Matrix4, Vector3};

use crate::animation::AnimationState;
use crate::error::Result;
use crate::geometry::Tetrahedron;
use crate::sink::{TransformedSink, TriangleSink};
use crate::subdivision::{triangle_count, validate_depth, Subdivider};
use crate::transform::Transform;

/// One visible copy of the gasket
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Uniform scale about the scene origin
    pub scale: f32,
    pub translation: Vector3<f32>,
    pub rotation_axis: Vector3<f32>,
    /// Multiplier on the clock angle
    pub rotation_weight: f32,
    pub depth: u32,
}

impl Instance {
    pub fn new(
        scale: f32,
        translation: Vector3<f32>,
        rotation_axis: Vector3<f32>,
        rotation_weight: f32,
        depth: u32,
    ) -> Result<Self> {
        validate_depth(depth)?;
        Ok(Self {
            scale,
            translation,
            rotation_axis,
            rotation_weight,
            depth,
        })
    }

    /// Model matrix for this instance at the clock's current angle
    pub fn model_matrix(&self, clock: &AnimationState) -> Matrix4<f32> {
        Transform::instance_matrix(
            self.scale,
            &self.translation,
            &self.rotation_axis,
            clock.angle() * self.rotation_weight,
        )
    }

    pub fn triangle_count(&self) -> u64 {
        triangle_count(self.depth)
    }
}

/// Ordered instances sharing one seed tetrahedron.
///
/// Insertion order is draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    seed: Tetrahedron,
    instances: Vec<Instance>,
}

impl Scene {
    pub fn new(seed: Tetrahedron) -> Self {
        Self {
            seed,
            instances: Vec::new(),
        }
    }

    /// Four gaskets at depths 3 through 6, placed at distance 2 along the
    /// principal axes and spinning at 1x to 4x the clock.
    pub fn reference() -> Self {
        const BASE_SCALE: f32 = 0.5;
        let placements = [
            ([0.0, 2.0, 0.0], [1.0, 2.0, 4.0], 3),
            ([2.0, 0.0, 0.0], [2.0, 1.0, 3.0], 4),
            ([-2.0, 0.0, 0.0], [3.0, 2.0, 1.0], 5),
            ([0.0, -2.0, 0.0], [1.0, 3.0, 2.0], 6),
        ];

        let instances = placements
            .into_iter()
            .enumerate()
            .map(|(i, (translation, axis, depth))| Instance {
                scale: BASE_SCALE,
                translation: Vector3::from(translation),
                rotation_axis: Vector3::from(axis),
                rotation_weight: (i + 1) as f32,
                depth,
            })
            .collect();

        Self {
            seed: Tetrahedron::seed(),
            instances,
        }
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.push(instance);
        self
    }

    pub fn seed(&self) -> &Tetrahedron {
        &self.seed
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [Instance] {
        &mut self.instances
    }

    /// Check every instance depth
    pub fn validate(&self) -> Result<()> {
        for instance in &self.instances {
            validate_depth(instance.depth)?;
        }
        Ok(())
    }

    /// Triangles one frame of this scene emits
    pub fn total_triangles(&self) -> u64 {
        self.instances.iter().map(Instance::triangle_count).sum()
    }

    /// Emit every instance, in order, into `sink`.
    ///
    /// Each instance gets its own transformed view of the sink for the
    /// duration of its generation, and starts at color index 0. All depths
    /// are checked up front so a bad instance fails the frame before any
    /// triangle is emitted.
    pub fn compose_frame<S: TriangleSink + ?Sized>(
        &self,
        clock: &AnimationState,
        subdivider: &Subdivider<'_>,
        sink: &mut S,
    ) -> Result<()> {
        self.validate()?;

        for (index, instance) in self.instances.iter().enumerate() {
            log::trace!(
                "instance {}: depth {} at {:.2} degrees",
                index,
                instance.depth,
                clock.angle() * instance.rotation_weight
            );
            let mut placed = TransformedSink::new(instance.model_matrix(clock), sink);
            subdivider.subdivide(&self.seed, instance.depth, 0, &mut placed)?;
        }

        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}
