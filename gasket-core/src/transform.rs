//! 3D transformation matrices for placing gasket instances
use nalgebra::{Matrix4, Unit, Vector3};

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation by `degrees` about `axis`.
    ///
    /// The axis need not be normalized. A zero-length axis has no direction,
    /// so the rotation degenerates to the identity.
    pub fn axis_angle_matrix(axis: &Vector3<f32>, degrees: f32) -> Matrix4<f32> {
        match Unit::try_new(*axis, f32::EPSILON) {
            Some(axis) => Matrix4::from_axis_angle(&axis, degrees.to_radians()),
            None => Matrix4::identity(),
        }
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Create a uniform scale matrix about the origin
    pub fn scale_matrix(scale: f32) -> Matrix4<f32> {
        Matrix4::new_scaling(scale)
    }

    /// Model matrix for one scene instance.
    ///
    /// Composed as scale, then translate, then rotate, so geometry is rotated
    /// about its own origin first, moved to its offset, and finally the whole
    /// placement is scaled about the scene origin.
    pub fn instance_matrix(
        scale: f32,
        translation: &Vector3<f32>,
        axis: &Vector3<f32>,
        degrees: f32,
    ) -> Matrix4<f32> {
        Self::scale_matrix(scale)
            * Self::translation_matrix(translation)
            * Self::axis_angle_matrix(axis, degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_zero_axis_is_identity() {
        let matrix = Transform::axis_angle_matrix(&Vector3::zeros(), 90.0);
        assert_eq!(matrix, Matrix4::identity());
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let matrix = Transform::axis_angle_matrix(&Vector3::new(0.0, 0.0, 3.0), 90.0);
        let p = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_instance_matrix_order() {
        let matrix = Transform::instance_matrix(
            0.5,
            &Vector3::new(0.0, 2.0, 0.0),
            &Vector3::new(0.0, 0.0, 1.0),
            90.0,
        );
        // rotated about its own origin, translated, then scaled with the offset
        let p = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.5, 0.0)).norm() < 1e-6);
    }
}
