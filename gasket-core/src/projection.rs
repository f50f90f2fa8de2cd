//! Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Half-height of the orthographic view volume around the scene origin
pub const ORTHO_EXTENT: f32 = 2.0;
/// Half-depth of the view volume
pub const ORTHO_DEPTH: f32 = 10.0;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera configuration for viewing a composed scene
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub width: u32,
    pub height: u32,
    /// Width of one output pixel relative to its height. Terminal cells are
    /// roughly twice as tall as they are wide.
    pub pixel_aspect: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    /// Orthographic camera looking down -z at the scene origin
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, ORTHO_DEPTH),
            target: Point3::origin(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            width: width.max(1),
            height: height.max(1),
            pixel_aspect: 1.0,
            mode: ProjectionMode::Orthographic,
        }
    }

    pub fn with_pixel_aspect(mut self, pixel_aspect: f32) -> Self {
        self.pixel_aspect = pixel_aspect;
        self
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Track a new viewport size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Visible width over visible height
    pub fn aspect(&self) -> f32 {
        self.width as f32 * self.pixel_aspect / self.height as f32
    }

    /// Left, right, bottom and top of the orthographic volume.
    ///
    /// The shorter side always spans `[-2, 2]`; the longer side is widened
    /// by the aspect ratio so the scene is never stretched.
    pub fn orthographic_bounds(&self) -> (f32, f32, f32, f32) {
        let aspect = self.aspect();
        if aspect <= 1.0 {
            let half = ORTHO_EXTENT / aspect;
            (-ORTHO_EXTENT, ORTHO_EXTENT, -half, half)
        } else {
            let half = ORTHO_EXTENT * aspect;
            (-half, half, -ORTHO_EXTENT, ORTHO_EXTENT)
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect(), self.fov, 0.1, 2.0 * ORTHO_DEPTH)
            }
            ProjectionMode::Orthographic => {
                let (left, right, bottom, top) = self.orthographic_bounds();
                Matrix4::new_orthographic(left, right, bottom, top, 0.0, 2.0 * ORTHO_DEPTH)
            }
        }
    }

    /// Projection times view
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a scene-space point to screen space.
    ///
    /// Returns `(x, y, depth)` with depth in normalized device units, smaller
    /// meaning closer, or `None` when the point falls outside the view volume.
    pub fn project_to_screen(&self, point: &Point3<f32>) -> Option<(f32, f32, f32)> {
        let ndc = self.view_projection().transform_point(point);

        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }

        // Points beyond the sides are kept; the rasterizer clips to bounds
        let screen_x = (ndc.x + 1.0) * 0.5 * self.width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * self.height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(500, 500)
    }
}
