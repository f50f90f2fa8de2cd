//! Gasket Core Library - Sierpinski gasket generation and scene composition
//!
//! Recursively subdivides a seed tetrahedron into a 3D Sierpinski gasket,
//! places several independently rotating copies of it in a scene, and streams
//! the resulting colored triangles into a caller-supplied sink once per frame.
//! Rasterization and presentation belong to the shells built on top.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod projection;
pub mod scene;
pub mod session;
pub mod sink;
pub mod subdivision;
pub mod transform;

// Re-export commonly used types
pub use animation::AnimationState;
pub use config::{InstanceConfig, SceneConfig};
pub use error::{GasketError, Result};
pub use geometry::{midpoint, Mesh, Tetrahedron, Triangle, Vertex};
pub use palette::{Color, Palette};
pub use projection::{Camera, ProjectionMode};
pub use scene::{Instance, Scene};
pub use session::Session;
pub use sink::{CountingSink, RenderSurface, TransformedSink, TriangleSink};
pub use subdivision::{subdivide, ColoringMode, Subdivider, MAX_DEPTH};
pub use transform::Transform;
