//! Consumers of the generated triangle stream.
//!
//! The kernel and scene composer never rasterize anything themselves. They
//! hand each colored triangle to a [`TriangleSink`]; a [`RenderSurface`] is a
//! sink that can also be told when a frame is complete.

use nalgebra::Matrix4;

use crate::geometry::{Mesh, Triangle};

/// Receives emitted triangles in generation order
pub trait TriangleSink {
    fn emit(&mut self, triangle: &Triangle);
}

/// A sink that is told when every triangle of a frame has been emitted
pub trait RenderSurface: TriangleSink {
    /// Frame complete, flush
    fn present(&mut self);
}

impl TriangleSink for Mesh {
    fn emit(&mut self, triangle: &Triangle) {
        self.add_triangle(*triangle);
    }
}

impl<F> TriangleSink for F
where
    F: FnMut(&Triangle),
{
    fn emit(&mut self, triangle: &Triangle) {
        self(triangle)
    }
}

/// Counts triangles without keeping them
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    pub count: u64,
}

impl TriangleSink for CountingSink {
    fn emit(&mut self, _triangle: &Triangle) {
        self.count += 1;
    }
}

/// Maps every triangle through a model matrix before forwarding it.
///
/// One of these is built per scene instance and dropped when that instance
/// has been generated, so no transform outlives its instance.
pub struct TransformedSink<'a, S: TriangleSink + ?Sized> {
    model: Matrix4<f32>,
    inner: &'a mut S,
}

impl<'a, S: TriangleSink + ?Sized> TransformedSink<'a, S> {
    pub fn new(model: Matrix4<f32>, inner: &'a mut S) -> Self {
        Self { model, inner }
    }
}

impl<S: TriangleSink + ?Sized> TriangleSink for TransformedSink<'_, S> {
    fn emit(&mut self, triangle: &Triangle) {
        self.inner.emit(&triangle.transformed(&self.model));
    }
}
