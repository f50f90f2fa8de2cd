//! Frame session: the state a frame driver ticks and renders.
//!
//! A shell drives a [`Session`] with two calls per frame:
//! [`Session::on_idle`] advances the clock and requests a redraw, and
//! [`Session::on_display`] composes the scene into a [`RenderSurface`] and
//! tells it to present.

use crate::animation::AnimationState;
use crate::error::{GasketError, Result};
use crate::palette::Palette;
use crate::scene::Scene;
use crate::sink::{RenderSurface, TriangleSink};
use crate::subdivision::{ColoringMode, Subdivider};

/// Degrees the reference scene turns per frame
pub const DEFAULT_ROTATION_SPEED: f32 = 1.0;

fn check_speed(speed: f32) -> Result<f32> {
    if !speed.is_finite() {
        return Err(GasketError::InvalidRotationSpeed { speed });
    }
    if speed == 0.0 {
        log::warn!("rotation speed is zero, the scene will not animate");
    }
    Ok(speed)
}

/// Owns the scene configuration and the animation clock
#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    palette: Palette,
    coloring: ColoringMode,
    clock: AnimationState,
    speed: f32,
    paused: bool,
    redraw_requested: bool,
}

impl Session {
    pub fn new(scene: Scene, palette: Palette, speed: f32) -> Result<Self> {
        scene.validate()?;
        let speed = check_speed(speed)?;
        log::debug!(
            "session: {} instances, {} triangles per frame, {} degrees per frame",
            scene.instances().len(),
            scene.total_triangles(),
            speed
        );
        Ok(Self {
            scene,
            palette,
            coloring: ColoringMode::default(),
            clock: AnimationState::default(),
            speed,
            paused: false,
            redraw_requested: true,
        })
    }

    /// The reference scene and palette at the default speed
    pub fn reference() -> Self {
        Self {
            scene: Scene::reference(),
            palette: Palette::reference(),
            coloring: ColoringMode::default(),
            clock: AnimationState::default(),
            speed: DEFAULT_ROTATION_SPEED,
            paused: false,
            redraw_requested: true,
        }
    }

    pub fn with_coloring(mut self, coloring: ColoringMode) -> Self {
        self.coloring = coloring;
        self
    }

    pub fn with_clock(mut self, clock: AnimationState) -> Self {
        self.clock = clock;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn coloring(&self) -> ColoringMode {
        self.coloring
    }

    pub fn set_coloring(&mut self, coloring: ColoringMode) {
        self.coloring = coloring;
        self.redraw_requested = true;
    }

    pub fn clock(&self) -> AnimationState {
        self.clock
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        self.speed = check_speed(speed)?;
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Per-frame tick: advance the clock, then request a redraw
    pub fn on_idle(&mut self) {
        if !self.paused {
            self.clock.advance(self.speed);
        }
        self.redraw_requested = true;
    }

    /// Compose the current frame into `sink` without presenting it
    pub fn compose<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let subdivider = Subdivider::new(&self.palette, self.coloring);
        self.scene.compose_frame(&self.clock, &subdivider, sink)
    }

    /// Per-frame render: compose the scene, then tell the surface to present
    pub fn on_display<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) -> Result<()> {
        self.compose(surface)?;
        surface.present();
        self.redraw_requested = false;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::reference()
    }
}
