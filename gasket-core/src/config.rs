//! TOML scene configuration.
//!
//! Every field is optional; anything left out falls back to the reference
//! scene. A minimal file overriding two instance depths looks like:
//!
//! ```toml
//! rotation_speed = 2.5
//!
//! [[instance]]
//! translation = [0.0, 2.0, 0.0]
//! axis = [1.0, 2.0, 4.0]
//! weight = 1.0
//! depth = 2
//!
//! [[instance]]
//! translation = [0.0, -2.0, 0.0]
//! axis = [1.0, 3.0, 2.0]
//! weight = 2.0
//! depth = 4
//! ```

use std::path::Path;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::animation::AnimationState;
use crate::error::{GasketError, Result};
use crate::geometry::Tetrahedron;
use crate::palette::{Color, Palette};
use crate::scene::{Instance, Scene};
use crate::session::{Session, DEFAULT_ROTATION_SPEED};
use crate::subdivision::ColoringMode;

/// Top-level scene configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Scale applied to every instance that does not set its own
    pub base_scale: f32,
    /// Degrees the clock advances per frame
    pub rotation_speed: f32,
    /// Clock angle before the first tick
    pub start_angle: f32,
    pub coloring: ColoringMode,
    pub palette: Option<Vec<Color>>,
    pub seed: Option<[[f32; 3]; 4]>,
    #[serde(rename = "instance")]
    pub instances: Vec<InstanceConfig>,
}

/// One `[[instance]]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfig {
    pub translation: [f32; 3],
    pub axis: [f32; 3],
    pub weight: f32,
    pub depth: u32,
    #[serde(default)]
    pub scale: Option<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let reference = Scene::reference();
        let base_scale = reference.instances().first().map_or(0.5, |i| i.scale);
        let instances = reference
            .instances()
            .iter()
            .map(|i| InstanceConfig {
                translation: [i.translation.x, i.translation.y, i.translation.z],
                axis: [i.rotation_axis.x, i.rotation_axis.y, i.rotation_axis.z],
                weight: i.rotation_weight,
                depth: i.depth,
                scale: None,
            })
            .collect();

        Self {
            base_scale,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            start_angle: 0.0,
            coloring: ColoringMode::default(),
            palette: None,
            seed: None,
            instances,
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GasketError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!(
            "loaded scene config from {}: {} instances",
            path.display(),
            config.instances.len()
        );
        Ok(config)
    }

    /// Replace instance depths in order; extra depths are ignored
    pub fn override_depths(&mut self, depths: &[u32]) {
        for (instance, &depth) in self.instances.iter_mut().zip(depths) {
            instance.depth = depth;
        }
        if depths.len() > self.instances.len() {
            log::warn!(
                "{} depths given for {} instances, ignoring the rest",
                depths.len(),
                self.instances.len()
            );
        }
    }

    pub fn palette(&self) -> Result<Palette> {
        match &self.palette {
            Some(colors) => Palette::new(colors.clone()),
            None => Ok(Palette::reference()),
        }
    }

    pub fn scene(&self) -> Result<Scene> {
        let seed = self
            .seed
            .map_or_else(Tetrahedron::seed, Tetrahedron::from_corners);
        let mut scene = Scene::new(seed);
        for instance in &self.instances {
            scene.push(Instance::new(
                instance.scale.unwrap_or(self.base_scale),
                Vector3::from(instance.translation),
                Vector3::from(instance.axis),
                instance.weight,
                instance.depth,
            )?);
        }
        Ok(scene)
    }

    /// Validate everything and produce a ready-to-run session
    pub fn build(&self) -> Result<Session> {
        if !self.start_angle.is_finite() {
            return Err(GasketError::InvalidStartAngle {
                angle: self.start_angle,
            });
        }
        let session = Session::new(self.scene()?, self.palette()?, self.rotation_speed)?
            .with_coloring(self.coloring)
            .with_clock(AnimationState::new(self.start_angle));
        Ok(session)
    }
}
