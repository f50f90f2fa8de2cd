//! Gasket Web - WASM bindings and WebGL2 rendering for gasket scenes
//!
//! JavaScript owns the frame loop: call `tick()` then `render()` from a
//! `requestAnimationFrame` callback.

use gasket_core::{GasketError, SceneConfig, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub mod surface;

pub use surface::WebGlSurface;

fn to_js_error(error: GasketError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct WebRenderer {
    session: Session,
    surface: Option<WebGlSurface>,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Renderer for the reference scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebRenderer {
        WebRenderer {
            session: Session::reference(),
            surface: None,
        }
    }

    /// Renderer for a TOML scene configuration
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: &str) -> Result<WebRenderer, JsValue> {
        let session = SceneConfig::from_toml_str(config)
            .and_then(|config| config.build())
            .map_err(to_js_error)?;
        Ok(WebRenderer {
            session,
            surface: None,
        })
    }

    /// Initialize the renderer with a canvas element
    pub fn init(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{canvas_id}' not found")))?
            .dyn_into()?;

        self.surface = Some(WebGlSurface::new(&canvas)?);
        log::debug!("WebGL surface attached to #{}", canvas_id);
        Ok(())
    }

    /// Advance the clock one frame
    pub fn tick(&mut self) {
        self.session.on_idle();
    }

    /// Render a frame
    pub fn render(&mut self) -> Result<(), JsValue> {
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| JsValue::from_str("renderer is not initialized, call init() first"))?;
        self.session.on_display(surface).map_err(to_js_error)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        self.session.set_speed(speed).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    /// Current clock angle in degrees
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 {
        self.session.clock().angle()
    }

    /// Triangles drawn per frame
    #[wasm_bindgen(js_name = triangleCount)]
    pub fn triangle_count(&self) -> f64 {
        self.session.scene().total_triangles() as f64
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}
