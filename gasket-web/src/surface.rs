//! WebGL2 rendering surface for the triangle stream
use gasket_core::{Camera, RenderSurface, Triangle, TriangleSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

/// Position (x, y, z) + color (r, g, b)
pub const FLOATS_PER_VERTEX: usize = 6;

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_color;
uniform mat4 u_view_projection;
out vec3 v_color;
void main() {
    v_color = a_color;
    gl_Position = u_view_projection * vec4(a_position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec3 v_color;
out vec4 frag_color;
void main() {
    frag_color = vec4(v_color, 1.0);
}
"#;

/// Append one triangle as three interleaved vertices
pub fn pack_triangle(out: &mut Vec<f32>, triangle: &Triangle) {
    let color = triangle.color.to_array();
    for vertex in &triangle.vertices {
        out.extend_from_slice(&[vertex.x, vertex.y, vertex.z]);
        out.extend_from_slice(&color);
    }
}

/// Collects a frame on the CPU and draws it in one call on present.
///
/// The vertex buffer is re-uploaded every frame; nothing is cached on the GPU.
pub struct WebGlSurface {
    context: Gl,
    program: WebGlProgram,
    buffer: WebGlBuffer,
    view_projection_location: WebGlUniformLocation,
    camera: Camera,
    vertices: Vec<f32>,
}

impl WebGlSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context: Gl = canvas
            .get_context("webgl2")?
            .ok_or_else(|| JsValue::from_str("browser does not support WebGL2"))?
            .dyn_into()?;

        let vs = compile_gl_shader(&context, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_gl_shader(&context, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;

        let program = context
            .create_program()
            .ok_or_else(|| JsValue::from_str("failed to create GL program"))?;
        context.attach_shader(&program, &vs);
        context.attach_shader(&program, &fs);
        context.link_program(&program);

        if !context
            .get_program_parameter(&program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = context.get_program_info_log(&program).unwrap_or_default();
            return Err(JsValue::from_str(&format!("GL program link failed: {log}")));
        }
        context.use_program(Some(&program));

        let buffer = context
            .create_buffer()
            .ok_or_else(|| JsValue::from_str("failed to create GL buffer"))?;
        context.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));

        let stride = (FLOATS_PER_VERTEX * 4) as i32;
        context.enable_vertex_attrib_array(0);
        context.vertex_attrib_pointer_with_i32(0, 3, Gl::FLOAT, false, stride, 0);
        context.enable_vertex_attrib_array(1);
        context.vertex_attrib_pointer_with_i32(1, 3, Gl::FLOAT, false, stride, 12);

        let view_projection_location = context
            .get_uniform_location(&program, "u_view_projection")
            .ok_or_else(|| JsValue::from_str("u_view_projection uniform not found"))?;

        // White background, depth tested
        context.clear_color(1.0, 1.0, 1.0, 1.0);
        context.enable(Gl::DEPTH_TEST);

        let (width, height) = (canvas.width(), canvas.height());
        context.viewport(0, 0, width as i32, height as i32);

        Ok(Self {
            context,
            program,
            buffer,
            view_projection_location,
            camera: Camera::new(width, height),
            vertices: Vec::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.context.viewport(0, 0, width as i32, height as i32);
    }
}

impl TriangleSink for WebGlSurface {
    fn emit(&mut self, triangle: &Triangle) {
        pack_triangle(&mut self.vertices, triangle);
    }
}

impl RenderSurface for WebGlSurface {
    fn present(&mut self) {
        let gl = &self.context;
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.view_projection_location),
            false,
            self.camera.view_projection().as_slice(),
        );

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.buffer));
        let array = js_sys::Float32Array::from(self.vertices.as_slice());
        gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STREAM_DRAW);
        gl.draw_arrays(
            Gl::TRIANGLES,
            0,
            (self.vertices.len() / FLOATS_PER_VERTEX) as i32,
        );

        self.vertices.clear();
    }
}

fn compile_gl_shader(gl: &Gl, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or_else(|| JsValue::from_str("failed to create GL shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        return Err(JsValue::from_str(&format!(
            "GL shader compile failed: {log}"
        )));
    }

    Ok(shader)
}
