//! ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use gasket_core::{Camera, Color, ProjectionMode, RenderSurface, Triangle, TriangleSink};
use nalgebra::Vector3;
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Terminal cells are about twice as tall as they are wide
pub const CELL_ASPECT: f32 = 0.5;

/// Darkest a lit face is allowed to get, so back-facing faces stay visible
const AMBIENT: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    color: Option<Color>,
}

const BLANK: Cell = Cell {
    character: ' ',
    color: None,
};

/// Depth-buffered renderer that rasterizes emitted triangles into a grid of
/// colored characters.
///
/// Triangles are drawn into a back buffer as they arrive; [`present`] moves
/// the finished frame to the front buffer that [`draw`] writes out.
///
/// [`present`]: RenderSurface::present
/// [`draw`]: AsciiRenderer::draw
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    camera: Camera,
    depth_buffer: Vec<f32>,
    back: Vec<Cell>,
    front: Vec<Cell>,
    frames_presented: u64,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            camera: Camera::new(width as u32, height as u32).with_pixel_aspect(CELL_ASPECT),
            depth_buffer: vec![f32::INFINITY; size],
            back: vec![BLANK; size],
            front: vec![BLANK; size],
            frames_presented: 0,
        }
    }

    pub fn with_projection(mut self, mode: ProjectionMode) -> Self {
        self.camera = self.camera.with_mode(mode);
        self
    }

    /// Switch projection; takes effect from the next emitted triangle
    pub fn set_projection(&mut self, mode: ProjectionMode) {
        self.camera.mode = mode;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Reallocate buffers for a new terminal size
    pub fn resize(&mut self, width: usize, height: usize) {
        let size = width * height;
        self.width = width;
        self.height = height;
        self.camera.resize(width as u32, height as u32);
        self.depth_buffer = vec![f32::INFINITY; size];
        self.back = vec![BLANK; size];
        self.front = vec![BLANK; size];
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.back.fill(BLANK);
    }

    /// Character at a cell of the last presented frame
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.cell_at(x, y).map(|cell| cell.character)
    }

    /// Color at a cell of the last presented frame, `None` for background
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.cell_at(x, y).and_then(|cell| cell.color)
    }

    fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width {
            return None;
        }
        self.front.get(y * self.width + x)
    }

    /// Number of cells covered in the last presented frame
    pub fn covered_cells(&self) -> usize {
        self.front.iter().filter(|cell| cell.color.is_some()).count()
    }

    fn render_triangle(&mut self, triangle: &Triangle) {
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (slot, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match self.camera.project_to_screen(vertex) {
                Some(coords) => *slot = coords,
                None => return, // Triangle is clipped
            }
        }

        // Faces are not consistently wound, so light both sides
        let normal = triangle.calculate_normal();
        let light_dir = Vector3::new(0.3, 0.5, 1.0).normalize();
        let brightness = normal.dot(&light_dir).abs();

        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.min(LUMINOSITY_RAMP.len() - 1);
        let cell = Cell {
            character: LUMINOSITY_RAMP[char_index],
            color: Some(triangle.color.shaded(AMBIENT + (1.0 - AMBIENT) * brightness)),
        };

        self.rasterize_triangle(&screen_coords, cell);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let [v0, v1, v2] = *coords;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.back[idx] = cell;
                }
            }
        }
    }

    /// Write the presented frame to `writer`
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.front.chunks(self.width.max(1)) {
            for cell in row {
                if let Some(color) = cell.color {
                    writer.queue(SetForegroundColor(to_terminal_color(color)))?;
                }
                writer.queue(Print(cell.character))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl TriangleSink for AsciiRenderer {
    fn emit(&mut self, triangle: &Triangle) {
        self.render_triangle(triangle);
    }
}

impl RenderSurface for AsciiRenderer {
    fn present(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.clear();
        self.frames_presented += 1;
    }
}

fn to_terminal_color(color: Color) -> TermColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    TermColor::Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
