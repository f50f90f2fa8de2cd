//! Terminal frame driver for animated gasket scenes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use gasket_core::{ColoringMode, ProjectionMode, Session};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Rows reserved for the status line
const STATUS_ROWS: u16 = 1;
/// Degrees per frame added or removed by the speed keys
const SPEED_STEP: f32 = 0.5;

/// Main application struct for terminal gasket rendering
pub struct TerminalApp {
    session: Session,
    renderer: AsciiRenderer,
    target_fps: u32,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(session: Session, target_fps: u32, projection: ProjectionMode) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            session,
            renderer: AsciiRenderer::new(
                width as usize,
                height.saturating_sub(STATUS_ROWS) as usize,
            )
            .with_projection(projection),
            target_fps: target_fps.max(1),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.target_fps));

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?)?;
            }

            self.session.on_idle();
            if self.session.redraw_requested() {
                self.render()?;
            }

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
                log::trace!("{:.1} fps", self.fps);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(code),
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.renderer
                    .resize(width as usize, height.saturating_sub(STATUS_ROWS) as usize);
                queue!(stdout(), terminal::Clear(terminal::ClearType::All))?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> io::Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char(' ') => self.session.toggle_pause(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.change_speed(SPEED_STEP)?;
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.change_speed(-SPEED_STEP)?;
            }
            KeyCode::Char('c') => {
                let next = match self.session.coloring() {
                    ColoringMode::PerFace => ColoringMode::PerBranch,
                    ColoringMode::PerBranch => ColoringMode::PerFace,
                };
                self.session.set_coloring(next);
            }
            KeyCode::Char('p') => {
                let next = match self.renderer.camera().mode {
                    ProjectionMode::Orthographic => ProjectionMode::Perspective,
                    ProjectionMode::Perspective => ProjectionMode::Orthographic,
                };
                self.renderer.set_projection(next);
            }
            _ => {}
        }
        Ok(())
    }

    fn change_speed(&mut self, delta: f32) -> io::Result<()> {
        self.session
            .set_speed(self.session.speed() + delta)
            .map_err(io::Error::other)
    }

    fn render(&mut self) -> io::Result<()> {
        self.session
            .on_display(&mut self.renderer)
            .map_err(io::Error::other)?;

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Status line below the frame
        let status = format!(
            "Sierpinski Gasket | FPS: {:.1} | angle {:6.1} | speed {:+.1}{} | {} tris | {} | +/- speed  space pause  c colors  p projection  q quit",
            self.fps,
            self.session.clock().angle(),
            self.session.speed(),
            if self.session.is_paused() { " (paused)" } else { "" },
            self.session.scene().total_triangles(),
            match self.renderer.camera().mode {
                ProjectionMode::Orthographic => "ortho",
                ProjectionMode::Perspective => "persp",
            },
        );
        queue!(
            stdout,
            cursor::MoveTo(0, self.renderer.height() as u16),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
