//! Example: Render a few frames of a scene without taking over the terminal
//!
//! Usage: cargo run --example headless_frame -- [config.toml] [frames]

use std::env;
use std::io::{self, stdout, Write};
use std::path::Path;

use gasket_core::{SceneConfig, Session};
use gasket_terminal::AsciiRenderer;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let session = match args.get(1) {
        Some(path) => SceneConfig::load(Path::new(path))
            .and_then(|config| config.build())
            .map_err(io::Error::other)?,
        None => Session::reference(),
    };
    let frames: u32 = args.get(2).and_then(|n| n.parse().ok()).unwrap_or(30);

    let mut session = session;
    let mut renderer = AsciiRenderer::new(100, 50);
    for _ in 0..frames {
        session.on_idle();
        session
            .on_display(&mut renderer)
            .map_err(io::Error::other)?;
    }

    let mut out = stdout();
    renderer.draw(&mut out)?;
    writeln!(
        out,
        "{} frames, angle {:.1}, {} triangles per frame",
        renderer.frames_presented(),
        session.clock().angle(),
        session.scene().total_triangles()
    )?;
    out.flush()
}
