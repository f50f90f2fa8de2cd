//! Gasket Terminal Demo - Rotating Sierpinski gaskets
//!
//! Controls:
//!   - +/- or Up/Down: Change rotation speed
//!   - Space: Pause the clock
//!   - C: Toggle per-face / per-branch coloring
//!   - P: Toggle orthographic / perspective projection
//!   - Q/ESC: Quit

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gasket_core::{ColoringMode, ProjectionMode, SceneConfig, Session};
use gasket_terminal::TerminalApp;

/// Render rotating 3D Sierpinski gaskets in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gasket-terminal", version, about)]
struct Cli {
    /// TOML scene configuration; the reference scene is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rotation speed in degrees per frame.
    #[arg(long, allow_hyphen_values = true)]
    speed: Option<f32>,

    /// Subdivision depth per instance, in order (repeatable).
    #[arg(long = "depth", value_name = "N")]
    depths: Vec<u32>,

    /// Color each leaf by its recursion branch instead of by face.
    #[arg(long)]
    per_branch_colors: bool,

    /// Start with a perspective camera instead of the orthographic one.
    #[arg(long)]
    perspective: bool,

    /// Target frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Print triangle counts for the scene and exit.
    #[arg(long)]
    stats: bool,
}

fn build_session(cli: &Cli) -> gasket_core::Result<Session> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    config.override_depths(&cli.depths);
    if let Some(speed) = cli.speed {
        config.rotation_speed = speed;
    }
    if cli.per_branch_colors {
        config.coloring = ColoringMode::PerBranch;
    }
    config.build()
}

fn projection(cli: &Cli) -> ProjectionMode {
    if cli.perspective {
        ProjectionMode::Perspective
    } else {
        ProjectionMode::Orthographic
    }
}

fn print_stats(session: &Session) {
    for (index, instance) in session.scene().instances().iter().enumerate() {
        println!(
            "instance {}: depth {}, {} triangles",
            index + 1,
            instance.depth,
            instance.triangle_count()
        );
    }
    println!("total: {} triangles per frame", session.scene().total_triangles());
}

fn run(cli: Cli) -> io::Result<()> {
    let session = build_session(&cli).map_err(io::Error::other)?;

    if cli.stats {
        print_stats(&session);
        return Ok(());
    }

    let mut app = TerminalApp::new(session, cli.fps, projection(&cli))?;
    app.run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "gasket-terminal",
            "--speed",
            "-2.5",
            "--depth",
            "1",
            "--depth",
            "2",
            "--per-branch-colors",
        ]);
        let session = build_session(&cli).unwrap();
        assert_eq!(session.speed(), -2.5);
        assert_eq!(session.coloring(), ColoringMode::PerBranch);
        let depths: Vec<u32> = session.scene().instances().iter().map(|i| i.depth).collect();
        assert_eq!(depths, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_cli_projection_flag() {
        let cli = Cli::parse_from(["gasket-terminal"]);
        assert_eq!(projection(&cli), ProjectionMode::Orthographic);

        let cli = Cli::parse_from(["gasket-terminal", "--perspective"]);
        assert_eq!(projection(&cli), ProjectionMode::Perspective);
    }

    #[test]
    fn test_cli_rejects_deep_recursion() {
        let cli = Cli::parse_from(["gasket-terminal", "--depth", "11"]);
        let err = build_session(&cli).unwrap_err();
        assert!(err.to_string().contains("11"));
    }
}
