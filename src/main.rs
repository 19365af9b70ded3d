//! `flycam` command line: replays a JSON input script through a fly camera
//! session and logs the final camera state and transforms.

use std::path::PathBuf;

use clap::Parser;
use flycam::options::Options;
use flycam::script::InputScript;
use flycam::session::FlySession;

/// Replay a recorded input script through a fly camera and report the
/// resulting transforms.
#[derive(Parser)]
#[command(name = "flycam", version)]
struct Cli {
    /// JSON input script to replay.
    script: PathBuf,
    /// TOML options preset (defaults when omitted).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Viewport aspect ratio (width / height).
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.aspect > 0.0, "aspect ratio must be positive");

    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = InputScript::load(&cli.script)?;

    let mut session = FlySession::new(&options, cli.aspect);
    let summary = script.replay(&mut session);

    let camera = session.camera();
    log::info!(
        "played {} of {} frames{}",
        summary.frames_played,
        script.frames.len(),
        if summary.quit { " (quit)" } else { "" }
    );
    log::info!(
        "eye {:?} front {:?} yaw {:.2} pitch {:.2} fovy {:.1}",
        camera.position(),
        camera.front(),
        camera.yaw(),
        camera.pitch(),
        camera.fovy()
    );
    log::info!("view {:?}", summary.last.view.to_cols_array_2d());
    log::info!("projection {:?}", summary.last.projection.to_cols_array_2d());
    Ok(())
}
