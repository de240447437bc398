use anyhow::{Context, Result};
use glam::Vec2;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

use voxfield::{
    config::{default_config_path, load_or_create_config},
    EngineConfig, HeadlessRenderer, PlayerInput, VoxelEngine,
};

const FRAME_TIME: f32 = 1.0 / 60.0;
const ASPECT_RATIO: f32 = 800.0 / 600.0;

fn load_config() -> Result<EngineConfig> {
    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                info!("No config directory available, using defaults");
                return Ok(EngineConfig::default());
            }
        },
    };

    load_or_create_config(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Scripted input for a short headless session: walk, look around, jump,
/// sprint, then regenerate.
fn scripted_input(frame: u32) -> PlayerInput {
    PlayerInput {
        forward: (30..150).contains(&frame),
        right: (90..120).contains(&frame),
        jump: frame == 60,
        look_delta: if (150..180).contains(&frame) {
            Vec2::new(6.0, -2.0)
        } else {
            Vec2::ZERO
        },
        scroll: if frame == 200 { 3.0 } else { 0.0 },
        toggle_sprint: frame == 100,
        regenerate: frame == 240,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;
    info!("Initializing voxfield...");

    let config = load_config()?;
    let mut engine = VoxelEngine::new(config).context("Failed to start engine")?;
    let mut renderer = HeadlessRenderer::new();

    for frame in 0..300 {
        let input = scripted_input(frame);
        engine.frame(FRAME_TIME, &input);
        engine.render(&mut renderer, ASPECT_RATIO);
    }

    let player = engine.player();
    info!(
        "Finished {} frames on seed {}: player at {:?}, {:?}, fov {:.1}",
        engine.frame_count(),
        engine.seed(),
        player.position(),
        player.body.grounding,
        player.zoom()
    );
    info!(
        "Renderer saw {} uploads and {} draws",
        renderer.uploads, renderer.draws
    );
    Ok(())
}
