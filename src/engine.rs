use glam::Vec2;
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::config::EngineConfig;
use crate::player::{PlayerController, PlayerInput};
use crate::render::{Renderer, CUBE_VERTEX_COUNT};
use crate::terrain::{TerrainGenerator, WorldSeed};
use crate::utils::error::{EngineError, Result};
use crate::world::{LayeredRule, VoxelWorld};

/// Owns everything one session mutates. Driven one frame at a time.
pub struct VoxelEngine {
    pub config: EngineConfig,
    seed: WorldSeed,
    world: VoxelWorld,
    player: PlayerController,
    generator: TerrainGenerator,
    material_rule: LayeredRule,
    rng: ChaCha12Rng,
    frame_counter: u64,
}

impl VoxelEngine {
    /// Validates `config` and builds the first world.
    ///
    /// A heightmap that fails to load leaves the session with an empty world.
    /// Precondition failures are returned.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let seed = config
            .worldgen
            .world_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let generator = TerrainGenerator::new(config.worldgen.clone());
        let material_rule = LayeredRule::new(config.worldgen.stone_below);

        let world = match generator.generate(seed, config.worldgen.max_height) {
            Ok(heights) => VoxelWorld::build(&heights, &material_rule),
            Err(EngineError::Load(e)) => {
                error!("World generation failed, starting empty: {}", e);
                VoxelWorld::empty()
            }
            Err(e) => return Err(e),
        };

        info!("Engine ready with seed {}", seed);
        Ok(Self {
            player: PlayerController::new(&config.gameplay),
            rng: ChaCha12Rng::seed_from_u64(seed as u64),
            config,
            seed,
            world,
            generator,
            material_rule,
            frame_counter: 0,
        })
    }

    pub fn seed(&self) -> WorldSeed {
        self.seed
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// Rebuilds the world for `seed`. On failure the current world is kept.
    pub fn regenerate(&mut self, seed: WorldSeed, max_height: i32) -> Result<()> {
        match self.generator.generate(seed, max_height) {
            Ok(heights) => {
                self.world.rebuild(&heights, &self.material_rule);
                self.seed = seed;
                Ok(())
            }
            Err(e) => {
                error!("Regeneration with seed {} failed, keeping current world: {}", seed, e);
                Err(e)
            }
        }
    }

    /// Rolls a fresh seed and regenerates at the configured regeneration height.
    pub fn regenerate_random(&mut self) -> Result<()> {
        let seed: WorldSeed = self.rng.gen();
        info!("Regenerating world with seed {}", seed);
        self.regenerate(seed, self.config.worldgen.regenerate_max_height)
    }

    /// Applies one frame of input, then integrates physics exactly once.
    pub fn frame(&mut self, dt: f32, input: &PlayerInput) {
        if input.regenerate {
            // Already logged; the old world stays in place.
            let _ = self.regenerate_random();
        }
        if input.toggle_sprint {
            self.player.toggle_sprint();
        }
        if input.look_delta != Vec2::ZERO {
            self.player
                .handle_mouse_motion(input.look_delta.x, input.look_delta.y);
        }
        if input.scroll != 0.0 {
            self.player.handle_scroll(input.scroll);
        }
        if input.jump {
            self.player.jump();
        }

        self.player.update(&self.world, dt, input);
        self.frame_counter += 1;
    }

    /// Uploads instances when the world changed, then issues one instanced draw.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R, aspect_ratio: f32) {
        if self.world.is_dirty() {
            renderer.upload_instances(self.world.instance_positions(), &self.world.materials());
            self.world.mark_clean();
        }

        renderer.set_camera(
            self.player.view_matrix(),
            self.player.projection_matrix(aspect_ratio),
            self.player.position(),
        );
        renderer.draw_instanced(CUBE_VERTEX_COUNT, self.world.block_count() as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeightSourceKind;
    use crate::render::HeadlessRenderer;
    use crate::terrain::Heightmap;
    use crate::utils::error::PreconditionError;
    use std::path::Path;

    fn image_config(path: &Path) -> EngineConfig {
        let mut config = EngineConfig::default();
        config.worldgen.world_seed = Some(42);
        config.worldgen.source = HeightSourceKind::Image;
        config.worldgen.heightmap_path = path.to_path_buf();
        config.worldgen.max_height = 10;
        config
    }

    fn noise_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.worldgen.world_seed = Some(42);
        config.worldgen.width = 16;
        config.worldgen.depth = 16;
        config
    }

    fn write_gray(path: &Path) {
        Heightmap::from_raw(4, 4, vec![128; 16])
            .unwrap()
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_builds_from_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        write_gray(&path);

        let engine = VoxelEngine::new(image_config(&path)).unwrap();
        assert_eq!(engine.seed(), 42);
        assert_eq!(engine.world().block_count(), 80);
        assert!(engine.world().is_dirty());
    }

    #[test]
    fn test_missing_image_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let engine = VoxelEngine::new(image_config(&dir.path().join("missing.bmp"))).unwrap();
        assert!(engine.world().is_empty());
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let mut config = noise_config();
        config.worldgen.max_height = -4;
        assert!(matches!(
            VoxelEngine::new(config),
            Err(EngineError::Precondition(PreconditionError::NegativeMaxHeight(-4)))
        ));
    }

    #[test]
    fn test_failed_regeneration_keeps_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        write_gray(&path);

        let mut engine = VoxelEngine::new(image_config(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(engine.regenerate(7, 32).is_err());
        assert_eq!(engine.world().block_count(), 80);
        assert_eq!(engine.seed(), 42);

        assert!(engine.regenerate(7, -1).is_err());
        assert_eq!(engine.world().block_count(), 80);
    }

    #[test]
    fn test_regenerate_replaces_world() {
        let mut engine = VoxelEngine::new(noise_config()).unwrap();
        let generation = engine.world().generation();

        engine.regenerate(1234, 32).unwrap();
        assert_eq!(engine.seed(), 1234);
        assert_eq!(engine.world().generation(), generation + 1);
        assert_eq!(
            engine.world().instance_positions().len(),
            engine.world().block_count()
        );
        assert!(engine
            .world()
            .all_blocks()
            .iter()
            .all(|b| b.position.y < 32));
    }

    #[test]
    fn test_regenerate_frame_rolls_seed() {
        let mut engine = VoxelEngine::new(noise_config()).unwrap();
        let input = PlayerInput {
            regenerate: true,
            ..Default::default()
        };

        engine.frame(1.0 / 60.0, &input);
        assert_ne!(engine.seed(), 42);
        assert_eq!(engine.world().generation(), 2);
        assert_eq!(engine.frame_count(), 1);
    }

    #[test]
    fn test_render_uploads_only_when_dirty() {
        let mut engine = VoxelEngine::new(noise_config()).unwrap();
        let mut renderer = HeadlessRenderer::new();

        engine.render(&mut renderer, 16.0 / 9.0);
        engine.render(&mut renderer, 16.0 / 9.0);
        assert_eq!(renderer.uploads, 1);
        assert_eq!(renderer.draws, 2);
        assert_eq!(renderer.positions, engine.world().instance_positions());
        assert_eq!(renderer.materials.len(), renderer.positions.len());
        assert_eq!(
            renderer.last_draw,
            Some((36, engine.world().block_count() as u32))
        );
        assert_eq!(renderer.eye, engine.player().position());

        engine.regenerate(9, 20).unwrap();
        engine.render(&mut renderer, 16.0 / 9.0);
        assert_eq!(renderer.uploads, 2);
    }

    #[test]
    fn test_frame_applies_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine =
            VoxelEngine::new(image_config(&dir.path().join("missing.bmp"))).unwrap();
        let input = PlayerInput {
            toggle_sprint: true,
            scroll: 5.0,
            look_delta: Vec2::new(100.0, 0.0),
            jump: true,
            ..Default::default()
        };

        engine.frame(1.0 / 60.0, &input);
        let player = engine.player();
        assert!(player.sprinting);
        assert!((player.zoom() - 85.0).abs() < 1e-3);
        assert!((player.camera.yaw - -80.0).abs() < 1e-3);
        assert!(player.body.jumping);
        assert!(player.body.velocity.y > 0.0);
    }
}
