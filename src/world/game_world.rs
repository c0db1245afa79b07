//! World domain: owns every simulated thing and advances it one frame at a
//! time.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{Enemy, Projectile};
use crate::content::GameplayDefaults;
use crate::core::FrameEvent;
use crate::effects::{Clouds, Effects};
use crate::level::Level;
use crate::movement::{DashPhase, FrameInput, MotionState, Player};
use crate::sprites::{Canvas, DISPLAY_SIZE, SpriteLibrary};
use crate::world::{FrameContext, ScrollCamera};

#[derive(Resource)]
pub struct GameWorld {
    level: Level,
    sprites: SpriteLibrary,
    defaults: GameplayDefaults,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub effects: Effects,
    pub clouds: Clouds,
    pub camera: ScrollCamera,
    rng: ChaCha8Rng,
    frame: u64,
    events: Vec<FrameEvent>,
}

impl GameWorld {
    pub fn new(level: Level, sprites: SpriteLibrary, defaults: GameplayDefaults, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let player = Player::new(
            level.player_spawn,
            &sprites.player,
            defaults.player.clone(),
            defaults.physics.clone(),
        );
        let enemies: Vec<Enemy> = level
            .enemy_spawns
            .iter()
            .map(|spawn| {
                Enemy::new(
                    *spawn,
                    &sprites.enemy,
                    defaults.enemy.clone(),
                    defaults.physics.clone(),
                )
            })
            .collect();
        let clouds = Clouds::new(&sprites.clouds, &defaults.clouds, &mut rng);
        if clouds.is_empty() {
            warn!("No clouds spawned; the sky layer will be blank");
        }
        let camera = ScrollCamera::new(&defaults.camera);

        info!(
            "World built: player at {:?}, {} enemies, {} clouds, seed {}",
            level.player_spawn,
            enemies.len(),
            clouds.len(),
            seed
        );

        Self {
            level,
            sprites,
            defaults,
            player,
            enemies,
            projectiles: Vec::new(),
            effects: Effects::default(),
            clouds,
            camera,
            rng,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, input: FrameInput) {
        self.frame += 1;

        self.camera.follow(self.player.body.center(), DISPLAY_SIZE);
        self.clouds.update();

        if input.jump && self.player.jump() {
            self.events.push(FrameEvent::Jumped);
        }
        if input.dash && self.player.dash() {
            self.events.push(FrameEvent::DashStarted {
                direction: self.player.dash_timer.signum() as f32,
            });
        }

        // Projectiles fired this frame fly in this frame's projectile pass.
        let mut fired = Vec::new();
        {
            let mut ctx = FrameContext {
                tilemap: &self.level.grid,
                sprites: &self.sprites,
                rng: &mut self.rng,
                effects: &mut self.effects,
                projectiles: &mut fired,
                events: &mut self.events,
            };

            self.player.update(&mut ctx, input.intent());

            let player = &self.player;
            let projectile_tuning = &self.defaults.projectile;
            self.enemies
                .retain_mut(|enemy| !enemy.update(&mut ctx, player, projectile_tuning));
        }
        self.projectiles.append(&mut fired);

        {
            let mut ctx = FrameContext {
                tilemap: &self.level.grid,
                sprites: &self.sprites,
                rng: &mut self.rng,
                effects: &mut self.effects,
                projectiles: &mut fired,
                events: &mut self.events,
            };
            let player = &self.player;
            let projectile_tuning = &self.defaults.projectile;
            self.projectiles.retain_mut(|projectile| {
                !projectile
                    .update(&mut ctx, player, projectile_tuning)
                    .is_spent()
            });
        }

        self.effects.update_particles();
        self.effects.update_sparks();
    }

    /// Draw the frame back to front: background, clouds, tiles, enemies,
    /// player, projectiles, then sparks and particles.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let offset = self.camera.offset();

        canvas.blit(&self.sprites.background, Vec2::ZERO, false);
        self.clouds.render(canvas, offset);
        self.level.grid.render(canvas, &self.sprites, offset);
        for enemy in &self.enemies {
            enemy.render(canvas, &self.sprites.gun, offset);
        }
        self.player.render(canvas, offset);
        for projectile in &self.projectiles {
            projectile.render(canvas, &self.sprites.projectile, offset);
        }
        self.effects.render(canvas, offset);
    }

    /// Take the facts recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            player_position: self.player.body.position,
            player_state: self.player.state(),
            dash_phase: self.player.dash_phase(),
            enemies: self.enemies.len(),
            projectiles: self.projectiles.len(),
            particles: self.effects.particles.len(),
            sparks: self.effects.sparks.len(),
        }
    }
}

/// Summary of the world at one frame, for logs and the dev overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub player_position: Vec2,
    pub player_state: MotionState,
    pub dash_phase: DashPhase,
    pub enemies: usize,
    pub projectiles: usize,
    pub particles: usize,
    pub sparks: usize,
}

impl std::fmt::Display for WorldSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame {}: player {:?} at ({:.1}, {:.1}) dash {:?}; {} enemies, {} projectiles, {} particles, {} sparks",
            self.frame,
            self.player_state,
            self.player_position.x,
            self.player_position.y,
            self.dash_phase,
            self.enemies,
            self.projectiles,
            self.particles,
            self.sparks
        )
    }
}
