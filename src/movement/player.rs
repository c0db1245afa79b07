//! Movement domain: the player body and its jump / wall-slide / dash rules.

use bevy::prelude::*;
use rand::Rng;

use crate::core::FrameEvent;
use crate::effects::{Particle, burst};
use crate::movement::{DashPhase, MotionState, PlayerTuning, TRANSITION_DELAY, WallContact};
use crate::physics::{Facing, PhysicsBody, PhysicsTuning};
use crate::sprites::{Canvas, PlayerClips};
use crate::world::FrameContext;

#[derive(Debug)]
pub struct Player {
    pub body: PhysicsBody,
    /// Frames since the last ground contact.
    pub air_time: u32,
    pub remaining_jumps: u32,
    pub wall_slide: bool,
    /// Counts down through a dash cycle. The sign is the dash direction.
    pub dash_timer: i32,
    state: MotionState,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(position: Vec2, clips: &PlayerClips, tuning: PlayerTuning, physics: PhysicsTuning) -> Self {
        let size = UVec2::new(tuning.size.0, tuning.size.1);
        Self {
            body: PhysicsBody::new(position, size, &clips.idle, physics),
            air_time: 0,
            remaining_jumps: tuning.max_jumps,
            wall_slide: false,
            dash_timer: 0,
            state: MotionState::Idle,
            tuning,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn dash_phase(&self) -> DashPhase {
        DashPhase::from_timer(self.dash_timer, self.tuning.dash_cooldown)
    }

    /// Inside the fast part of a dash, where enemies touching the player die.
    pub fn is_dashing(&self) -> bool {
        self.dash_phase() == DashPhase::Active
    }

    /// Projectiles only connect once the dash is well into its cooldown.
    pub fn can_be_hit(&self) -> bool {
        self.dash_timer.unsigned_abs() < self.tuning.dash_cooldown
    }

    /// Try to jump. Returns whether the jump was granted.
    pub fn jump(&mut self) -> bool {
        if self.wall_slide {
            let (kick_x, kick_y) = self.tuning.wall_kick_velocity;
            let into_wall = match self.body.facing {
                Facing::Left => self.body.last_movement.x < 0.0,
                Facing::Right => self.body.last_movement.x > 0.0,
            };
            if !into_wall {
                return false;
            }

            // Kick away from the wall the player is facing.
            self.body.velocity = Vec2::new(-self.body.facing.sign() * kick_x, kick_y);
            self.air_time = TRANSITION_DELAY;
            self.remaining_jumps = self.remaining_jumps.saturating_sub(1);
            debug!("Wall kick off {:?} wall", self.body.facing);
            return true;
        }

        if self.remaining_jumps > 0 {
            self.remaining_jumps -= 1;
            self.body.velocity.y = self.tuning.jump_velocity;
            self.air_time = TRANSITION_DELAY;
            debug!("Jump: remaining_jumps={}", self.remaining_jumps);
            return true;
        }

        false
    }

    /// Start a dash in the facing direction. Ignored until the previous
    /// cycle has fully run out.
    pub fn dash(&mut self) -> bool {
        if self.dash_timer != 0 {
            return false;
        }
        let cycle = self.tuning.dash_cycle() as i32;
        self.dash_timer = match self.body.facing {
            Facing::Left => -cycle,
            Facing::Right => cycle,
        };
        debug!("Dash started: dash_timer={}", self.dash_timer);
        true
    }

    pub fn update(&mut self, ctx: &mut FrameContext, movement: Vec2) {
        self.body.update(ctx.tilemap, movement);

        self.air_time += 1;
        if self.air_time == self.tuning.fall_time_limit {
            warn!("Player has been falling for {} frames", self.air_time);
            ctx.events.push(FrameEvent::PlayerFell);
        }

        if self.body.collisions.down {
            if self.air_time > TRANSITION_DELAY {
                debug!("Landed after {} frames", self.air_time);
            }
            self.air_time = 0;
            self.remaining_jumps = self.tuning.max_jumps;
        }

        let wall = WallContact::from_collisions(&self.body.collisions);
        self.wall_slide = false;
        if let Some(facing) = wall.facing()
            && self.air_time >= TRANSITION_DELAY
        {
            self.wall_slide = true;
            self.body.velocity.y = self.body.velocity.y.min(self.tuning.wall_slide_fall_velocity);
            self.body.facing = facing;
        }

        self.state = MotionState::classify(self.wall_slide, self.air_time, movement.x);
        let clips = &ctx.sprites.player;
        let clip = match self.state {
            MotionState::Idle => &clips.idle,
            MotionState::Run => &clips.run,
            MotionState::Jump => &clips.jump,
            MotionState::WallSlide => &clips.wall_slide,
        };
        self.body.set_action(self.state.action(), clip);

        self.update_dash(ctx);
        self.apply_drag();
    }

    fn update_dash(&mut self, ctx: &mut FrameContext) {
        let remaining = self.dash_timer.unsigned_abs();
        let cooldown = self.tuning.dash_cooldown;

        if self.dash_timer != 0 && (remaining == self.tuning.dash_cycle() || remaining == cooldown) {
            let center = self.body.center();
            burst::particle_ring(
                ctx.effects,
                &ctx.sprites.particle,
                center,
                self.tuning.dash_burst_particles,
                ctx.rng,
            );
            burst::opposing_sparks(ctx.effects, center, ctx.rng);
        }

        self.dash_timer -= self.dash_timer.signum();

        let remaining = self.dash_timer.unsigned_abs();
        if remaining > cooldown {
            let direction = self.dash_timer.signum() as f32;
            self.body.velocity.x = direction * self.tuning.dash_velocity;
            if remaining == cooldown + 1 {
                self.body.velocity.x *= self.tuning.dash_final_brake;
            }

            let velocity = Vec2::new(
                direction * ctx.rng.random::<f32>() * self.tuning.stream_velocity,
                0.0,
            );
            let frame = ctx.rng.random_range(0..=7);
            ctx.effects.particles.push(Particle::new(
                &ctx.sprites.particle,
                self.body.center(),
                velocity,
                frame,
            ));
        }
    }

    fn apply_drag(&mut self) {
        let drag = self.tuning.air_drag;
        let velocity = &mut self.body.velocity;
        if velocity.x > 0.0 {
            velocity.x = (velocity.x - drag).max(0.0);
        } else if velocity.x < 0.0 {
            velocity.x = (velocity.x + drag).min(0.0);
        }
    }

    /// Whether the sprite is drawn this frame; it disappears while dashing.
    pub fn is_visible(&self) -> bool {
        self.dash_timer.unsigned_abs() <= self.tuning.dash_cooldown
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        if self.is_visible() {
            self.body.render(canvas, offset);
        }
    }
}
