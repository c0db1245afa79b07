//! Combat domain: the patrolling gunner.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::combat::{EnemyTuning, Projectile, ProjectileTuning};
use crate::core::FrameEvent;
use crate::effects::burst;
use crate::movement::Player;
use crate::physics::{Action, Facing, PhysicsBody, PhysicsTuning, overlaps};
use crate::sprites::{Canvas, EnemyClips, ImageRef};
use crate::world::FrameContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Idle,
    Walking { remaining: u32 },
}

#[derive(Debug)]
pub struct Enemy {
    pub body: PhysicsBody,
    /// Frames left in the current walk; zero while idle.
    pub walking: u32,
    tuning: EnemyTuning,
}

impl Enemy {
    pub fn new(position: Vec2, clips: &EnemyClips, tuning: EnemyTuning, physics: PhysicsTuning) -> Self {
        let size = UVec2::new(tuning.size.0, tuning.size.1);
        Self {
            body: PhysicsBody::new(position, size, &clips.idle, physics),
            walking: 0,
            tuning,
        }
    }

    pub fn state(&self) -> EnemyState {
        match self.walking {
            0 => EnemyState::Idle,
            remaining => EnemyState::Walking { remaining },
        }
    }

    /// Ground sensor point ahead of the enemy in its facing direction.
    pub fn ledge_sensor(&self) -> Vec2 {
        let (dx, dy) = self.tuning.ledge_sensor;
        Vec2::new(
            self.body.center().x + self.body.facing.sign() * dx,
            self.body.position.y + dy,
        )
    }

    /// Run one frame of patrol AI and physics. Returns true when the enemy
    /// was killed by a dashing player and must be removed.
    pub fn update(&mut self, ctx: &mut FrameContext, player: &Player, projectiles: &ProjectileTuning) -> bool {
        let mut movement = Vec2::ZERO;

        match self.state() {
            EnemyState::Walking { remaining } => {
                if ctx.tilemap.solid_check(self.ledge_sensor()) {
                    movement.x = self.body.facing.sign() * self.tuning.walking_speed;
                } else {
                    self.body.facing = self.body.facing.flipped();
                }

                self.walking = remaining - 1;
                if self.walking == 0 {
                    let distance = player.body.position - self.body.position;
                    if distance.y.abs() < self.tuning.shooting_range {
                        self.shoot(ctx, distance, projectiles);
                    }
                }
            }
            EnemyState::Idle => {
                if ctx.rng.random::<f32>() < self.tuning.wake_up_chance {
                    let (min, max) = self.tuning.walking_duration;
                    self.walking = ctx.rng.random_range(min..=max);
                    debug!("Enemy woke up for {} frames", self.walking);
                }
            }
        }

        self.body.update(ctx.tilemap, movement);

        let clips = &ctx.sprites.enemy;
        if movement.x != 0.0 {
            self.body.set_action(Action::Run, &clips.run);
        } else {
            self.body.set_action(Action::Idle, &clips.idle);
        }

        if player.is_dashing() && overlaps(&self.body.rect(), &player.body.rect()) {
            self.die(ctx);
            return true;
        }
        false
    }

    /// Fire only when facing the player.
    fn shoot(&self, ctx: &mut FrameContext, distance: Vec2, tuning: &ProjectileTuning) {
        let facing_player = match self.body.facing {
            Facing::Left => distance.x < 0.0,
            Facing::Right => distance.x > 0.0,
        };
        if !facing_player {
            return;
        }

        let sign = self.body.facing.sign();
        let center = self.body.center();
        let position = Vec2::new(center.x + sign * tuning.muzzle_offset, center.y);
        ctx.projectiles
            .push(Projectile::new(position, sign * tuning.speed));

        let angle = match self.body.facing {
            Facing::Left => PI,
            Facing::Right => 0.0,
        };
        burst::spark_fan(ctx.effects, position, angle, tuning.muzzle_sparks, ctx.rng);
        ctx.events.push(FrameEvent::ProjectileFired { position });
        debug!("Enemy fired {:?} from {:?}", self.body.facing, position);
    }

    fn die(&self, ctx: &mut FrameContext) {
        let center = self.body.center();
        burst::impact(
            ctx.effects,
            &ctx.sprites.particle,
            center,
            self.tuning.death_burst,
            ctx.rng,
        );
        ctx.events.push(FrameEvent::EnemyKilled { position: center });
        debug!("Enemy killed at {:?}", center);
    }

    pub fn render(&self, canvas: &mut impl Canvas, gun: &ImageRef, offset: Vec2) {
        self.body.render(canvas, offset);

        let center = self.body.center();
        let (gun_x, gun_y) = self.tuning.gun_offset;
        let x = match self.body.facing {
            Facing::Left => center.x - gun_x - gun.width(),
            Facing::Right => center.x + gun_x,
        };
        canvas.blit(
            gun,
            Vec2::new(x, center.y - gun_y) - offset,
            self.body.facing.flip_x(),
        );
    }
}
