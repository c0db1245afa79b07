//! Combat domain: enemy projectiles.

use bevy::prelude::*;
use std::f32::consts::PI;

use crate::combat::ProjectileTuning;
use crate::core::FrameEvent;
use crate::effects::burst;
use crate::movement::Player;
use crate::physics::contains_point;
use crate::sprites::{Canvas, ImageRef};
use crate::world::FrameContext;

/// How a projectile's tick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileFate {
    Flying,
    HitWall,
    Expired,
    HitPlayer,
}

impl ProjectileFate {
    pub fn is_spent(self) -> bool {
        self != ProjectileFate::Flying
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Pixels per frame; the sign is the direction of travel.
    pub velocity_x: f32,
    pub age: u32,
}

impl Projectile {
    pub fn new(position: Vec2, velocity_x: f32) -> Self {
        Self {
            position,
            velocity_x,
            age: 0,
        }
    }

    /// Advance one frame and resolve what it ran into. Spawns the matching
    /// effects and reports a player hit.
    pub fn update(
        &mut self,
        ctx: &mut FrameContext,
        player: &Player,
        tuning: &ProjectileTuning,
    ) -> ProjectileFate {
        self.position.x += self.velocity_x;
        self.age += 1;

        if ctx.tilemap.solid_check(self.position) {
            // Sparks fly back toward the shooter.
            let angle = if self.velocity_x > 0.0 { PI } else { 0.0 };
            burst::spark_fan(ctx.effects, self.position, angle, tuning.wall_sparks, ctx.rng);
            return ProjectileFate::HitWall;
        }

        if self.age > tuning.max_age {
            return ProjectileFate::Expired;
        }

        if player.can_be_hit() && contains_point(&player.body.rect(), self.position) {
            let center = player.body.center();
            burst::scatter(
                ctx.effects,
                &ctx.sprites.particle,
                center,
                tuning.hit_burst,
                ctx.rng,
            );
            ctx.events.push(FrameEvent::PlayerHit { position: center });
            debug!("Projectile hit player at {:?}", center);
            return ProjectileFate::HitPlayer;
        }

        ProjectileFate::Flying
    }

    pub fn render(&self, canvas: &mut impl Canvas, image: &ImageRef, offset: Vec2) {
        let half = Vec2::new(image.width(), image.height()) / 2.0;
        canvas.blit(image, self.position - half - offset, false);
    }
}
