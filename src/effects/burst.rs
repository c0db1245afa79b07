//! Effects domain: spawn patterns shared by the player, enemies and projectiles.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::sync::Arc;

use super::{Effects, Particle, Spark};
use crate::sprites::AnimationClip;

/// Highest frame a burst particle may start on.
const MAX_START_FRAME: u32 = 7;

fn start_frame(rng: &mut impl Rng) -> u32 {
    rng.random_range(0..=MAX_START_FRAME)
}

fn unit(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Slow ring of particles, used at the start and end of a dash.
pub fn particle_ring(
    effects: &mut Effects,
    clip: &Arc<AnimationClip>,
    center: Vec2,
    count: usize,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        let angle = rng.random::<f32>() * TAU;
        let speed = rng.random::<f32>() * 0.5 + 0.5;
        let frame = start_frame(rng);
        effects
            .particles
            .push(Particle::new(clip, center, unit(angle) * speed, frame));
    }
}

/// Two fast sparks shooting left and right.
pub fn opposing_sparks(effects: &mut Effects, center: Vec2, rng: &mut impl Rng) {
    effects
        .sparks
        .push(Spark::new(center, 0.0, 5.0 + rng.random::<f32>()));
    effects
        .sparks
        .push(Spark::new(center, PI, 5.0 + rng.random::<f32>()));
}

/// A fan of sparks around `angle`, jittered by up to half a radian.
pub fn spark_fan(effects: &mut Effects, position: Vec2, angle: f32, count: usize, rng: &mut impl Rng) {
    for _ in 0..count {
        let jitter = rng.random::<f32>() - 0.5;
        effects
            .sparks
            .push(Spark::new(position, angle + jitter, 2.0 + rng.random::<f32>()));
    }
}

/// Sparks flying out in every direction with particles drifting the
/// opposite way.
pub fn scatter(
    effects: &mut Effects,
    clip: &Arc<AnimationClip>,
    center: Vec2,
    count: usize,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        let angle = rng.random::<f32>() * TAU;
        let speed = rng.random::<f32>() * 5.0;
        effects
            .sparks
            .push(Spark::new(center, angle, 2.0 + rng.random::<f32>()));
        let frame = start_frame(rng);
        effects.particles.push(Particle::new(
            clip,
            center,
            unit(angle + PI) * speed * 0.5,
            frame,
        ));
    }
}

/// A scatter finished by a pair of opposing sparks. Used when an enemy dies.
pub fn impact(
    effects: &mut Effects,
    clip: &Arc<AnimationClip>,
    center: Vec2,
    count: usize,
    rng: &mut impl Rng,
) {
    scatter(effects, clip, center, count, rng);
    opposing_sparks(effects, center, rng);
}
