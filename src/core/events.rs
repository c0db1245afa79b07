//! Core domain: gameplay facts reported by the simulation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Something that happened during a simulation step. Collected by the world
/// and forwarded to collaborators (audio, health) after each step.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    Jumped,
    DashStarted { direction: f32 },
    ProjectileFired { position: Vec2 },
    EnemyKilled { position: Vec2 },
    /// A projectile reached the player outside of dash protection.
    PlayerHit { position: Vec2 },
    /// The player has been airborne past the fall limit.
    PlayerFell,
}

impl Message for FrameEvent {}
