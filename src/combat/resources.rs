//! Combat domain: enemy and projectile tuning.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: (u32, u32),
    /// Chance per idle frame of starting a walk.
    pub wake_up_chance: f32,
    pub walking_speed: f32,
    /// Inclusive bounds of a walk, in frames.
    pub walking_duration: (u32, u32),
    /// Largest vertical distance at which the enemy shoots at the player.
    pub shooting_range: f32,
    /// Ground sensor ahead of the enemy: horizontal offset from the body
    /// center, vertical offset from the body top.
    pub ledge_sensor: (f32, f32),
    /// Gun placement relative to the body center.
    pub gun_offset: (f32, f32),
    pub death_burst: usize,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: (8, 15),
            wake_up_chance: 0.01,
            walking_speed: 0.5,
            walking_duration: (30, 120),
            shooting_range: 16.0,
            ledge_sensor: (7.0, 23.0),
            gun_offset: (4.0, 2.0),
            death_burst: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub speed: f32,
    /// Frames a projectile survives without hitting anything.
    pub max_age: u32,
    /// Spawn distance ahead of the shooter's center.
    pub muzzle_offset: f32,
    pub muzzle_sparks: usize,
    pub wall_sparks: usize,
    pub hit_burst: usize,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 1.5,
            max_age: 360,
            muzzle_offset: 7.0,
            muzzle_sparks: 4,
            wall_sparks: 4,
            hit_burst: 30,
        }
    }
}
