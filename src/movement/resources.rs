//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: (u32, u32),
    /// Jumps available before landing again.
    pub max_jumps: u32,
    pub jump_velocity: f32,
    /// Fall speed cap while sliding down a wall.
    pub wall_slide_fall_velocity: f32,
    /// Velocity of a wall kick, horizontal part pointing away from the wall.
    pub wall_kick_velocity: (f32, f32),
    /// Horizontal speed lost per frame outside of a dash.
    pub air_drag: f32,
    pub dash_cooldown: u32,
    pub dash_duration: u32,
    pub dash_velocity: f32,
    /// Multiplier applied on the last active dash frame.
    pub dash_final_brake: f32,
    pub dash_burst_particles: usize,
    /// Top speed of the particles trailing a dash.
    pub stream_velocity: f32,
    /// Frames in the air before the player counts as fallen out of the level.
    pub fall_time_limit: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: (8, 15),
            max_jumps: 1,
            jump_velocity: -3.0,
            wall_slide_fall_velocity: 0.5,
            wall_kick_velocity: (3.5, -2.5),
            air_drag: 0.1,
            dash_cooldown: 50,
            dash_duration: 10,
            dash_velocity: 8.0,
            dash_final_brake: 0.1,
            dash_burst_particles: 20,
            stream_velocity: 3.0,
            fall_time_limit: 120,
        }
    }
}

impl PlayerTuning {
    /// Length of a whole dash: active frames plus cooldown.
    pub fn dash_cycle(&self) -> u32 {
        self.dash_cooldown + self.dash_duration
    }
}

/// Intent sampled from the keyboard and consumed by the next fixed step.
///
/// `jump` and `dash` are edges: they latch on press and are cleared when the
/// simulation takes them, so each press fires exactly once.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
}

impl FrameInput {
    /// Horizontal movement intent: -1, 0 or 1.
    pub fn intent(&self) -> Vec2 {
        Vec2::new(self.right as i32 as f32 - self.left as i32 as f32, 0.0)
    }

    /// Return the input for this step and clear the edges.
    pub fn take(&mut self) -> FrameInput {
        let input = *self;
        self.jump = false;
        self.dash = false;
        input
    }
}
