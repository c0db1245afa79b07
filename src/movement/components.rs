//! Movement domain: player state classification.

use crate::physics::{Action, CollisionFlags, Facing};

/// Frames after leaving the ground before the player counts as airborne.
/// Jumps and wall kicks set air time straight to this value.
pub const TRANSITION_DELAY: u32 = 5;

/// What the player's body is doing this frame, in priority order
/// `WallSlide > Jump > Run > Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Run,
    Jump,
    WallSlide,
}

impl MotionState {
    pub fn classify(wall_slide: bool, air_time: u32, movement_x: f32) -> Self {
        if wall_slide {
            MotionState::WallSlide
        } else if air_time >= TRANSITION_DELAY {
            MotionState::Jump
        } else if movement_x != 0.0 {
            MotionState::Run
        } else {
            MotionState::Idle
        }
    }

    pub fn action(self) -> Action {
        match self {
            MotionState::Idle => Action::Idle,
            MotionState::Run => Action::Run,
            MotionState::Jump => Action::Jump,
            MotionState::WallSlide => Action::WallSlide,
        }
    }
}

/// Where the player is in the dash cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    /// Timer at zero, a new dash may start.
    #[default]
    Ready,
    /// Moving at dash speed, sprite hidden, lethal to enemies.
    Active,
    Cooldown,
}

impl DashPhase {
    pub fn from_timer(dash_timer: i32, cooldown: u32) -> Self {
        let remaining = dash_timer.unsigned_abs();
        if remaining == 0 {
            DashPhase::Ready
        } else if remaining > cooldown {
            DashPhase::Active
        } else {
            DashPhase::Cooldown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    pub fn from_collisions(collisions: &CollisionFlags) -> Self {
        if collisions.right {
            WallContact::Right
        } else if collisions.left {
            WallContact::Left
        } else {
            WallContact::None
        }
    }

    /// Facing while pressed against this wall.
    pub fn facing(self) -> Option<Facing> {
        match self {
            WallContact::None => None,
            WallContact::Left => Some(Facing::Left),
            WallContact::Right => Some(Facing::Right),
        }
    }
}
