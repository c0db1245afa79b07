//! Movement domain: the player body, its motion states and keyboard intent.

pub mod components;
pub mod player;
pub mod resources;
pub(crate) mod systems;


use bevy::prelude::*;

pub use components::{DashPhase, MotionState, TRANSITION_DELAY, WallContact};
pub use player::Player;
pub use resources::{FrameInput, PlayerTuning};

use crate::movement::systems::{read_input, request_exit};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameInput>()
            .add_systems(Update, (read_input, request_exit));
    }
}
