//! Dev tooling, compiled with the `dev-tools` feature.
//!
//! - F1 toggles an overlay of body rects, touched sides and enemy ledge sensors
//! - F2 logs a snapshot of the world

pub mod state;
pub(crate) mod systems;

use bevy::prelude::*;

pub use state::DebugState;

use crate::core::GameState;
use crate::debug::systems::{draw_overlay, log_snapshot, toggle_overlay};
use crate::world::GameWorld;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_overlay,
                (log_snapshot, draw_overlay)
                    .run_if(in_state(GameState::Run))
                    .run_if(resource_exists::<GameWorld>),
            ),
        );
    }
}
