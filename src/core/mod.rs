//! Core domain: run flow state, shared resources and simulation events.

pub mod events;
pub mod resources;
pub mod state;
pub(crate) mod systems;

use bevy::prelude::*;

pub use events::FrameEvent;
pub use resources::RunConfig;
pub use state::GameState;

use crate::core::systems::{log_run_started, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Run), log_run_started);
    }
}
