//! World domain: the frame-stepped simulation and its bevy wiring.
//!
//! The simulation is plain data owned by [`GameWorld`]. Bevy only calls
//! [`GameWorld::step`] at a fixed 60 Hz, forwards the frame's events as
//! messages and asks the world to draw into the [`DrawList`].
//!
//! [`DrawList`]: crate::sprites::DrawList

pub mod camera;
pub mod context;
pub mod game_world;
pub(crate) mod systems;


use bevy::prelude::*;

pub use camera::{CameraTuning, ScrollCamera};
pub use context::FrameContext;
pub use game_world::GameWorld;

use crate::core::{FrameEvent, GameState};
use crate::sprites::PresentSystems;
use crate::world::systems::{log_frame_events, render_world, step_world};

/// Simulation rate. All gameplay timers count these steps.
pub const STEPS_PER_SECOND: f64 = 60.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(STEPS_PER_SECOND))
            .add_message::<FrameEvent>()
            .add_systems(
                FixedUpdate,
                step_world
                    .run_if(in_state(GameState::Run))
                    .run_if(resource_exists::<GameWorld>),
            )
            .add_systems(
                Update,
                (
                    render_world.before(PresentSystems),
                    log_frame_events,
                )
                    .run_if(in_state(GameState::Run))
                    .run_if(resource_exists::<GameWorld>),
            );
    }
}
