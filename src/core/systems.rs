//! Core domain: core setup systems.

use bevy::prelude::*;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_run_started() {
    info!("Run started");
}

