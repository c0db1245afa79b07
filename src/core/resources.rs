//! Core domain: shared resources for run configuration.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seed of the world's random stream; fixing it replays a run exactly.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
