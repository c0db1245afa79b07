//! Level domain: tile geometry and where things start.

pub mod tilemap;


use bevy::prelude::*;

pub use tilemap::{PHYSICS_TILES, TileGrid, Tilemap};

/// A playable level: its tiles plus the spawn points taken out of the map.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    pub player_spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
}
