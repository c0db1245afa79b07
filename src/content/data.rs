//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Tuning structs default every field
//! so a content file only has to name what it changes.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::{EnemyTuning, ProjectileTuning};
use crate::effects::CloudTuning;
use crate::movement::PlayerTuning;
use crate::physics::PhysicsTuning;
use crate::world::CameraTuning;

/// Content file format this build reads.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Fixed run seed. A random seed is used when absent.
    pub seed: Option<u64>,
    pub physics: PhysicsTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
    pub camera: CameraTuning,
    pub clouds: CloudTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed: None,
            physics: PhysicsTuning::default(),
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            projectile: ProjectileTuning::default(),
            camera: CameraTuning::default(),
            clouds: CloudTuning::default(),
        }
    }
}

// ============================================================================
// Levels (level.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub tile_size: u32,
    #[serde(default)]
    pub tiles: Vec<TileDef>,
    /// Horizontal runs of identical tiles, expanded on load.
    #[serde(default)]
    pub runs: Vec<TileRunDef>,
    #[serde(default)]
    pub offgrid: Vec<OffgridTileDef>,
    pub player_spawn: (f32, f32),
    #[serde(default)]
    pub enemy_spawns: Vec<(f32, f32)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub kind: String,
    pub variant: usize,
    pub cell: (i32, i32),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileRunDef {
    pub kind: String,
    pub variant: usize,
    pub start: (i32, i32),
    pub length: u32,
}

impl TileRunDef {
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.length as i32).map(|i| IVec2::new(self.start.0 + i, self.start.1))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OffgridTileDef {
    pub kind: String,
    pub variant: usize,
    pub position: (f32, f32),
}

impl LevelDef {
    /// Every on-grid tile as (kind, variant, cell), runs expanded. Later
    /// entries replace earlier ones in the same cell.
    pub fn grid_tiles(&self) -> impl Iterator<Item = (&str, usize, IVec2)> {
        let runs = self.runs.iter().flat_map(|run| {
            run.cells()
                .map(move |cell| (run.kind.as_str(), run.variant, cell))
        });
        let tiles = self
            .tiles
            .iter()
            .map(|tile| (tile.kind.as_str(), tile.variant, IVec2::new(tile.cell.0, tile.cell.1)));
        runs.chain(tiles)
    }
}
