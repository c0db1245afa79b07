//! Shared fixtures for unit tests: a small sprite manifest, a flat floor and
//! a harness that hands out frame contexts.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::Projectile;
use crate::content::GameplayDefaults;
use crate::core::FrameEvent;
use crate::effects::Effects;
use crate::level::{Level, TileGrid};
use crate::sprites::{SpriteLibrary, SpriteManifest};
use crate::world::FrameContext;

/// Every image has its own size so tests can tell them apart without real
/// asset handles.
pub const MANIFEST_JSON: &str = r#"{
    "version": 1,
    "images": {
        "background": { "path": "images/background.png", "size": [320, 240] },
        "gun": { "path": "images/gun.png", "size": [7, 4] },
        "projectile": { "path": "images/projectile.png", "size": [5, 2] }
    },
    "image_sets": {
        "clouds": { "path": "images/clouds", "count": 2, "size": [40, 20], "sizes": [[40, 20], [41, 21]] },
        "tiles/grass": { "path": "images/tiles/grass", "count": 9, "size": [16, 16] },
        "tiles/stone": { "path": "images/tiles/stone", "count": 9, "size": [17, 17] },
        "tiles/decor": { "path": "images/tiles/decor", "count": 4, "size": [12, 10] },
        "tiles/large_decor": { "path": "images/tiles/large_decor", "count": 3, "size": [30, 30] }
    },
    "animations": {
        "player/idle": { "path": "images/entities/player/idle", "count": 22, "size": [14, 18], "image_duration": 6 },
        "player/run": { "path": "images/entities/player/run", "count": 8, "size": [14, 19], "image_duration": 4 },
        "player/jump": { "path": "images/entities/player/jump", "count": 1, "size": [14, 20] },
        "player/wall_slide": { "path": "images/entities/player/wall_slide", "count": 1, "size": [14, 21] },
        "enemy/idle": { "path": "images/entities/enemy/idle", "count": 16, "size": [13, 17], "image_duration": 6 },
        "enemy/run": { "path": "images/entities/enemy/run", "count": 8, "size": [13, 16], "image_duration": 4 },
        "particle/particle": {
            "path": "images/particles/particle",
            "count": 4,
            "size": [3, 3],
            "sizes": [[3, 3], [4, 4], [5, 5], [6, 6]],
            "image_duration": 6,
            "looping": false
        }
    }
}"#;

pub const TILE_SIZE: u32 = 16;

/// Top edge of the floor built by [`floor_grid`].
pub const FLOOR_Y: f32 = 160.0;

pub fn manifest() -> SpriteManifest {
    SpriteManifest::from_json(MANIFEST_JSON).expect("test manifest parses")
}

pub fn sprites() -> SpriteLibrary {
    SpriteLibrary::from_manifest(&manifest(), |_| Handle::default()).expect("test manifest resolves")
}

/// A grass floor on row 10 spanning cells -10..=30.
pub fn floor_grid() -> TileGrid {
    let mut grid = TileGrid::new(TILE_SIZE).expect("tile size is positive");
    for x in -10..=30 {
        grid.insert("grass", 1, IVec2::new(x, 10));
    }
    grid
}

pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// Player standing on the floor at x = 50.
pub fn floor_level(enemy_spawns: Vec<Vec2>) -> Level {
    Level {
        grid: floor_grid(),
        player_spawn: Vec2::new(50.0, FLOOR_Y - 15.0),
        enemy_spawns,
    }
}

pub fn defaults() -> GameplayDefaults {
    GameplayDefaults::default()
}

/// Owns everything a [`FrameContext`] borrows.
pub struct Harness {
    pub grid: TileGrid,
    pub sprites: SpriteLibrary,
    pub rng: ChaCha8Rng,
    pub effects: Effects,
    pub projectiles: Vec<Projectile>,
    pub events: Vec<FrameEvent>,
}

impl Harness {
    pub fn new(grid: TileGrid) -> Self {
        Self {
            grid,
            sprites: sprites(),
            rng: seeded_rng(),
            effects: Effects::default(),
            projectiles: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn on_floor() -> Self {
        Self::new(floor_grid())
    }

    pub fn ctx(&mut self) -> FrameContext<'_> {
        FrameContext {
            tilemap: &self.grid,
            sprites: &self.sprites,
            rng: &mut self.rng,
            effects: &mut self.effects,
            projectiles: &mut self.projectiles,
            events: &mut self.events,
        }
    }
}
