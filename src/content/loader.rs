//! Loader for RON content files and the JSON sprite manifest at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::level::{Level, TileGrid};
use crate::sprites::SpriteManifest;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything read from disk before the world is built.
#[derive(Debug)]
pub struct LoadedContent {
    pub defaults: GameplayDefaults,
    pub level: LevelDef,
    pub manifest: SpriteManifest,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a single RON struct.
pub fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

pub fn load_sprite_manifest(path: &Path) -> Result<SpriteManifest, ContentLoadError> {
    let contents = read_file(path)?;
    SpriteManifest::from_json(&contents).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load gameplay defaults, the level and the sprite manifest from the assets
/// directory. Returns every file that failed, not just the first.
pub fn load_all_content(assets: &Path) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let data = assets.join("data");

    let defaults = load_single_file::<GameplayDefaults>(&data.join("gameplay_defaults.ron"));
    let level = load_single_file::<LevelDef>(&data.join("level.ron"));
    let manifest = load_sprite_manifest(&assets.join("sprites").join("manifest.json"));

    match (defaults, level, manifest) {
        (Ok(defaults), Ok(level), Ok(manifest)) => Ok(LoadedContent {
            defaults,
            level,
            manifest,
        }),
        (defaults, level, manifest) => Err([defaults.err(), level.err(), manifest.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

/// Build the tile grid and spawn points of a level definition.
pub fn build_level(def: &LevelDef) -> Result<Level, ContentLoadError> {
    let mut grid = TileGrid::new(def.tile_size).map_err(|e| ContentLoadError {
        file: "level.ron".to_string(),
        message: e.to_string(),
    })?;

    for (kind, variant, cell) in def.grid_tiles() {
        grid.insert(kind, variant, cell);
    }
    for decor in &def.offgrid {
        grid.insert_offgrid(
            decor.kind.as_str(),
            decor.variant,
            Vec2::new(decor.position.0, decor.position.1),
        );
    }

    let enemy_spawns: Vec<Vec2> = def
        .enemy_spawns
        .iter()
        .map(|(x, y)| Vec2::new(*x, *y))
        .collect();

    info!(
        "Built level: {} tiles, {} decorations, {} enemy spawns",
        grid.tiles().count(),
        grid.offgrid().len(),
        enemy_spawns.len()
    );

    Ok(Level {
        grid,
        player_spawn: Vec2::new(def.player_spawn.0, def.player_spawn.1),
        enemy_spawns,
    })
}
