//! Validation of level content against the sprite library and of tuning
//! values the simulation relies on.

use bevy::prelude::*;
use std::collections::HashSet;

use super::data::*;
use crate::level::PHYSICS_TILES;
use crate::sprites::SpriteLibrary;

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Missing {
        target_type: &'static str,
        id: String,
    },
    Invalid(String),
}

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: Problem,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            Problem::Missing { target_type, id } => write!(
                f,
                "{} '{}' references missing {} '{}' in field '{}'",
                self.source_type, self.source_id, target_type, id, self.field
            ),
            Problem::Invalid(message) => write!(
                f,
                "{} '{}' has invalid field '{}': {}",
                self.source_type, self.source_id, self.field, message
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking that a tile's kind and variant have an image.
macro_rules! check_tile {
    ($errors:expr, $sprites:expr, $source_type:expr, $source_id:expr, $kind:expr, $variant:expr) => {
        match $sprites.tiles.get($kind) {
            None => $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id,
                field: "kind",
                problem: Problem::Missing {
                    target_type: "TileSet",
                    id: $kind.to_string(),
                },
            }),
            Some(variants) if $variant >= variants.len() => $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id,
                field: "variant",
                problem: Problem::Missing {
                    target_type: "TileVariant",
                    id: format!("{}/{}", $kind, $variant),
                },
            }),
            Some(_) => {}
        }
    };
}

fn invalid(source_type: &'static str, source_id: &str, field: &'static str, message: String) -> ValidationError {
    ValidationError {
        source_type,
        source_id: source_id.to_string(),
        field,
        problem: Problem::Invalid(message),
    }
}

/// Validate a level and the gameplay defaults.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(
    level: &LevelDef,
    defaults: &GameplayDefaults,
    sprites: &SpriteLibrary,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.schema_version != SCHEMA_VERSION {
        errors.push(unsupported_schema("Level", level.schema_version));
    }
    if defaults.schema_version != SCHEMA_VERSION {
        errors.push(unsupported_schema("GameplayDefaults", defaults.schema_version));
    }

    // Tiles must have an image to draw
    for (kind, variant, cell) in level.grid_tiles() {
        check_tile!(errors, sprites, "Tile", format!("({}, {})", cell.x, cell.y), kind, variant);
    }
    for decor in &level.offgrid {
        check_tile!(
            errors,
            sprites,
            "OffgridTile",
            format!("({}, {})", decor.position.0, decor.position.1),
            decor.kind.as_str(),
            decor.variant
        );
    }

    validate_spawns(level, &mut errors);
    validate_tuning(defaults, &mut errors);
    if level.tile_size > 0 {
        validate_tile_reach(level.tile_size, defaults, &mut errors);
    }

    errors
}

fn unsupported_schema(source_type: &'static str, version: u32) -> ValidationError {
    invalid(
        source_type,
        "schema",
        "schema_version",
        format!("version {} is not supported, expected {}", version, SCHEMA_VERSION),
    )
}

fn validate_spawns(level: &LevelDef, errors: &mut Vec<ValidationError>) {
    if level.tile_size == 0 {
        errors.push(invalid(
            "Level",
            "level",
            "tile_size",
            "tile size must be at least 1 pixel".to_string(),
        ));
        return;
    }

    let solid: HashSet<IVec2> = level
        .grid_tiles()
        .filter(|(kind, _, _)| PHYSICS_TILES.contains(kind))
        .map(|(_, _, cell)| cell)
        .collect();
    let tile_size = level.tile_size as f32;
    let in_solid = |(x, y): (f32, f32)| {
        let cell = (Vec2::new(x, y) / tile_size).floor().as_ivec2();
        solid.contains(&cell)
    };

    if in_solid(level.player_spawn) {
        errors.push(invalid(
            "Level",
            "player_spawn",
            "player_spawn",
            format!("spawn {:?} is inside a solid tile", level.player_spawn),
        ));
    }
    for (index, spawn) in level.enemy_spawns.iter().enumerate() {
        if in_solid(*spawn) {
            errors.push(invalid(
                "Level",
                &format!("enemy_spawns[{}]", index),
                "enemy_spawns",
                format!("spawn {:?} is inside a solid tile", spawn),
            ));
        }
    }
}

fn validate_tuning(defaults: &GameplayDefaults, errors: &mut Vec<ValidationError>) {
    if defaults.camera.smoothing < 1.0 {
        errors.push(invalid(
            "GameplayDefaults",
            "camera",
            "smoothing",
            format!("must be at least 1, got {}", defaults.camera.smoothing),
        ));
    }

    let (min, max) = defaults.enemy.walking_duration;
    if min == 0 || min > max {
        errors.push(invalid(
            "GameplayDefaults",
            "enemy",
            "walking_duration",
            format!("expected 1 <= min <= max, got ({}, {})", min, max),
        ));
    }

    let clouds = &defaults.clouds;
    if clouds.min_speed > clouds.max_speed || clouds.min_depth > clouds.max_depth {
        errors.push(invalid(
            "GameplayDefaults",
            "clouds",
            "speed/depth",
            "ranges must have min <= max".to_string(),
        ));
    }

    if defaults.player.dash_duration == 0 {
        errors.push(invalid(
            "GameplayDefaults",
            "player",
            "dash_duration",
            "a dash must last at least one frame".to_string(),
        ));
    }
}

/// Collision only looks at the tiles around a body's top-left cell, so every
/// body must fit inside one tile and nothing may move a whole tile per frame.
fn validate_tile_reach(tile_size: u32, defaults: &GameplayDefaults, errors: &mut Vec<ValidationError>) {
    for (source_id, size) in [("player", defaults.player.size), ("enemy", defaults.enemy.size)] {
        if size.0 > tile_size || size.1 > tile_size {
            errors.push(invalid(
                "GameplayDefaults",
                source_id,
                "size",
                format!("body {:?} does not fit in a {} pixel tile", size, tile_size),
            ));
        }
    }

    let player = &defaults.player;
    // Walking adds one pixel of intent on top of any horizontal velocity.
    let steps = [
        ("physics", "terminal_velocity", defaults.physics.terminal_velocity),
        ("player", "jump_velocity", player.jump_velocity.abs()),
        (
            "player",
            "wall_kick_velocity",
            (player.wall_kick_velocity.0.abs() + 1.0).max(player.wall_kick_velocity.1.abs()),
        ),
        ("player", "dash_velocity", player.dash_velocity.abs() + 1.0),
        ("enemy", "walking_speed", defaults.enemy.walking_speed.abs()),
        ("projectile", "speed", defaults.projectile.speed.abs()),
    ];
    let tile = tile_size as f32;
    for (source_id, field, step) in steps {
        if step >= tile {
            errors.push(invalid(
                "GameplayDefaults",
                source_id,
                field,
                format!("moves {} pixels per frame, must stay under the {} pixel tile", step, tile),
            ));
        }
    }
}
