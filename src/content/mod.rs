//! Content domain: data-driven tuning, the level and the sprite manifest.
//!
//! Everything is read from disk in `Startup`. Any failure stops the app
//! before the first simulation step, with every problem logged.

pub mod data;
pub mod loader;
pub mod validation;


use bevy::prelude::*;
use std::path::Path;

pub use data::GameplayDefaults;
pub use loader::{ContentLoadError, build_level, load_all_content};
pub use validation::{ValidationError, validate_content};

use crate::core::{GameState, RunConfig};
use crate::sprites::SpriteLibrary;
use crate::world::GameWorld;

/// Directory the asset server reads from.
pub const ASSETS_DIR: &str = "assets";

/// Content problems collected before giving up.
#[derive(Debug)]
pub enum ContentError {
    Load(Vec<ContentLoadError>),
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Load(errors) => write!(f, "{} content files failed to load", errors.len()),
            ContentError::Invalid(errors) => {
                write!(f, "content failed validation with {} errors", errors.len())
            }
        }
    }
}

impl std::error::Error for ContentError {}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load content, build the world and start the run.
pub(crate) fn load_content(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut run_config: ResMut<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) -> Result {
    let content = load_all_content(Path::new(ASSETS_DIR)).map_err(|errors| {
        for error in &errors {
            error!("{}", error);
        }
        ContentError::Load(errors)
    })?;

    let sprites = SpriteLibrary::from_manifest(&content.manifest, |path| {
        asset_server.load(path.to_string())
    })?;

    let errors = validate_content(&content.level, &content.defaults, &sprites);
    if !errors.is_empty() {
        for error in &errors {
            error!("Validation error: {}", error);
        }
        return Err(ContentError::Invalid(errors).into());
    }

    let level = build_level(&content.level)?;

    if let Some(seed) = content.defaults.seed {
        run_config.seed = seed;
    }
    info!("Starting run with seed {}", run_config.seed);

    let world = GameWorld::new(level, sprites, content.defaults, run_config.seed);
    commands.insert_resource(world);
    next_state.set(GameState::Run);
    Ok(())
}
