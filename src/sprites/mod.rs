//! Sprites module: animation playback, the sprite manifest and presentation.
//!
//! This module handles:
//! - Resolving the sprite manifest JSON into typed clips and images
//! - Animation clips shared between entities and their per-entity play-heads
//! - The draw-call surface the simulation renders into, and its presentation

pub mod animation;
pub mod canvas;
pub mod manifest;
pub mod present;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::{Animation, AnimationClip, ImageRef};
pub use canvas::{Canvas, DISPLAY_SIZE, DrawList};
pub use manifest::{EnemyClips, PlayerClips, SpriteLibrary, SpriteManifest};

use crate::sprites::present::{present_blits, present_polygons};

/// Systems turning the frame's [`DrawList`] into visible sprites and gizmos.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresentSystems;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>().add_systems(
            Update,
            (present_blits, present_polygons).in_set(PresentSystems),
        );
    }
}
