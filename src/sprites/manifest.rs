//! Sprite manifest loading and the typed sprite library.
//!
//! The manifest JSON lists every image the game draws: single images, image
//! sets (tile variants, clouds) and animations. It is resolved once at startup
//! into a [`SpriteLibrary`], whose clips are typed per entity kind so that a
//! missing animation is a load error instead of a runtime lookup failure.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::animation::{AnimationClip, ClipError, ImageRef};

/// Raw manifest JSON structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    #[serde(default)]
    pub images: HashMap<String, ImageDef>,
    #[serde(default)]
    pub image_sets: HashMap<String, ImageSetDef>,
    #[serde(default)]
    pub animations: HashMap<String, AnimationDef>,
}

/// A single image file.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDef {
    /// Path relative to assets/.
    pub path: String,
    pub size: [u32; 2],
}

/// A directory of numbered images (`00.png`, `01.png`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSetDef {
    pub path: String,
    pub count: u32,
    /// Size shared by every image of the set, unless `sizes` lists them one by one.
    pub size: [u32; 2],
    #[serde(default)]
    pub sizes: Vec<[u32; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDef {
    #[serde(flatten)]
    pub set: ImageSetDef,
    /// Frames each image is held.
    #[serde(default = "default_image_duration")]
    pub image_duration: u32,
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_image_duration() -> u32 {
    5
}

fn default_looping() -> bool {
    true
}

/// Error raised while resolving the manifest into a [`SpriteLibrary`].
#[derive(Debug)]
pub enum ManifestError {
    MissingImage(String),
    MissingImageSet(String),
    MissingAnimation(String),
    EmptyImageSet(String),
    BadSizes { key: String, expected: u32, found: usize },
    Clip { key: String, source: ClipError },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::MissingImage(key) => write!(f, "sprite manifest has no image '{}'", key),
            ManifestError::MissingImageSet(key) => {
                write!(f, "sprite manifest has no image set '{}'", key)
            }
            ManifestError::MissingAnimation(key) => {
                write!(f, "sprite manifest has no animation '{}'", key)
            }
            ManifestError::EmptyImageSet(key) => write!(f, "image set '{}' has no images", key),
            ManifestError::BadSizes {
                key,
                expected,
                found,
            } => write!(
                f,
                "image set '{}' lists {} sizes for {} images",
                key, found, expected
            ),
            ManifestError::Clip { key, source } => write!(f, "animation '{}': {}", key, source),
        }
    }
}

impl std::error::Error for ManifestError {}

impl SpriteManifest {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

/// Helper for numbered frame paths inside an image set directory.
pub fn frame_path(base: &str, index: u32) -> String {
    format!("{}/{:02}.png", base, index)
}

/// Player animations, one per motion state.
#[derive(Debug, Clone)]
pub struct PlayerClips {
    pub idle: Arc<AnimationClip>,
    pub run: Arc<AnimationClip>,
    pub jump: Arc<AnimationClip>,
    pub wall_slide: Arc<AnimationClip>,
}

#[derive(Debug, Clone)]
pub struct EnemyClips {
    pub idle: Arc<AnimationClip>,
    pub run: Arc<AnimationClip>,
}

/// Everything the simulation draws, resolved from the manifest.
#[derive(Debug, Clone)]
pub struct SpriteLibrary {
    pub player: PlayerClips,
    pub enemy: EnemyClips,
    pub particle: Arc<AnimationClip>,
    pub background: ImageRef,
    pub gun: ImageRef,
    pub projectile: ImageRef,
    pub clouds: Vec<ImageRef>,
    /// Tile variants keyed by tile kind (`grass`, `stone`, `decor`, ...).
    pub tiles: HashMap<String, Vec<ImageRef>>,
}

impl SpriteLibrary {
    /// Resolve every sprite the game needs. `load` turns an asset path into a
    /// handle (the asset server at runtime).
    pub fn from_manifest(
        manifest: &SpriteManifest,
        mut load: impl FnMut(&str) -> Handle<Image>,
    ) -> Result<Self, ManifestError> {
        let mut clip = |key: &str| -> Result<Arc<AnimationClip>, ManifestError> {
            let def = manifest
                .animations
                .get(key)
                .ok_or_else(|| ManifestError::MissingAnimation(key.to_string()))?;
            let images = load_set(key, &def.set, &mut load)?;
            let clip = AnimationClip::new(images, def.image_duration, def.looping).map_err(
                |source| ManifestError::Clip {
                    key: key.to_string(),
                    source,
                },
            )?;
            debug!(
                "Clip '{}': {} images x {} frames, looping: {}",
                key,
                clip.image_count(),
                clip.image_duration(),
                clip.looping()
            );
            Ok(Arc::new(clip))
        };

        let player = PlayerClips {
            idle: clip("player/idle")?,
            run: clip("player/run")?,
            jump: clip("player/jump")?,
            wall_slide: clip("player/wall_slide")?,
        };
        let enemy = EnemyClips {
            idle: clip("enemy/idle")?,
            run: clip("enemy/run")?,
        };
        let particle = clip("particle/particle")?;

        let mut image = |key: &str| -> Result<ImageRef, ManifestError> {
            let def = manifest
                .images
                .get(key)
                .ok_or_else(|| ManifestError::MissingImage(key.to_string()))?;
            Ok(ImageRef::new(load(&def.path), UVec2::from(def.size)))
        };
        let background = image("background")?;
        let gun = image("gun")?;
        let projectile = image("projectile")?;

        let clouds_def = manifest
            .image_sets
            .get("clouds")
            .ok_or_else(|| ManifestError::MissingImageSet("clouds".to_string()))?;
        let clouds = load_set("clouds", clouds_def, &mut load)?;

        let mut tiles = HashMap::new();
        for (key, def) in &manifest.image_sets {
            if let Some(kind) = key.strip_prefix("tiles/") {
                tiles.insert(kind.to_string(), load_set(key, def, &mut load)?);
            }
        }

        info!(
            "Resolved sprite manifest v{}: {} animations, {} tile kinds, {} cloud images",
            manifest.version,
            manifest.animations.len(),
            tiles.len(),
            clouds.len()
        );

        Ok(Self {
            player,
            enemy,
            particle,
            background,
            gun,
            projectile,
            clouds,
            tiles,
        })
    }

    /// Image for a tile kind/variant, if the library has it.
    pub fn tile(&self, kind: &str, variant: usize) -> Option<&ImageRef> {
        self.tiles.get(kind).and_then(|variants| variants.get(variant))
    }
}

fn load_set(
    key: &str,
    def: &ImageSetDef,
    load: &mut impl FnMut(&str) -> Handle<Image>,
) -> Result<Vec<ImageRef>, ManifestError> {
    if def.count == 0 {
        return Err(ManifestError::EmptyImageSet(key.to_string()));
    }
    if !def.sizes.is_empty() && def.sizes.len() != def.count as usize {
        return Err(ManifestError::BadSizes {
            key: key.to_string(),
            expected: def.count,
            found: def.sizes.len(),
        });
    }

    Ok((0..def.count)
        .map(|index| {
            let size = def.sizes.get(index as usize).copied().unwrap_or(def.size);
            ImageRef::new(load(&frame_path(&def.path, index)), UVec2::from(size))
        })
        .collect())
}
