//! Animation clips and play-heads.
//!
//! A clip is the immutable part of an animation (images, how many frames each
//! image is held, whether it loops) and is shared between every entity that
//! plays it. A play-head is the small per-entity counter advanced once per
//! simulation frame.

use std::sync::Arc;

use bevy::prelude::*;

/// A single drawable image together with its pixel size.
///
/// The size comes from the sprite manifest so the simulation can do layout
/// math (centering, parallax wrapping) before the texture has finished loading.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub handle: Handle<Image>,
    pub size: UVec2,
}

impl ImageRef {
    pub fn new(handle: Handle<Image>, size: UVec2) -> Self {
        Self { handle, size }
    }

    pub fn width(&self) -> f32 {
        self.size.x as f32
    }

    pub fn height(&self) -> f32 {
        self.size.y as f32
    }
}

/// Error raised when a clip cannot be played back safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    NoImages,
    ZeroDuration,
    /// Image count times image duration does not fit a frame counter.
    TooManyFrames,
}

impl std::fmt::Display for ClipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipError::NoImages => write!(f, "animation clip has no images"),
            ClipError::ZeroDuration => write!(f, "animation clip has an image duration of 0"),
            ClipError::TooManyFrames => write!(f, "animation clip is too long to play back"),
        }
    }
}

impl std::error::Error for ClipError {}

/// Immutable image sequence shared by every play-head of the same animation.
#[derive(Debug)]
pub struct AnimationClip {
    images: Vec<ImageRef>,
    /// Frames each image stays on screen.
    image_duration: u32,
    total_frames: u32,
    looping: bool,
}

impl AnimationClip {
    pub fn new(images: Vec<ImageRef>, image_duration: u32, looping: bool) -> Result<Self, ClipError> {
        if images.is_empty() {
            return Err(ClipError::NoImages);
        }
        if image_duration == 0 {
            return Err(ClipError::ZeroDuration);
        }
        let total_frames = u32::try_from(images.len())
            .ok()
            .and_then(|count| count.checked_mul(image_duration))
            .ok_or(ClipError::TooManyFrames)?;
        Ok(Self {
            images,
            image_duration,
            total_frames,
            looping,
        })
    }

    /// Total number of frames before the clip wraps or finishes.
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn image_duration(&self) -> u32 {
        self.image_duration
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn looping(&self) -> bool {
        self.looping
    }
}

/// Per-entity play-head over a shared [`AnimationClip`].
#[derive(Debug)]
pub struct Animation {
    clip: Arc<AnimationClip>,
    frame: u32,
    done: bool,
}

impl Animation {
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            frame: 0,
            done: false,
        }
    }

    /// Start at an arbitrary frame, clamped into the clip.
    pub fn with_frame(clip: Arc<AnimationClip>, frame: u32) -> Self {
        let last = clip.total_frames() - 1;
        Self {
            clip,
            frame: frame.min(last),
            done: false,
        }
    }

    pub fn update(&mut self) {
        let total = self.clip.total_frames();
        if self.clip.looping {
            self.frame = (self.frame + 1) % total;
        } else {
            self.frame = (self.frame + 1).min(total - 1);
            if self.frame >= total - 1 {
                self.done = true;
            }
        }
    }

    pub fn current_image(&self) -> &ImageRef {
        &self.clip.images[self.image_index()]
    }

    pub fn image_index(&self) -> usize {
        (self.frame / self.clip.image_duration) as usize
    }

    #[cfg(test)]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn done(&self) -> bool {
        self.done
    }
}
