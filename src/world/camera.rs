//! World domain: the smoothed scrolling camera.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Each frame the scroll closes `1 / smoothing` of the gap to its target.
    pub smoothing: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self { smoothing: 30.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCamera {
    pub scroll: Vec2,
    smoothing: f32,
}

impl ScrollCamera {
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            scroll: Vec2::ZERO,
            smoothing: tuning.smoothing,
        }
    }

    /// Ease the scroll toward centering `focus` in a viewport of `viewport`.
    pub fn follow(&mut self, focus: Vec2, viewport: Vec2) {
        let target = focus - viewport / 2.0;
        self.scroll += (target - self.scroll) / self.smoothing;
    }

    /// Whole-pixel draw offset, truncated toward zero.
    pub fn offset(&self) -> Vec2 {
        self.scroll.trunc()
    }
}
