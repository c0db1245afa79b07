//! Effects domain: animated particles.

use bevy::prelude::*;
use std::sync::Arc;

use crate::sprites::{Animation, AnimationClip, Canvas};

#[derive(Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    animation: Animation,
}

impl Particle {
    /// `frame` lets bursts start particles mid-clip so they fade at different times.
    pub fn new(clip: &Arc<AnimationClip>, position: Vec2, velocity: Vec2, frame: u32) -> Self {
        Self {
            position,
            velocity,
            animation: Animation::with_frame(Arc::clone(clip), frame),
        }
    }

    /// Returns true once the particle should be removed: its animation had
    /// already finished when this tick began.
    pub fn update(&mut self) -> bool {
        let kill = self.animation.done();

        self.position += self.velocity;
        self.animation.update();

        kill
    }

    #[cfg(test)]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        let image = self.animation.current_image();
        let half = (image.size / 2).as_vec2();
        canvas.blit(image, self.position - offset - half, false);
    }
}
