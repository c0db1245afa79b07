//! Effects domain: the parallax cloud layer.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use crate::sprites::{Canvas, ImageRef};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloudTuning {
    pub count: usize,
    /// Clouds are scattered over this square before wrapping.
    pub spread: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Default for CloudTuning {
    fn default() -> Self {
        Self {
            count: 16,
            spread: 99999.0,
            min_speed: 0.05,
            max_speed: 0.1,
            min_depth: 0.2,
            max_depth: 0.8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cloud {
    pub position: Vec2,
    pub image: ImageRef,
    pub speed: f32,
    /// Parallax factor: 0 is pinned to the screen, 1 moves with the level.
    pub depth: f32,
}

impl Cloud {
    pub fn update(&mut self) {
        self.position.x += self.speed;
    }

    /// Top-left draw position, wrapped so the cloud re-enters from the other edge.
    pub fn screen_position(&self, viewport: Vec2, offset: Vec2) -> Vec2 {
        let size = self.image.size.as_vec2();
        let parallax = self.position - offset * self.depth;
        Vec2::new(
            parallax.x.rem_euclid(viewport.x + size.x) - size.x,
            parallax.y.rem_euclid(viewport.y + size.y) - size.y,
        )
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        let position = self.screen_position(canvas.size(), offset);
        canvas.blit(&self.image, position, false);
    }
}

/// Clouds kept sorted far to near so nearer clouds draw on top.
#[derive(Debug, Clone, Default)]
pub struct Clouds {
    clouds: Vec<Cloud>,
}

impl Clouds {
    pub fn new(images: &[ImageRef], tuning: &CloudTuning, rng: &mut impl Rng) -> Self {
        if images.is_empty() {
            warn!("No cloud images available, cloud layer disabled");
            return Self::default();
        }

        let mut clouds: Vec<Cloud> = (0..tuning.count)
            .map(|_| Cloud {
                position: Vec2::new(
                    rng.random::<f32>() * tuning.spread,
                    rng.random::<f32>() * tuning.spread,
                ),
                image: images[rng.random_range(0..images.len())].clone(),
                speed: tuning.min_speed + rng.random::<f32>() * (tuning.max_speed - tuning.min_speed),
                depth: tuning.min_depth + rng.random::<f32>() * (tuning.max_depth - tuning.min_depth),
            })
            .collect();
        clouds.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        Self { clouds }
    }

    pub fn update(&mut self) {
        for cloud in &mut self.clouds {
            cloud.update();
        }
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        for cloud in &self.clouds {
            cloud.render(canvas, offset);
        }
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter()
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}
