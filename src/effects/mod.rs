//! Effects domain: transient visuals and the parallax background.
//!
//! Particles and sparks live in world-level collections. Each one is updated
//! once per tick and removed on the same tick its update reports completion.

pub mod burst;
pub mod clouds;
pub mod particle;
pub mod spark;


pub use clouds::{CloudTuning, Clouds};
pub use particle::Particle;
pub use spark::Spark;

use bevy::prelude::*;

use crate::sprites::Canvas;

#[derive(Debug, Default)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub sparks: Vec<Spark>,
}

impl Effects {
    pub fn update_particles(&mut self) {
        self.particles.retain_mut(|particle| !particle.update());
    }

    pub fn update_sparks(&mut self) {
        self.sparks.retain_mut(|spark| !spark.update());
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        for spark in &self.sparks {
            spark.render(canvas, offset);
        }
        for particle in &self.particles {
            particle.render(canvas, offset);
        }
    }
}
