//! Effects domain: sparks, short streaks that slow down and vanish.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::sprites::Canvas;

/// Speed lost every tick.
pub const SPARK_DECAY: f32 = 0.1;
const SPARK_LENGTH: f32 = 3.0;
const SPARK_WIDTH: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct Spark {
    pub position: Vec2,
    pub angle: f32,
    pub speed: f32,
    done: bool,
}

impl Spark {
    pub fn new(position: Vec2, angle: f32, speed: f32) -> Self {
        Self {
            position,
            angle,
            speed: speed.max(0.0),
            done: false,
        }
    }

    fn direction(&self, angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Returns true on the single tick the spark comes to rest.
    pub fn update(&mut self) -> bool {
        if self.done {
            return false;
        }

        self.position += self.direction(self.angle) * self.speed;
        self.speed = (self.speed - SPARK_DECAY).max(0.0);

        if self.speed == 0.0 {
            self.done = true;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn done(&self) -> bool {
        self.done
    }

    /// Diamond outline, recomputed from the current angle and speed.
    pub fn points(&self, offset: Vec2) -> [Vec2; 4] {
        let center = self.position - offset;
        [
            center + self.direction(self.angle) * self.speed * SPARK_LENGTH,
            center + self.direction(self.angle + FRAC_PI_2) * self.speed * SPARK_WIDTH,
            center + self.direction(self.angle + PI) * self.speed * SPARK_LENGTH,
            center + self.direction(self.angle - FRAC_PI_2) * self.speed * SPARK_WIDTH,
        ]
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        canvas.polygon(self.points(offset), Color::WHITE);
    }
}
