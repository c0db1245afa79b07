//! Draw-call surface used by the simulation's render pass.
//!
//! The simulation never touches bevy's renderer directly. It emits blits and
//! polygons in display pixels (origin top-left, y pointing down) into a
//! [`Canvas`]; [`DrawList`] records them for the presentation systems.

use bevy::prelude::*;

use super::animation::ImageRef;

/// Logical display size in pixels. The window shows it upscaled.
pub const DISPLAY_SIZE: Vec2 = Vec2::new(320.0, 240.0);

pub trait Canvas {
    /// Viewport size in display pixels.
    fn size(&self) -> Vec2;

    /// Draw `image` with its top-left corner at `position`.
    fn blit(&mut self, image: &ImageRef, position: Vec2, flip_x: bool);

    fn polygon(&mut self, points: [Vec2; 4], color: Color);
}

#[derive(Debug, Clone)]
pub struct Blit {
    pub image: ImageRef,
    pub position: Vec2,
    pub flip_x: bool,
}

#[derive(Debug, Clone)]
pub struct Polygon {
    pub points: [Vec2; 4],
    pub color: Color,
}

/// One frame worth of draw calls, in back-to-front order.
#[derive(Resource, Debug)]
pub struct DrawList {
    pub size: Vec2,
    pub blits: Vec<Blit>,
    pub polygons: Vec<Polygon>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(DISPLAY_SIZE)
    }
}

impl DrawList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            blits: Vec::new(),
            polygons: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.blits.clear();
        self.polygons.clear();
    }
}

impl Canvas for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn blit(&mut self, image: &ImageRef, position: Vec2, flip_x: bool) {
        self.blits.push(Blit {
            image: image.clone(),
            position,
            flip_x,
        });
    }

    fn polygon(&mut self, points: [Vec2; 4], color: Color) {
        self.polygons.push(Polygon { points, color });
    }
}
