//! Physics domain: the shared body moved and collided against the tile grid.

use bevy::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

use crate::level::Tilemap;
use crate::sprites::{Animation, AnimationClip, Canvas};

/// Sides of the body that touched solid geometry during the last update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn vertical(&self) -> bool {
        self.up || self.down
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sprites are authored facing right, so facing left draws mirrored.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Animation key of a body. Each entity kind maps these to its own clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Idle,
    Run,
    Jump,
    WallSlide,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub fall_acceleration: f32,
    pub terminal_velocity: f32,
    /// Sprite offset from the body's top-left corner.
    pub animation_offset: (f32, f32),
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            fall_acceleration: 0.1,
            terminal_velocity: 5.0,
            animation_offset: (-3.0, -3.0),
        }
    }
}

/// Strict overlap test: rects that only share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[derive(Debug)]
pub struct PhysicsBody {
    pub position: Vec2,
    pub velocity: Vec2,
    size: UVec2,
    pub collisions: CollisionFlags,
    pub facing: Facing,
    pub last_movement: Vec2,
    action: Action,
    animation: Animation,
    tuning: PhysicsTuning,
}

impl PhysicsBody {
    pub fn new(position: Vec2, size: UVec2, idle: &Arc<AnimationClip>, tuning: PhysicsTuning) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            collisions: CollisionFlags::default(),
            facing: Facing::Right,
            last_movement: Vec2::ZERO,
            action: Action::Idle,
            animation: Animation::new(Arc::clone(idle)),
            tuning,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size.as_vec2())
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn action(&self) -> Action {
        self.action
    }

    #[cfg(test)]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Switch animation. Re-entering the current action keeps the play-head.
    pub fn set_action(&mut self, action: Action, clip: &Arc<AnimationClip>) {
        if action != self.action {
            self.action = action;
            self.animation = Animation::new(Arc::clone(clip));
        }
    }

    pub fn update(&mut self, tilemap: &dyn Tilemap, movement: Vec2) {
        self.collisions = CollisionFlags::default();

        let frame_movement = movement + self.velocity;

        let size = self.size.as_vec2();

        self.position.x += frame_movement.x;
        for solid in tilemap.physics_rects_around(self.position) {
            if overlaps(&self.rect(), &solid) {
                if frame_movement.x > 0.0 {
                    self.position.x = solid.min.x - size.x;
                    self.collisions.right = true;
                }
                if frame_movement.x < 0.0 {
                    self.position.x = solid.max.x;
                    self.collisions.left = true;
                }
            }
        }

        self.position.y += frame_movement.y;
        for solid in tilemap.physics_rects_around(self.position) {
            if overlaps(&self.rect(), &solid) {
                if frame_movement.y > 0.0 {
                    self.position.y = solid.min.y - size.y;
                    self.collisions.down = true;
                }
                if frame_movement.y < 0.0 {
                    self.position.y = solid.max.y;
                    self.collisions.up = true;
                }
            }
        }

        if movement.x > 0.0 {
            self.facing = Facing::Right;
        }
        if movement.x < 0.0 {
            self.facing = Facing::Left;
        }

        self.last_movement = movement;

        self.velocity.y =
            (self.velocity.y + self.tuning.fall_acceleration).min(self.tuning.terminal_velocity);
        if self.collisions.vertical() {
            self.velocity.y = 0.0;
        }

        self.animation.update();
    }

    pub fn render(&self, canvas: &mut impl Canvas, offset: Vec2) {
        let (dx, dy) = self.tuning.animation_offset;
        canvas.blit(
            self.animation.current_image(),
            self.position - offset + Vec2::new(dx, dy),
            self.facing.flip_x(),
        );
    }
}

/// Point containment matching the overlap test: the far edges are outside.
pub fn contains_point(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.min.x && point.x < rect.max.x && point.y >= rect.min.y && point.y < rect.max.y
}

