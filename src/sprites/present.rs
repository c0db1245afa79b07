//! Presentation of the recorded [`DrawList`] through bevy.
//!
//! Blits are shown through a pool of sprite entities that grows on demand and
//! is reused every frame; polygons go through gizmos.

use bevy::prelude::*;

use super::canvas::{DISPLAY_SIZE, DrawList};

/// Window pixels per display pixel.
pub const DISPLAY_SCALE: f32 = 2.0;

/// Depth step between consecutive blits so later calls draw on top.
const Z_STEP: f32 = 0.001;

/// Slot of a pooled sprite; slot `i` shows the `i`-th blit of the frame.
#[derive(Component, Debug)]
pub struct PooledSprite(pub usize);

/// Map a display-space point (y down, origin top-left) to world space.
pub fn display_to_world(point: Vec2) -> Vec2 {
    Vec2::new(
        (point.x - DISPLAY_SIZE.x / 2.0) * DISPLAY_SCALE,
        (DISPLAY_SIZE.y / 2.0 - point.y) * DISPLAY_SCALE,
    )
}

pub(crate) fn present_blits(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    mut pool: Query<(&PooledSprite, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    let mut pool_size = 0;

    for (slot, mut sprite, mut transform, mut visibility) in &mut pool {
        pool_size += 1;
        let Some(blit) = draw_list.blits.get(slot.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let center = blit.position + blit.image.size.as_vec2() / 2.0;
        let world = display_to_world(center);
        sprite.image = blit.image.handle.clone();
        sprite.flip_x = blit.flip_x;
        transform.translation = world.extend(slot.0 as f32 * Z_STEP);
        transform.scale = Vec3::splat(DISPLAY_SCALE);
        *visibility = Visibility::Visible;
    }

    // New slots start hidden and are filled in on the next frame.
    for index in pool_size..draw_list.blits.len() {
        commands.spawn((
            PooledSprite(index),
            Sprite::default(),
            Transform::default(),
            Visibility::Hidden,
        ));
    }
}

pub(crate) fn present_polygons(draw_list: Res<DrawList>, mut gizmos: Gizmos) {
    for polygon in &draw_list.polygons {
        let [a, b, c, d] = polygon.points.map(display_to_world);
        gizmos.linestrip_2d([a, b, c, d, a], polygon.color);
    }
}
