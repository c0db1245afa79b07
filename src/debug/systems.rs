//! Debug domain: hotkeys and the collision overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::physics::{CollisionFlags, PhysicsBody};
use crate::sprites::present::display_to_world;
use crate::world::GameWorld;

const BODY_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const CONTACT_COLOR: Color = Color::srgb(0.95, 0.2, 0.2);
const SENSOR_COLOR: Color = Color::srgb(0.95, 0.85, 0.2);

/// Toggle the overlay with F1
pub(crate) fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.overlay_visible = !debug_state.overlay_visible;
        info!(
            "[DEBUG] Overlay {}",
            if debug_state.overlay_visible { "ON" } else { "OFF" }
        );
    }
}

/// Log a one-line summary of the world with F2
pub(crate) fn log_snapshot(keyboard: Res<ButtonInput<KeyCode>>, world: Res<GameWorld>) {
    if keyboard.just_pressed(KeyCode::F2) {
        info!("[DEBUG] {}", world.snapshot());
    }
}

pub(crate) fn draw_overlay(debug_state: Res<DebugState>, world: Res<GameWorld>, mut gizmos: Gizmos) {
    if !debug_state.overlay_visible {
        return;
    }

    let offset = world.camera.offset();
    draw_body(&mut gizmos, &world.player.body, offset);
    for enemy in &world.enemies {
        draw_body(&mut gizmos, &enemy.body, offset);
        let sensor = display_to_world(enemy.ledge_sensor() - offset);
        gizmos.circle_2d(sensor, 2.0, SENSOR_COLOR);
    }
}

fn draw_body(gizmos: &mut Gizmos, body: &PhysicsBody, offset: Vec2) {
    let rect = body.rect();
    let corners = [
        Vec2::new(rect.min.x, rect.min.y),
        Vec2::new(rect.max.x, rect.min.y),
        Vec2::new(rect.max.x, rect.max.y),
        Vec2::new(rect.min.x, rect.max.y),
    ]
    .map(|corner| display_to_world(corner - offset));
    gizmos.linestrip_2d(
        [corners[0], corners[1], corners[2], corners[3], corners[0]],
        BODY_COLOR,
    );

    // Touched sides are drawn over in the contact color.
    let CollisionFlags {
        up,
        down,
        left,
        right,
    } = body.collisions;
    let sides = [
        (up, corners[0], corners[1]),
        (right, corners[1], corners[2]),
        (down, corners[2], corners[3]),
        (left, corners[3], corners[0]),
    ];
    for (touched, start, end) in sides {
        if touched {
            gizmos.line_2d(start, end, CONTACT_COLOR);
        }
    }
}
