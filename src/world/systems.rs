//! World domain: fixed stepping, event forwarding and drawing.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::FrameEvent;
use crate::movement::FrameInput;
use crate::sprites::DrawList;
use crate::world::GameWorld;

pub(crate) fn step_world(
    mut world: ResMut<GameWorld>,
    mut input: ResMut<FrameInput>,
    mut events: MessageWriter<FrameEvent>,
) {
    let input = input.take();
    world.step(input);
    for event in world.drain_events() {
        events.write(event);
    }
}

pub(crate) fn log_frame_events(mut events: MessageReader<FrameEvent>) {
    for event in events.read() {
        match event {
            FrameEvent::PlayerHit { position } => info!("Player hit at {:?}", position),
            FrameEvent::EnemyKilled { position } => info!("Enemy killed at {:?}", position),
            FrameEvent::PlayerFell => warn!("Player fell out of the level"),
            other => debug!("{:?}", other),
        }
    }
}

pub(crate) fn render_world(world: Res<GameWorld>, mut draw_list: ResMut<DrawList>) {
    draw_list.clear();
    world.render(&mut *draw_list);
}
