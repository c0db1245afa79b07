//! Movement domain: keyboard sampling into the fixed-step intent.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::FrameInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<FrameInput>) {
    // Held directions are sampled every frame
    input.left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    input.right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);

    // Edges latch until the fixed step takes them, so a press between two
    // steps is never lost.
    if keyboard.just_pressed(KeyCode::ArrowUp)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::Space)
    {
        input.jump = true;
    }
    if keyboard.just_pressed(KeyCode::KeyX) || keyboard.just_pressed(KeyCode::ShiftLeft) {
        input.dash = true;
    }
}

pub(crate) fn request_exit(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}
