mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod level;
mod movement;
mod physics;
mod sprites;
#[cfg(test)]
mod test_support;
mod world;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "ninja game".to_string(),
                    resolution: WindowResolution::new(640, 480),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        world::WorldPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
