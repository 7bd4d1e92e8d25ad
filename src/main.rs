mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod physics;
mod render;
mod sprites;
mod world;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "MindTaker".to_string(),
            resolution: (960, 540).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((
        core::CorePlugin,
        world::WorldPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        render::RenderPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
