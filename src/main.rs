mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod player;
mod sound;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tube Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        player::PlayerPlugin,
        level::LevelPlugin,
        sound::SoundPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
