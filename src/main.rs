use bevy::prelude::*;

mod camera;
mod game;
mod graph;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;
use visual::plugin::ForestPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Forest Fire".into(),
            resolution: WindowResolution::new(960, 540),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    // Smouldering backdrop
    .insert_resource(ClearColor(Color::srgb(0.13, 0.05, 0.04)))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ForestPlugin);

    app.run();
}
