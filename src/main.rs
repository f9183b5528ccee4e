use bevy::diagnostic::{EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use space_combat_rs::domain::{AssetsPlugin, InputPlugin, ShellConfig, ShellPlugin, UiPlugin};

fn main() -> AppExit {
    let config = ShellConfig::default();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(EntityCountDiagnosticsPlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                resolution: config.resolution.into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins((ShellPlugin, InputPlugin, AssetsPlugin, UiPlugin))
        .run()
}
