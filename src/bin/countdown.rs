// Ten-second text countdown driven by a repeating one-second timer.

use bevy::prelude::*;
use shapelab::prelude::*;

const START_SECONDS: u32 = 10;

fn main() {
    let cfg = demo_config("countdown");
    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins((ScenePlugin, AutoClosePlugin, StatsPlugin, TimersPlugin))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Text2d::new(START_SECONDS.to_string()),
        TextFont {
            font_size: 128.0,
            ..default()
        },
        TextColor(palette::SAND),
        Countdown::from_seconds(START_SECONDS),
    ));
}
