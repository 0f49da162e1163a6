// Circle fading in and out forever.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("circle fade");
    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins((ScenePlugin, AutoClosePlugin, StatsPlugin, TweenPlugin))
        .add_systems(Startup, setup)
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(ShapeKind::Circle.mesh(90.0))),
        MeshMaterial2d(materials.add(palette::AQUA)),
        Transform::default(),
        Tween::alpha(1.0, 0.15, 1.2)
            .with_ease(EaseKind::InOut)
            .yoyo()
            .repeat(Repeat::Infinite),
    ));
}
