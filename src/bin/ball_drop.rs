// Ball dropping onto an imaginary floor with a bounce-out ease.
// The bounce is pure tweening; see ball_bounce for the rigid-body version.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("ball drop");
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
    let start = Vec2::new(0.0, 240.0);
    let floor = Vec2::new(0.0, -180.0);
    commands.spawn((
        Mesh2d(meshes.add(ShapeKind::Circle.mesh(50.0))),
        MeshMaterial2d(materials.add(palette::LEAF)),
        Transform::from_translation(start.extend(0.0)),
        Tween::translation(start, floor, 2.2).with_ease(EaseKind::BounceOut),
    ));
}
