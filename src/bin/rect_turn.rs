// Rectangle making four half-turns, then resting.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("rect turn");
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
        Mesh2d(meshes.add(ShapeKind::Rectangle.mesh(85.0))),
        MeshMaterial2d(materials.add(palette::CORAL)),
        Transform::default(),
        Tween::rotation_degrees(0.0, 180.0, 1.5)
            .with_ease(EaseKind::InOut)
            .repeat(Repeat::Count(3)),
    ));
}
