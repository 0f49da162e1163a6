// Five-pointed star pulsing between its base and 1.5x scale.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("star pulse");
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
        Mesh2d(meshes.add(ShapeKind::Star.mesh(80.0))),
        MeshMaterial2d(materials.add(palette::SAND)),
        Transform::default(),
        Tween::scale(Vec2::ONE, Vec2::splat(1.5), 0.8)
            .with_ease(EaseKind::InOut)
            .yoyo()
            .repeat(Repeat::Infinite),
    ));
}
