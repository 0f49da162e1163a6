// Diamond fading out once and staying gone.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("diamond fade");
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
        Mesh2d(meshes.add(ShapeKind::Diamond.mesh(110.0))),
        MeshMaterial2d(materials.add(palette::SKY)),
        Transform::default(),
        Tween::alpha(1.0, 0.0, 3.0).with_ease(EaseKind::Out),
    ));
}
