// Ellipse gliding side to side.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("ellipse glide");
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
        Mesh2d(meshes.add(ShapeKind::Ellipse.mesh(70.0))),
        MeshMaterial2d(materials.add(palette::PLUM)),
        Transform::from_xyz(-250.0, 0.0, 0.0),
        Tween::translation(Vec2::new(-250.0, 0.0), Vec2::new(250.0, 0.0), 2.0)
            .with_ease(EaseKind::InOut)
            .yoyo()
            .repeat(Repeat::Infinite),
    ));
}
