// Hexagon rotating at a fixed rate through the frame-update loop.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("hexagon spin");
    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins((ScenePlugin, AutoClosePlugin, StatsPlugin, SpinPlugin))
        .add_systems(Startup, setup)
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(ShapeKind::Hexagon.mesh(100.0))),
        MeshMaterial2d(materials.add(palette::AQUA)),
        Transform::default(),
        AngularSpin {
            degrees_per_sec: 45.0,
        },
    ));
}
