// Triangle dropping under gravity and settling on the floor wall.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use shapelab::physics::bouncy_collider;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("triangle fall");
    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
        .add_plugins((ScenePlugin, AutoClosePlugin, StatsPlugin, WorldBoundsPlugin))
        .add_systems(Startup, setup);
    if cfg.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
    app.run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(ShapeKind::Triangle.mesh(65.0))),
        MeshMaterial2d(materials.add(palette::LEAF)),
        Transform::from_xyz(0.0, 200.0, 0.0),
        RigidBody::Dynamic,
        bouncy_collider(ShapeKind::Triangle, 65.0),
        Restitution::coefficient(0.65),
    ));
}
