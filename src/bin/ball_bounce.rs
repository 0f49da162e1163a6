// Ball reflecting losslessly off the window bounds, gravity off.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use shapelab::physics::bouncy_collider;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("ball bounce");
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
        Mesh2d(meshes.add(ShapeKind::Circle.mesh(35.0))),
        MeshMaterial2d(materials.add(palette::CORAL)),
        Transform::default(),
        RigidBody::Dynamic,
        bouncy_collider(ShapeKind::Circle, 35.0),
        Velocity::linear(velocity_from_angle(35.0, 420.0)),
        Restitution {
            coefficient: 1.0,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction::coefficient(0.0),
        GravityScale(0.0),
        Ccd::enabled(),
    ));
}
