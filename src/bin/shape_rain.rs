// Capped periodic spawner dropping shapes that pile up on the floor wall.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("shape rain");
    let spawner = IntervalSpawner::new(
        0.4,
        Some(40),
        SpawnerTemplate {
            kinds: vec![
                ShapeKind::Circle,
                ShapeKind::Diamond,
                ShapeKind::Hexagon,
                ShapeKind::Star,
            ],
            size_range: (16.0, 34.0),
            x_range: (-cfg.window.width * 0.4, cfg.window.width * 0.4),
            drop_y: cfg.window.height * 0.5 - 20.0,
            fall_speed: (20.0, 90.0),
        },
    );
    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(spawner)
        .add_plugins(demo_plugins(&cfg))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
        .add_plugins((
            ScenePlugin,
            AutoClosePlugin,
            StatsPlugin,
            WorldBoundsPlugin,
            SpawnPlugin,
            TimersPlugin,
        ));
    if cfg.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
    app.run();
}
