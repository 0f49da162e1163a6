// Spawns a shape wherever the pointer clicks, cycling kinds and colors.

use bevy::prelude::*;
use shapelab::prelude::*;

fn main() {
    let cfg = demo_config("click burst");
    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins((
            ScenePlugin,
            AutoClosePlugin,
            StatsPlugin,
            SpawnPlugin,
            TweenPlugin,
            ClickSpawnPlugin(ClickSpawn::new(ShapeKind::ALL.to_vec(), (22.0, 48.0))),
        ))
        .run();
}
