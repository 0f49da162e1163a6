// All seven primitives as immediate-mode gizmo outlines, slowly turning.
// Nothing here is baked to a mesh; the rings are re-drawn every frame.

use bevy::prelude::*;
use shapelab::prelude::*;

const OUTLINE_SIZE: f32 = 55.0;
const SPIN_RATE: f32 = 0.4; // radians per second

fn main() {
    let cfg = demo_config("gallery");
    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(demo_plugins(&cfg))
        .add_plugins((ScenePlugin, AutoClosePlugin, StatsPlugin))
        .add_systems(Update, draw_gallery)
        .run();
}

fn draw_gallery(mut gizmos: Gizmos, time: Res<Time>) {
    let rotation = Vec2::from_angle(time.elapsed_secs() * SPIN_RATE);
    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        let column = (i % 4) as f32;
        let center = if i < 4 {
            Vec2::new((column - 1.5) * 170.0, 110.0)
        } else {
            Vec2::new((column - 1.0) * 170.0, -110.0)
        };
        let ring = kind.ring(OUTLINE_SIZE);
        let mut points: Vec<Vec2> = ring
            .iter()
            .map(|v| rotation.rotate(*v) + center)
            .collect();
        points.push(points[0]); // close the outline
        gizmos.linestrip_2d(points, palette::color_for_index(i));
    }
}
