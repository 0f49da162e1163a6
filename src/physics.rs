//! Rigid-body bounce support: world-bound walls, launch-velocity
//! decomposition and per-shape colliders for the rapier studies.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::DemoConfig;
use crate::shapes::ShapeKind;

const WALL_THICKNESS: f32 = 40.0;

/// Decomposes an angle (degrees, counterclockwise from +X) and speed into a
/// launch velocity.
pub fn velocity_from_angle(degrees: f32, speed: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin()) * speed
}

/// Centers and half-extents of four static walls hugging the window
/// interior. The horizontal walls overhang the corners so nothing escapes
/// diagonally.
pub fn wall_layout(width: f32, height: f32, thickness: f32) -> [(Vec2, Vec2); 4] {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let half_t = thickness * 0.5;
    [
        (
            Vec2::new(0.0, half_h + half_t),
            Vec2::new(half_w + thickness, half_t),
        ),
        (
            Vec2::new(0.0, -half_h - half_t),
            Vec2::new(half_w + thickness, half_t),
        ),
        (
            Vec2::new(half_w + half_t, 0.0),
            Vec2::new(half_t, half_h + thickness),
        ),
        (
            Vec2::new(-half_w - half_t, 0.0),
            Vec2::new(half_t, half_h + thickness),
        ),
    ]
}

/// Collider matching a [`ShapeKind`] mesh of the same nominal size.
pub fn bouncy_collider(kind: ShapeKind, size: f32) -> Collider {
    match kind {
        ShapeKind::Circle => Collider::ball(size),
        ShapeKind::Rectangle => Collider::cuboid(size, size * 0.7),
        _ => Collider::convex_hull(&kind.ring(size)).unwrap_or_else(|| Collider::ball(size)),
    }
}

/// Spawns fixed lossless walls sized from the configured window.
pub struct WorldBoundsPlugin;

impl Plugin for WorldBoundsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_world_bounds);
    }
}

fn spawn_world_bounds(mut commands: Commands, cfg: Res<DemoConfig>) {
    let layout = wall_layout(cfg.window.width, cfg.window.height, WALL_THICKNESS);
    for (center, half) in layout {
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            Friction::coefficient(0.0),
            Restitution {
                coefficient: 1.0,
                combine_rule: CoefficientCombineRule::Max,
            },
            Transform::from_translation(center.extend(0.0)),
        ));
    }
    info!(
        "world bounds: {}x{} interior, wall thickness {}",
        cfg.window.width, cfg.window.height, WALL_THICKNESS
    );
}
