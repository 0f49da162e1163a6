//! Spawn channel, click/interval spawners and the countdown, headless.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use shapelab::prelude::*;
use shapelab::spawn::SpawnedShape;

fn demo_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<ColorMaterial>::default());
    app.add_plugins((SpawnPlugin, TimersPlugin, TweenPlugin));
    app
}

fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn spawned_entities(app: &mut App) -> Vec<Entity> {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, With<SpawnedShape>>();
    query.iter(app.world()).collect()
}

#[test]
fn spawn_event_builds_entity_with_effect() {
    let mut app = demo_app();
    app.world_mut().send_event(SpawnShape {
        kind: ShapeKind::Hexagon,
        position: Vec2::new(10.0, 20.0),
        size: 25.0,
        color: palette::AQUA,
        velocity: None,
        effect: SpawnEffect::FadeOut(1.0),
    });
    advance(&mut app, 0.016);

    let spawned = spawned_entities(&mut app);
    assert_eq!(spawned.len(), 1);
    let entity = spawned[0];
    let transform = app.world().get::<Transform>(entity).unwrap();
    assert_eq!(transform.translation.truncate(), Vec2::new(10.0, 20.0));
    assert!(
        app.world().get::<Tween>(entity).is_some(),
        "fade-out attaches a tween"
    );
    assert!(
        app.world().get::<Velocity>(entity).is_none(),
        "no body without a velocity"
    );
}

#[test]
fn spawn_event_with_velocity_adds_a_body() {
    let mut app = demo_app();
    app.world_mut().send_event(SpawnShape {
        kind: ShapeKind::Circle,
        position: Vec2::ZERO,
        size: 15.0,
        color: palette::CORAL,
        velocity: Some(velocity_from_angle(90.0, 50.0)),
        effect: SpawnEffect::None,
    });
    advance(&mut app, 0.016);

    let spawned = spawned_entities(&mut app);
    assert_eq!(spawned.len(), 1);
    let velocity = app
        .world()
        .get::<Velocity>(spawned[0])
        .expect("dynamic body velocity");
    assert!((velocity.linvel.y - 50.0).abs() < 1e-3);
}

#[test]
fn capped_interval_spawner_stops_at_cap() {
    let mut app = demo_app();
    app.insert_resource(IntervalSpawner::new(
        0.5,
        Some(3),
        SpawnerTemplate {
            kinds: vec![ShapeKind::Circle, ShapeKind::Star],
            size_range: (10.0, 20.0),
            x_range: (-100.0, 100.0),
            drop_y: 250.0,
            fall_speed: (20.0, 40.0),
        },
    ));

    for _ in 0..24 {
        advance(&mut app, 0.3); // 7.2 simulated seconds, 14 periods
    }
    advance(&mut app, 0.0);

    assert_eq!(spawned_entities(&mut app).len(), 3);
    assert_eq!(app.world().resource::<IntervalSpawner>().spawned(), 3);
}

#[test]
fn uncapped_spawner_keeps_going() {
    let mut app = demo_app();
    app.insert_resource(IntervalSpawner::new(
        0.25,
        None,
        SpawnerTemplate {
            kinds: vec![ShapeKind::Diamond],
            size_range: (10.0, 20.0),
            x_range: (-50.0, 50.0),
            drop_y: 200.0,
            fall_speed: (20.0, 40.0),
        },
    ));

    advance(&mut app, 2.0);
    advance(&mut app, 2.0);
    // settle one frame so events written after the consumer ran are drained
    advance(&mut app, 0.0);
    assert_eq!(spawned_entities(&mut app).len(), 16);
}

#[test]
fn countdown_ticks_to_zero_and_pauses() {
    let mut app = demo_app();
    let entity = app
        .world_mut()
        .spawn((Text2d::new("3"), Countdown::from_seconds(3)))
        .id();

    advance(&mut app, 1.1);
    assert_eq!(app.world().get::<Text2d>(entity).unwrap().0, "2");

    advance(&mut app, 2.5);
    let text = app.world().get::<Text2d>(entity).unwrap();
    assert_eq!(text.0, "0");
    assert_eq!(app.world().get::<Countdown>(entity).unwrap().remaining(), 0);

    // a paused countdown stays at zero
    advance(&mut app, 5.0);
    assert_eq!(app.world().get::<Text2d>(entity).unwrap().0, "0");
}
