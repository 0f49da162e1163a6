//! Drives the tween plugin in a headless app with manually advanced time.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use bevy::color::Alpha;
use bevy::prelude::*;
use shapelab::prelude::*;

fn tween_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.insert_resource(Assets::<ColorMaterial>::default());
    app.add_plugins(TweenPlugin);
    app
}

fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

#[test]
fn alpha_tween_fades_material_then_detaches() {
    let mut app = tween_app();
    let handle = app
        .world_mut()
        .resource_mut::<Assets<ColorMaterial>>()
        .add(ColorMaterial::from(Color::WHITE));
    let entity = app
        .world_mut()
        .spawn((
            MeshMaterial2d(handle.clone()),
            Transform::default(),
            Tween::alpha(1.0, 0.0, 1.0),
        ))
        .id();

    advance(&mut app, 0.5);
    let alpha = app
        .world()
        .resource::<Assets<ColorMaterial>>()
        .get(&handle)
        .expect("material")
        .color
        .alpha();
    assert!((alpha - 0.5).abs() < 1e-4, "halfway alpha, got {alpha}");
    assert!(app.world().get::<Tween>(entity).is_some());

    advance(&mut app, 0.6);
    let alpha = app
        .world()
        .resource::<Assets<ColorMaterial>>()
        .get(&handle)
        .expect("material")
        .color
        .alpha();
    assert!(alpha.abs() < 1e-4, "rests fully transparent, got {alpha}");
    assert!(
        app.world().get::<Tween>(entity).is_none(),
        "finished tween is removed"
    );
}

#[test]
fn scale_tween_interpolates_transform() {
    let mut app = tween_app();
    let entity = app
        .world_mut()
        .spawn((
            Transform::default(),
            Tween::scale(Vec2::ONE, Vec2::splat(2.0), 0.5),
        ))
        .id();

    advance(&mut app, 0.25);
    let scale = app.world().get::<Transform>(entity).unwrap().scale;
    assert!((scale.x - 1.5).abs() < 1e-4);
    assert!((scale.y - 1.5).abs() < 1e-4);
    assert!((scale.z - 1.0).abs() < 1e-6, "Z scale untouched");
}

#[test]
fn rotation_tween_completes_at_target_angle() {
    let mut app = tween_app();
    let entity = app
        .world_mut()
        .spawn((
            Transform::default(),
            Tween::rotation_degrees(0.0, 90.0, 0.4),
        ))
        .id();

    advance(&mut app, 1.0);
    let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
    let expected = Quat::from_rotation_z(FRAC_PI_2);
    assert!(
        rotation.angle_between(expected) < 1e-4,
        "expected quarter turn, got {rotation:?}"
    );
    assert!(app.world().get::<Tween>(entity).is_none());
}

#[test]
fn yoyo_translation_comes_back() {
    let mut app = tween_app();
    let from = Vec2::new(-100.0, 0.0);
    let to = Vec2::new(100.0, 0.0);
    let entity = app
        .world_mut()
        .spawn((
            Transform::from_translation(from.extend(0.0)),
            Tween::translation(from, to, 1.0).yoyo(),
        ))
        .id();

    // halfway through the reverse leg
    advance(&mut app, 1.5);
    let x = app.world().get::<Transform>(entity).unwrap().translation.x;
    assert!(x.abs() < 1e-3, "back at the midpoint, got {x}");

    advance(&mut app, 0.5);
    let transform = app.world().get::<Transform>(entity).unwrap();
    assert!((transform.translation.x - from.x).abs() < 1e-3, "rests at start");
    assert!(app.world().get::<Tween>(entity).is_none());
}

#[test]
fn infinite_tween_is_never_removed() {
    let mut app = tween_app();
    let entity = app
        .world_mut()
        .spawn((
            Transform::default(),
            Tween::scale(Vec2::ONE, Vec2::splat(1.5), 0.3)
                .yoyo()
                .repeat(Repeat::Infinite),
        ))
        .id();

    for _ in 0..50 {
        advance(&mut app, 0.25);
    }
    assert!(app.world().get::<Tween>(entity).is_some());
}
