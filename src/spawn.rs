//! Event-driven shape spawning. The periodic spawner and the pointer-click
//! spawner both feed [`SpawnShape`] events into one consumer, so entity
//! construction lives in a single place.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::palette;
use crate::physics::{bouncy_collider, velocity_from_angle};
use crate::shapes::ShapeKind;
use crate::tween::{EaseKind, Tween};

/// Marker for everything produced through the spawn channel.
#[derive(Component, Debug, Default)]
pub struct SpawnedShape;

/// Optional entrance effect attached to a spawned shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SpawnEffect {
    #[default]
    None,
    /// Alpha tween from opaque to invisible over the given seconds.
    FadeOut(f32),
    /// Scale-in tween over the given seconds.
    Pop(f32),
}

#[derive(Event, Debug, Clone)]
pub struct SpawnShape {
    pub kind: ShapeKind,
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
    /// `Some` spawns a dynamic rapier body with this initial velocity.
    pub velocity: Option<Vec2>,
    pub effect: SpawnEffect,
}

pub struct SpawnPlugin;

impl Plugin for SpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnShape>()
            .add_systems(Update, spawn_shapes);
    }
}

fn spawn_shapes(
    mut events: EventReader<SpawnShape>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for ev in events.read() {
        let mesh = meshes.add(ev.kind.mesh(ev.size));
        let material = materials.add(ev.color);
        let mut entity = commands.spawn((
            Mesh2d(mesh),
            MeshMaterial2d(material),
            Transform::from_translation(ev.position.extend(0.0)),
            SpawnedShape,
        ));
        if let Some(velocity) = ev.velocity {
            entity.insert((
                RigidBody::Dynamic,
                bouncy_collider(ev.kind, ev.size),
                Velocity::linear(velocity),
                Restitution::coefficient(0.8),
            ));
        }
        match ev.effect {
            SpawnEffect::None => {}
            SpawnEffect::FadeOut(secs) => {
                entity.insert(Tween::alpha(1.0, 0.0, secs));
            }
            SpawnEffect::Pop(secs) => {
                entity.insert(
                    Tween::scale(Vec2::splat(0.1), Vec2::ONE, secs).with_ease(EaseKind::Out),
                );
            }
        }
    }
}

/// Spawns a shape wherever the pointer clicks.
#[derive(Resource, Debug, Clone)]
pub struct ClickSpawn {
    pub kinds: Vec<ShapeKind>,
    pub size_range: (f32, f32),
    /// Launch spawned shapes as rapier bodies.
    pub physics: bool,
    pub effect: SpawnEffect,
    spawned: usize,
}

impl ClickSpawn {
    pub fn new(kinds: Vec<ShapeKind>, size_range: (f32, f32)) -> Self {
        Self {
            kinds,
            size_range,
            physics: false,
            effect: SpawnEffect::Pop(0.35),
            spawned: 0,
        }
    }

    pub fn with_physics(mut self) -> Self {
        self.physics = true;
        self
    }

    pub fn with_effect(mut self, effect: SpawnEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }
}

pub struct ClickSpawnPlugin(pub ClickSpawn);

impl Plugin for ClickSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.0.clone())
            .add_systems(Update, click_to_spawn);
    }
}

fn click_to_spawn(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut state: ResMut<ClickSpawn>,
    mut events: EventWriter<SpawnShape>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_tf)) = cameras.single() else {
        return;
    };
    // clicks while the cursor is outside the window spawn nothing
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(position) = camera.viewport_to_world_2d(camera_tf, cursor) else {
        return;
    };

    let mut rng = rand::thread_rng();
    let kind = state.kinds[state.spawned % state.kinds.len()];
    let color = palette::color_for_index(state.spawned);
    state.spawned += 1;
    let velocity = state.physics.then(|| {
        velocity_from_angle(rng.gen_range(60.0..120.0), rng.gen_range(120.0..260.0))
    });
    events.write(SpawnShape {
        kind,
        position,
        size: rng.gen_range(state.size_range.0..state.size_range.1),
        color,
        velocity,
        effect: state.effect,
    });
    debug!("click spawn #{} at {position:?}", state.spawned);
}
