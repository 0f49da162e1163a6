//! Repeating-timer studies: a once-per-second text countdown and a periodic
//! shape spawner with an optional cap.

use bevy::prelude::*;
use rand::Rng;

use crate::palette;
use crate::shapes::ShapeKind;
use crate::spawn::{SpawnEffect, SpawnShape};

/// Counts down once per second into the sibling [`Text2d`], then pauses.
#[derive(Component, Debug)]
pub struct Countdown {
    remaining: u32,
    timer: Timer,
}

impl Countdown {
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

fn tick_countdowns(time: Res<Time>, mut countdowns: Query<(&mut Countdown, &mut Text2d)>) {
    for (mut countdown, mut text) in &mut countdowns {
        if countdown.remaining == 0 {
            continue;
        }
        countdown.timer.tick(time.delta());
        for _ in 0..countdown.timer.times_finished_this_tick() {
            countdown.remaining -= 1;
            text.0 = countdown.remaining.to_string();
            if countdown.remaining == 0 {
                countdown.timer.pause();
                info!("countdown reached zero");
                break;
            }
        }
    }
}

/// What the periodic spawner drops, and from where.
#[derive(Debug, Clone)]
pub struct SpawnerTemplate {
    pub kinds: Vec<ShapeKind>,
    pub size_range: (f32, f32),
    pub x_range: (f32, f32),
    pub drop_y: f32,
    /// Initial downward speed range; rapier gravity does the rest.
    pub fall_speed: (f32, f32),
}

/// Emits one [`SpawnShape`] per period. A cap of `Some(n)` stops the timer
/// after n spawns; `None` spawns forever.
#[derive(Resource, Debug)]
pub struct IntervalSpawner {
    timer: Timer,
    remaining: Option<u32>,
    spawned: usize,
    template: SpawnerTemplate,
}

impl IntervalSpawner {
    pub fn new(period_secs: f32, cap: Option<u32>, template: SpawnerTemplate) -> Self {
        Self {
            timer: Timer::from_seconds(period_secs, TimerMode::Repeating),
            remaining: cap,
            spawned: 0,
            template,
        }
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    fn next_spawn(&mut self) -> SpawnShape {
        let mut rng = rand::thread_rng();
        let t = &self.template;
        let kind = t.kinds[self.spawned % t.kinds.len()];
        let color = palette::color_for_index(self.spawned);
        self.spawned += 1;
        SpawnShape {
            kind,
            position: Vec2::new(rng.gen_range(t.x_range.0..t.x_range.1), t.drop_y),
            size: rng.gen_range(t.size_range.0..t.size_range.1),
            color,
            velocity: Some(Vec2::new(
                rng.gen_range(-30.0..30.0),
                -rng.gen_range(t.fall_speed.0..t.fall_speed.1),
            )),
            effect: SpawnEffect::None,
        }
    }
}

fn tick_interval_spawner(
    time: Res<Time>,
    spawner: Option<ResMut<IntervalSpawner>>,
    mut events: EventWriter<SpawnShape>,
) {
    let Some(mut spawner) = spawner else {
        return;
    };
    spawner.timer.tick(time.delta());
    for _ in 0..spawner.timer.times_finished_this_tick() {
        if let Some(left) = spawner.remaining {
            if left == 0 {
                spawner.timer.pause();
                info!("spawner cap reached after {} shapes", spawner.spawned);
                break;
            }
            spawner.remaining = Some(left - 1);
        }
        let ev = spawner.next_spawn();
        events.write(ev);
    }
}

pub struct TimersPlugin;

impl Plugin for TimersPlugin {
    fn build(&self, app: &mut App) {
        // add_event is idempotent; SpawnPlugin may or may not be present
        app.add_event::<SpawnShape>()
            .add_systems(Update, (tick_countdowns, tick_interval_spawner));
    }
}
