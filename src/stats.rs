//! Periodic frame/entity log line, debug level.

use bevy::prelude::*;

const LOG_INTERVAL_SECS: f32 = 5.0;

#[derive(Resource)]
struct StatsState {
    timer: Timer,
    frames: u32,
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(StatsState {
            timer: Timer::from_seconds(LOG_INTERVAL_SECS, TimerMode::Repeating),
            frames: 0,
        })
        .add_systems(Update, log_stats);
    }
}

fn log_stats(time: Res<Time>, mut state: ResMut<StatsState>, entities: Query<Entity>) {
    state.frames += 1;
    state.timer.tick(time.delta());
    if state.timer.just_finished() {
        let fps = state.frames as f32 / LOG_INTERVAL_SECS;
        debug!(
            "t={:.1}s fps~{fps:.1} entities={}",
            time.elapsed_secs(),
            entities.iter().count()
        );
        state.frames = 0;
    }
}
