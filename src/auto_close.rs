//! Exits the app after `window.autoClose` seconds when positive.
//! Lets any study run unattended (demo reels, recordings).

use bevy::prelude::*;

use crate::config::DemoConfig;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_auto_close)
            .add_systems(Update, check_auto_close);
    }
}

fn setup_auto_close(mut commands: Commands, cfg: Res<DemoConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!("auto close in {secs}s");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_auto_close(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(timer) = timer.as_mut() {
        timer.tick(time.delta());
        if timer.finished() {
            info!("auto close timer elapsed, exiting");
            exit.write(AppExit::Success);
        }
    }
}
