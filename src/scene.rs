//! Shared scene scaffolding: window group, 2D camera, clear color and the
//! one-time startup config report.

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::config::DemoConfig;

/// `DefaultPlugins` with the window taken from the demo config.
pub fn demo_plugins(cfg: &DemoConfig) -> PluginGroupBuilder {
    DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    })
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, report_config));
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<DemoConfig>) {
    commands.spawn(Camera2d);
    commands.insert_resource(ClearColor(cfg.background_color()));
}

fn report_config(cfg: Res<DemoConfig>) {
    for note in &cfg.load_notes {
        warn!("config: {note}");
    }
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
    info!(
        "{} ({}x{}, background #{})",
        cfg.window.title, cfg.window.width, cfg.window.height, cfg.background
    );
}
