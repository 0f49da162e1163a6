//! shapelab: small 2D shape and animation studies.
//!
//! The library holds the scaffolding every study shares (config, camera,
//! palette, shape math, tween/spin/timer/spawn plugins); each binary under
//! `src/bin/` is one self-contained study.

pub mod auto_close;
pub mod cli;
pub mod config;
pub mod palette;
pub mod physics;
pub mod scene;
pub mod shapes;
pub mod spawn;
pub mod spin;
pub mod stats;
pub mod timers;
pub mod tween;

pub mod prelude {
    pub use crate::auto_close::AutoClosePlugin;
    pub use crate::cli::demo_config;
    pub use crate::config::DemoConfig;
    pub use crate::palette;
    pub use crate::physics::{velocity_from_angle, WorldBoundsPlugin};
    pub use crate::scene::{demo_plugins, ScenePlugin};
    pub use crate::shapes::ShapeKind;
    pub use crate::spawn::{ClickSpawn, ClickSpawnPlugin, SpawnEffect, SpawnPlugin, SpawnShape};
    pub use crate::spin::{AngularSpin, SpinPlugin};
    pub use crate::stats::StatsPlugin;
    pub use crate::timers::{Countdown, IntervalSpawner, SpawnerTemplate, TimersPlugin};
    pub use crate::tween::{EaseKind, Repeat, Tween, TweenPlugin};
}
