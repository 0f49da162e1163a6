//! Frame-delta rotation: a designer-facing degrees-per-second rate applied
//! as per-frame radian increments.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct AngularSpin {
    pub degrees_per_sec: f32,
}

/// Radians to rotate this frame for the given rate and delta.
#[inline]
pub fn frame_rotation(degrees_per_sec: f32, dt: f32) -> f32 {
    degrees_per_sec.to_radians() * dt
}

pub struct SpinPlugin;

impl Plugin for SpinPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_spin);
    }
}

fn drive_spin(time: Res<Time>, mut spinners: Query<(&AngularSpin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut spinners {
        transform.rotate_z(frame_rotation(spin.degrees_per_sec, dt));
    }
}
