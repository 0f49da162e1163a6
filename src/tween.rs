//! Fixed-duration property tweens: fade, scale, rotate and move, with
//! easing, yoyo and repeat (`Repeat::Count(n)` replays the cycle n more
//! times, `Infinite` never stops).

use bevy::color::Alpha;
use bevy::prelude::*;
use keyframe::functions::{EaseIn, EaseInOut, EaseOut, Linear};
use keyframe::EasingFunction;

/// How often a tween cycle replays after the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(0)
    }
}

/// Easing curve applied to the playhead position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EaseKind {
    #[default]
    Linear,
    In,
    Out,
    InOut,
    BounceOut,
}

impl EaseKind {
    pub fn apply(self, t: f32) -> f32 {
        let x = f64::from(t.clamp(0.0, 1.0));
        let y = match self {
            EaseKind::Linear => Linear.y(x),
            EaseKind::In => EaseIn.y(x),
            EaseKind::Out => EaseOut.y(x),
            EaseKind::InOut => EaseInOut.y(x),
            EaseKind::BounceOut => bounce_out(x),
        };
        y as f32
    }
}

/// Piecewise bounce polynomial; keyframe has no bounce family.
fn bounce_out(x: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

/// Tracks where a tween is inside its forward/reverse/repeat cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    duration: f32,
    elapsed: f32,
    yoyo: bool,
    repeat: Repeat,
    reversing: bool,
    finished: bool,
}

impl Playhead {
    pub fn new(duration_secs: f32) -> Self {
        let duration = duration_secs.max(0.0);
        Self {
            duration,
            elapsed: 0.0,
            yoyo: false,
            repeat: Repeat::default(),
            reversing: false,
            // zero-length tweens complete on the spot instead of dividing by it
            finished: duration == 0.0,
        }
    }

    pub fn with_yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Advances by a frame delta, wrapping as many cycle boundaries as the
    /// delta covers.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.elapsed += dt.max(0.0);
        while self.elapsed >= self.duration {
            self.elapsed -= self.duration;
            if self.yoyo && !self.reversing {
                self.reversing = true;
                continue;
            }
            self.reversing = false;
            match self.repeat {
                Repeat::Infinite => {}
                Repeat::Count(0) => {
                    self.finished = true;
                    self.elapsed = 0.0;
                    return;
                }
                Repeat::Count(ref mut n) => *n -= 1,
            }
        }
    }

    /// Normalized position in [0, 1]. A finished tween rests at its end
    /// value, or back at the start when yoyo-ing.
    pub fn value(&self) -> f32 {
        if self.finished {
            return if self.yoyo { 0.0 } else { 1.0 };
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        if self.reversing {
            1.0 - t
        } else {
            t
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}

/// Which property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    Alpha { from: f32, to: f32 },
    Scale { from: Vec2, to: Vec2 },
    /// Z rotation in radians.
    Rotation { from: f32, to: f32 },
    Translation { from: Vec2, to: Vec2 },
}

/// One tween per entity, removed once the playhead finishes.
#[derive(Component, Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    pub ease: EaseKind,
    pub playhead: Playhead,
}

impl Tween {
    fn new(target: TweenTarget, duration_secs: f32) -> Self {
        Self {
            target,
            ease: EaseKind::default(),
            playhead: Playhead::new(duration_secs),
        }
    }

    pub fn alpha(from: f32, to: f32, duration_secs: f32) -> Self {
        Self::new(TweenTarget::Alpha { from, to }, duration_secs)
    }

    pub fn scale(from: Vec2, to: Vec2, duration_secs: f32) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration_secs)
    }

    pub fn rotation_degrees(from: f32, to: f32, duration_secs: f32) -> Self {
        Self::new(
            TweenTarget::Rotation {
                from: from.to_radians(),
                to: to.to_radians(),
            },
            duration_secs,
        )
    }

    pub fn translation(from: Vec2, to: Vec2, duration_secs: f32) -> Self {
        Self::new(TweenTarget::Translation { from, to }, duration_secs)
    }

    pub fn with_ease(mut self, ease: EaseKind) -> Self {
        self.ease = ease;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.playhead = self.playhead.with_yoyo();
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.playhead = self.playhead.with_repeat(repeat);
        self
    }
}

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_tweens);
    }
}

fn drive_tweens(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut tweens: Query<(
        Entity,
        &mut Tween,
        &mut Transform,
        Option<&MeshMaterial2d<ColorMaterial>>,
        Option<&mut TextColor>,
    )>,
) {
    let dt = time.delta_secs();
    for (entity, mut tween, mut transform, material, text_color) in &mut tweens {
        tween.playhead.advance(dt);
        let t = tween.ease.apply(tween.playhead.value());
        match tween.target {
            TweenTarget::Alpha { from, to } => {
                let alpha = from + (to - from) * t;
                // an entity that lost its material mid-tween is skipped
                if let Some(handle) = material {
                    if let Some(mat) = materials.get_mut(&handle.0) {
                        mat.color.set_alpha(alpha);
                    }
                }
                if let Some(mut color) = text_color {
                    color.0.set_alpha(alpha);
                }
            }
            TweenTarget::Scale { from, to } => {
                transform.scale = from.lerp(to, t).extend(1.0);
            }
            TweenTarget::Rotation { from, to } => {
                transform.rotation = Quat::from_rotation_z(from + (to - from) * t);
            }
            TweenTarget::Translation { from, to } => {
                let p = from.lerp(to, t);
                transform.translation.x = p.x;
                transform.translation.y = p.y;
            }
        }
        if tween.playhead.finished() {
            debug!("tween finished on {entity:?}");
            commands.entity(entity).remove::<Tween>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_progress() {
        let mut ph = Playhead::new(2.0);
        ph.advance(0.5);
        assert!((ph.value() - 0.25).abs() < 1e-6);
        ph.advance(1.0);
        assert!((ph.value() - 0.75).abs() < 1e-6);
        ph.advance(1.0);
        assert!(ph.finished());
        assert_eq!(ph.value(), 1.0);
    }

    #[test]
    fn yoyo_reverses_then_rests_at_start() {
        let mut ph = Playhead::new(1.0).with_yoyo();
        ph.advance(1.25);
        assert!(!ph.finished());
        assert!((ph.value() - 0.75).abs() < 1e-6, "reverse leg");
        ph.advance(0.75);
        assert!(ph.finished());
        assert_eq!(ph.value(), 0.0, "yoyo rests at the start value");
    }

    #[test]
    fn repeat_count_replays_extra_cycles() {
        // repeat 2 => 3 total cycles of 1s
        let mut ph = Playhead::new(1.0).with_repeat(Repeat::Count(2));
        ph.advance(1.5);
        assert!(!ph.finished());
        assert!((ph.value() - 0.5).abs() < 1e-6);
        ph.advance(1.0);
        assert!(!ph.finished());
        ph.advance(0.6);
        assert!(ph.finished());
    }

    #[test]
    fn infinite_never_finishes() {
        let mut ph = Playhead::new(0.5).with_yoyo().with_repeat(Repeat::Infinite);
        ph.advance(1000.0);
        assert!(!ph.finished());
        let v = ph.value();
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn large_delta_wraps_multiple_cycles() {
        let mut ph = Playhead::new(1.0).with_repeat(Repeat::Count(10));
        ph.advance(5.25);
        assert!(!ph.finished());
        assert!((ph.value() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let ph = Playhead::new(0.0);
        assert!(ph.finished());
        assert_eq!(ph.value(), 1.0);
        let mut ph = Playhead::new(-1.0);
        ph.advance(1.0);
        assert!(ph.finished());
    }

    #[test]
    fn ease_endpoints_fixed() {
        for ease in [
            EaseKind::Linear,
            EaseKind::In,
            EaseKind::Out,
            EaseKind::InOut,
            EaseKind::BounceOut,
        ] {
            assert!(ease.apply(0.0).abs() < 1e-3, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-3, "{ease:?} at 1");
        }
    }

    #[test]
    fn ease_stays_in_unit_range_for_clamped_input() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = EaseKind::BounceOut.apply(t);
            assert!((-1e-6..=1.0 + 1e-6).contains(&v), "bounce({t}) = {v}");
        }
        assert_eq!(EaseKind::Linear.apply(2.0), 1.0, "input is clamped");
    }
}
