//! Shared demo color palette.
//! Single source of truth so spawners and hand-placed shapes stay consistent.

use bevy::prelude::*;

pub const CORAL: Color = Color::srgb(0.94, 0.42, 0.38);
pub const AQUA: Color = Color::srgb(0.25, 0.78, 0.76);
pub const SAND: Color = Color::srgb(0.93, 0.80, 0.45);
pub const LEAF: Color = Color::srgb(0.40, 0.78, 0.42);
pub const PLUM: Color = Color::srgb(0.62, 0.44, 0.86);
pub const SKY: Color = Color::srgb(0.35, 0.62, 0.92);

/// Palette in spawn-cycle order.
pub const BASE_COLORS: [Color; 6] = [CORAL, AQUA, SAND, LEAF, PLUM, SKY];

/// Returns a color for an arbitrary index, wrapping around the palette.
#[inline]
pub fn color_for_index(i: usize) -> Color {
    BASE_COLORS[i % BASE_COLORS.len()]
}
