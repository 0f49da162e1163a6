//! Primitive shape construction: the vertex arithmetic shared by every study
//! plus the bake into a retained [`Mesh`] asset.

use bevy::prelude::*;
use bevy::render::{
    mesh::Indices, render_asset::RenderAssetUsages, render_resource::PrimitiveTopology,
};
use std::f32::consts::{FRAC_PI_2, TAU};

/// The seven primitives the studies draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Diamond,
    Hexagon,
    Star,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Hexagon,
        ShapeKind::Star,
        ShapeKind::Ellipse,
    ];

    /// Bakes the shape into a mesh. `size` is the nominal radius; the
    /// non-round kinds derive their proportions from it.
    pub fn mesh(self, size: f32) -> Mesh {
        match self {
            ShapeKind::Circle => Circle::new(size).into(),
            ShapeKind::Rectangle => Rectangle::new(size * 2.0, size * 1.4).into(),
            ShapeKind::Ellipse => Ellipse::new(size, size * 0.62).into(),
            ShapeKind::Triangle => fan_mesh(&equilateral_triangle_vertices(size * 2.0)),
            ShapeKind::Diamond => fan_mesh(&diamond_vertices(size * 0.72, size)),
            ShapeKind::Hexagon => fan_mesh(&regular_polygon_vertices(6, size)),
            ShapeKind::Star => fan_mesh(&star_vertices(5, size, size * 0.45)),
        }
    }

    /// Outline vertices, counterclockwise. Used for gizmo outlines and as
    /// convex-hull input for colliders.
    pub fn ring(self, size: f32) -> Vec<Vec2> {
        match self {
            ShapeKind::Circle => ellipse_ring(size, size, 32),
            ShapeKind::Rectangle => {
                let (hx, hy) = (size, size * 0.7);
                vec![
                    Vec2::new(hx, hy),
                    Vec2::new(-hx, hy),
                    Vec2::new(-hx, -hy),
                    Vec2::new(hx, -hy),
                ]
            }
            ShapeKind::Ellipse => ellipse_ring(size, size * 0.62, 32),
            ShapeKind::Triangle => equilateral_triangle_vertices(size * 2.0).to_vec(),
            ShapeKind::Diamond => diamond_vertices(size * 0.72, size).to_vec(),
            ShapeKind::Hexagon => regular_polygon_vertices(6, size),
            ShapeKind::Star => star_vertices(5, size, size * 0.45),
        }
    }
}

/// Ring of a regular polygon, first vertex at the top.
pub fn regular_polygon_vertices(sides: usize, radius: f32) -> Vec<Vec2> {
    debug_assert!(sides >= 3, "a polygon needs at least 3 sides");
    (0..sides)
        .map(|i| {
            let angle = FRAC_PI_2 + TAU * i as f32 / sides as f32;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Centroid-centered equilateral triangle from its side length.
pub fn equilateral_triangle_vertices(side: f32) -> [Vec2; 3] {
    let height = side * 3f32.sqrt() / 2.0;
    [
        Vec2::new(0.0, height * 2.0 / 3.0),
        Vec2::new(-side / 2.0, -height / 3.0),
        Vec2::new(side / 2.0, -height / 3.0),
    ]
}

/// Diamond as four fixed axis offsets: up, left, down, right.
pub fn diamond_vertices(half_w: f32, half_h: f32) -> [Vec2; 4] {
    [
        Vec2::new(0.0, half_h),
        Vec2::new(-half_w, 0.0),
        Vec2::new(0.0, -half_h),
        Vec2::new(half_w, 0.0),
    ]
}

/// Star ring alternating between the outer and inner radius, `2 * points`
/// vertices, first point at the top.
pub fn star_vertices(points: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    debug_assert!(points >= 3, "a star needs at least 3 points");
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = FRAC_PI_2 + TAU * i as f32 / (points * 2) as f32;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Sampled ellipse outline.
pub fn ellipse_ring(half_x: f32, half_y: f32, segments: usize) -> Vec<Vec2> {
    debug_assert!(segments >= 3);
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            Vec2::new(angle.cos() * half_x, angle.sin() * half_y)
        })
        .collect()
}

/// Bakes an outline ring into a triangle-fan mesh around the centroid.
/// The ring must be star-shaped with respect to the origin, which every
/// [`ShapeKind`] ring is.
pub fn fan_mesh(ring: &[Vec2]) -> Mesh {
    let n = ring.len() as u32;
    debug_assert!(n >= 3);

    let mut positions = Vec::with_capacity(ring.len() + 1);
    positions.push([0.0, 0.0, 0.0]);
    positions.extend(ring.iter().map(|v| [v.x, v.y, 0.0]));

    let bound = ring
        .iter()
        .map(|v| v.length())
        .fold(f32::EPSILON, f32::max);
    let mut uvs = Vec::with_capacity(positions.len());
    uvs.push([0.5, 0.5]);
    uvs.extend(
        ring.iter()
            .map(|v| [v.x / (2.0 * bound) + 0.5, 0.5 - v.y / (2.0 * bound)]),
    );

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut indices = Vec::with_capacity(ring.len() * 3);
    for i in 1..=n {
        let next = if i == n { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}
