use bevy::prelude::{Color, Gizmos, Isometry2d, Vec2};

use crate::canvas::Canvas;
use crate::palette::Rgba;

/// Draws onto the window through immediate-mode gizmos.
///
/// The camera is centered on the viewport with y pointing up, so canvas coordinates are flipped.
pub struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    height: f32,
}

pub fn to_world(point: Vec2, height: f32) -> Vec2 {
    Vec2::new(point.x, height - point.y)
}

/// Radii of the concentric rings that cover a disc, one pixel apart, outermost first.
pub fn fill_radii(radius: f32) -> impl Iterator<Item = f32> {
    let rings = radius.max(0.0).ceil() as u32;
    (0..rings).map(move |i| radius - i as f32).filter(|r| *r > 0.0)
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

impl<'a, 'w, 's> GizmoCanvas<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, height: f32) -> Self {
        GizmoCanvas { gizmos, height }
    }

    /// Unfilled circle, for debug overlays.
    pub fn outline_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.gizmos.circle_2d(
            Isometry2d::from_translation(to_world(center, self.height)),
            radius,
            to_color(color),
        );
    }
}

impl Canvas for GizmoCanvas<'_, '_, '_> {
    /// Gizmos are redrawn from scratch every frame and the window's clear color is the background.
    fn clear(&mut self) {}

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        // Gizmos only stroke, so the disc is covered with rings.
        let center = Isometry2d::from_translation(to_world(center, self.height));
        for ring in fill_radii(radius) {
            self.gizmos.circle_2d(center, ring, to_color(color));
        }
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, from_color: Rgba, to_color_end: Rgba) {
        // Fade the head color out rather than blending toward black.
        let end = if to_color_end.a <= 0.0 { from_color.with_alpha(0.0) } else { to_color_end };
        let start = to_world(from, self.height);
        let finish = to_world(to, self.height);
        let normal = (finish - start).perp().normalize_or_zero();

        let strands = width.ceil().max(1.0) as u32;
        for i in 0..strands {
            let offset = normal * (i as f32 - (strands - 1) as f32 / 2.0);
            self.gizmos.line_gradient_2d(start + offset, finish + offset, to_color(from_color), to_color(end));
        }
    }
}
