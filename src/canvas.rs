use bevy::math::Vec2;

use crate::field_struct::ParticleField;
use crate::palette::Rgba;

/// A 2D drawing target. Coordinates have their origin at the top-left with y pointing down.
pub trait Canvas {
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Straight line whose color is interpolated from `from_color` at `from` to `to_color` at `to`.
    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, from_color: Rgba, to_color: Rgba);
}

impl ParticleField {
    /// Draws the current state. Never mutates the field.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear();

        for particle in &self.particles {
            canvas.fill_circle(particle.position, particle.radius, self.config.particle_fill);
        }

        for streak in &self.streaks {
            let tail = streak.position - streak.velocity * self.config.trail_frames;
            canvas.stroke_gradient_line(
                streak.position,
                tail,
                streak.width,
                streak.color.with_alpha(streak.opacity),
                Rgba::TRANSPARENT,
            );
        }
    }
}


#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use super::recording::{DrawCall, RecordingCanvas};
    use crate::field_config::FieldConfig;
    use crate::field_struct::ParticleField;
    use crate::palette::{Rgba, PARTICLE_FILL, STREAK_PALETTE};
    use crate::particle::Streak;

    fn field(count: u32) -> ParticleField {
        let mut field = ParticleField::new(FieldConfig {
            seed: Some(11),
            ..FieldConfig::default()
        });
        field.resize(400.0, 300.0);
        field.populate(count);
        field
    }

    #[test]
    fn clears_then_draws_every_particle_and_streak() {
        let mut field = field(25);
        for _ in 0..80 {
            field.tick();
        }
        let mut canvas = RecordingCanvas::default();
        field.render(&mut canvas);

        assert_eq!(canvas.calls[0], DrawCall::Clear);
        assert_eq!(canvas.circles(), 25);
        assert_eq!(canvas.lines(), 2);
        let last_circle = canvas.calls.iter().rposition(|c| matches!(c, DrawCall::Circle { .. }));
        let first_line = canvas.calls.iter().position(|c| matches!(c, DrawCall::Line { .. }));
        assert!(last_circle < first_line);
    }

    #[test]
    fn particles_drawn_with_fill_color_and_radius() {
        let field = field(3);
        let mut canvas = RecordingCanvas::default();
        field.render(&mut canvas);
        for (call, particle) in canvas.calls[1..].iter().zip(&field.particles) {
            assert_eq!(
                *call,
                DrawCall::Circle {
                    center: particle.position,
                    radius: particle.radius,
                    color: PARTICLE_FILL,
                }
            );
        }
    }

    #[test]
    fn streak_trail_points_against_velocity() {
        let mut field = field(0);
        field.streaks.push(Streak {
            position: Vec2::new(100.0, 50.0),
            velocity: Vec2::new(5.0, 2.0),
            age: 30,
            max_age: 60,
            width: 3.0,
            color: STREAK_PALETTE[2],
            opacity: 0.6,
        });
        let mut canvas = RecordingCanvas::default();
        field.render(&mut canvas);
        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Line {
                    from: Vec2::new(100.0, 50.0),
                    to: Vec2::new(60.0, 34.0),
                    width: 3.0,
                    from_color: STREAK_PALETTE[2].with_alpha(0.6),
                    to_color: Rgba::TRANSPARENT,
                }
            ]
        );
    }

    #[test]
    fn empty_field_draws_nothing_but_clear() {
        let mut field = field(0);
        let mut canvas = RecordingCanvas::default();
        for _ in 0..100 {
            field.tick();
            field.render(&mut canvas);
        }
        assert_eq!(canvas.circles(), 0);
        assert_eq!(canvas.calls.iter().filter(|c| **c == DrawCall::Clear).count(), 100);
    }

    #[test]
    fn rendering_leaves_state_untouched() {
        let field = field(10);
        let before = field.particles.clone();
        field.render(&mut RecordingCanvas::default());
        assert_eq!(field.particles, before);
    }
}
