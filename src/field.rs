use std::f32::consts::FRAC_PI_4;

use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::field_struct::ParticleField;
use crate::palette::STREAK_PALETTE;
use crate::particle::{Particle, Streak};

/// Uniform sample in `[min, max)`. Scales a unit sample so that a degenerate range never panics.
fn uniform(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

impl ParticleField {
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Replaces every particle with `count` fresh ones scattered over the viewport.
    pub fn populate(&mut self, count: u32) {
        let drift = self.config.drift_speed;
        let (radius_min, radius_max) = (self.config.radius_min, self.config.radius_max);

        self.particles.clear();
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let particle = Particle {
                position: Vec2::new(
                    self.rng.random::<f32>() * self.width,
                    self.rng.random::<f32>() * self.height,
                ),
                velocity: Vec2::new(
                    uniform(&mut self.rng, -drift, drift),
                    uniform(&mut self.rng, -drift, drift),
                ),
                radius: uniform(&mut self.rng, radius_min, radius_max),
            };
            self.particles.push(particle);
        }
        debug!("Populated {count} particles in {}x{}", self.width, self.height);
    }

    /// Advances the whole field by one frame.
    pub fn tick(&mut self) {
        self.debug.current_frame = self.debug.current_frame.wrapping_add(1);

        self.streak_timer += 1;
        if self.streak_timer >= self.config.streak_interval {
            self.streak_timer = 0;
            self.spawn_streak();
        }

        let mut particles = std::mem::take(&mut self.particles);
        for particle in particles.iter_mut() {
            self.update_particle(particle);
        }
        self.particles = particles;

        self.update_streaks();

        if self.debug.log_frame == self.debug.current_frame {
            info!(
                "Frame {}: {} particles, {} streaks, pointer {:?}",
                self.debug.current_frame,
                self.particles.len(),
                self.streaks.len(),
                self.pointer.position
            );
            for (i, streak) in self.streaks.iter().enumerate() {
                info!(
                    "  streak {i}: age {}/{} opacity {:.2} @({:.1},{:.1})",
                    streak.age, streak.max_age, streak.opacity, streak.position.x, streak.position.y
                );
            }
        }
    }

    // The order of these steps determines how much energy a particle keeps over time.
    fn update_particle(&mut self, particle: &mut Particle) {
        particle.position += particle.velocity;
        self.resolve_collisions(particle);

        particle.velocity += self.repulsion(particle.position);
        particle.velocity *= self.config.damping;

        let min_speed = self.config.min_speed;
        if particle.velocity.x.abs() < min_speed && particle.velocity.y.abs() < min_speed {
            let drift = self.config.drift_speed;
            particle.velocity = Vec2::new(
                uniform(&mut self.rng, -drift, drift),
                uniform(&mut self.rng, -drift, drift),
            );
        }
    }

    pub fn resolve_collisions(&self, particle: &mut Particle) {
        if particle.position.x < 0.0 || particle.position.x > self.width {
            particle.position.x = particle.position.x.max(0.0).min(self.width);
            particle.velocity.x *= -self.config.edge_damping;
        }
        if particle.position.y < 0.0 || particle.position.y > self.height {
            particle.position.y = particle.position.y.max(0.0).min(self.height);
            particle.velocity.y *= -self.config.edge_damping;
        }
    }

    /// Magnitude of the pointer's push at `position`: 0 outside the interaction radius (or with no
    /// pointer), rising linearly to `repulsion_strength` at the pointer itself.
    pub fn repulsion_force(&self, position: Vec2) -> f32 {
        let Some(pointer) = self.pointer.position else {
            return 0.0;
        };
        let distance = position.distance(pointer);
        if distance < self.pointer.radius {
            (self.pointer.radius - distance) / self.pointer.radius * self.config.repulsion_strength
        } else {
            0.0
        }
    }

    /// Velocity change pushing a particle at `position` away from the pointer.
    pub fn repulsion(&self, position: Vec2) -> Vec2 {
        let Some(pointer) = self.pointer.position else {
            return Vec2::ZERO;
        };
        let offset = position - pointer;
        let distance = offset.length();
        let divisor = if distance > 0.0 { distance } else { 1.0 };
        offset / divisor * self.repulsion_force(position)
    }

    pub fn spawn_streak(&mut self) {
        let config = self.config;
        let position = Vec2::new(
            self.rng.random::<f32>() * self.width,
            self.rng.random::<f32>() * self.height * config.streak_band,
        );
        let angle = uniform(&mut self.rng, -FRAC_PI_4, FRAC_PI_4);
        let speed = uniform(&mut self.rng, config.streak_speed_min, config.streak_speed_max);
        let max_age = if config.streak_life_max > config.streak_life_min {
            self.rng.random_range(config.streak_life_min..config.streak_life_max)
        } else {
            config.streak_life_min
        };
        let width = uniform(&mut self.rng, config.streak_width_min, config.streak_width_max);
        let color = STREAK_PALETTE[self.rng.random_range(0..STREAK_PALETTE.len())];

        self.streaks.push(Streak {
            position,
            velocity: Vec2::from_angle(angle) * speed,
            age: 0,
            max_age,
            width,
            color,
            opacity: 0.0,
        });
    }

    fn update_streaks(&mut self) {
        let peak_opacity = self.config.peak_opacity;
        for streak in self.streaks.iter_mut() {
            streak.position += streak.velocity;
            streak.age += 1;
            streak.opacity = Streak::fade(streak.age, streak.max_age, peak_opacity);
        }
        self.streaks.retain(|streak| !streak.is_expired());
    }
}
