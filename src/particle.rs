use bevy::math::Vec2;

use crate::palette::Rgba;

/// A drifting dot of the backdrop. Lives until the next `populate`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// A short-lived colored flash that travels in a straight line.
#[derive(Clone, Debug, PartialEq)]
pub struct Streak {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Frames this streak has been ticked, including the frame it spawned on.
    pub age: u32,
    pub max_age: u32,
    pub width: f32,
    pub color: Rgba,
    /// Opacity computed on the last tick.
    pub opacity: f32,
}

impl Streak {
    pub fn is_expired(&self) -> bool {
        self.age > self.max_age
    }

    /// Sine envelope over the streak's life, peaking at mid-life.
    pub fn fade(age: u32, max_age: u32, peak_opacity: f32) -> f32 {
        let progress = age as f32 / max_age.max(1) as f32;
        (std::f32::consts::PI * progress).sin().clamp(0.0, 1.0) * peak_opacity
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
    pub radius: f32,
}
