use crate::palette::{Rgba, PARTICLE_FILL};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    /// Particles created by `reset` and on every viewport resize.
    pub particle_count: u32,
    /// Initial (and anti-freeze) velocity range, +/- per axis, in units/frame.
    pub drift_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub pointer_radius: f32,
    pub repulsion_strength: f32,
    /// Multiplier applied to a velocity component reflected off an edge.
    pub edge_damping: f32,
    /// Multiplier applied to the whole velocity every frame.
    pub damping: f32,
    /// Below this on both axes a particle is nudged back into motion.
    pub min_speed: f32,
    pub streak_interval: u32,
    pub streak_speed_min: f32,
    pub streak_speed_max: f32,
    pub streak_life_min: u32,
    pub streak_life_max: u32,
    pub streak_width_min: f32,
    pub streak_width_max: f32,
    /// Fraction of the viewport height, from the top, where streaks start.
    pub streak_band: f32,
    pub peak_opacity: f32,
    /// Trail length expressed as frames of travel at the streak's velocity.
    pub trail_frames: f32,
    pub particle_fill: Rgba,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 90,
            drift_speed: 0.3,
            radius_min: 1.0,
            radius_max: 3.0,
            pointer_radius: 120.0,
            repulsion_strength: 0.3,
            edge_damping: 0.9,
            damping: 0.995,
            min_speed: 0.02,
            streak_interval: 40,
            streak_speed_min: 4.0,
            streak_speed_max: 8.0,
            streak_life_min: 120,
            streak_life_max: 200,
            streak_width_min: 2.0,
            streak_width_max: 4.0,
            streak_band: 0.6,
            peak_opacity: 0.6,
            trail_frames: 8.0,
            particle_fill: PARTICLE_FILL,
            seed: None,
        }
    }
}
