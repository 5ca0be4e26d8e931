use std::fmt::{Debug, Formatter};

use bevy::prelude::Component;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::field_config::FieldConfig;
use crate::particle::{Particle, Pointer, Streak};

#[derive(Component)]
pub struct ParticleField {
    pub config: FieldConfig,

    // Viewport, in canvas units (origin top-left, y down).
    pub width: f32,
    pub height: f32,

    pub pointer: Pointer,

    pub particles: Vec<Particle>,
    pub streaks: Vec<Streak>,
    /// Ticks since the last streak was spawned.
    pub streak_timer: u32,

    pub rng: StdRng,

    pub debug: DebugParams,
}

impl ParticleField {
    /// An empty field with a zero viewport. Call `resize` and `populate` before ticking.
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ParticleField {
            pointer: Pointer {
                position: None,
                radius: config.pointer_radius,
            },
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            streaks: Vec::new(),
            streak_timer: 0,
            rng,
            debug: DebugParams::default(),
        }
    }
}

impl Debug for ParticleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ParticleField:")?;
        writeln!(f, "    viewport: {}x{}", self.width, self.height)?;
        writeln!(f, "    particles: {}", self.particles.len())?;
        writeln!(f, "    streaks: {}", self.streaks.len())?;
        writeln!(f, "    pointer_radius: {}", self.pointer.radius)?;
        writeln!(f, "    repulsion_strength: {}", self.config.repulsion_strength)?;
        writeln!(f, "    edge_damping: {}", self.config.edge_damping)?;
        writeln!(f, "    damping: {}", self.config.damping)?;
        writeln!(f, "    min_speed: {}", self.config.min_speed)?;
        writeln!(f, "    streak_interval: {}", self.config.streak_interval)
    }
}

pub struct DebugParams {
    pub current_frame: u32,
    /// Frames left to advance; u32::MAX == run freely, 0 == paused.
    pub frames_to_show: u32,
    pub log_frame: u32,
    pub show_pointer_radius: bool,
}

impl Default for DebugParams {
    fn default() -> Self {
        DebugParams {
            current_frame: 0,
            frames_to_show: u32::MAX,
            log_frame: u32::MAX,
            show_pointer_radius: false,
        }
    }
}
