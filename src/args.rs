use std::path::PathBuf;

use clap::Parser;
use once_cell::sync::Lazy;

use crate::field_config::FieldConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Animated particle backdrop with pointer repulsion and colored streaks
pub struct Args {
    /// Initial window size, as width,height
    #[arg(long, default_value = "1280,800", value_parser = parse_size)]
    pub win: (u32, u32),
    /// Number of particles
    #[arg(long, default_value = "90")]
    pub num: u32,
    /// Radius around the mouse cursor inside which particles are pushed away.
    #[arg(long, default_value = "120")]
    pub pointer_radius: f32,
    /// Peak velocity change per frame from the mouse cursor.
    #[arg(long, default_value = "0.3")]
    pub repulsion: f32,
    /// Velocity multiplier applied every frame.
    #[arg(long, default_value = "0.995")]
    pub damping: f32,
    /// Velocity multiplier applied when bouncing off a window edge.
    #[arg(long, default_value = "0.9")]
    pub edge_damping: f32,
    /// Frames between streaks.
    #[arg(long, default_value = "40")]
    pub streak_interval: u32,
    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Render a single frame to this PNG file instead of opening a window.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// Frames to simulate before taking the snapshot.
    #[arg(long, default_value = "600")]
    pub frames: u32,
    /// Mouse position for the snapshot, as x,y
    #[arg(long, value_parser = parse_point)]
    pub pointer: Option<(f32, f32)>,
}

impl Args {
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            particle_count: self.num,
            pointer_radius: self.pointer_radius,
            repulsion_strength: self.repulsion,
            damping: self.damping,
            edge_damping: self.edge_damping,
            streak_interval: self.streak_interval,
            seed: self.seed,
            ..FieldConfig::default()
        }
    }
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected two comma-separated values, got '{s}'"))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = split_pair(s)?;
    let w: u32 = w.parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("window size must be positive, got {w}x{h}"));
    }
    Ok((w, h))
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = split_pair(s)?;
    let x: f32 = x.parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f32 = y.parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

pub static ARGS: Lazy<Args> = Lazy::new(Args::parse);
