/// Straight (non-premultiplied) color, every channel in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Rgba { a: a.clamp(0.0, 1.0), ..self }
    }
}

/// Colors a streak can be drawn in. Picked uniformly at spawn time.
pub const STREAK_PALETTE: [Rgba; 5] = [
    Rgba::from_rgb8(0x7a, 0xa3, 0xff),
    Rgba::from_rgb8(0xb8, 0x80, 0xff),
    Rgba::from_rgb8(0x50, 0xe3, 0xc2),
    Rgba::from_rgb8(0xff, 0x7a, 0xd9),
    Rgba::from_rgb8(0xff, 0xd3, 0x6e),
];

pub const PARTICLE_FILL: Rgba = Rgba::new(122.0 / 255.0, 163.0 / 255.0, 1.0, 0.45);

pub const BACKGROUND: Rgba = Rgba::from_rgb8(0x08, 0x0b, 0x18);
