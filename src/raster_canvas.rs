use std::path::Path;

use bevy::math::Vec2;
use image::{ImageResult, RgbaImage};

use crate::canvas::Canvas;
use crate::palette::Rgba;

/// Software canvas backed by an RGBA image. Used for headless snapshots.
pub struct RasterCanvas {
    pub image: RgbaImage,
    pub background: Rgba,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let mut canvas = RasterCanvas {
            image: RgbaImage::new(width.max(1), height.max(1)),
            background,
        };
        canvas.clear();
        canvas
    }

    /// Writes the image; the format follows the file extension.
    pub fn save(&self, path: &Path) -> ImageResult<()> {
        self.image.save(path)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Rgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Inclusive pixel range covering `min..=max`, clipped to the image. None when fully outside.
    fn span(min: f32, max: f32, len: u32) -> Option<(u32, u32)> {
        let lo = min.floor().max(0.0);
        let hi = max.ceil().min(len as f32 - 1.0);
        if hi < lo || !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        Some((lo as u32, hi as u32))
    }

    /// Source-over composite of `src` onto the pixel at (x, y).
    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        if src.a <= 0.0 {
            return;
        }
        let dst = self.pixel(x, y);
        let out_a = src.a + dst.a * (1.0 - src.a);
        let channel = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
        let out = [
            channel(src.r, dst.r),
            channel(src.g, dst.g),
            channel(src.b, dst.b),
            out_a,
        ];
        self.image.put_pixel(x, y, image::Rgba(out.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)));
    }
}

/// Interpolates in premultiplied space, so fading to transparent keeps the hue instead of darkening.
fn gradient(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let a = from.a + (to.a - from.a) * t;
    if a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let mix = |f: f32, g: f32| (f * from.a + (g * to.a - f * from.a) * t) / a;
    Rgba::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b), a)
}

impl Canvas for RasterCanvas {
    fn clear(&mut self) {
        let bg = self.background;
        let pixel = image::Rgba([bg.r, bg.g, bg.b, bg.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8));
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (w, h) = self.image.dimensions();
        let Some((x0, x1)) = Self::span(center.x - radius, center.x + radius, w) else {
            return;
        };
        let Some((y0, y1)) = Self::span(center.y - radius, center.y + radius, h) else {
            return;
        };
        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, from_color: Rgba, to_color: Rgba) {
        let (w, h) = self.image.dimensions();
        let half = (width / 2.0).max(0.5);
        let min = from.min(to) - Vec2::splat(half);
        let max = from.max(to) + Vec2::splat(half);
        let Some((x0, x1)) = Self::span(min.x, max.x, w) else {
            return;
        };
        let Some((y0, y1)) = Self::span(min.y, max.y, h) else {
            return;
        };

        let segment = to - from;
        let len2 = segment.length_squared();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len2 > 0.0 { ((p - from).dot(segment) / len2).clamp(0.0, 1.0) } else { 0.0 };
                if p.distance(from + segment * t) <= half {
                    self.blend(x, y, gradient(from_color, to_color, t));
                }
            }
        }
    }
}
