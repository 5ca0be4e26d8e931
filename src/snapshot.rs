use std::path::Path;

use image::ImageResult;

use crate::args::Args;
use crate::field_struct::ParticleField;
use crate::palette::BACKGROUND;
use crate::raster_canvas::RasterCanvas;

/// Runs the field headless for `args.frames` frames and rasterizes the last one.
pub fn render_snapshot(args: &Args) -> (ParticleField, RasterCanvas) {
    let (width, height) = args.win;
    let mut field = ParticleField::new(args.field_config());
    field.resize(width as f32, height as f32);
    field.populate(field.config.particle_count);
    if let Some((x, y)) = args.pointer {
        field.set_pointer(x, y);
    }

    for _ in 0..args.frames {
        field.tick();
    }

    let mut canvas = RasterCanvas::new(width, height, BACKGROUND);
    field.render(&mut canvas);
    (field, canvas)
}

pub fn run(args: &Args, path: &Path) -> ImageResult<()> {
    let (field, canvas) = render_snapshot(args);
    canvas.save(path)?;
    println!(
        "Wrote {} after {} frames: {} particles, {} streaks",
        path.display(),
        args.frames,
        field.particles.len(),
        field.streaks.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{render_snapshot, run};
    use crate::args::Args;
    use crate::palette::BACKGROUND;
    use crate::raster_canvas::RasterCanvas;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["particle-field", "--win", "160,120", "--seed", "5"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn snapshot_draws_over_background() {
        let (field, canvas) = render_snapshot(&args(&["--frames", "90", "--num", "40"]));
        assert_eq!(canvas.image.dimensions(), (160, 120));
        assert_eq!(field.particles.len(), 40);
        assert_eq!(field.streaks.len(), 2);
        let blank = RasterCanvas::new(160, 120, BACKGROUND);
        assert_ne!(canvas.image, blank.image);
    }

    #[test]
    fn snapshot_applies_pointer() {
        let (field, _) = render_snapshot(&args(&["--frames", "0", "--pointer", "80,60"]));
        assert_eq!(field.pointer.position.map(|p| (p.x, p.y)), Some((80.0, 60.0)));
    }

    #[test]
    fn snapshot_is_written_as_png() {
        let path = std::env::temp_dir().join(format!("particle-field-{}.png", std::process::id()));
        run(&args(&["--frames", "10"]), &path).unwrap();
        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (160, 120));
        std::fs::remove_file(&path).unwrap();
    }
}
