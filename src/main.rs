use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::args::ARGS;
use crate::field_struct::ParticleField;
use crate::gizmo_canvas::GizmoCanvas;
use crate::keyboard::{handle_keypress, KeyboardCommands};
use crate::palette::{Rgba, BACKGROUND};

mod args;
mod canvas;
mod field;
mod field_config;
mod field_settings;
mod field_struct;
mod gizmo_canvas;
mod keyboard;
mod palette;
mod particle;
mod raster_canvas;
mod snapshot;

fn main() {
    if let Some(path) = &ARGS.snapshot {
        if let Err(err) = snapshot::run(&ARGS, path) {
            eprintln!("Failed to write snapshot to {}: {err}", path.display());
            std::process::exit(1);
        }
        return;
    }

    let (width, height) = ARGS.win;
    App::new()
        .insert_resource(ClearColor(Color::srgb(BACKGROUND.r, BACKGROUND.g, BACKGROUND.b)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Particle Field".into(),
                resolution: WindowResolution::new(width, height),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup)
        // Input is applied before the tick reads it, and drawing sees the state the tick left.
        .add_systems(
            Update,
            (handle_keypress, sync_viewport, sync_pointer, advance_field, draw_field).chain(),
        )
        .run();
}

#[derive(Component)]
struct FieldCamera;

fn setup(mut commands: Commands, window: Single<&Window, With<PrimaryWindow>>) {
    let (width, height) = (window.width(), window.height());

    commands.spawn((
        Camera2d,
        Transform::from_xyz(width / 2.0, height / 2.0, 0.0),
        FieldCamera,
    ));

    let mut field = ParticleField::new(ARGS.field_config());
    field.resize(width, height);
    field.populate(field.config.particle_count);
    info!("{field:?}");
    commands.spawn(field);

    commands.spawn(KeyboardCommands::create());
    info!("Press ? for keyboard commands");
}

/// A resized window gets a fresh batch of particles spread over the new area.
fn sync_viewport(
    window: Single<&Window, With<PrimaryWindow>>,
    mut field: Single<&mut ParticleField>,
    mut camera: Single<&mut Transform, With<FieldCamera>>,
) {
    let (width, height) = (window.width(), window.height());
    if field.fit_viewport(width, height) {
        camera.translation = Vec3::new(width / 2.0, height / 2.0, 0.0);
        info!("Viewport resized to {width}x{height}");
    }
}

fn sync_pointer(window: Single<&Window, With<PrimaryWindow>>, mut field: Single<&mut ParticleField>) {
    match window.cursor_position() {
        Some(cursor) => field.set_pointer(cursor.x, cursor.y),
        None => field.clear_pointer(),
    }
}

fn advance_field(mut field: Single<&mut ParticleField>) {
    field.advance_frame();
}

fn draw_field(field: Single<&ParticleField>, mut gizmos: Gizmos) {
    let mut canvas = GizmoCanvas::new(&mut gizmos, field.height);
    field.render(&mut canvas);

    if field.debug.show_pointer_radius {
        if let Some(pointer) = field.pointer.position {
            canvas.outline_circle(pointer, field.pointer.radius, Rgba::new(1.0, 1.0, 1.0, 0.25));
        }
    }
}
