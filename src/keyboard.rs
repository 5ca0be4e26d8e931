use std::collections::HashMap;
use std::time::{Duration, Instant};

use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::field_struct::ParticleField;

/// Defines a keyboard command to associate with a keypress.
/// Each command can have a different repeat rate.
pub struct KeyboardCommand {
    pub description: String,
    pub last_action_time: Instant,
    pub interval: Duration,
    pub action: KeyboardAction,
}

/// The function that invokes the keyboard action. `shift` is true while either shift key is held.
type KeyboardAction = fn(field: &mut ParticleField, shift: bool);

/// Contains the collection of keyboard commands.
#[derive(Component)]
pub struct KeyboardCommands {
    pub commands: HashMap<KeyCode, KeyboardCommand>,
}

impl KeyboardCommands {
    pub fn create() -> Self {
        let mut kb_cmds = KeyboardCommands {
            commands: HashMap::new(),
        };

        // Space: freeze / unfreeze the animation.
        kb_cmds.add_command(KeyCode::Space, "Pause", 250, pause);
        // 1: advance 1 frame.
        kb_cmds.add_command(KeyCode::Digit1, "Advance 1 frame", 500, |field, _| field.set_frames_to_show(1));
        // C: toggle display of the pointer's interaction radius.
        kb_cmds.add_command(KeyCode::KeyC, "Show pointer interaction radius", 250, |field, _| {
            field.toggle_pointer_radius()
        });
        // D: increase/decrease damping
        kb_cmds.add_command(KeyCode::KeyD, "Decrease damping (shift: increase)", 50, adj_damping);
        // L: log debug info in the next frame
        kb_cmds.add_command(KeyCode::KeyL, "Log debug info", 250, |field, _| field.log_next_frame());
        // P: increase/decrease pointer radius
        kb_cmds.add_command(KeyCode::KeyP, "Shrink pointer radius (shift: grow)", 50, adj_pointer_radius);
        // R: reset the particles
        kb_cmds.add_command(KeyCode::KeyR, "Reset particles", 250, |field, _| field.reset());
        // S: spawn a streak right away
        kb_cmds.add_command(KeyCode::KeyS, "Spawn a streak", 150, |field, _| field.spawn_streak());
        // V: increase/decrease repulsion strength
        kb_cmds.add_command(KeyCode::KeyV, "Weaken repulsion (shift: strengthen)", 50, adj_repulsion);

        kb_cmds
    }

    pub fn add_command(&mut self, key: KeyCode, description: &str, interval_millis: u64, action: KeyboardAction) {
        self.commands.insert(
            key,
            KeyboardCommand {
                description: description.into(),
                last_action_time: Instant::now(),
                interval: Duration::from_millis(interval_millis),
                action,
            },
        );
    }

    /// Runs every pressed command whose repeat interval has elapsed.
    pub fn dispatch<'a>(
        &mut self,
        pressed: impl IntoIterator<Item = &'a KeyCode>,
        now: Instant,
        field: &mut ParticleField,
        shift: bool,
    ) {
        for key in pressed {
            if let Some(command) = self.commands.get_mut(key) {
                if now.duration_since(command.last_action_time) >= command.interval {
                    command.last_action_time = now;
                    (command.action)(field, shift);
                }
            }
        }
    }

    pub fn help(&self) -> String {
        let mut lines: Vec<String> = self
            .commands
            .iter()
            .map(|(key, cmd)| format!("{key:?} - {}", cmd.description))
            .collect();
        lines.sort();
        let mut kb_help: String = "Keyboard commands:".into();
        for line in lines {
            kb_help.push('\n');
            kb_help.push_str(&line);
        }
        kb_help.push_str("\nEscape/Q - Quit");
        kb_help
    }
}

fn pause(field: &mut ParticleField, _shift: bool) {
    if field.frames_to_advance() == 0 {
        field.set_frames_to_show(u32::MAX);
        info!("Resumed");
    } else {
        field.set_frames_to_show(0);
        info!("Paused");
    }
}

fn adj_damping(field: &mut ParticleField, shift: bool) {
    if shift {
        field.adj_damping(0.001);
    } else {
        field.adj_damping(-0.001);
    }
    info!("Damping: {:.3}", field.config.damping);
}

fn adj_pointer_radius(field: &mut ParticleField, shift: bool) {
    if shift {
        field.adj_pointer_radius(10.0);
    } else {
        field.adj_pointer_radius(-10.0);
    }
    info!("Pointer radius: {:.0}", field.pointer.radius);
}

fn adj_repulsion(field: &mut ParticleField, shift: bool) {
    if shift {
        field.adj_repulsion(0.05);
    } else {
        field.adj_repulsion(-0.05);
    }
    info!("Repulsion strength: {:.2}", field.config.repulsion_strength);
}

pub fn handle_keypress(
    kb: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    window: Single<Entity, With<PrimaryWindow>>,
    mut field: Single<&mut ParticleField>,
    mut kb_cmds: Single<&mut KeyboardCommands>,
) {
    // Esc / Q: close the window, which ends the app.
    if kb.pressed(KeyCode::Escape) || kb.pressed(KeyCode::KeyQ) {
        commands.entity(*window).despawn();
        return;
    }

    let shift = kb.pressed(KeyCode::ShiftLeft) || kb.pressed(KeyCode::ShiftRight);

    // ?: display help
    if kb.just_pressed(KeyCode::Slash) && shift {
        info!("{}", kb_cmds.help());
    }

    kb_cmds.dispatch(kb.get_pressed(), Instant::now(), &mut field, shift);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use bevy::prelude::KeyCode;

    use super::KeyboardCommands;
    use crate::field_config::FieldConfig;
    use crate::field_struct::ParticleField;

    fn field() -> ParticleField {
        let mut field = ParticleField::new(FieldConfig {
            seed: Some(1),
            ..FieldConfig::default()
        });
        field.resize(300.0, 200.0);
        field
    }

    #[test]
    fn space_toggles_pause() {
        let mut kb_cmds = KeyboardCommands::create();
        let mut field = field();
        let later = Instant::now() + Duration::from_secs(1);
        kb_cmds.dispatch([&KeyCode::Space], later, &mut field, false);
        assert_eq!(field.frames_to_advance(), 0);
        kb_cmds.dispatch([&KeyCode::Space], later + Duration::from_secs(1), &mut field, false);
        assert_eq!(field.frames_to_advance(), u32::MAX);
    }

    #[test]
    fn repeat_interval_is_respected() {
        let mut kb_cmds = KeyboardCommands::create();
        let mut field = field();
        let start = Instant::now() + Duration::from_secs(1);
        kb_cmds.dispatch([&KeyCode::KeyS], start, &mut field, false);
        kb_cmds.dispatch([&KeyCode::KeyS], start + Duration::from_millis(10), &mut field, false);
        assert_eq!(field.streaks.len(), 1);
        kb_cmds.dispatch([&KeyCode::KeyS], start + Duration::from_millis(200), &mut field, false);
        assert_eq!(field.streaks.len(), 2);
    }

    #[test]
    fn shift_reverses_adjustment() {
        let mut kb_cmds = KeyboardCommands::create();
        let mut field = field();
        let start = Instant::now() + Duration::from_secs(1);
        kb_cmds.dispatch([&KeyCode::KeyP], start, &mut field, true);
        assert_eq!(field.pointer.radius, 130.0);
        kb_cmds.dispatch([&KeyCode::KeyP], start + Duration::from_secs(1), &mut field, false);
        assert_eq!(field.pointer.radius, 120.0);
    }

    #[test]
    fn help_lists_every_command() {
        let kb_cmds = KeyboardCommands::create();
        let help = kb_cmds.help();
        assert!(help.starts_with("Keyboard commands:"));
        assert_eq!(help.lines().count(), kb_cmds.commands.len() + 2);
    }
}
