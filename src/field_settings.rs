use bevy::math::Vec2;

use crate::field_struct::ParticleField;

impl ParticleField {
    pub fn reset(&mut self) {
        self.streaks.clear();
        self.streak_timer = 0;
        self.populate(self.config.particle_count);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.position = Some(Vec2::new(x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.position = None;
    }

    pub fn frames_to_advance(&self) -> u32 {
        self.debug.frames_to_show
    }

    pub fn set_frames_to_show(&mut self, val: u32) {
        self.debug.frames_to_show = val;
    }

    /// Ticks once unless paused, counting down a finite frame budget. Returns whether it ticked.
    pub fn advance_frame(&mut self) -> bool {
        let frames = self.debug.frames_to_show;
        if frames == 0 {
            return false;
        }
        self.tick();
        if frames != u32::MAX {
            self.debug.frames_to_show = frames - 1;
        }
        true
    }

    /// Adopts a new viewport size with a fresh batch of particles. Non-positive sizes (a minimized
    /// window) and unchanged sizes are ignored. Returns whether the viewport changed.
    pub fn fit_viewport(&mut self, width: f32, height: f32) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.resize(width, height);
        self.populate(self.config.particle_count);
        true
    }

    pub fn toggle_pointer_radius(&mut self) {
        self.debug.show_pointer_radius = !self.debug.show_pointer_radius;
    }

    pub fn log_next_frame(&mut self) {
        self.debug.log_frame = self.debug.current_frame.wrapping_add(1);
    }

    pub fn adj_pointer_radius(&mut self, increment: f32) {
        self.pointer.radius = (self.pointer.radius + increment).max(increment.abs());
        self.config.pointer_radius = self.pointer.radius;
    }

    pub fn adj_repulsion(&mut self, increment: f32) {
        self.config.repulsion_strength = (self.config.repulsion_strength + increment).max(0.0);
    }

    /// Damping stays strictly below 1 so that particles always lose energy.
    pub fn adj_damping(&mut self, increment: f32) {
        self.config.damping = (self.config.damping + increment).clamp(0.5, 0.999);
    }
}

#[cfg(test)]
mod tests {
    use crate::field_config::FieldConfig;
    use crate::field_struct::ParticleField;

    fn field() -> ParticleField {
        let mut field = ParticleField::new(FieldConfig {
            seed: Some(3),
            ..FieldConfig::default()
        });
        field.resize(320.0, 240.0);
        field
    }

    #[test]
    fn reset_restores_configured_count_and_drops_streaks() {
        let mut field = field();
        field.populate(3);
        field.spawn_streak();
        field.reset();
        assert_eq!(field.particles.len(), 90);
        assert!(field.streaks.is_empty());
    }

    #[test]
    fn pointer_set_and_cleared() {
        let mut field = field();
        assert!(field.pointer.position.is_none());
        field.set_pointer(12.0, 34.0);
        assert_eq!(field.pointer.position.map(|p| (p.x, p.y)), Some((12.0, 34.0)));
        field.clear_pointer();
        assert!(field.pointer.position.is_none());
    }

    #[test]
    fn adjustments_stay_in_range() {
        let mut field = field();
        for _ in 0..100 {
            field.adj_damping(0.01);
            field.adj_repulsion(-0.1);
            field.adj_pointer_radius(-10.0);
        }
        assert_eq!(field.config.damping, 0.999);
        assert_eq!(field.config.repulsion_strength, 0.0);
        assert_eq!(field.pointer.radius, 10.0);
    }

    #[test]
    fn single_step_then_stays_paused() {
        let mut field = field();
        field.populate(5);
        field.set_frames_to_show(1);
        assert!(field.advance_frame());
        assert_eq!(field.debug.current_frame, 1);
        assert_eq!(field.frames_to_advance(), 0);
        for _ in 0..10 {
            assert!(!field.advance_frame());
        }
        assert_eq!(field.debug.current_frame, 1);
    }

    #[test]
    fn free_running_never_counts_down() {
        let mut field = field();
        for _ in 0..50 {
            assert!(field.advance_frame());
        }
        assert_eq!(field.frames_to_advance(), u32::MAX);
        assert_eq!(field.debug.current_frame, 50);
    }

    #[test]
    fn new_viewport_repopulates() {
        let mut field = field();
        field.populate(3);
        assert!(field.fit_viewport(800.0, 600.0));
        assert_eq!((field.width, field.height), (800.0, 600.0));
        assert_eq!(field.particles.len(), 90);

        let before = field.particles.clone();
        assert!(!field.fit_viewport(800.0, 600.0));
        assert_eq!(field.particles, before);
    }

    #[test]
    fn zero_size_viewport_is_ignored() {
        let mut field = field();
        field.populate(3);
        assert!(!field.fit_viewport(0.0, 600.0));
        assert!(!field.fit_viewport(800.0, 0.0));
        assert_eq!((field.width, field.height), (320.0, 240.0));
        assert_eq!(field.particles.len(), 3);
    }

    #[test]
    fn paused_field_logs_on_next_frame() {
        let mut field = field();
        field.set_frames_to_show(0);
        assert_eq!(field.frames_to_advance(), 0);
        field.tick();
        field.log_next_frame();
        assert_eq!(field.debug.log_frame, 2);
    }
}
