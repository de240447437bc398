use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Input sampled once per frame. Windowing code fills it in; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pointer motion in screen space, y grows downwards.
    pub look_delta: Vec2,
    /// Scroll wheel ticks; positive zooms in.
    pub scroll: f32,
    pub toggle_sprint: bool,
    pub regenerate: bool,
}

impl PlayerInput {
    pub fn handle_mouse_move(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    pub fn handle_mouse_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Held movement keys, in a fixed order.
    pub fn directions(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        [
            (self.forward, MoveDirection::Forward),
            (self.backward, MoveDirection::Backward),
            (self.left, MoveDirection::Left),
            (self.right, MoveDirection::Right),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }

    /// Clears the one-shot fields after a frame has consumed them.
    pub fn reset(&mut self) {
        self.look_delta = Vec2::ZERO;
        self.scroll = 0.0;
        self.toggle_sprint = false;
        self.regenerate = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_held_keys() {
        let mut input = PlayerInput {
            forward: true,
            right: true,
            toggle_sprint: true,
            regenerate: true,
            ..Default::default()
        };
        input.handle_mouse_move(Vec2::new(3.0, -1.0));
        input.handle_mouse_scroll(2.0);

        let held: Vec<_> = input.directions().collect();
        assert_eq!(held, vec![MoveDirection::Forward, MoveDirection::Right]);

        input.reset();
        assert!(input.forward && input.right);
        assert_eq!(input.look_delta, Vec2::ZERO);
        assert_eq!(input.scroll, 0.0);
        assert!(!input.toggle_sprint && !input.regenerate);
    }
}
