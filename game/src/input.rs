use backend::system::{IoEvents, Keycode};

/// Direction keys currently held down, plus the quit request.
///
/// Flags only change here; movement reads them once per frame after all
/// pending events have been applied, so keys pressed together move
/// together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub done: bool,
}

impl InputState {
    pub fn apply(&mut self, event: &IoEvents) {
        match event {
            IoEvents::Quit => self.done = true,
            IoEvents::KeyDown(Keycode::Escape) => self.done = true,
            IoEvents::KeyDown(key) => self.set(*key, true),
            IoEvents::KeyUp(key) => self.set(*key, false),
        }
    }

    pub fn apply_all(&mut self, events: &[IoEvents]) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    fn set(&mut self, key: Keycode, pressed: bool) {
        match key {
            Keycode::J => self.down = pressed,
            Keycode::K => self.up = pressed,
            Keycode::H => self.left = pressed,
            Keycode::L => self.right = pressed,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_each_key() {
        let mut input = InputState::default();
        input.apply(&IoEvents::KeyDown(Keycode::J));
        assert!(input.down);
        input.apply(&IoEvents::KeyDown(Keycode::K));
        input.apply(&IoEvents::KeyDown(Keycode::H));
        input.apply(&IoEvents::KeyDown(Keycode::L));
        assert!(input.up && input.left && input.right);

        input.apply(&IoEvents::KeyUp(Keycode::J));
        assert!(!input.down);
        assert!(input.up && input.left && input.right);
        assert!(input.any_direction());
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut input = InputState::default();
        input.apply_all(&[
            IoEvents::KeyDown(Keycode::A),
            IoEvents::KeyDown(Keycode::Space),
            IoEvents::KeyUp(Keycode::Escape),
        ]);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn escape_and_quit_end_the_loop() {
        let mut input = InputState::default();
        input.apply(&IoEvents::KeyDown(Keycode::Escape));
        assert!(input.done);

        let mut input = InputState::default();
        input.apply(&IoEvents::Quit);
        assert!(input.done);
        assert!(!input.any_direction());
    }

    #[test]
    fn repeated_key_down_keeps_flag() {
        let mut input = InputState::default();
        input.apply_all(&[
            IoEvents::KeyDown(Keycode::L),
            IoEvents::KeyDown(Keycode::L),
        ]);
        assert!(input.right);
    }
}
