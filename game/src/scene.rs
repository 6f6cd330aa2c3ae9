use backend::pixels::{Color, DrawError, PixelBuffer, Rect};

use crate::config::Config;
use crate::input::InputState;
use crate::movement::{MoveOutcome, Mover};

/// Everything drawn on screen: the moving square and the debug LED in the
/// top right corner.
pub struct Scene {
    pub me: Mover,
    pub led_color: Color,
    led: Option<Rect>,
    background: Color,
    me_color: Color,
    led_normal: Color,
    led_wrapped: Color,
}

impl Scene {
    pub fn new(config: &Config) -> Scene {
        let (w, h) = (config.screen_w as i32, config.screen_h as i32);
        let led = config
            .debug_led
            .then(|| Rect::new(w - w / 50, 0, w / 50, h / 50));
        Scene {
            me: Mover::centered(config.screen_w, config.screen_h),
            led_color: config.led_normal,
            led,
            background: config.background,
            me_color: config.me_color,
            led_normal: config.led_normal,
            led_wrapped: config.led_wrapped,
        }
    }

    /// Moves the square for one frame. Returns true if it moved.
    pub fn update(&mut self, input: &InputState) -> bool {
        match self.me.step(input) {
            Some(MoveOutcome::Normal) => self.led_color = self.led_normal,
            Some(MoveOutcome::Wrapped) => self.led_color = self.led_wrapped,
            None => return false,
        }
        true
    }

    /// Redraws the whole frame. Every shape is attempted; the first rejected
    /// draw is returned.
    pub fn draw(&self, frame: &mut PixelBuffer) -> Result<(), DrawError> {
        frame.clear(self.background);
        let me = frame.fill_rect(self.me.rect, self.me_color);
        let led = match self.led {
            Some(rect) => frame.fill_rect(rect, self.led_color),
            None => Ok(()),
        };
        me.and(led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down() -> InputState {
        InputState {
            down: true,
            ..Default::default()
        }
    }

    #[test]
    fn led_turns_red_on_wrap_and_green_after() {
        let config = Config::tall();
        let mut scene = Scene::new(&config);
        assert_eq!(scene.led_color, config.led_normal);

        scene.me.rect.y = 784;
        assert!(scene.update(&down()));
        assert_eq!(scene.led_color, config.led_wrapped);

        assert!(!scene.update(&InputState::default()));
        assert_eq!(scene.led_color, config.led_wrapped);

        assert!(scene.update(&down()));
        assert_eq!(scene.led_color, config.led_normal);
    }

    #[test]
    fn draws_background_square_and_led() {
        let config = Config::tall();
        let scene = Scene::new(&config);
        let mut frame = PixelBuffer::new(config.screen_w, config.screen_h);
        scene.draw(&mut frame).unwrap();

        assert_eq!(frame.pixel(0, 0), Some(config.background));
        assert_eq!(frame.pixel(392, 384), Some(config.me_color));
        assert_eq!(frame.pixel(407, 399), Some(config.me_color));
        assert_eq!(frame.pixel(408, 399), Some(config.background));
        assert_eq!(frame.pixel(784, 0), Some(config.led_normal));
        assert_eq!(frame.pixel(799, 15), Some(config.led_normal));
        assert_eq!(frame.pixel(783, 0), Some(config.background));
    }

    #[test]
    fn wide_preset_has_no_led() {
        let config = Config::wide();
        let scene = Scene::new(&config);
        let mut frame = PixelBuffer::new(config.screen_w, config.screen_h);
        scene.draw(&mut frame).unwrap();
        assert_eq!(frame.pixel(799, 0), Some(config.background));
    }

    #[test]
    fn square_past_the_edge_is_reported_but_led_still_drawn() {
        let config = Config::tall();
        let mut scene = Scene::new(&config);
        scene.me.rect.x = -8;
        let mut frame = PixelBuffer::new(config.screen_w, config.screen_h);

        assert!(matches!(
            scene.draw(&mut frame),
            Err(DrawError::OutOfBounds { .. })
        ));
        assert_eq!(frame.pixel(0, 384), Some(config.background));
        assert_eq!(frame.pixel(784, 0), Some(config.led_normal));
    }
}
