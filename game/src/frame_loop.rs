use backend::pacing::FramePacer;
use backend::pixels::{DrawError, PixelBuffer};
use backend::system::{IoEvents, System};
use log::warn;

use crate::input::InputState;
use crate::report;
use crate::scene::Scene;

/// Where frames come from and go to.
pub trait Screen {
    /// Every event that arrived since the previous call.
    fn poll_events(&mut self) -> &[IoEvents];
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), String>;
}

impl Screen for System {
    fn poll_events(&mut self) -> &[IoEvents] {
        self.process_io_events()
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), String> {
        self.draw_to_screen(frame)
    }
}

/// Reports a rejected draw once, not on every frame it repeats.
#[derive(Default)]
pub struct DrawReport {
    last: Option<DrawError>,
}

impl DrawReport {
    /// Returns true when `result` was logged.
    pub fn record(&mut self, result: Result<(), DrawError>) -> bool {
        let current = result.err();
        let changed = current != self.last;
        if changed {
            if let Some(e) = &current {
                warn!("{e}");
            }
        }
        self.last = current;
        changed && self.last.is_some()
    }
}

/// Runs frames until the input asks to stop. The frame in which Quit or
/// Escape arrives is still moved, drawn and presented. Returns the number
/// of presented frames.
pub fn run<S: Screen>(
    screen: &mut S,
    scene: &mut Scene,
    frame: &mut PixelBuffer,
    pacer: &mut FramePacer,
    mut trace: impl FnMut(&str),
) -> Result<usize, String> {
    let mut input = InputState::default();
    let mut draws = DrawReport::default();
    let mut presented = 0;

    while !input.done {
        input.apply_all(screen.poll_events());

        scene.update(&input);
        if input.any_direction() {
            trace(&report::position(&scene.me.rect));
        }

        draws.record(scene.draw(frame));

        screen.present(frame)?;
        presented += 1;

        pacer.wait();
    }
    Ok(presented)
}
