use backend::pixels::Rect;

use crate::input::InputState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Normal,
    Wrapped,
}

/// The square the player moves. Steps are one own width or height; crossing
/// a screen edge puts it on the opposite edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mover {
    pub rect: Rect,
    screen_w: i32,
    screen_h: i32,
}

impl Mover {
    /// A square 1/50 of the screen, roughly centred.
    pub fn centered(screen_w: usize, screen_h: usize) -> Mover {
        let (sw, sh) = (screen_w as i32, screen_h as i32);
        let w = sw / 50;
        let h = sh / 50;
        Mover::new(Rect::new(sw / 2 - w / 2, sh / 2 - h, w, h), screen_w, screen_h)
    }

    pub fn new(rect: Rect, screen_w: usize, screen_h: usize) -> Mover {
        Mover {
            rect,
            screen_w: screen_w as i32,
            screen_h: screen_h as i32,
        }
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        let r = &mut self.rect;
        if r.y + r.h < self.screen_h {
            r.y += r.h;
            MoveOutcome::Normal
        } else {
            r.y = 0;
            MoveOutcome::Wrapped
        }
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        let r = &mut self.rect;
        // the top row is never reached going up, y == h already wraps
        if r.y > r.h {
            r.y -= r.h;
            MoveOutcome::Normal
        } else {
            r.y = self.screen_h - r.h;
            MoveOutcome::Wrapped
        }
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        let r = &mut self.rect;
        if r.x > 0 {
            r.x -= r.w;
            MoveOutcome::Normal
        } else {
            r.x = self.screen_w - r.w;
            MoveOutcome::Wrapped
        }
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        let r = &mut self.rect;
        if r.x < self.screen_w - r.w {
            r.x += r.w;
            MoveOutcome::Normal
        } else {
            r.x = 0;
            MoveOutcome::Wrapped
        }
    }

    /// One frame of movement. Every held direction is applied, in the order
    /// down, up, left, right. Returns the outcome of the last applied step,
    /// or `None` when no direction is held.
    pub fn step(&mut self, input: &InputState) -> Option<MoveOutcome> {
        let mut last = None;
        if input.down {
            last = Some(self.move_down());
        }
        if input.up {
            last = Some(self.move_up());
        }
        if input.left {
            last = Some(self.move_left());
        }
        if input.right {
            last = Some(self.move_right());
        }
        last
    }
}
