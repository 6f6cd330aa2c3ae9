use std::time::{Duration, Instant};

/// Holds the frame rate at a fixed interval by sleeping only for the part of
/// the interval that drawing did not already use.
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        FramePacer {
            interval,
            frame_start: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to sleep after `elapsed` of work in the current frame.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }

    /// Sleeps out the rest of the frame and starts the next one.
    /// Returns the time slept.
    pub fn wait(&mut self) -> Duration {
        let left = self.remaining(self.frame_start.elapsed());
        if !left.is_zero() {
            std::thread::sleep(left);
        } else {
            log::trace!("frame overran {:?}", self.interval);
        }
        // an overrun frame resynchronises instead of catching up
        self.frame_start = Instant::now();
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_subtracts_draw_cost() {
        let pacer = FramePacer::new(Duration::from_millis(15));
        assert_eq!(pacer.remaining(Duration::ZERO), Duration::from_millis(15));
        assert_eq!(
            pacer.remaining(Duration::from_millis(4)),
            Duration::from_millis(11)
        );
    }

    #[test]
    fn overrun_frame_does_not_sleep() {
        let pacer = FramePacer::new(Duration::from_millis(15));
        assert_eq!(pacer.remaining(Duration::from_millis(15)), Duration::ZERO);
        assert_eq!(pacer.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn wait_bounds_frame_duration() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));
        let start = Instant::now();
        let slept = pacer.wait();
        assert!(slept <= pacer.interval());
        assert!(start.elapsed() >= slept);

        let second = Instant::now();
        pacer.wait();
        assert!(second.elapsed() >= Duration::from_millis(4));
    }
}
