//! Frame pacing.

use std::thread::sleep;
use std::time::{Duration, Instant};

/// Blocks the game loop until the current frame's time budget has
/// elapsed.
pub trait Clock {
    fn tick(&mut self, ticks_per_second: u32);
}

/// Wall-clock pacing: sleeps off whatever remains of the frame budget
/// since the previous tick. A late frame just starts the next budget from
/// now, with no catch-up.
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, ticks_per_second: u32) {
        let budget = Duration::from_secs(1) / ticks_per_second.max(1);

        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < budget {
                sleep(budget - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }
}
