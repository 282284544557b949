//! In-memory statistics for one play session, printed once at exit.
//! Nothing here is persisted.

use std::time::{Duration, Instant};

pub struct SessionStats {
    started: Instant,
    pub apples_eaten: u32,
    pub longest_snake: usize,
    pub resets: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            apples_eaten: 0,
            longest_snake: 1,
            resets: 0,
        }
    }

    pub fn on_apple(&mut self, snake_length: usize) {
        self.apples_eaten += 1;
        self.longest_snake = self.longest_snake.max(snake_length);
    }

    pub fn on_reset(&mut self, snake_length: usize) {
        self.resets += 1;
        self.longest_snake = self.longest_snake.max(snake_length);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }

    pub fn summary(&self) -> String {
        format!(
            "apples eaten: {}  longest snake: {}  resets: {}  time played: {}",
            self.apples_eaten,
            self.longest_snake,
            self.resets,
            self.format_time()
        )
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apples_track_longest_snake() {
        let mut stats = SessionStats::new();

        stats.on_apple(2);
        stats.on_apple(3);
        assert_eq!(stats.apples_eaten, 2);
        assert_eq!(stats.longest_snake, 3);
    }

    #[test]
    fn test_reset_keeps_peak_length() {
        let mut stats = SessionStats::new();

        stats.on_apple(5);
        stats.on_reset(6);
        stats.on_apple(2);
        assert_eq!(stats.resets, 1);
        assert_eq!(stats.longest_snake, 6); // never decreases
    }

    #[test]
    fn test_summary_mentions_every_counter() {
        let mut stats = SessionStats::new();
        stats.on_apple(2);
        stats.on_reset(2);

        let summary = stats.summary();
        assert!(summary.contains("apples eaten: 1"));
        assert!(summary.contains("longest snake: 2"));
        assert!(summary.contains("resets: 1"));
    }
}
