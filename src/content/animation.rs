// Time-driven hero animations
//
// Both are pure functions of elapsed time so the host can sample them on any
// frame without keeping per-frame state.

use std::time::Duration;

/// Reveals text one character at a time, once (no deleting, no loop)
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    per_char: Duration,
}

impl Typewriter {
    pub const DEFAULT_SPEED: Duration = Duration::from_millis(40);

    pub fn new(text: impl Into<String>, per_char: Duration) -> Self {
        Self {
            text: text.into(),
            per_char,
        }
    }

    /// Prefix visible after `elapsed`, always ending on a char boundary
    pub fn visible(&self, elapsed: Duration) -> &str {
        let shown = self.chars_shown(elapsed);
        match self.text.char_indices().nth(shown) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.chars_shown(elapsed) >= self.text.chars().count()
    }

    fn chars_shown(&self, elapsed: Duration) -> usize {
        if self.per_char.is_zero() {
            return usize::MAX;
        }
        (elapsed.as_millis() / self.per_char.as_millis().max(1)) as usize
    }
}

/// Linear count from `start` to `end`, floored, over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    start: u64,
    end: u64,
    duration: Duration,
}

impl CountUp {
    pub fn new(start: u64, end: u64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.is_done(elapsed) {
            return self.end;
        }
        // Integer math keeps the floor exact at bucket edges
        let span = self.end as i128 - self.start as i128;
        let step = (span * elapsed.as_millis() as i128).div_euclid(self.duration.as_millis() as i128);
        (self.start as i128 + step).max(0) as u64
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration || self.duration.as_millis() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn typewriter_reveals_one_char_per_tick() {
        let tw = Typewriter::new("Hello", Typewriter::DEFAULT_SPEED);
        assert_eq!(tw.visible(ms(0)), "");
        assert_eq!(tw.visible(ms(39)), "");
        assert_eq!(tw.visible(ms(40)), "H");
        assert_eq!(tw.visible(ms(125)), "Hel");
        assert!(!tw.is_done(ms(199)));
        assert_eq!(tw.visible(ms(200)), "Hello");
        assert!(tw.is_done(ms(200)));
        assert_eq!(tw.visible(ms(10_000)), "Hello");
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        let tw = Typewriter::new("I’m", ms(10));
        assert_eq!(tw.visible(ms(20)), "I’");
    }

    #[test]
    fn count_up_floors_linear_progress() {
        let years = CountUp::new(0, 3, ms(1200));
        assert_eq!(years.value_at(ms(0)), 0);
        assert_eq!(years.value_at(ms(399)), 0);
        assert_eq!(years.value_at(ms(400)), 1);
        assert_eq!(years.value_at(ms(1199)), 2);
        assert_eq!(years.value_at(ms(1200)), 3);
        assert_eq!(years.value_at(ms(5000)), 3);

        let projects = CountUp::new(0, 20, ms(1400));
        assert_eq!(projects.value_at(ms(700)), 10);
        assert!(!projects.is_done(ms(1399)));
        assert!(projects.is_done(ms(1400)));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(CountUp::new(0, 7, Duration::ZERO).value_at(Duration::ZERO), 7);
    }
}
