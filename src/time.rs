
use std::time::{Instant, Duration};
use std::ops::{Add, Sub, AddAssign, SubAssign};

/// Tracks how long the program has been running and how long the last frame took.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
    last: Instant,
}

impl Timer {
    pub fn new() -> Timer {
        let now = Instant::now();
        Timer { start: now, last: now }
    }

    /// Returns `(time_since_start, time_since_last_tick)`
    pub fn tick(&mut self) -> (Time, Time) {
        let now = Instant::now();

        let age = (now - self.start).into();
        let delta = (now - self.last).into();
        self.last = now;

        (age, delta)
    }
}

/// Time, stored as nanoseconds
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Time(pub u64);

impl Time {
    pub const ZERO: Time = Time(0);
    pub const NANOSECONDS_PER_SECOND: u64 = 1_000_000_000;
    pub const NANOSECONDS_PER_MILISECOND: u64 = 1_000_000;

    pub fn from_ms(ms: u64) -> Time {
        Time(ms * Time::NANOSECONDS_PER_MILISECOND)
    }

    /// The length of one tick when running `rate` ticks per second
    pub fn from_rate(rate: u32) -> Time {
        Time(Time::NANOSECONDS_PER_SECOND / rate.max(1) as u64)
    }

    /// Converts this timing to milliseconds, truncating. 1.999 ms will be converted to 1 ms.
    pub fn to_ms(self) -> u64 {
        self.0 / Time::NANOSECONDS_PER_MILISECOND
    }

    pub fn to_secs_f32(self) -> f32 {
        self.0 as f32 / Time::NANOSECONDS_PER_SECOND as f32
    }
}

impl Add for Time {
    type Output = Time;
    fn add(self, rhs: Time) -> Time { Time(self.0 + rhs.0) }
}

impl Sub for Time {
    type Output = Time;
    fn sub(self, rhs: Time) -> Time { Time(self.0.saturating_sub(rhs.0)) }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) { self.0 += rhs.0; }
}

impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) { self.0 = self.0.saturating_sub(rhs.0); }
}

impl From<Duration> for Time {
    fn from(d: Duration) -> Time {
        Time(d.as_secs()*Time::NANOSECONDS_PER_SECOND + d.subsec_nanos() as u64)
    }
}

impl From<Time> for Duration {
    fn from(t: Time) -> Duration {
        Duration::from_nanos(t.0)
    }
}

/// Turns frame deltas into a whole number of fixed length ticks. Animations advance once per
/// tick, so they run at the same speed regardless of the frame rate.
///
/// If a frame takes very long (e.g. while the window is being dragged) at most `max_ticks` ticks
/// are run, and the remaining time is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Time,
    accumulated: Time,
    max_ticks: u32,
}

impl FixedStep {
    pub const DEFAULT_RATE: u32 = 60;
    pub const DEFAULT_MAX_TICKS: u32 = 5;

    pub fn new(rate: u32) -> FixedStep {
        FixedStep {
            step: Time::from_rate(rate),
            accumulated: Time::ZERO,
            max_ticks: FixedStep::DEFAULT_MAX_TICKS,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> FixedStep {
        self.max_ticks = max_ticks;
        self
    }

    pub fn step(&self) -> Time {
        self.step
    }

    /// Adds `delta` to the accumulated time and returns how many ticks should run now.
    pub fn advance(&mut self, delta: Time) -> u32 {
        self.accumulated += delta;

        let mut ticks = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            ticks += 1;

            if ticks >= self.max_ticks {
                self.accumulated = Time::ZERO;
                break;
            }
        }
        ticks
    }
}

impl Default for FixedStep {
    fn default() -> FixedStep {
        FixedStep::new(FixedStep::DEFAULT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(16, Time::from_ms(16).to_ms());
        assert_eq!(Time(16_666_666), Time::from_rate(60));
        assert_eq!(Duration::from_millis(1500), Duration::from(Time::from_ms(1500)));
        assert_eq!(Time::from_ms(20), Time::from(Duration::from_millis(20)));
        assert_eq!(Time::ZERO, Time::from_ms(3) - Time::from_ms(5));
        assert!((Time::from_ms(500).to_secs_f32() - 0.5).abs() < 0.0001);
    }

    #[test]
    fn fixed_step_accumulates() {
        let mut step = FixedStep::new(100); // 10 ms per tick

        assert_eq!(0, step.advance(Time::from_ms(6)));
        assert_eq!(1, step.advance(Time::from_ms(6)));
        assert_eq!(2, step.advance(Time::from_ms(18)));
        assert_eq!(0, step.advance(Time::from_ms(9)));
        assert_eq!(1, step.advance(Time::from_ms(1)));
    }

    #[test]
    fn fixed_step_caps_long_frames() {
        let mut step = FixedStep::new(60).with_max_ticks(3);

        assert_eq!(3, step.advance(Time::from_ms(2000)));
        // The remaining time was dropped
        assert_eq!(0, step.advance(Time::from_ms(1)));
        assert_eq!(1, step.advance(Time::from_ms(17)));
    }

    #[test]
    fn timer_ticks() {
        let mut timer = Timer::new();
        let (age, delta) = timer.tick();
        assert!(age >= delta);
    }
}
