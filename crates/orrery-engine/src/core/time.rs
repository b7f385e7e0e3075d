/// Wall-clock frame timer.
///
/// Turns the monotonically increasing timestamps handed to a
/// `requestAnimationFrame` callback (milliseconds) into per-frame deltas (seconds).
/// The first frame always reports zero elapsed time.
pub struct FrameClock {
    /// Timestamp of the previous frame, in milliseconds.
    last_ms: Option<f64>,
    /// Optional upper bound on a single delta, in seconds. `None` passes deltas through.
    max_dt: Option<f32>,
    /// Total elapsed time across all frames.
    elapsed: f64,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            last_ms: None,
            max_dt,
            elapsed: 0.0,
        }
    }

    /// Record a frame at `timestamp_ms` and return the seconds since the previous one.
    ///
    /// Timestamps that go backwards yield zero.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        self.advance(dt)
    }

    /// Advance by an already-measured delta (hosts that time frames themselves).
    pub fn advance(&mut self, dt: f32) -> f32 {
        let mut dt = dt.max(0.0);
        if let Some(max) = self.max_dt {
            dt = dt.min(max);
        }
        self.elapsed += dt as f64;
        dt
    }

    /// Total elapsed seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn max_dt(&self) -> Option<f32> {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(None);
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn delta_is_in_seconds() {
        let mut clock = FrameClock::new(None);
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6, "dt was {}", dt);
    }

    #[test]
    fn long_frames_pass_through_uncapped() {
        let mut clock = FrameClock::new(None);
        clock.tick(0.0);
        assert_eq!(clock.tick(10_000.0), 10.0);
        assert_eq!(clock.advance(3.0), 3.0);
    }

    #[test]
    fn explicit_cap_limits_long_frames() {
        let mut clock = FrameClock::new(Some(0.25));
        clock.tick(0.0);
        assert_eq!(clock.tick(10_000.0), 0.25);
        assert_eq!(clock.advance(1.0), 0.25);
    }

    #[test]
    fn backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new(None);
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
        assert_eq!(clock.advance(-1.0), 0.0);
    }

    #[test]
    fn elapsed_accumulates() {
        let mut clock = FrameClock::new(None);
        clock.tick(0.0);
        clock.tick(100.0);
        clock.advance(0.1);
        assert!((clock.elapsed() - 0.2).abs() < 1e-6);
    }
}
