use instant::Instant;

/// Per-frame animation state: a phase swept over the point index space by a
/// fixed increment, and accumulated wall-clock time for time-driven uniforms.
pub struct FrameClock {
    period: f32,
    increment: f32,
    phase: f32,
    previous: Instant,
    elapsed: f32,
}

impl FrameClock {
    pub fn new(period: f32, increment: f32) -> Self {
        Self {
            period,
            increment,
            phase: 0.0,
            previous: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Clock for scenes that only consume elapsed time, phase stays 0.
    pub fn timer() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Advance one frame. The phase wraps into [0, period) exactly, so a
    /// whole number of increments per period lands back on 0 with no drift.
    pub fn advance(&mut self) -> f32 {
        let now = Instant::now();
        self.elapsed += now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        self.phase = (self.phase + self.increment).rem_euclid(self.period);
        self.phase
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Seconds since construction, accumulated frame to frame.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Three phases offset by a third of the period, each wrapped
    /// independently. Drives the RGB sweep in the spiral shader.
    pub fn channel_phases(&self) -> [f32; 3] {
        let third = self.period / 3.0;
        [
            self.phase,
            (self.phase + third).rem_euclid(self.period),
            (self.phase + third * 2.0).rem_euclid(self.period),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_wrap_after_full_sweep() {
        // period 1000, increment 2: frame 500 completes exactly one pass
        let mut clock = FrameClock::new(1000.0, 2.0);
        for _ in 0..499 {
            clock.advance();
        }
        assert_eq!(clock.phase(), 998.0);
        assert_eq!(clock.advance(), 0.0);
    }

    #[test]
    fn phase_stays_in_range() {
        let mut clock = FrameClock::new(17.0, 7.0);
        for _ in 0..1000 {
            let phase = clock.advance();
            assert!((0.0..17.0).contains(&phase));
        }
    }

    #[test]
    fn phase_matches_modular_arithmetic() {
        let mut clock = FrameClock::new(1000.0, 2.0);
        for frame in 1..=2500u32 {
            let phase = clock.advance();
            assert_eq!(phase, (frame * 2 % 1000) as f32);
        }
    }

    #[test]
    fn timer_phase_stays_zero() {
        let mut clock = FrameClock::timer();
        for _ in 0..10 {
            assert_eq!(clock.advance(), 0.0);
        }
    }

    fn wrapped_distance(a: f32, b: f32, period: f32) -> f32 {
        let d = (a - b).rem_euclid(period);
        d.min(period - d)
    }

    #[test]
    fn channel_offsets_keep_third_spacing() {
        let mut clock = FrameClock::new(1000.0, 2.0);
        for _ in 0..700 {
            clock.advance();
            let [a, b, c] = clock.channel_phases();
            let third = 1000.0 / 3.0;
            assert!((wrapped_distance(a, b, 1000.0) - third).abs() < 1e-2);
            assert!((wrapped_distance(b, c, 1000.0) - third).abs() < 1e-2);
            assert!((wrapped_distance(a, c, 1000.0) - third).abs() < 1e-2);
        }
    }

    // period divisible by 3: offsets are exact thirds and never collapse
    #[test]
    fn channel_offsets_distinct_for_divisible_period() {
        let mut clock = FrameClock::new(999.0, 1.0);
        for _ in 0..999 {
            clock.advance();
            let [a, b, c] = clock.channel_phases();
            assert_eq!(wrapped_distance(a, b, 999.0), 333.0);
            assert_eq!(wrapped_distance(b, c, 999.0), 333.0);
            assert_eq!(wrapped_distance(a, c, 999.0), 333.0);
            assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn elapsed_accumulates() {
        let mut clock = FrameClock::new(10.0, 1.0);
        assert_eq!(clock.elapsed(), 0.0);
        clock.advance();
        clock.advance();
        assert!(clock.elapsed() >= 0.0);
    }
}
