//! Scroll progress and the spring that smooths it.
//!
//! The progress bar shows how much of the page has been scrolled. The raw
//! ratio jumps with every wheel tick, so the bar follows it through a
//! damped spring. With the default parameters the spring is overdamped
//! (damping 30 > 2 * sqrt(100)), so it approaches the target without
//! overshooting.

use tracing::warn;

/// Fraction of the scrollable height consumed, clamped to `[0, 1]`.
///
/// A page shorter than the viewport has nothing to scroll and reports `0`.
pub fn progress_ratio(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Opposing force per unit velocity.
    pub damping: f64,
    /// Mass of the animated value.
    pub mass: f64,
    /// Below this displacement and velocity the spring snaps to rest.
    pub rest_delta: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }
}

impl SpringParams {
    /// Damping ratio; `>= 1.0` means no overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Integration substep in seconds.
    ///
    /// Semi-implicit Euler diverges once `h * sqrt(k / m)` nears 2, so stiff
    /// or heavily damped springs integrate in proportionally smaller steps.
    pub fn substep(&self) -> f64 {
        let natural = 0.5 / (self.stiffness / self.mass).sqrt();
        let damped = 0.5 * self.mass / self.damping;
        [natural, damped]
            .into_iter()
            .filter(|h| h.is_finite() && *h > 0.0)
            .fold(MAX_STEP, f64::min)
    }
}

/// Longest integration substep in seconds.
const MAX_STEP: f64 = 1.0 / 240.0;

/// Shortest substep a spring may need. Stiffer settings are rejected by
/// the config loader.
pub const MIN_STEP: f64 = 1.0e-5;

/// Longest frame gap integrated in one call. A tab returning from the
/// background resumes from where it was instead of replaying the gap.
const MAX_FRAME: f64 = 0.25;

/// A one-dimensional damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(params: SpringParams, value: f64) -> Self {
        Self {
            params,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current animated value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value being chased.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget the spring. Velocity is kept so motion stays continuous.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Whether the spring has settled on its target.
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Jump to the target and stop.
    pub fn settle(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds. Returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_at_rest() || !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let step = self.params.substep().max(MIN_STEP);
        let mut remaining = dt.min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(step);
            remaining -= h;
            let displacement = self.value - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            // Semi-implicit Euler: velocity first, then position.
            self.velocity += force / self.params.mass * h;
            self.value += self.velocity * h;

            if (self.value - self.target).abs() < self.params.rest_delta
                && self.velocity.abs() < self.params.rest_delta
            {
                self.value = self.target;
                self.velocity = 0.0;
                break;
            }
        }
        if !self.value.is_finite() || !self.velocity.is_finite() {
            warn!(params = ?self.params, "spring diverged, snapping to target");
            self.settle();
        }
        self.value
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringParams::default(), 0.0)
    }
}

/// Scroll progress as shown by the top bar: raw ratio in, smoothed ratio out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    spring: Spring,
}

impl ScrollProgress {
    /// Progress tracker starting at the top of the page.
    pub fn new(params: SpringParams) -> Self {
        Self {
            spring: Spring::new(params, 0.0),
        }
    }

    /// Feed the page geometry after a scroll event.
    pub fn observe(&mut self, offset: f64, scroll_height: f64, viewport_height: f64) {
        self.spring
            .set_target(progress_ratio(offset, scroll_height, viewport_height));
    }

    /// Advance the smoothing by `dt` seconds and return the bar's scale.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.step(dt).clamp(0.0, 1.0)
    }

    /// Smoothed ratio without advancing time.
    pub fn ratio(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }

    /// Whether there is anything left to animate.
    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }

    /// Skip the animation and show the scroll position as is.
    pub fn settle(&mut self) {
        self.spring.settle();
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

/// Measures real time between animation ticks.
///
/// Browsers throttle timers in background tabs, so a tick can arrive long
/// after its nominal interval. Feeding the measured gap to the spring keeps
/// the bar on schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Reset the reference point to `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Seconds since the previous lap or start, then move the reference
    /// point. Zero before the first start or when the clock went backwards.
    pub fn lap(&mut self, now_ms: f64) -> f64 {
        let elapsed = self.last_ms.map_or(0.0, |last| (now_ms - last) / 1000.0);
        self.last_ms = Some(now_ms);
        if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(progress_ratio(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress_ratio(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress_ratio(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress_ratio(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn ratio_is_zero_when_page_does_not_scroll() {
        assert_eq!(progress_ratio(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_ratio(10.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_ratio(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn default_spring_is_overdamped() {
        assert!(SpringParams::default().damping_ratio() > 1.0);
    }

    #[test]
    fn spring_approaches_without_overshoot() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let mut last = spring.value();
        for _ in 0..600 {
            let v = spring.step(FRAME);
            assert!(v >= last, "spring moved backwards: {last} -> {v}");
            assert!(v <= 1.0, "spring overshot: {v}");
            last = v;
        }
    }

    #[test]
    fn spring_settles_in_bounded_time() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let frames = (0..600).take_while(|_| {
            spring.step(FRAME);
            !spring.is_at_rest()
        });
        let count = frames.count();
        // Overdamped at ratio 1.5: well under three seconds.
        assert!(count < 180, "took {count} frames");
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn spring_at_rest_ignores_ticks() {
        let mut spring = Spring::new(SpringParams::default(), 0.4);
        assert_eq!(spring.step(FRAME), 0.4);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn spring_tracks_retargeting_downwards() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        for _ in 0..30 {
            spring.step(FRAME);
        }
        spring.set_target(0.0);
        for _ in 0..600 {
            spring.step(FRAME);
        }
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn large_frame_gap_is_stable() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let v = spring.step(2.0);
        assert!(v.is_finite() && v <= 1.0);
    }

    #[test]
    fn progress_follows_scroll() {
        let mut progress = ScrollProgress::default();
        progress.observe(1000.0, 3000.0, 1000.0);
        assert!(!progress.is_settled());
        for _ in 0..600 {
            progress.tick(FRAME);
        }
        assert!(progress.is_settled());
        assert_eq!(progress.ratio(), 0.5);
    }

    #[test]
    fn frame_clock_measures_gaps() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.lap(500.0), 0.0);
        clock.start(1_000.0);
        assert_eq!(clock.lap(1_016.0), 0.016);
        assert_eq!(clock.lap(2_016.0), 1.0);
        assert_eq!(clock.lap(2_000.0), 0.0);
    }

    #[test]
    fn throttled_tick_catches_up() {
        let mut clock = FrameClock::default();
        let mut progress = ScrollProgress::default();
        progress.observe(1000.0, 3000.0, 1000.0);
        clock.start(0.0);
        // One tick after a second in a background tab.
        let scale = progress.tick(clock.lap(1_000.0));

        let mut nominal = ScrollProgress::default();
        nominal.observe(1000.0, 3000.0, 1000.0);
        assert!(scale > nominal.tick(FRAME));
        assert!(scale.is_finite() && scale <= 0.5);
    }

    #[test]
    fn settle_skips_the_animation() {
        let mut progress = ScrollProgress::default();
        progress.observe(1500.0, 3000.0, 1000.0);
        progress.settle();
        assert!(progress.is_settled());
        assert_eq!(progress.ratio(), 0.75);
    }

    #[test]
    fn stiff_spring_shrinks_its_substep() {
        let params = SpringParams {
            stiffness: 1_000_000.0,
            ..SpringParams::default()
        };
        assert!(params.substep() < MAX_STEP);
        assert!(params.substep() * (params.stiffness / params.mass).sqrt() <= 0.5);
        assert_eq!(SpringParams::default().substep(), MAX_STEP);
    }

    #[test]
    fn stiff_spring_stays_finite_and_settles() {
        let mut progress = ScrollProgress::new(SpringParams {
            stiffness: 1_000_000.0,
            ..SpringParams::default()
        });
        progress.observe(1000.0, 3000.0, 1000.0);
        for _ in 0..120 {
            let scale = progress.tick(FRAME);
            assert!((0.0..=1.0).contains(&scale), "scale out of range: {scale}");
        }
        assert!(progress.is_settled());
        assert_eq!(progress.ratio(), 0.5);
    }

    #[test]
    fn heavy_damping_stays_finite() {
        let mut spring = Spring::new(
            SpringParams {
                damping: 5_000.0,
                ..SpringParams::default()
            },
            0.0,
        );
        spring.set_target(1.0);
        for _ in 0..60 {
            assert!(spring.step(FRAME).is_finite());
        }
    }
}
