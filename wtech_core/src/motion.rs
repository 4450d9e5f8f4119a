//! Reveal presets and stagger timing.
//!
//! A preset describes the pose an element starts in before it reveals and how
//! long it takes to settle. The landing crate turns a preset into a CSS class
//! plus inline `transition-*` properties.

use std::time::Duration;

/// Delay added per card index inside a grid.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Starting pose and timing of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreset {
    /// Section headings and blocks: rise 30 px while fading in.
    FadeUp,
    /// Service and testimonial cards: grow from 90% while fading in.
    Scale,
    /// Portfolio cards: rise 50 px while fading in.
    RiseCard,
    /// Eyebrow labels: slide in from 20 px to the left.
    SlideRight,
}

impl MotionPreset {
    /// CSS class carrying the starting transform.
    pub fn class(self) -> &'static str {
        match self {
            MotionPreset::FadeUp => "motion-fade-up",
            MotionPreset::Scale => "motion-scale",
            MotionPreset::RiseCard => "motion-rise-card",
            MotionPreset::SlideRight => "motion-slide-right",
        }
    }

    /// Transition duration.
    pub fn duration(self) -> Duration {
        match self {
            MotionPreset::FadeUp => Duration::from_millis(800),
            MotionPreset::Scale => Duration::from_millis(500),
            MotionPreset::RiseCard => Duration::from_millis(700),
            MotionPreset::SlideRight => Duration::from_millis(600),
        }
    }
}

/// Delay for the card at `index` in a staggered grid.
pub fn stagger(index: usize) -> Duration {
    STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Inline style for a reveal: duration plus delay, in seconds.
pub fn transition_style(preset: MotionPreset, delay: Duration) -> String {
    format!(
        "transition-duration: {:.2}s; transition-delay: {:.2}s;",
        preset.duration().as_secs_f64(),
        delay.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_a_tenth_of_a_second() {
        assert_eq!(stagger(0), Duration::ZERO);
        assert_eq!(stagger(1), Duration::from_millis(100));
        assert_eq!(stagger(10), Duration::from_secs(1));
    }

    #[test]
    fn style_formats_seconds() {
        let style = transition_style(MotionPreset::Scale, stagger(3));
        assert_eq!(style, "transition-duration: 0.50s; transition-delay: 0.30s;");
    }

    #[test]
    fn classes_are_distinct() {
        let classes = [
            MotionPreset::FadeUp.class(),
            MotionPreset::Scale.class(),
            MotionPreset::RiseCard.class(),
            MotionPreset::SlideRight.class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
