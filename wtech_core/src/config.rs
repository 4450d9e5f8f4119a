//! Site configuration.
//!
//! Brand strings, contact details and the tuning knobs of the page's motion
//! live in `site.toml`, which is embedded at build time. Every key has a
//! default, so a partial file (or none at all) still yields a working site.

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::nav::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::scroll::{MIN_STEP, SpringParams};

/// The embedded configuration file.
pub const EMBEDDED_TOML: &str = include_str!("../site.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Names and image paths.
    pub brand: BrandConfig,
    /// Contact block.
    pub contact: ContactConfig,
    /// Navigation bar.
    pub nav: NavConfig,
    /// Scroll progress bar.
    pub progress: ProgressConfig,
    /// Viewport reveals.
    pub reveal: RevealConfig,
    /// Browser console logging.
    pub log: LogConfig,
}

/// Brand strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Wordmark, e.g. "W TECH".
    pub name: String,
    /// Accent word drawn in the brand color after the name.
    pub accent: String,
    /// Name used in the copyright line.
    pub legal_name: String,
    /// Hero badge text.
    pub tagline: String,
    /// Logo image path.
    pub logo: String,
    /// Hero banner image path.
    pub banner: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "W TECH".into(),
            accent: "IT".into(),
            legal_name: "W TECH IT SOLUTION".into(),
            tagline: "India's Premier IT Partner".into(),
            logo: "/logo.png".into(),
            banner: "/banner.jpg".into(),
        }
    }
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Direct line.
    pub phone: String,
    /// Support email.
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+91-XXXXXXXXXX".into(),
            email: "info@wtechitsolution.com".into(),
        }
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Offset past which the bar turns solid.
    pub scroll_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

/// Spring settings for the progress bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Spring stiffness.
    pub stiffness: f64,
    /// Spring damping.
    pub damping: f64,
    /// Spring mass.
    pub mass: f64,
    /// Settle tolerance.
    pub rest_delta: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        let p = SpringParams::default();
        Self {
            stiffness: p.stiffness,
            damping: p.damping,
            mass: p.mass,
            rest_delta: p.rest_delta,
        }
    }
}

impl ProgressConfig {
    /// As spring parameters.
    pub fn spring(&self) -> SpringParams {
        SpringParams {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
            rest_delta: self.rest_delta,
        }
    }
}

/// Viewport reveal settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// IntersectionObserver root margin for section reveals.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "-100px".into(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LogConfig {
    /// Parsed level, falling back to `INFO` for unknown names.
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl SiteConfig {
    /// Parse and check a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// The embedded `site.toml`, or the defaults if it does not parse.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_TOML) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "falling back to default site configuration");
                Self::default()
            }
        }
    }

    fn check(&self) -> Result<()> {
        let nav = self.nav.scroll_threshold_px;
        if !nav.is_finite() || nav < 0.0 {
            return Err(Error::ConfigValue {
                key: "nav.scroll_threshold_px",
                reason: format!("expected a non-negative number, got {nav}"),
            });
        }
        let p = &self.progress;
        for (key, value) in [
            ("progress.stiffness", p.stiffness),
            ("progress.damping", p.damping),
            ("progress.mass", p.mass),
            ("progress.rest_delta", p.rest_delta),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigValue {
                    key,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }
        let step = p.spring().substep();
        if step < MIN_STEP {
            return Err(Error::ConfigValue {
                key: "progress",
                reason: format!(
                    "stiffness {} and damping {} over mass {} are too stiff to animate",
                    p.stiffness, p.damping, p.mass
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollProgress;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_file_matches_defaults() {
        let parsed = SiteConfig::from_toml_str(EMBEDDED_TOML).expect("embedded config parses");
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn defaults_match_documented_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.nav.scroll_threshold_px, 50.0);
        assert_eq!(config.progress.spring(), SpringParams::default());
        assert_eq!(config.reveal.root_margin, "-100px");
        assert_eq!(config.log.level(), tracing::Level::INFO);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [contact]
            email = "hello@example.com"

            [nav]
            scroll_threshold_px = 80.0
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.contact.email, "hello@example.com");
        assert_eq!(config.contact.phone, ContactConfig::default().phone);
        assert_eq!(config.nav.scroll_threshold_px, 80.0);
        assert_eq!(config.brand, BrandConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = SiteConfig::from_toml_str("[nav\nscroll_threshold_px = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = SiteConfig::from_toml_str("[progress]\ndamping = 0.0").unwrap_err();
        assert!(matches!(err, Error::ConfigValue { key: "progress.damping", .. }));

        let err = SiteConfig::from_toml_str("[nav]\nscroll_threshold_px = -1.0").unwrap_err();
        assert!(err.to_string().contains("nav.scroll_threshold_px"));
    }

    #[test]
    fn stiff_spring_is_accepted_and_animates() {
        let config = SiteConfig::from_toml_str("[progress]\nstiffness = 1000000.0")
            .expect("stiff spring is still stable");
        let mut progress = ScrollProgress::new(config.progress.spring());
        progress.observe(1000.0, 3000.0, 1000.0);
        for _ in 0..120 {
            progress.tick(1.0 / 60.0);
        }
        assert!(progress.is_settled());
        assert_eq!(progress.ratio(), 0.5);
    }

    #[test]
    fn unanimatable_spring_is_rejected() {
        let err = SiteConfig::from_toml_str("[progress]\nstiffness = 1.0e12").unwrap_err();
        assert!(matches!(err, Error::ConfigValue { key: "progress", .. }));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let log = LogConfig {
            level: "chatty".into(),
        };
        assert_eq!(log.level(), tracing::Level::INFO);
    }
}
