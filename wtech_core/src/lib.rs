//! # wtech-core
//!
//! Content model and UI state logic for the W Tech IT Solution landing page.
//!
//! This crate holds everything the landing page knows that is not markup:
//! the ordered content lists, the navigation targets, and the small state
//! machines behind the page's interactivity. It has no dependency on Leptos
//! or `web-sys`, so all of it is tested natively.
//!
//! ## Architecture
//!
//! - [`content`] - immutable, ordered content lists (services, portfolio, ...)
//! - [`glyph`] - symbolic icon names resolved by the presentation layer
//! - [`nav`] - navigation targets, nav bar style and mobile menu toggle
//! - [`scroll`] - scroll progress ratio and the spring that smooths it
//! - [`reveal`] - one-shot viewport reveal latches keyed by element identity
//! - [`motion`] - reveal presets and stagger timing
//! - [`hover`] - per-card hover flag and the portfolio overlay it drives
//! - [`forms`] - contact / newsletter field validation and submission seam
//! - [`config`] - site configuration loaded from embedded TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use wtech_core::content;
//! use wtech_core::nav::{NavBar, NavBarStyle};
//!
//! assert_eq!(content::services().len(), 11);
//!
//! let mut bar = NavBar::new(50.0);
//! bar.observe(600.0);
//! assert_eq!(bar.style(), NavBarStyle::Solid);
//! ```
//!
//! Developed by the W Tech IT Solution web team (c)2025

#![warn(missing_docs)]

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod glyph;
pub mod hover;
pub mod motion;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use config::SiteConfig;
pub use error::{Error, Result};
