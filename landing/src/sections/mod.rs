// Landing page sections, top to bottom
// Developed by the W Tech IT Solution web team (c)2025

mod brand;
mod console;
mod contact;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod process;
mod progress;
mod services;
mod testimonials;

pub use brand::Brand;
pub use console::ConsoleGreeting;
pub use contact::{Contact, InquiryForm};
pub use footer::{Footer, NewsletterSignup};
pub use hero::Hero;
pub use nav::{MobileMenuOverlay, Nav};
pub use portfolio::{Portfolio, PortfolioCard};
pub use process::{Process, ProcessStepCard};
pub use progress::ScrollProgressBar;
pub use services::{ServiceCard, Services};
pub use testimonials::{TestimonialCard, Testimonials};
