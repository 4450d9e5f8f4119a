//! Window bindings for scroll-driven state.
//!
//! Everything here runs inside effects, so nothing touches `web_sys` while
//! components are rendered to a string.

use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::prelude::*;
use tracing::{debug, warn};
use wtech_core::nav::NavBar;
use wtech_core::scroll::{FrameClock, ScrollProgress};

/// Interval between progress spring updates, roughly one frame at 60 Hz.
pub const FRAME: Duration = Duration::from_millis(16);

/// Page geometry needed by the nav bar and progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Vertical scroll offset in pixels.
    pub offset: f64,
    /// Total document height.
    pub scroll_height: f64,
    /// Visible height.
    pub viewport_height: f64,
}

/// Read the current geometry, or `None` outside a browser document.
pub fn scroll_geometry() -> Option<ScrollGeometry> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = f64::from(window.document()?.document_element()?.scroll_height());
    Some(ScrollGeometry {
        offset,
        scroll_height,
        viewport_height,
    })
}

/// Follow window scrolling: flip the nav bar style and retarget the
/// progress spring on every scroll event. The spring is advanced by wall-clock
/// time on an interval that only runs while it is moving.
pub fn track_scroll(nav: RwSignal<NavBar>, progress: RwSignal<ScrollProgress>) {
    let ticker = StoredValue::new(None::<IntervalHandle>);
    let clock = StoredValue::new(FrameClock::default());

    Effect::new(move || {
        let apply = move || {
            let Some(geometry) = scroll_geometry() else {
                return;
            };
            let mut bar = nav.get_untracked();
            if bar.observe(geometry.offset) {
                nav.set(bar);
            }
            progress.update(|p| {
                p.observe(
                    geometry.offset,
                    geometry.scroll_height,
                    geometry.viewport_height,
                )
            });
            start_tick(progress, ticker, clock);
        };

        // The page may load already scrolled (reload, anchor in the URL).
        apply();
        let listener = window_event_listener(ev::scroll, move |_| apply());

        on_cleanup(move || {
            debug!("scroll tracking stopped");
            listener.remove();
            stop_tick(ticker);
        });
    });
}

/// Start advancing the spring unless it is already running or at rest.
fn start_tick(
    progress: RwSignal<ScrollProgress>,
    ticker: StoredValue<Option<IntervalHandle>>,
    clock: StoredValue<FrameClock>,
) {
    if ticker.with_value(Option::is_some) || progress.with_untracked(ScrollProgress::is_settled) {
        return;
    }
    clock.update_value(|c| c.start(js_sys::Date::now()));

    let tick = set_interval_with_handle(
        move || {
            let dt = clock
                .try_update_value(|c| c.lap(js_sys::Date::now()))
                .unwrap_or_default();
            progress.update(|p| {
                p.tick(dt);
            });
            if progress.with_untracked(ScrollProgress::is_settled) {
                stop_tick(ticker);
            }
        },
        FRAME,
    );
    match tick {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(err) => {
            // Without a timer the bar jumps straight to the scroll position.
            warn!(error = ?err, "progress tick unavailable");
            progress.update(ScrollProgress::settle);
        }
    }
}

fn stop_tick(ticker: StoredValue<Option<IntervalHandle>>) {
    if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}
