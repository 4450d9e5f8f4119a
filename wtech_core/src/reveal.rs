//! One-shot viewport reveal latches.
//!
//! Each revealable element starts [`RevealState::Unseen`] and flips to
//! [`RevealState::Revealed`] the first time it intersects the viewport. There
//! is no reverse transition. Latches are keyed by a stable [`ElementId`]
//! built from the section and the record's own key, never from its render
//! position, so reordering a list does not move a latch to another card.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Stable identity of a revealable element: `<section>/<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Identity for `key` inside `section`.
    pub fn new(section: &str, key: &str) -> Self {
        Self(format!("{section}/{key}"))
    }

    /// The id as a string, usable as a DOM data attribute.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latch state of one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet seen; drawn in its offset, transparent starting pose.
    #[default]
    Unseen,
    /// Seen at least once; drawn in its resting pose forever after.
    Revealed,
}

impl RevealState {
    /// CSS state class.
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Unseen => "reveal-unseen",
            RevealState::Revealed => "reveal-revealed",
        }
    }
}

/// Outcome of feeding one intersection observation to a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// The element just revealed. Fires once per element.
    Revealed,
    /// Nothing changed.
    Unchanged,
}

/// Latch for a single element instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feed an intersection observation.
    pub fn observe(&mut self, intersecting: bool) -> RevealTransition {
        match (self.state, intersecting) {
            (RevealState::Unseen, true) => {
                self.state = RevealState::Revealed;
                RevealTransition::Revealed
            }
            _ => RevealTransition::Unchanged,
        }
    }
}

/// Latches for every revealable element on the page.
#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    latches: HashMap<ElementId, RevealLatch>,
}

impl RevealRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `id` has a latch. An existing latch is left untouched.
    pub fn register(&mut self, id: ElementId) {
        self.latches.entry(id).or_default();
    }

    /// Feed an intersection observation for `id`, registering it if needed.
    pub fn observe(&mut self, id: &ElementId, intersecting: bool) -> RevealTransition {
        let latch = self.latches.entry(id.clone()).or_default();
        let transition = latch.observe(intersecting);
        if transition == RevealTransition::Revealed {
            debug!(element = %id, "revealed");
        }
        transition
    }

    /// State of `id`; unknown elements are unseen.
    pub fn state(&self, id: &ElementId) -> RevealState {
        self.latches
            .get(id)
            .map(RevealLatch::state)
            .unwrap_or_default()
    }

    /// Whether `id` has revealed.
    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.state(id) == RevealState::Revealed
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.latches.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }

    /// Number of elements that have revealed.
    pub fn revealed_count(&self) -> usize {
        self.latches
            .values()
            .filter(|l| l.state() == RevealState::Revealed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(key: &str) -> ElementId {
        ElementId::new("service", key)
    }

    #[test]
    fn passing_by_without_intersecting_stays_unseen() {
        let mut registry = RevealRegistry::new();
        let card = id("Web Development");
        registry.register(card.clone());
        assert_eq!(registry.observe(&card, false), RevealTransition::Unchanged);
        assert_eq!(registry.observe(&card, false), RevealTransition::Unchanged);
        assert_eq!(registry.state(&card), RevealState::Unseen);
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut registry = RevealRegistry::new();
        let card = id("SEO Optimization");
        let transitions: Vec<_> = [true, false, true, true, false]
            .into_iter()
            .map(|seen| registry.observe(&card, seen))
            .collect();
        assert_eq!(
            transitions,
            vec![
                RevealTransition::Revealed,
                RevealTransition::Unchanged,
                RevealTransition::Unchanged,
                RevealTransition::Unchanged,
                RevealTransition::Unchanged,
            ]
        );
        assert!(registry.is_revealed(&card));
    }

    #[test]
    fn latches_are_independent() {
        let mut registry = RevealRegistry::new();
        let a = id("Data Analytics");
        let b = id("Digital Marketing");
        registry.register(a.clone());
        registry.register(b.clone());
        registry.observe(&a, true);
        assert!(registry.is_revealed(&a));
        assert!(!registry.is_revealed(&b));
        assert_eq!(registry.revealed_count(), 1);
    }

    #[test]
    fn register_does_not_reset_a_revealed_latch() {
        let mut registry = RevealRegistry::new();
        let a = id("GMB Optimization");
        registry.observe(&a, true);
        registry.register(a.clone());
        assert!(registry.is_revealed(&a));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn identity_is_section_scoped() {
        // Same title in two sections must not share a latch.
        let service = ElementId::new("service", "Data Analytics");
        let portfolio = ElementId::new("portfolio", "Data Analytics");
        assert_ne!(service, portfolio);

        let mut registry = RevealRegistry::new();
        registry.observe(&service, true);
        assert!(!registry.is_revealed(&portfolio));
    }

    #[test]
    fn unknown_element_is_unseen() {
        let registry = RevealRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.state(&id("missing")), RevealState::Unseen);
    }
}
