//! Rotation coordinator: wires the fact store to the overlay engine.
//!
//! A [`FactLoader`] is an explicit context object the host constructs once
//! and threads through its loop; there is no process-wide singleton. It owns
//! the single rotation deadline (the "timer"): armed when a session exists,
//! cancelled when it is dropped, and advanced by [`FactLoader::tick`].

use std::time::{Duration, Instant};

use crate::overlay::{OverlayConfig, OverlayStyle, PresentationEngine};
use crate::store::{FactStore, StoreError};

/// Category used when the host does not name one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Loader configuration: rotation interval plus initial overlay appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Time between fact rotations.
    pub interval: Duration,
    pub overlay: OverlayConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            overlay: OverlayConfig::default(),
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }
}

/// Partial loader reconfiguration, merged over the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderUpdate {
    pub interval: Option<Duration>,
    pub overlay: OverlayStyle,
}

impl LoaderUpdate {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayStyle) -> Self {
        self.overlay = overlay;
        self
    }
}

/// One rotation session: the active category and the armed deadline.
#[derive(Debug, Clone)]
struct RotationSession {
    category: String,
    next_tick: Instant,
}

/// Coordinates fact selection and overlay presentation on a repeating
/// deadline. At most one rotation is ever active; `start` unconditionally
/// supersedes any prior session.
#[derive(Debug)]
pub struct FactLoader {
    interval: Duration,
    store: FactStore,
    engine: PresentationEngine,
    session: Option<RotationSession>,
}

impl Default for FactLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl FactLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            interval: config.interval,
            engine: PresentationEngine::new(config.overlay),
            store: FactStore::new(),
            session: None,
        }
    }

    /// Merge a partial reconfiguration. Never starts rotation.
    pub fn configure(&mut self, update: &LoaderUpdate) -> &mut Self {
        if let Some(interval) = update.interval {
            self.interval = interval;
        }
        self.engine.update_config(&update.overlay);
        self
    }

    /// Start rotating facts from a category.
    ///
    /// Any prior session is stopped first, so two concurrent rotations can
    /// never exist. One fact is fetched and shown immediately; when the store
    /// yields nothing the overlay stays Absent, but the session is still
    /// active and the deadline armed, so facts added later appear on the next
    /// tick.
    pub fn start(&mut self, category: &str, now: Instant) -> &mut Self {
        self.stop(now);
        if let Some(fact) = self.store.get_random_fact(category) {
            self.engine.show(fact, now);
        }
        self.session = Some(RotationSession {
            category: category.to_string(),
            next_tick: now + self.interval,
        });
        self
    }

    /// Cancel the rotation and hide the overlay. Idempotent.
    pub fn stop(&mut self, now: Instant) -> &mut Self {
        self.session = None;
        self.engine.hide(now);
        self
    }

    /// Advance deferred overlay work and, when the rotation deadline has
    /// passed, show the next fact. A tick that yields no fact is skipped and
    /// the overlay keeps its prior content.
    pub fn tick(&mut self, now: Instant) {
        self.engine.tick(now);
        let interval = self.interval;
        if let Some(session) = &mut self.session {
            if now >= session.next_tick {
                session.next_tick = now + interval;
                let category = session.category.clone();
                if let Some(fact) = self.store.get_random_fact(&category) {
                    self.engine.update_fact(fact, now);
                }
            }
        }
    }

    /// Register facts for a category; usable whether or not a rotation is
    /// active. Fails with no partial mutation when any entry is empty.
    pub fn add_facts<I, S>(&mut self, category: &str, facts: I) -> Result<&mut Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store.add_facts(category, facts)?;
        Ok(self)
    }

    pub fn get_categories(&self) -> Vec<String> {
        self.store.get_categories()
    }

    pub fn fact_count(&self, category: &str) -> usize {
        self.store.get_fact_count(category)
    }

    /// True iff the rotation deadline is currently armed.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active rotation's category, if any.
    pub fn current_category(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.category.as_str())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn engine(&self) -> &PresentationEngine {
        &self.engine
    }

    pub fn store_mut(&mut self) -> &mut FactStore {
        &mut self.store
    }
}
