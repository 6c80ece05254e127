//! Main application state and logic.

use std::time::{Duration, Instant};

use tidbit_core::{FactLoader, LoaderUpdate, OverlayStyle, DEFAULT_CATEGORY};

use crate::ui::theme::Theme;

/// How long the simulated loading job takes before looping.
const JOB_DURATION: Duration = Duration::from_secs(30);

/// Bounds for interval adjustment via `+`/`-`.
const MIN_INTERVAL: Duration = Duration::from_millis(500);
const MAX_INTERVAL: Duration = Duration::from_secs(10);
const INTERVAL_STEP: Duration = Duration::from_millis(500);

/// Main application state.
pub struct App {
    pub loader: FactLoader,
    pub theme: Theme,

    // Category selection
    pub categories: Vec<String>,
    pub category_index: usize,

    // Simulated loading job
    job_started: Instant,

    // Animation
    pub animation_frame: u8,

    // Status
    status_message: Option<String>,
}

impl App {
    pub fn new(loader: FactLoader, now: Instant) -> Self {
        let categories = loader.get_categories();
        let category_index = categories
            .iter()
            .position(|c| c == DEFAULT_CATEGORY)
            .unwrap_or(0);

        Self {
            loader,
            theme: Theme::default(),
            categories,
            category_index,
            job_started: now,
            animation_frame: 0,
            status_message: Some("Press s to start the rotation".to_string()),
        }
    }

    /// The category the next `start` will use.
    pub fn selected_category(&self) -> &str {
        self.categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Simulated job progress in `[0.0, 1.0]`, looping.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.job_started);
        let cycle = elapsed.as_secs_f64() % JOB_DURATION.as_secs_f64();
        cycle / JOB_DURATION.as_secs_f64()
    }

    /// Start (or restart) rotation on the selected category.
    pub fn start_rotation(&mut self, now: Instant) {
        let category = self.selected_category().to_string();
        self.loader.start(&category, now);
        if self.loader.engine().is_visible() {
            self.set_status(format!("Rotating \"{category}\""));
        } else {
            self.set_status(format!(
                "\"{category}\" has no facts yet; waiting for some"
            ));
        }
    }

    pub fn stop_rotation(&mut self, now: Instant) {
        self.loader.stop(now);
        self.set_status("Stopped");
    }

    /// Select the next category; restarts the rotation if one is active.
    pub fn cycle_category(&mut self, now: Instant) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = (self.category_index + 1) % self.categories.len();
        if self.loader.is_active() {
            self.start_rotation(now);
        } else {
            let category = self.selected_category().to_string();
            self.set_status(format!("Selected \"{category}\""));
        }
    }

    pub fn lengthen_interval(&mut self) {
        let interval = (self.loader.interval() + INTERVAL_STEP).min(MAX_INTERVAL);
        self.loader
            .configure(&LoaderUpdate::default().with_interval(interval));
        self.set_status(format!("Interval: {:.1}s", interval.as_secs_f32()));
    }

    pub fn shorten_interval(&mut self) {
        let interval = self
            .loader
            .interval()
            .saturating_sub(INTERVAL_STEP)
            .max(MIN_INTERVAL);
        self.loader
            .configure(&LoaderUpdate::default().with_interval(interval));
        self.set_status(format!("Interval: {:.1}s", interval.as_secs_f32()));
    }

    /// Restyle the live overlay without disturbing the rotation.
    pub fn toggle_bold(&mut self) {
        let bold = !self.loader.engine().config().bold;
        self.loader
            .configure(&LoaderUpdate::default().with_overlay(OverlayStyle::default().with_bold(bold)));
        self.set_status(if bold { "Bold on" } else { "Bold off" });
    }

    /// Advance animations and the rotation.
    pub fn tick(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.loader.tick(now);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
