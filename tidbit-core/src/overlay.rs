//! Overlay presentation engine.
//!
//! Owns the lifecycle of the single floating fact box: Absent → Visible →
//! Hidden-pending-removal. Fades are modeled as opacity ramps between
//! timestamps; renderers sample [`PresentationEngine::opacity`] each frame
//! and blend the text color toward the background accordingly.
//!
//! The two deferred completions (text swap after a fade-out, removal after a
//! hide) are guarded by a generation token: every `show`/`update_fact`/`hide`
//! bumps the generation, and a pending completion whose captured generation
//! no longer matches is discarded by [`PresentationEngine::tick`] instead of
//! applied. A stale completion can therefore never clobber state established
//! by a later call.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// An RGB color. Kept UI-framework-agnostic so the engine has no rendering
/// dependency; the TUI converts to its own color type at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; `t` of 0.0 is `self`, 1.0 is `other`.
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Case transformation applied to the displayed fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
}

impl TextTransform {
    /// Apply the transform to a fact string.
    pub fn apply(self, text: &str) -> String {
        match self {
            TextTransform::None => text.to_string(),
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
        }
    }
}

/// Overlay appearance and timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Full fade duration; cross-fade swaps use half on each side.
    pub fade: Duration,
    pub background: Rgb,
    pub foreground: Rgb,
    pub bold: bool,
    pub italic: bool,
    /// Extra columns inserted between characters.
    pub letter_spacing: u8,
    pub transform: TextTransform,
    /// Overlay width bounds, in terminal columns.
    pub min_width: u16,
    pub max_width: u16,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(300),
            background: Rgb::new(16, 16, 24),
            foreground: Rgb::new(255, 255, 255),
            bold: false,
            italic: false,
            letter_spacing: 0,
            transform: TextTransform::None,
            min_width: 30,
            max_width: 60,
        }
    }
}

impl OverlayConfig {
    /// Merge a partial style over this configuration. `None` fields leave the
    /// current value untouched.
    pub fn apply(&mut self, style: &OverlayStyle) {
        if let Some(fade) = style.fade {
            self.fade = fade;
        }
        if let Some(background) = style.background {
            self.background = background;
        }
        if let Some(foreground) = style.foreground {
            self.foreground = foreground;
        }
        if let Some(bold) = style.bold {
            self.bold = bold;
        }
        if let Some(italic) = style.italic {
            self.italic = italic;
        }
        if let Some(letter_spacing) = style.letter_spacing {
            self.letter_spacing = letter_spacing;
        }
        if let Some(transform) = style.transform {
            self.transform = transform;
        }
        if let Some(min_width) = style.min_width {
            self.min_width = min_width;
        }
        if let Some(max_width) = style.max_width {
            self.max_width = max_width;
        }
    }
}

/// Partial overlay configuration for merge-over updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayStyle {
    pub fade: Option<Duration>,
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub letter_spacing: Option<u8>,
    pub transform: Option<TextTransform>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
}

impl OverlayStyle {
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = Some(fade);
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_foreground(mut self, foreground: Rgb) -> Self {
        self.foreground = Some(foreground);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: u8) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Externally observable overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// No overlay exists.
    Absent,
    /// Overlay present and logically on (including mid cross-fade).
    Visible,
    /// Fading out after `hide`; still present until the fade elapses.
    HiddenPendingRemoval,
}

/// An opacity ramp between two timestamps.
#[derive(Debug, Clone)]
struct Fade {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Fade {
    fn at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}

/// The live overlay: current text plus its opacity ramp.
#[derive(Debug, Clone)]
struct OverlayNode {
    text: String,
    fade: Fade,
}

#[derive(Debug, Clone)]
enum PendingAction {
    /// Swap in new text and fade it in (second half of a cross-fade).
    Swap(String),
    /// Drop the overlay entirely (end of a hide).
    Remove,
}

/// A deferred completion, tagged with the generation it was scheduled under.
#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    due: Instant,
    action: PendingAction,
}

/// Overlay lifecycle state machine. Owns no timer; the host loop calls
/// [`tick`](Self::tick) with the current instant each frame.
#[derive(Debug)]
pub struct PresentationEngine {
    config: OverlayConfig,
    node: Option<OverlayNode>,
    visible: bool,
    generation: u64,
    pending: Option<Pending>,
}

impl Default for PresentationEngine {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl PresentationEngine {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            node: None,
            visible: false,
            generation: 0,
            pending: None,
        }
    }

    /// Show a fact, constructing the overlay if absent and fading it in.
    /// Supersedes any pending deferred completion.
    pub fn show(&mut self, fact: impl Into<String>, now: Instant) {
        self.supersede();
        let fade = Fade {
            from: self.opacity(now),
            to: 1.0,
            started: now,
            duration: self.config.fade,
        };
        let text = fact.into();
        match &mut self.node {
            Some(node) => {
                node.text = text;
                node.fade = fade;
            }
            None => self.node = Some(OverlayNode { text, fade }),
        }
        self.visible = true;
    }

    /// Cross-fade to a new fact: fade the current text out over half the fade
    /// duration, then (via `tick`) swap the text and fade back in. The old and
    /// new text are never visible at the same instant.
    ///
    /// Behaves as [`show`](Self::show) when the overlay is not visible.
    pub fn update_fact(&mut self, fact: impl Into<String>, now: Instant) {
        if !self.visible {
            self.show(fact, now);
            return;
        }
        let generation = self.supersede();
        let half = self.config.fade / 2;
        let from = self.opacity(now);
        if let Some(node) = &mut self.node {
            node.fade = Fade {
                from,
                to: 0.0,
                started: now,
                duration: half,
            };
        }
        self.pending = Some(Pending {
            generation,
            due: now + half,
            action: PendingAction::Swap(fact.into()),
        });
    }

    /// Fade the overlay out and schedule its removal. No-op when Absent or
    /// already mid-hide; calling twice never schedules a second removal.
    pub fn hide(&mut self, now: Instant) {
        if self.node.is_none() || !self.visible {
            return;
        }
        let generation = self.supersede();
        self.visible = false;
        let from = self.opacity(now);
        if let Some(node) = &mut self.node {
            node.fade = Fade {
                from,
                to: 0.0,
                started: now,
                duration: self.config.fade,
            };
        }
        self.pending = Some(Pending {
            generation,
            due: now + self.config.fade,
            action: PendingAction::Remove,
        });
    }

    /// Apply the pending deferred completion if it is due and still current.
    /// Stale completions (generation mismatch) are discarded unapplied.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = &self.pending else {
            return;
        };
        if pending.generation != self.generation {
            self.pending = None;
            return;
        }
        if now < pending.due {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        match pending.action {
            PendingAction::Swap(next) => {
                let half = self.config.fade / 2;
                if let Some(node) = &mut self.node {
                    node.text = next;
                    node.fade = Fade {
                        from: 0.0,
                        to: 1.0,
                        started: now,
                        duration: half,
                    };
                }
            }
            PendingAction::Remove => {
                self.node = None;
            }
        }
    }

    /// True only in the Visible phase. An overlay fading out after `hide`
    /// reports false.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase(), OverlayPhase::Visible)
    }

    pub fn phase(&self) -> OverlayPhase {
        match (&self.node, self.visible) {
            (None, _) => OverlayPhase::Absent,
            (Some(_), true) => OverlayPhase::Visible,
            (Some(_), false) => OverlayPhase::HiddenPendingRemoval,
        }
    }

    /// Sampled overlay opacity at `now`; 0.0 when Absent.
    pub fn opacity(&self, now: Instant) -> f32 {
        self.node.as_ref().map_or(0.0, |node| node.fade.at(now))
    }

    /// The fact currently held by the overlay, untransformed.
    pub fn current_fact(&self) -> Option<&str> {
        self.node.as_ref().map(|node| node.text.as_str())
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Merge a partial style over the live configuration. Restyling while
    /// visible takes effect on the next frame without touching the displayed
    /// text or the visibility state.
    pub fn update_config(&mut self, style: &OverlayStyle) {
        self.config.apply(style);
    }

    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
