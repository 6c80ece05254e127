//! Rotating loading-facts engine.
//!
//! This crate provides:
//! - Category-keyed fact storage with no-repeat-until-exhausted rotation
//! - An overlay presentation state machine with timed cross-fades
//! - A coordinator tying the two to a repeating rotation deadline
//! - Loadable JSON fact packs
//!
//! The engine owns no timer and performs no drawing. The host loop passes a
//! single `Instant` per frame into `tick`, and a renderer (see the `tidbit`
//! TUI crate) samples the overlay state each frame.
//!
//! # Quick Start
//!
//! ```
//! use std::time::Instant;
//! use tidbit_core::{FactLoader, LoaderConfig, DEFAULT_CATEGORY};
//!
//! let mut loader = FactLoader::new(LoaderConfig::default());
//! loader
//!     .add_facts("deploy", ["Deploys are boring on purpose."])
//!     .unwrap()
//!     .start(DEFAULT_CATEGORY, Instant::now());
//!
//! // ...each frame:
//! loader.tick(Instant::now());
//! if let Some(fact) = loader.engine().current_fact() {
//!     println!("{fact}");
//! }
//! ```

mod facts;
pub mod loader;
pub mod overlay;
pub mod pack;
pub mod store;

// Primary public API
pub use loader::{FactLoader, LoaderConfig, LoaderUpdate, DEFAULT_CATEGORY};
pub use overlay::{
    OverlayConfig, OverlayPhase, OverlayStyle, PresentationEngine, Rgb, TextTransform,
};
pub use pack::{FactPack, PackError};
pub use store::{FactStore, StoreError};
