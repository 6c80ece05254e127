//! Coordinator and overlay lifecycle through the loader's public API.

use std::time::{Duration, Instant};

use tidbit_core::{
    FactLoader, LoaderConfig, LoaderUpdate, OverlayPhase, OverlayStyle, TextTransform,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn loader() -> FactLoader {
    FactLoader::new(LoaderConfig::new().with_interval(ms(1000)))
}

#[test]
fn stop_twice_matches_stop_once() {
    let now = Instant::now();
    let mut loader = loader();
    loader.start("general", now);

    loader.stop(now + ms(10));
    loader.stop(now + ms(20));
    loader.tick(now + ms(500));

    assert!(!loader.is_active());
    assert_eq!(loader.current_category(), None);
    assert_eq!(loader.engine().phase(), OverlayPhase::Absent);
}

#[test]
fn restart_leaves_one_session_and_one_overlay() {
    let now = Instant::now();
    let mut loader = loader();
    loader.add_facts("a", ["only a"]).unwrap();
    loader.add_facts("b", ["only b"]).unwrap();

    loader.start("a", now).start("b", now + ms(5));

    assert!(loader.is_active());
    assert_eq!(loader.current_category(), Some("b"));
    assert_eq!(loader.engine().current_fact(), Some("only b"));

    // Long after the superseded session's hide would have fired, the new
    // overlay is still standing.
    loader.tick(now + ms(2000));
    loader.tick(now + ms(2200));
    assert_ne!(loader.engine().phase(), OverlayPhase::Absent);
}

#[test]
fn empty_category_start_arms_timer_with_absent_overlay() {
    let now = Instant::now();
    let mut loader = loader();
    loader.start("nonexistent", now);

    assert!(loader.is_active());
    assert_eq!(loader.engine().phase(), OverlayPhase::Absent);

    // Null ticks are skipped; the overlay stays Absent.
    loader.tick(now + ms(1000));
    assert_eq!(loader.engine().phase(), OverlayPhase::Absent);
    assert!(loader.is_active());

    // Once a fact exists, the next tick displays it.
    loader.add_facts("nonexistent", ["finally"]).unwrap();
    loader.tick(now + ms(2100));
    assert_eq!(loader.engine().current_fact(), Some("finally"));
    assert!(loader.engine().is_visible());
}

#[test]
fn restyle_while_visible_keeps_text_and_visibility() {
    let now = Instant::now();
    let mut loader = loader();
    loader.add_facts("a", ["steady"]).unwrap();
    loader.start("a", now);
    loader.tick(now + ms(300));

    let before = loader.engine().current_fact().map(str::to_string);
    loader.configure(
        &LoaderUpdate::default()
            .with_overlay(OverlayStyle::default().with_bold(true).with_max_width(72)),
    );

    assert!(loader.engine().config().bold);
    assert_eq!(loader.engine().config().max_width, 72);
    assert!(loader.engine().is_visible());
    assert_eq!(loader.engine().current_fact().map(str::to_string), before);
}

#[test]
fn configure_merges_without_starting() {
    let mut loader = loader();
    loader.configure(
        &LoaderUpdate::default()
            .with_interval(ms(500))
            .with_overlay(OverlayStyle::default().with_transform(TextTransform::Uppercase)),
    );

    assert_eq!(loader.interval(), ms(500));
    assert_eq!(
        loader.engine().config().transform,
        TextTransform::Uppercase
    );
    assert!(!loader.is_active());
    assert_eq!(loader.engine().phase(), OverlayPhase::Absent);
}

#[test]
fn chained_calls_read_naturally() {
    let now = Instant::now();
    let mut loader = loader();
    loader
        .add_facts("deploy", ["Fact one.", "Fact two."])
        .unwrap()
        .configure(&LoaderUpdate::default().with_interval(ms(100)))
        .start("deploy", now);

    assert!(loader.is_active());
    assert_eq!(loader.current_category(), Some("deploy"));
}

#[test]
fn stale_fade_completion_never_corrupts_later_state() {
    let now = Instant::now();
    let mut loader = loader();
    loader.add_facts("a", ["one", "two"]).unwrap();
    loader.start("a", now);

    // Stop (schedules a removal) then restart before it fires.
    loader.stop(now + ms(50));
    loader.start("a", now + ms(100));

    // When the stale removal's deadline passes, the overlay must survive.
    loader.tick(now + ms(450));
    assert_eq!(loader.engine().phase(), OverlayPhase::Visible);
}
