// Host-side tests for the hero title typing and scroll parallax.

use folio_core::constants::TYPE_CARET_LINGER_MS;
use folio_core::intro::{background_parallax, shape_parallax, TypeUpdate, Typewriter};

fn text(update: Option<TypeUpdate>) -> Option<String> {
    match update {
        Some(TypeUpdate::Text(s)) => Some(s),
        _ => None,
    }
}

#[test]
fn typewriter_waits_for_its_start() {
    let mut w = Typewriter::with_step("Ana", 1000.0, 100.0);
    assert_eq!(w.poll(0.0), None);
    assert_eq!(w.poll(999.0), None);
    assert_eq!(text(w.poll(1000.0)).as_deref(), Some("A"));
}

#[test]
fn typewriter_reveals_one_char_per_step() {
    let mut w = Typewriter::with_step("Ana", 0.0, 100.0);
    assert_eq!(text(w.poll(0.0)).as_deref(), Some("A"));
    assert_eq!(w.poll(50.0), None);
    assert_eq!(text(w.poll(100.0)).as_deref(), Some("An"));
    assert_eq!(text(w.poll(200.0)).as_deref(), Some("Ana"));
    assert_eq!(w.poll(250.0), None);
    assert!(!w.is_finished());
}

#[test]
fn late_poll_catches_up_in_one_update() {
    let mut w = Typewriter::with_step("Ünïcode", 0.0, 10.0);
    assert_eq!(text(w.poll(35.0)).as_deref(), Some("Ünïc"));
    assert_eq!(text(w.poll(1000.0)).as_deref(), Some("Ünïcode"));
}

#[test]
fn caret_goes_after_the_linger() {
    let mut w = Typewriter::with_step("Hi", 0.0, 100.0);
    w.poll(100.0);
    let typed_at = 100.0;
    assert_eq!(w.poll(typed_at + TYPE_CARET_LINGER_MS - 1.0), None);
    assert_eq!(
        w.poll(typed_at + TYPE_CARET_LINGER_MS),
        Some(TypeUpdate::CaretDone)
    );
    assert!(w.is_finished());
    assert_eq!(w.poll(1e9), None);
}

#[test]
fn empty_title_only_drops_the_caret() {
    let mut w = Typewriter::with_step("", 0.0, 100.0);
    assert_eq!(w.poll(0.0), None);
    assert_eq!(w.poll(TYPE_CARET_LINGER_MS), Some(TypeUpdate::CaretDone));
}

#[test]
fn later_shapes_drift_faster() {
    let first = shape_parallax(100.0, 0);
    let third = shape_parallax(100.0, 2);
    assert!((first.translate_y - 30.0).abs() < 1e-9);
    assert!((third.translate_y - 50.0).abs() < 1e-9);
    assert_eq!(first.rotate_deg, third.rotate_deg);
    assert_eq!(first.transform_css(), "translateY(30.0px) rotate(10.0deg)");
    assert_eq!(shape_parallax(0.0, 5).translate_y, 0.0);
}

#[test]
fn background_moves_against_the_scroll() {
    assert_eq!(background_parallax(200.0), -100.0);
    assert_eq!(background_parallax(0.0), 0.0);
}
