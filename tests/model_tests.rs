// Host-side tests for the marker data model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod model {
    include!("../src/model.rs");
}

use glam::Vec2;
use model::*;

#[test]
fn defaults_per_kind() {
    assert_eq!(MarkerKind::Performer.default_size(), Vec2::splat(60.0));
    assert_eq!(MarkerKind::Microphone.default_size(), Vec2::splat(60.0));
    assert_eq!(MarkerKind::LabeledBox.default_size(), Vec2::new(90.0, 75.0));
    assert_eq!(MarkerKind::FreeText.default_size(), Vec2::new(110.0, 30.0));

    assert_eq!(MarkerKind::LabeledBox.default_font_px(), 14.0);
    assert_eq!(MarkerKind::FreeText.default_font_px(), 15.0);

    assert_eq!(MarkerKind::LabeledBox.default_text(), "");
    assert_eq!(MarkerKind::FreeText.default_text(), "TEXT");
}

#[test]
fn kind_classification() {
    assert!(MarkerKind::Performer.is_proportional());
    assert!(MarkerKind::Microphone.is_proportional());
    assert!(!MarkerKind::LabeledBox.is_proportional());
    assert!(!MarkerKind::FreeText.is_proportional());

    assert!(MarkerKind::LabeledBox.is_textual());
    assert!(MarkerKind::FreeText.is_textual());
    assert!(!MarkerKind::Performer.is_textual());
}

#[test]
fn new_marker_is_centered() {
    let m = Marker::new(MarkerKind::Performer, Vec2::new(200.0, 150.0));
    assert_eq!(m.center(), Vec2::new(200.0, 150.0));
    assert_eq!(m.pos, Vec2::new(170.0, 120.0));
    assert_eq!(m.rotation_deg, 0.0);
}

#[test]
fn rotation_wraps_into_0_360() {
    let mut m = Marker::new(MarkerKind::LabeledBox, Vec2::ZERO);
    m.set_rotation(45.0);
    assert_eq!(m.rotation_deg, 45.0);
    m.set_rotation(360.0);
    assert_eq!(m.rotation_deg, 0.0);
    m.set_rotation(450.0);
    assert_eq!(m.rotation_deg, 90.0);
    m.set_rotation(-45.0);
    assert_eq!(m.rotation_deg, 315.0);
}

#[test]
fn insert_selects_the_new_marker() {
    let mut store = MarkerStore::default();
    let a = store.insert(Marker::new(MarkerKind::Performer, Vec2::ZERO));
    assert_eq!(store.selected(), Some(a));
    let b = store.insert(Marker::new(MarkerKind::Microphone, Vec2::ZERO));
    // exclusive: the newer marker replaces the previous selection
    assert_eq!(store.selected(), Some(b));
    assert_eq!(store.len(), 2);
}

#[test]
fn selection_is_exclusive_and_validated() {
    let mut store = MarkerStore::default();
    let a = store.insert(Marker::new(MarkerKind::Performer, Vec2::ZERO));
    let b = store.insert(Marker::new(MarkerKind::FreeText, Vec2::ZERO));

    store.select(Some(a));
    assert_eq!(store.selected(), Some(a));
    store.select(Some(b));
    assert_eq!(store.selected(), Some(b));
    store.select(None);
    assert_eq!(store.selected(), None);

    // selecting an id that is not in the store is a no-op selection
    store.select(Some(9999));
    assert_eq!(store.selected(), None);
}

#[test]
fn remove_clears_selection_only_for_the_removed_marker() {
    let mut store = MarkerStore::default();
    let a = store.insert(Marker::new(MarkerKind::Performer, Vec2::ZERO));
    let b = store.insert(Marker::new(MarkerKind::LabeledBox, Vec2::ZERO));

    assert!(store.remove(a).is_some());
    // b was selected; removing a must not disturb it
    assert_eq!(store.selected(), Some(b));

    assert!(store.remove(b).is_some());
    assert_eq!(store.selected(), None);
    assert!(store.is_empty());
    assert!(store.remove(b).is_none());
}

#[test]
fn creation_order_survives_deletion() {
    let mut store = MarkerStore::default();
    let a = store.insert(Marker::new(MarkerKind::Performer, Vec2::ZERO));
    let b = store.insert(Marker::new(MarkerKind::Microphone, Vec2::ZERO));
    let c = store.insert(Marker::new(MarkerKind::FreeText, Vec2::ZERO));

    store.remove(b);
    let order: Vec<MarkerId> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![a, c]);

    // ids are never reused
    let d = store.insert(Marker::new(MarkerKind::LabeledBox, Vec2::ZERO));
    assert!(d > c);
}

#[test]
fn selected_marker_mut_edits_only_the_selection() {
    let mut store = MarkerStore::default();
    let a = store.insert(Marker::new(MarkerKind::LabeledBox, Vec2::ZERO));
    store.insert(Marker::new(MarkerKind::LabeledBox, Vec2::ZERO));
    store.select(Some(a));

    if let Some(m) = store.selected_marker_mut() {
        m.text = "Drums\nKick".to_string();
        m.font_px = 20.0;
    }
    assert_eq!(store.get(a).unwrap().text, "Drums\nKick");
    assert_eq!(store.get(a).unwrap().font_px, 20.0);

    store.select(None);
    assert!(store.selected_marker_mut().is_none());
}
