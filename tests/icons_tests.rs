// Host-side tests for the scalable icon descriptions used by the DOM layer
// and the exporter. The main crate is wasm-only, so we include the
// pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod model {
    include!("../src/model.rs");
}
mod icons {
    include!("../src/icons.rs");
}

use icons::*;
use model::MarkerKind;

#[test]
fn only_proportional_kinds_have_icons() {
    assert!(icon_body(MarkerKind::Performer, "#000").is_some());
    assert!(icon_body(MarkerKind::Microphone, "#000").is_some());
    assert!(icon_body(MarkerKind::LabeledBox, "#000").is_none());
    assert!(icon_body(MarkerKind::FreeText, "#000").is_none());
}

#[test]
fn icon_geometry_matches_the_stage_symbols() {
    let performer = icon_body(MarkerKind::Performer, "#000").unwrap();
    assert!(performer.contains(r#"r="30""#));

    let mic = icon_body(MarkerKind::Microphone, "#000").unwrap();
    assert!(mic.contains(r#"r="25""#));
    assert!(mic.contains("M50 100 L50 0"));
    assert!(mic.contains("stroke-linecap=\"round\""));
}

#[test]
fn icons_recolor_to_the_requested_stroke() {
    let body = icon_body(MarkerKind::Performer, "#123456").unwrap();
    assert!(body.contains(r##"stroke="#123456""##));
    assert!(!body.contains("stroke=\"black\""));
}

#[test]
fn standalone_svg_is_sized_and_namespaced() {
    let svg = icon_svg(MarkerKind::Microphone, 180.0, 180.0, "#000000").unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"width="180""#));
    assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    assert!(svg.ends_with("</svg>"));

    assert!(icon_svg(MarkerKind::FreeText, 10.0, 10.0, "#000000").is_none());
}
