use crate::model::MarkerKind;

/// Inner SVG markup for the proportional icon kinds, in a 0-100 viewBox,
/// stroked with `color`. `None` for kinds rendered as text/boxes.
pub fn icon_body(kind: MarkerKind, color: &str) -> Option<String> {
    match kind {
        MarkerKind::Performer => Some(format!(
            r#"<circle cx="50" cy="50" r="30" fill="none" stroke="{color}" stroke-width="4"/>"#
        )),
        MarkerKind::Microphone => Some(format!(
            r#"<circle cx="50" cy="50" r="25" fill="none" stroke="{color}" stroke-width="4"/><path d="M50 100 L50 0 M42 12 L50 0 L58 12" fill="none" stroke="{color}" stroke-width="4" stroke-linecap="round"/>"#
        )),
        MarkerKind::LabeledBox | MarkerKind::FreeText => None,
    }
}

/// Standalone SVG document at the given pixel size. Used by the exporter,
/// which rasterizes it through a data-URL image.
pub fn icon_svg(kind: MarkerKind, width: f32, height: f32, color: &str) -> Option<String> {
    icon_body(kind, color).map(|body| {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 100 100">{body}</svg>"#
        )
    })
}
