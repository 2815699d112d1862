use crate::constants::*;
use glam::Vec2;

pub type MarkerId = u64;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarkerKind {
    Performer,
    Microphone,
    LabeledBox,
    FreeText,
}

impl MarkerKind {
    /// Icon kinds resize uniformly from a single SE handle.
    #[inline]
    pub fn is_proportional(self) -> bool {
        matches!(self, MarkerKind::Performer | MarkerKind::Microphone)
    }

    /// Kinds that carry editable text content and a font size.
    #[inline]
    pub fn is_textual(self) -> bool {
        matches!(self, MarkerKind::LabeledBox | MarkerKind::FreeText)
    }

    pub fn default_size(self) -> Vec2 {
        match self {
            MarkerKind::Performer | MarkerKind::Microphone => Vec2::splat(ICON_DEFAULT_SIZE),
            MarkerKind::LabeledBox => Vec2::new(BOX_DEFAULT_WIDTH, BOX_DEFAULT_HEIGHT),
            MarkerKind::FreeText => Vec2::new(TEXT_DEFAULT_WIDTH, TEXT_DEFAULT_HEIGHT),
        }
    }

    pub fn default_font_px(self) -> f32 {
        match self {
            MarkerKind::FreeText => TEXT_DEFAULT_FONT_PX,
            _ => BOX_DEFAULT_FONT_PX,
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            MarkerKind::FreeText => "TEXT",
            _ => "",
        }
    }
}

/// One placed element: position/size in logical (unscaled) canvas units.
#[derive(Clone, Debug)]
pub struct Marker {
    pub kind: MarkerKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation_deg: f32,
    pub text: String,
    pub font_px: f32,
}

impl Marker {
    /// New marker whose center sits at `center`, with per-kind defaults.
    pub fn new(kind: MarkerKind, center: Vec2) -> Self {
        let size = kind.default_size();
        Self {
            kind,
            pos: center - size * 0.5,
            size,
            rotation_deg: 0.0,
            text: kind.default_text().to_string(),
            font_px: kind.default_font_px(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Rotation wraps into [0, 360).
    pub fn set_rotation(&mut self, deg: f32) {
        self.rotation_deg = deg.rem_euclid(360.0);
    }
}

/// Markers in creation order (which is also stacking and export order),
/// with at most one selected at a time.
#[derive(Default)]
pub struct MarkerStore {
    markers: Vec<(MarkerId, Marker)>,
    next_id: MarkerId,
    selected: Option<MarkerId>,
}

impl MarkerStore {
    /// Appends and selects the new marker.
    pub fn insert(&mut self, marker: Marker) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.push((id, marker));
        self.selected = Some(id);
        id
    }

    /// Removes a marker; clears the selection if it was the selected one.
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let idx = self.markers.iter().position(|(mid, _)| *mid == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.markers.remove(idx).1)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, m)| m)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers
            .iter_mut()
            .find(|(mid, _)| *mid == id)
            .map(|(_, m)| m)
    }

    /// Exclusive: selecting replaces any previous selection.
    pub fn select(&mut self, id: Option<MarkerId>) {
        self.selected = id.filter(|id| self.get(*id).is_some());
    }

    #[inline]
    pub fn selected(&self) -> Option<MarkerId> {
        self.selected
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_marker_mut(&mut self) -> Option<&mut Marker> {
        self.selected.and_then(|id| self.get_mut(id))
    }

    /// Creation-order iteration.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.markers.iter().map(|(id, m)| (*id, m))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
