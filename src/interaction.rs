use crate::constants::MIN_MARKER_SIZE;
use crate::model::{MarkerId, MarkerKind};
use glam::Vec2;

/// Compass tag of a resize handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResizeDir {
    N,
    S,
    E,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

impl ResizeDir {
    pub fn css_class(self) -> &'static str {
        match self {
            ResizeDir::N => "n",
            ResizeDir::S => "s",
            ResizeDir::E => "e",
            ResizeDir::W => "w",
            ResizeDir::Nw => "nw",
            ResizeDir::Ne => "ne",
            ResizeDir::Sw => "sw",
            ResizeDir::Se => "se",
        }
    }

    #[inline]
    fn north(self) -> bool {
        matches!(self, ResizeDir::N | ResizeDir::Nw | ResizeDir::Ne)
    }
    #[inline]
    fn south(self) -> bool {
        matches!(self, ResizeDir::S | ResizeDir::Sw | ResizeDir::Se)
    }
    #[inline]
    fn east(self) -> bool {
        matches!(self, ResizeDir::E | ResizeDir::Ne | ResizeDir::Se)
    }
    #[inline]
    fn west(self) -> bool {
        matches!(self, ResizeDir::W | ResizeDir::Nw | ResizeDir::Sw)
    }
}

/// Handles a marker kind exposes: a lone SE handle for proportional icons,
/// all eight compass points for free-form kinds.
pub fn handle_dirs(kind: MarkerKind) -> &'static [ResizeDir] {
    if kind.is_proportional() {
        &[ResizeDir::Se]
    } else {
        &[
            ResizeDir::Nw,
            ResizeDir::Ne,
            ResizeDir::Sw,
            ResizeDir::Se,
            ResizeDir::N,
            ResizeDir::S,
            ResizeDir::E,
            ResizeDir::W,
        ]
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Mutually exclusive pointer-session modes. Whichever mode a pointerdown
/// enters wins for that session; any pointerup returns to `Idle`.
#[derive(Clone, Copy, Debug, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// `grab` is the pointer-to-marker-origin offset in logical space.
    Dragging { id: MarkerId, grab: Vec2 },
    /// `start` is the marker rect at pointerdown; `origin` the raw screen
    /// position, so each move resizes from the starting rect.
    Resizing {
        id: MarkerId,
        dir: ResizeDir,
        start: Rect,
        origin: Vec2,
    },
    /// `scroll` is the viewport scroll offset at pointerdown.
    Panning { origin: Vec2, scroll: Vec2 },
}

/// Screen-space client coordinates to logical canvas coordinates.
///
/// Everywhere a pointer delta becomes a logical delta must divide by the
/// scale factor, or movement runs faster/slower than the cursor away from
/// scale 1.0.
#[inline]
pub fn to_logical(client: Vec2, canvas_origin: Vec2, scale: f32) -> Vec2 {
    (client - canvas_origin) / scale
}

#[inline]
pub fn drag_position(pointer_logical: Vec2, grab: Vec2) -> Vec2 {
    pointer_logical - grab
}

/// New rect for a resize, computed from the starting rect and the logical
/// pointer delta. Per-variant policy; dimensions never drop below the floor.
pub fn resize(kind: MarkerKind, start: Rect, dir: ResizeDir, delta: Vec2) -> Rect {
    if kind.is_proportional() {
        resize_proportional(start, delta)
    } else {
        resize_free(start, dir, delta)
    }
}

/// Uniform scale from the horizontal delta; aspect ratio always preserved.
fn resize_proportional(start: Rect, delta: Vec2) -> Rect {
    let factor = 1.0 + delta.x / start.size.x;
    let side = (start.size.x * factor).max(MIN_MARKER_SIZE);
    Rect {
        pos: start.pos,
        size: Vec2::splat(side),
    }
}

/// Each compass component adjusts its dimension independently; N/W also
/// shift the position so the opposite edge stays fixed. When a dimension
/// hits the floor the position shift is suppressed so the marker does not
/// jump.
fn resize_free(start: Rect, dir: ResizeDir, delta: Vec2) -> Rect {
    let mut rect = start;
    if dir.east() {
        rect.size.x = (start.size.x + delta.x).max(MIN_MARKER_SIZE);
    }
    if dir.south() {
        rect.size.y = (start.size.y + delta.y).max(MIN_MARKER_SIZE);
    }
    if dir.west() {
        let width = start.size.x - delta.x;
        if width > MIN_MARKER_SIZE {
            rect.size.x = width;
            rect.pos.x = start.pos.x + delta.x;
        } else {
            rect.size.x = MIN_MARKER_SIZE;
        }
    }
    if dir.north() {
        let height = start.size.y - delta.y;
        if height > MIN_MARKER_SIZE {
            rect.size.y = height;
            rect.pos.y = start.pos.y + delta.y;
        } else {
            rect.size.y = MIN_MARKER_SIZE;
        }
    }
    rect
}
