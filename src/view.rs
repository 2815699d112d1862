use crate::constants::{WHEEL_ZOOM_SENSITIVITY, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use glam::Vec2;

/// Global canvas scale factor. The 2D scroll offset lives on the viewport
/// element; pan math below treats it as a plain vector.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub scale: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ViewState {
    pub fn set_zoom(&mut self, zoom: f32) {
        self.scale = clamp_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.scale - ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
    }
}

#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Ctrl+wheel mapping: negated vertical delta at fixed sensitivity, no
/// momentum or smoothing.
#[inline]
pub fn wheel_zoom(current: f32, delta_y: f64) -> f32 {
    clamp_zoom(current - delta_y as f32 * WHEEL_ZOOM_SENSITIVITY)
}

/// Viewport scroll while panning: recorded scroll minus the pointer delta.
#[inline]
pub fn pan_scroll(start_scroll: Vec2, pointer_delta: Vec2) -> Vec2 {
    start_scroll - pointer_delta
}
