/// Geometry and interaction tuning constants.
///
/// These express intended behavior (floors, clamp limits, default sizes)
/// and keep magic numbers out of the code.
// Minimum marker dimension in logical units; every resize floors here
pub const MIN_MARKER_SIZE: f32 = 20.0;

// Zoom limits and controls
pub const ZOOM_MIN: f32 = 0.2;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.05;
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.01; // per negated deltaY unit

// Logical stage dimensions; the export raster is STAGE * EXPORT_SCALE pixels
pub const STAGE_WIDTH: f32 = 1600.0;
pub const STAGE_HEIGHT: f32 = 1200.0;
pub const EXPORT_SCALE: f32 = 3.0;

// Default marker geometry (logical units)
pub const ICON_DEFAULT_SIZE: f32 = 60.0;
pub const BOX_DEFAULT_WIDTH: f32 = 90.0;
pub const BOX_DEFAULT_HEIGHT: f32 = 75.0;
pub const TEXT_DEFAULT_WIDTH: f32 = 110.0;
pub const TEXT_DEFAULT_HEIGHT: f32 = 30.0;

// Default typography (CSS pixels at scale 1.0)
pub const BOX_DEFAULT_FONT_PX: f32 = 14.0;
pub const TEXT_DEFAULT_FONT_PX: f32 = 15.0;
pub const TEXT_LINE_HEIGHT: f32 = 1.2;

// Export rendering
pub const MARKER_COLOR: &str = "#000000";
pub const BOX_STROKE_WIDTH: f32 = 2.0;
pub const BACKGROUND_SRC: &str = "assets/stage-template.png";

pub const EXPORT_FAILURE_MESSAGE: &str = "Export failed: the background template or a marker icon \
could not be loaded. If this page was opened from a local file, browser security rules block \
image loading during export - serve the page over a web server and try again.";
