// File: crates/gantt-core/src/types.rs
// Summary: Shared constants (chart size defaults, colors, service endpoint).

/// Default chart width in pixels.
pub const WIDTH: u32 = 600;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 200;

/// Endpoint of the image chart service.
pub const GOOGLE_CHARTS_API_URL: &str = "https://chart.googleapis.com/chart";

/// Default bar color, RGBA. A kind of nice blue.
pub const DEFAULT_COLOR: &str = "4D89F9FF";

/// Color of the offset series that pushes each bar to its start day.
pub const TRANSPARENT: &str = "FFFFFF00";

/// Horizontal pixels reserved per visible day label.
pub const LABEL_SPACING_PX: f64 = 80.0;

/// Vertical pixels taken by title and axis, not available to bars.
pub const BAR_AREA_PADDING_PX: f64 = 50.0;

/// Gap between bars, in pixels.
pub const BAR_SPACING_PX: i64 = 4;
