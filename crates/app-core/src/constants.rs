// Shared layout and animation tuning constants for the half-circle range map.

// Scene layout
pub const RADIUS_STEP: f32 = 40.0; // pixel spacing between concentric arcs
pub const BASELINE_MARGIN: f32 = 10.0; // gap between the arc baseline and the canvas bottom

// Point sizing
pub const BASE_RADIUS: f32 = 5.0; // resting point size
pub const HOVER_RADIUS: f32 = 8.0;
pub const CLICK_RADIUS: f32 = 10.0;

// Animation
pub const REVEAL_GROWTH_STEP: f32 = 0.05; // px per frame while a point grows in
pub const RADIUS_TRACK_STEP: f32 = 0.2; // px per frame toward the interaction target
pub const REVEAL_INTERVAL_MS: f64 = 200.0; // stagger between consecutive point entrances
pub const CLICK_RESET_MS: f64 = 300.0; // clicked points fall back to normal after this

// Interaction
pub const HOVER_TOLERANCE: f32 = 5.0; // pick slack around the target radius

// Point colors per interaction state
pub const NORMAL_COLOR: &str = "red";
pub const HOVER_COLOR: &str = "orange";
pub const CLICK_COLOR: &str = "green";

// Guide styling
pub const ARC_PALETTE: [&str; 5] = ["#FF5733", "#33FF57", "#3357FF", "#F1C40F", "#9B59B6"];
pub const ARC_LINE_WIDTH: f32 = 2.0;
pub const GUIDE_COLOR: &str = "#000";
pub const DEGREE_MARKS: [u32; 5] = [0, 45, 90, 135, 180];
pub const MARKER_GAP: f32 = 20.0; // tick start, measured out from the outermost arc
pub const MARKER_LEN: f32 = 10.0;
pub const MARKER_LABEL_GAP: f32 = 35.0; // degree label distance out from the outermost arc
pub const MARKER_FONT: &str = "12px Arial";

// Legend layout
pub const LEGEND_GAP: f32 = 40.0; // space right of the outermost arc
pub const LEGEND_BOX: f32 = 20.0; // color swatch side length
pub const LEGEND_TEXT_GAP: f32 = 8.0;
pub const LEGEND_ROW_GAP: f32 = 10.0;
pub const LEGEND_PADDING: f32 = 10.0;
pub const LEGEND_WIDTH: f32 = 120.0; // border box width, swatch plus label column
pub const LEGEND_FONT: &str = "14px Arial";
