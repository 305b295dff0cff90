//! Canvas-space geometry for the half-circle layout.
//!
//! All placement derives from a [`Viewport`] computed once per canvas size.
//! Angles follow the range-map convention: 0° is the rightmost point of an
//! arc, 180° the leftmost, 90° the apex directly above the center.

use glam::Vec2;

use crate::constants::{BASELINE_MARGIN, RADIUS_STEP};

/// Fixed frame of reference for the half-circle: arc center on the baseline.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub center_x: f32,
    pub baseline_y: f32,
    pub radius_step: f32,
}

impl Viewport {
    /// Derive the viewport from the canvas backing size.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            center_x: width / 2.0,
            baseline_y: height - BASELINE_MARGIN,
            radius_step: RADIUS_STEP,
        }
    }

    /// Pixel radius of the arc for distance bucket `index` (0-based).
    pub fn arc_radius(&self, index: usize) -> f32 {
        self.radius_step * (index as f32 + 1.0)
    }

    /// Point at `radius` pixels from the center, `angle_deg` along the half-circle.
    pub fn radial(&self, radius: f32, angle_deg: f32) -> Vec2 {
        let phi = std::f32::consts::PI - angle_deg.to_radians();
        Vec2::new(
            self.center_x + radius * phi.cos(),
            self.baseline_y - radius * phi.sin(),
        )
    }

    /// Map a (distance bucket, angle in degrees) pair to pixel coordinates.
    pub fn place(&self, index: usize, angle_deg: f32) -> Vec2 {
        self.radial(self.arc_radius(index), angle_deg)
    }
}

/// Index of `distance` in the bucket set, if present.
///
/// Buckets are matched exactly; a record whose distance is missing cannot be
/// placed on any arc and must be rejected by the caller.
pub fn bucket_index(distances: &[f64], distance: f64) -> Option<usize> {
    distances.iter().position(|d| *d == distance)
}
