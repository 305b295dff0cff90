//! Scene controller for the range map.
//!
//! Owns every piece of mutable visualization state: the point list, the
//! distance buckets, the staggered-reveal progress, and the live cursor
//! sentinel. The driver supplies the clock (`now_ms`, milliseconds since the
//! scene was created) and the drawing surface, so ticks are replayable and
//! the render path runs headlessly in tests.
//!
//! Interaction entry points report whether they perturbed the scene; the
//! driver uses that to re-arm its frame loop after [`Scene::is_idle`] let it
//! go to sleep.

use glam::Vec2;

use crate::constants::{
    ARC_LINE_WIDTH, ARC_PALETTE, DEGREE_MARKS, GUIDE_COLOR, LEGEND_BOX, LEGEND_FONT, LEGEND_GAP,
    LEGEND_PADDING, LEGEND_ROW_GAP, LEGEND_TEXT_GAP, LEGEND_WIDTH, MARKER_FONT, MARKER_GAP,
    MARKER_LABEL_GAP, MARKER_LEN, REVEAL_INTERVAL_MS,
};
use crate::geometry::{bucket_index, Viewport};
use crate::point::Point;
use crate::snapshot::PointsSnapshot;
use crate::surface::{Surface, TextAlign};

/// Snapshot could not be turned into a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("snapshot has no distance buckets")]
    NoDistances,
}

pub struct Scene {
    viewport: Viewport,
    distances: Vec<f64>,
    points: Vec<Point>,
    cursor: Option<Vec2>,
    revealed: usize,
}

impl Scene {
    /// Build the scene from a dataset snapshot.
    ///
    /// A record whose distance is missing from the bucket set has no arc to
    /// sit on; it is dropped with a warning rather than drawn at an undefined
    /// radius.
    pub fn from_snapshot(snapshot: &PointsSnapshot, viewport: Viewport) -> Result<Self, SceneError> {
        if snapshot.distances.is_empty() {
            return Err(SceneError::NoDistances);
        }
        let mut points = Vec::with_capacity(snapshot.points.len());
        for rec in &snapshot.points {
            let Some(index) = bucket_index(&snapshot.distances, rec.distance) else {
                log::warn!(
                    "dropping point {}: distance {} not in bucket set",
                    rec.point_id,
                    rec.distance
                );
                continue;
            };
            points.push(Point::new(rec.point_id, viewport.place(index, rec.angle as f32)));
        }
        Ok(Self {
            viewport,
            distances: snapshot.distances.clone(),
            points,
            cursor: None,
            revealed: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Points that have entered so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Advance one animation frame.
    ///
    /// The reveal counter admits the first point immediately and one more per
    /// interval: `min(n, floor(now_ms / interval) + 1)`, never decreasing.
    /// Only revealed points animate.
    pub fn tick(&mut self, now_ms: f64) {
        let due = (now_ms / REVEAL_INTERVAL_MS).floor() as usize + 1;
        self.revealed = self.revealed.max(due.min(self.points.len()));
        for p in &mut self.points[..self.revealed] {
            p.expire_reset(now_ms);
            p.grow_in();
            p.track_radius();
        }
    }

    /// True once the reveal is complete and every point rests settled in its
    /// normal state. The driver stops scheduling frames at that moment.
    pub fn is_idle(&self) -> bool {
        self.revealed == self.points.len() && self.points.iter().all(Point::is_settled)
    }

    /// Track the pointer and re-evaluate hover for every point.
    /// Returns whether any point changed state.
    pub fn pointer_moved(&mut self, pos: Vec2) -> bool {
        self.cursor = Some(pos);
        let mut perturbed = false;
        for p in &mut self.points {
            let before = (p.state, p.current_target_radius);
            p.update_hover(pos);
            perturbed |= before != (p.state, p.current_target_radius);
        }
        perturbed
    }

    /// Pointer left the canvas: clear the sentinel and drop every non-clicked
    /// point back to rest. Returns whether any point changed state.
    pub fn pointer_left(&mut self) -> bool {
        self.cursor = None;
        let mut perturbed = false;
        for p in &mut self.points {
            let before = (p.state, p.current_target_radius);
            p.clear_hover();
            perturbed |= before != (p.state, p.current_target_radius);
        }
        perturbed
    }

    /// Dispatch a click: scan in dataset order, act on the first point whose
    /// target-radius circle contains `pos`, and return its id. Later points
    /// are not considered even if geometrically closer.
    pub fn click(&mut self, pos: Vec2, now_ms: f64) -> Option<u32> {
        for p in &mut self.points {
            if p.hit(pos) {
                p.press(now_ms);
                return Some(p.id);
            }
        }
        None
    }

    /// Redraw the full scene: guides first, then every revealed point.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        self.draw_arcs(surface);
        self.draw_degree_markers(surface);
        self.draw_legend(surface);
        for p in &self.points[..self.revealed] {
            surface.fill_circle(p.pos, p.current_radius, p.state.color());
        }
    }

    fn draw_arcs(&self, surface: &mut dyn Surface) {
        let center = Vec2::new(self.viewport.center_x, self.viewport.baseline_y);
        for i in 0..self.distances.len() {
            let color = ARC_PALETTE[i % ARC_PALETTE.len()];
            surface.stroke_upper_arc(center, self.viewport.arc_radius(i), color, ARC_LINE_WIDTH);
        }
    }

    fn draw_degree_markers(&self, surface: &mut dyn Surface) {
        let outer = self.viewport.arc_radius(self.distances.len() - 1);
        for &deg in DEGREE_MARKS.iter() {
            let angle = deg as f32;
            let from = self.viewport.radial(outer + MARKER_GAP, angle);
            let to = self.viewport.radial(outer + MARKER_GAP + MARKER_LEN, angle);
            surface.line(from, to, GUIDE_COLOR, 1.0);
            let label_at = self.viewport.radial(outer + MARKER_LABEL_GAP, angle);
            surface.fill_text(
                &format!("{deg}°"),
                label_at,
                MARKER_FONT,
                GUIDE_COLOR,
                TextAlign::Center,
            );
        }
    }

    fn draw_legend(&self, surface: &mut dyn Surface) {
        let outer = self.viewport.arc_radius(self.distances.len() - 1);
        let x = self.viewport.center_x + outer + LEGEND_GAP;
        let top = self.viewport.baseline_y - outer;
        let mut y = top;
        for (i, dist) in self.distances.iter().enumerate() {
            let color = ARC_PALETTE[i % ARC_PALETTE.len()];
            surface.fill_rect(Vec2::new(x, y), Vec2::splat(LEGEND_BOX), color);
            surface.fill_text(
                &format!("{dist} cm"),
                Vec2::new(x + LEGEND_BOX + LEGEND_TEXT_GAP, y + LEGEND_BOX / 2.0),
                LEGEND_FONT,
                GUIDE_COLOR,
                TextAlign::Left,
            );
            y += LEGEND_BOX + LEGEND_ROW_GAP;
        }
        let rows = self.distances.len() as f32;
        let height = rows * (LEGEND_BOX + LEGEND_ROW_GAP) - LEGEND_ROW_GAP;
        surface.stroke_rect(
            Vec2::new(x - LEGEND_PADDING, top - LEGEND_PADDING),
            Vec2::new(LEGEND_WIDTH, height + LEGEND_PADDING * 2.0),
            GUIDE_COLOR,
            1.0,
        );
    }
}
