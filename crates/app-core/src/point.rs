//! Per-point animation and interaction state machine.

use glam::Vec2;

use crate::constants::{
    BASE_RADIUS, CLICK_COLOR, CLICK_RADIUS, CLICK_RESET_MS, HOVER_COLOR, HOVER_RADIUS,
    HOVER_TOLERANCE, NORMAL_COLOR, RADIUS_TRACK_STEP, REVEAL_GROWTH_STEP,
};

/// Interaction state of a plotted point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointState {
    Normal,
    Hovered,
    Clicked,
}

impl PointState {
    /// Fill color for the state.
    pub fn color(self) -> &'static str {
        match self {
            PointState::Normal => NORMAL_COLOR,
            PointState::Hovered => HOVER_COLOR,
            PointState::Clicked => CLICK_COLOR,
        }
    }
}

/// One measurement point pinned to its pixel position.
///
/// Created with radius zero and a pending reveal growth toward the base
/// radius; afterwards the radius tracks whatever target the interaction state
/// dictates. A click schedules a fall back to `Normal`; the deadline lives on
/// the point so a later click replaces it instead of racing it.
#[derive(Clone, Debug)]
pub struct Point {
    pub id: u32,
    pub pos: Vec2,
    pub state: PointState,
    pub current_radius: f32,
    pub current_target_radius: f32,
    revealing: bool,
    reset_at: Option<f64>,
}

impl Point {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            state: PointState::Normal,
            current_radius: 0.0,
            current_target_radius: BASE_RADIUS,
            revealing: true,
            reset_at: None,
        }
    }

    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset_at.is_some()
    }

    /// One frame of the stagger-in growth toward the base radius.
    ///
    /// Independent of interaction tracking; only runs during the initial
    /// reveal and ends exactly at the base radius.
    pub fn grow_in(&mut self) {
        if !self.revealing {
            return;
        }
        self.current_radius += REVEAL_GROWTH_STEP;
        if self.current_radius >= BASE_RADIUS {
            self.current_radius = BASE_RADIUS;
            self.revealing = false;
        }
    }

    /// Move `current_radius` one step toward the interaction target,
    /// clamping on overshoot in either direction.
    pub fn track_radius(&mut self) {
        if self.current_radius < self.current_target_radius {
            self.current_radius =
                (self.current_radius + RADIUS_TRACK_STEP).min(self.current_target_radius);
        } else if self.current_radius > self.current_target_radius {
            self.current_radius =
                (self.current_radius - RADIUS_TRACK_STEP).max(self.current_target_radius);
        }
    }

    /// Re-evaluate hover against the live cursor. Clicked points are immune
    /// until their reset fires.
    pub fn update_hover(&mut self, cursor: Vec2) {
        if self.state == PointState::Clicked {
            return;
        }
        let threshold = self.current_target_radius + HOVER_TOLERANCE;
        let within = self.pos.distance_squared(cursor) <= threshold * threshold;
        if within {
            if self.state != PointState::Hovered {
                self.state = PointState::Hovered;
                self.current_target_radius = HOVER_RADIUS;
            }
        } else if self.state == PointState::Hovered {
            self.state = PointState::Normal;
            self.current_target_radius = BASE_RADIUS;
        }
    }

    /// Click hit-test against the current target radius.
    pub fn hit(&self, p: Vec2) -> bool {
        let r = self.current_target_radius;
        self.pos.distance_squared(p) <= r * r
    }

    /// Enter the clicked state and (re)schedule the fall back to normal.
    /// A later press replaces any pending deadline.
    pub fn press(&mut self, now_ms: f64) {
        self.state = PointState::Clicked;
        self.current_target_radius = CLICK_RADIUS;
        self.reset_at = Some(now_ms + CLICK_RESET_MS);
    }

    /// Fire the pending reset once its deadline has passed.
    /// Returns whether the state changed.
    pub fn expire_reset(&mut self, now_ms: f64) -> bool {
        match self.reset_at {
            Some(deadline) if now_ms >= deadline => {
                self.reset_at = None;
                self.state = PointState::Normal;
                self.current_target_radius = BASE_RADIUS;
                true
            }
            _ => false,
        }
    }

    /// Force a non-clicked point back to rest (pointer leaving the canvas).
    pub fn clear_hover(&mut self) {
        if self.state == PointState::Clicked {
            return;
        }
        self.state = PointState::Normal;
        self.current_target_radius = BASE_RADIUS;
    }

    /// A settled point needs no further frames.
    pub fn is_settled(&self) -> bool {
        !self.revealing
            && self.state == PointState::Normal
            && self.reset_at.is_none()
            && self.current_radius == self.current_target_radius
    }
}
