//! Maps pointer coordinates on a display surface into playfield coordinates.
//!
//! Front-ends hand pointer events to `GameLoopHandle::pointer` together with
//! the surface rectangle the playfield is drawn into.

use nova_core::config::Rules;
use nova_core::constants::{GAME_HEIGHT, GAME_WIDTH};
use nova_core::geometry::Point;

/// Screen rectangle the playfield is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    world_width: f64,
    world_height: f64,
}

impl Viewport {
    /// A surface showing the default 800x600 playfield.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            world_width: GAME_WIDTH,
            world_height: GAME_HEIGHT,
        }
    }

    /// Use the playfield size from `rules` instead of the default.
    pub fn with_rules(self, rules: &Rules) -> Self {
        Self {
            world_width: rules.width,
            world_height: rules.height,
            ..self
        }
    }

    /// Convert a client-space pointer position into playfield coordinates.
    ///
    /// Points outside the surface map outside the playfield. Returns `None`
    /// for a surface with no area.
    pub fn to_world(&self, client_x: f64, client_y: f64) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let scale_x = self.world_width / self.width;
        let scale_y = self.world_height / self.height;
        Some(Point::new(
            (client_x - self.left) * scale_x,
            (client_y - self.top) * scale_y,
        ))
    }
}
