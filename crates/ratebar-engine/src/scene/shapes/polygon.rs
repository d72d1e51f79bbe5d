use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Closed polygon draw payload (non-zero fill rule).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
}

impl DrawList {
    /// Records a filled polygon. Fewer than three points draw nothing and are dropped.
    pub fn push_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, paint: Paint) {
        if points.len() < 3 {
            log::debug!("push_polygon: {} point(s), skipped", points.len());
            return;
        }
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, paint }));
    }
}
