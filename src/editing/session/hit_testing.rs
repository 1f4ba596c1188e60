// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing and hover for EditSession

use super::EditSession;
use crate::canvas::Canvas;
use crate::editing::handles::HandleKey;
use crate::model::EntityId;
use crate::path::SpacePoint;
use kurbo::Point;

impl<C: Canvas> EditSession<C> {
    /// Find the handle under a canvas position
    ///
    /// Visible control handles are checked before anchors since they are
    /// drawn on top. Within each group the nearest handle inside
    /// `hit_tolerance` wins.
    pub fn handle_at(&self, pos: Point) -> Option<HandleKey> {
        let path = self.path.as_ref()?;
        let tolerance = self.config.hit_tolerance;

        let mut best_control: Option<(f64, HandleKey)> = None;
        for key in self.handles.visible_controls() {
            let HandleKey::Control(id, side) = key else {
                continue;
            };
            let Some(cp) = path.world_anchor(id).and_then(|a| a.control(side)) else {
                continue;
            };
            let dist = cp.point().distance(pos);
            if dist <= tolerance && best_control.is_none_or(|(d, _)| dist < d) {
                best_control = Some((dist, key));
            }
        }
        if let Some((_, key)) = best_control {
            return Some(key);
        }

        path.world_anchors()
            .iter()
            .map(|a| (a.point.point().distance(pos), a.id))
            .filter(|(dist, _)| *dist <= tolerance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, id)| HandleKey::Anchor(id))
    }

    /// Track the pointer, updating the hovered anchor
    ///
    /// Returns the handle under the pointer, if any.
    pub fn pointer_moved(&mut self, pos: Point) -> Option<HandleKey> {
        let hit = self.handle_at(pos);
        let hover = match hit {
            Some(HandleKey::Anchor(id)) => Some(id),
            _ => None,
        };
        self.set_hover_anchor(hover);
        hit
    }

    /// Set the hovered anchor directly, for hosts with their own hit testing
    pub fn set_hover_anchor(&mut self, id: Option<EntityId>) {
        if self.hover_anchor != id {
            tracing::trace!("Hover anchor {:?} -> {:?}", self.hover_anchor, id);
            self.hover_anchor = id;
        }
    }

    /// Handle a click on the curve itself
    ///
    /// Inserts an anchor at the closest point on the path, unless the pointer
    /// is over an anchor or a visible control handle (that click belongs to
    /// the handle). Returns the new anchor's id.
    pub fn handle_path_click(&mut self, x: f64, y: f64) -> Option<EntityId> {
        if !self.is_active() {
            tracing::warn!("handle_path_click: no active session");
            return None;
        }
        if let Some(hovered) = self.hover_anchor {
            tracing::debug!("Path click ignored, anchor {} is hovered", hovered);
            return None;
        }
        if let Some(key) = self.handle_at(Point::new(x, y)) {
            tracing::debug!("Path click ignored, over handle {:?}", key);
            return None;
        }
        self.add_anchor_point(x, y).ok()
    }
}
