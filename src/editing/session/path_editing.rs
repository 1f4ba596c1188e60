// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing methods for EditSession: selection, dragging, insertion,
//! deletion and smoothness changes

use super::{EditSession, anchor_not_found, no_session};
use crate::canvas::Canvas;
use crate::editing::selection::Selection;
use crate::error::EditError;
use crate::geometry;
use crate::model::EntityId;
use crate::path::{Anchor, ControlSide, LocalPoint, PointType};
use kurbo::{Point, Vec2};

impl<C: Canvas> EditSession<C> {
    // ===== SELECTION =====

    /// Select an anchor, showing its control handles
    ///
    /// The previously selected anchor loses its highlight and control
    /// handles first. Clicking the selected anchor again does nothing.
    pub fn click_anchor(&mut self, id: EntityId) -> Result<(), EditError> {
        let Some(path) = self.path.as_ref() else {
            return no_session("click_anchor");
        };
        if path.points().index_of(id).is_none() {
            return anchor_not_found("click_anchor", id);
        }
        if self.selection.contains(id) {
            return Ok(());
        }

        self.deselect_anchor();

        let Some(path) = self.path.as_mut() else {
            return no_session("click_anchor");
        };
        path.selected_anchor_id = Some(id);
        self.selection = Selection::AnchorSelected(id);
        if let Some(anchor) = path.world_anchor(id) {
            self.handles
                .restyle_anchor_handle(&anchor, true, &mut self.canvas);
        }
        self.handles
            .create_control_handles(path, id, &mut self.canvas);
        tracing::debug!("Selected anchor {}", id);
        Ok(())
    }

    /// Return to the idle state, dropping the selected anchor's controls
    pub fn deselect_anchor(&mut self) {
        let Some(previous) = self.selection.anchor() else {
            return;
        };
        self.selection = Selection::Idle;
        self.handles.clear_control_handles(&mut self.canvas);

        if let Some(path) = self.path.as_mut() {
            path.selected_anchor_id = None;
            if let Some(anchor) = path.world_anchor(previous) {
                self.handles
                    .restyle_anchor_handle(&anchor, false, &mut self.canvas);
            }
        }
        tracing::debug!("Deselected anchor {}", previous);
    }

    // ===== DRAGGING =====

    /// Move an anchor to a canvas position
    ///
    /// Both control points move with the anchor, so handle directions and
    /// lengths are unchanged.
    pub fn drag_anchor(&mut self, id: EntityId, to: Point) -> Result<(), EditError> {
        let Some((matrix, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("drag_anchor");
        };
        let Some(anchor) = anchors.iter_mut().find(|a| a.id == id) else {
            return anchor_not_found("drag_anchor", id);
        };

        let delta = matrix.inverse() * to - anchor.point.0;
        anchor.translate(delta);
        self.rebuild_and_refresh();
        Ok(())
    }

    /// Move one control point to a canvas position
    ///
    /// On a smooth anchor the opposite control point is turned to stay
    /// directionally opposite, keeping its own length when
    /// `maintain_handle_lengths` is set.
    pub fn drag_control_handle(
        &mut self,
        id: EntityId,
        side: ControlSide,
        to: Point,
    ) -> Result<(), EditError> {
        let maintain = self.config.maintain_handle_lengths;
        let Some((matrix, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("drag_control_handle");
        };
        let Some(anchor) = anchors.iter_mut().find(|a| a.id == id) else {
            return anchor_not_found("drag_control_handle", id);
        };
        if anchor.control(side).is_none() {
            tracing::warn!("drag_control_handle: anchor {} has no {}", id, side);
            return Err(EditError::MissingControlPoint { anchor: id, side });
        }

        let dragged = matrix.inverse() * to;
        *anchor.control_mut(side) = Some(LocalPoint(dragged));

        if anchor.typ.is_smooth() {
            let center = anchor.point.0;
            if let Some(opposite) = anchor.control_mut(side.opposite()) {
                let aligned =
                    geometry::align_control_handles(center, opposite.0, dragged, maintain);
                *opposite = LocalPoint(aligned);
            }
        }

        self.rebuild_and_refresh();
        Ok(())
    }

    /// Move the selected anchor and its control points by a canvas delta
    ///
    /// `dx` and `dy` are step counts: one step is `nudge_base` canvas units,
    /// or `nudge_shift` with `shift` held. Does nothing with no selection.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64, shift: bool) -> Result<(), EditError> {
        let step = if shift {
            self.config.nudge_shift
        } else {
            self.config.nudge_base
        };
        let delta = Vec2::new(dx * step, dy * step);
        let selected = self.selection.anchor();

        let Some((matrix, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("nudge_selected");
        };
        let Some(id) = selected else {
            return Ok(());
        };
        let Some(anchor) = anchors.iter_mut().find(|a| a.id == id) else {
            return anchor_not_found("nudge_selected", id);
        };

        let inverse = matrix.inverse();
        *anchor = anchor.map(|p| LocalPoint(inverse * (matrix * p.0 + delta)));
        tracing::debug!("Nudged anchor {} by {:?}", id, delta);

        self.rebuild_and_refresh();
        Ok(())
    }

    // ===== STRUCTURE =====

    /// Insert an anchor at the point on the path closest to a canvas position
    ///
    /// The containing segment is split with de Casteljau subdivision, so the
    /// curve keeps its exact shape. The new anchor is smooth.
    pub fn add_anchor_point(&mut self, x: f64, y: f64) -> Result<EntityId, EditError> {
        let Some((matrix, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("add_anchor_point");
        };

        let query = matrix.inverse() * Point::new(x, y);
        let Some(hit) = geometry::find_closest_point_on_path(query, anchors.as_slice()) else {
            tracing::warn!("add_anchor_point: path has {} anchors", anchors.len());
            return Err(EditError::TooFewAnchors {
                count: anchors.len(),
            });
        };

        let index = hit.segment_index;
        let seg = geometry::segment_between(&anchors[index], &anchors[index + 1]);
        let split = geometry::subdivide_cubic_bezier(hit.t, seg.p0, seg.p1, seg.p2, seg.p3);
        let (left, right) = (split.left, split.right);

        // An absent handle sits on its anchor, and so does its split
        anchors[index].control_point2 = anchors[index].control_point2.map(|_| LocalPoint(left.p1));
        anchors[index + 1].control_point1 =
            anchors[index + 1].control_point1.map(|_| LocalPoint(right.p2));

        let inserted = Anchor::new(LocalPoint(left.p3), PointType::Smooth)
            .with_controls(Some(LocalPoint(left.p2)), Some(LocalPoint(right.p1)));
        let id = inserted.id;
        anchors.insert(index + 1, inserted);
        tracing::debug!(
            "Inserted anchor {} on segment {} at t={:.4}",
            id,
            index,
            hit.t
        );

        self.rebuild_and_sync();
        Ok(id)
    }

    /// Remove an anchor, handing its control points to its neighbors
    ///
    /// Rejected when the path would be left with fewer than two anchors.
    /// A smooth neighbor that ends up with both control points has its
    /// own control point turned to oppose the one it received.
    pub fn delete_anchor_point(&mut self, id: EntityId) -> Result<(), EditError> {
        let maintain = self.config.maintain_handle_lengths;
        let Some(path) = self.path.as_ref() else {
            return no_session("delete_anchor_point");
        };
        let Some(index) = path.points().index_of(id) else {
            return anchor_not_found("delete_anchor_point", id);
        };
        let count = path.len();
        if count <= 2 {
            tracing::warn!("delete_anchor_point: path {} needs at least 2 anchors", path.id);
            return Err(EditError::MinimumAnchors { count: count - 1 });
        }

        if self.selection.contains(id) {
            self.deselect_anchor();
        }
        if self.hover_anchor == Some(id) {
            self.hover_anchor = None;
        }

        let Some((_, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("delete_anchor_point");
        };
        let removed = anchors.remove(index);
        if index > 0 {
            let prev = &mut anchors[index - 1];
            prev.control_point2 = removed.control_point1;
            realign_smooth(prev, ControlSide::Out, maintain);
        }
        if let Some(next) = anchors.get_mut(index) {
            next.control_point1 = removed.control_point2;
            realign_smooth(next, ControlSide::In, maintain);
        }
        tracing::debug!("Deleted anchor {}", id);

        self.handles.remove_anchor_handle(id, &mut self.canvas);
        self.rebuild_and_sync();
        Ok(())
    }

    /// Flip an anchor between smooth and corner
    ///
    /// Becoming smooth turns `controlPoint1` to oppose `controlPoint2`. The
    /// anchor's visual is replaced, and it is reselected if it was selected.
    pub fn toggle_point_type(&mut self, id: EntityId) -> Result<PointType, EditError> {
        let maintain = self.config.maintain_handle_lengths;
        let was_selected = self.selection.contains(id);

        let Some((_, anchors)) = self.path.as_mut().and_then(|p| p.local_mut()) else {
            return no_session("toggle_point_type");
        };
        let Some(anchor) = anchors.iter_mut().find(|a| a.id == id) else {
            return anchor_not_found("toggle_point_type", id);
        };

        let typ = anchor.typ.toggled();
        anchor.typ = typ;
        if let (PointType::Smooth, Some(cp1), Some(cp2)) =
            (typ, anchor.control_point1, anchor.control_point2)
        {
            let aligned = geometry::align_control_handles(anchor.point.0, cp1.0, cp2.0, maintain);
            anchor.control_point1 = Some(LocalPoint(aligned));
        }
        tracing::debug!("Anchor {} is now {:?}", id, typ);

        if was_selected {
            self.deselect_anchor();
        }
        self.handles.remove_anchor_handle(id, &mut self.canvas);
        self.rebuild_and_sync();
        if was_selected {
            self.click_anchor(id)?;
        }
        Ok(typ)
    }

    // ===== HELPERS =====

    /// Rebuild geometry after a point moved, then follow with the handles
    fn rebuild_and_refresh(&mut self) {
        if let Some(path) = self.path.as_mut() {
            path.rebuild();
        }
        self.refresh_handles();
    }

    /// Rebuild geometry after the anchor list changed shape
    fn rebuild_and_sync(&mut self) {
        let Some(path) = self.path.as_mut() else {
            return;
        };
        path.rebuild();
        let selected = self.selection.anchor();
        self.handles
            .sync_anchor_handles(path, selected, &mut self.canvas);
        if let Some(id) = selected {
            self.handles
                .update_control_handles(path, id, &mut self.canvas);
            self.handles.update_guide_lines(path, id, &mut self.canvas);
        }
    }
}

/// Turn a smooth anchor's other control point to oppose the one on `kept`
fn realign_smooth(anchor: &mut Anchor<LocalPoint>, kept: ControlSide, maintain: bool) {
    if !anchor.typ.is_smooth() {
        return;
    }
    let center = anchor.point.0;
    let Some(kept_point) = anchor.control(kept) else {
        return;
    };
    if let Some(other) = anchor.control_mut(kept.opposite()) {
        let aligned = geometry::align_control_handles(center, other.0, kept_point.0, maintain);
        *other = LocalPoint(aligned);
    }
}
