// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle visuals for the active path.
//!
//! `HandleManager` keeps id-keyed maps from anchors (and their control
//! points) to host visuals. Anchor handles exist for every anchor while a
//! session is active; control handles and their dashed guide lines exist
//! only for the selected anchor. Every visual is created non-exportable and
//! outside the host's normal selection, and is always placed at the world
//! position of the point it represents.

use crate::canvas::{Canvas, Visual, VisualId, VisualShape};
use crate::config::EditorConfig;
use crate::model::EntityId;
use crate::path::{Anchor, BezierPath, ControlSide, PointType, SpacePoint, WorldPoint};
use crate::theme;
use kurbo::Point;
use std::collections::BTreeMap;

const SIDES: [ControlSide; 2] = [ControlSide::In, ControlSide::Out];

/// Identifies a draggable handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandleKey {
    /// The anchor itself
    Anchor(EntityId),
    /// One of the anchor's control points
    Control(EntityId, ControlSide),
}

/// Owner of every visual spawned for an edit session
#[derive(Debug, Clone, Default)]
pub struct HandleManager {
    config: EditorConfig,
    anchor_handles: BTreeMap<EntityId, VisualId>,
    control_handles: BTreeMap<(EntityId, ControlSide), VisualId>,
    guide_lines: BTreeMap<(EntityId, ControlSide), VisualId>,
}

impl HandleManager {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn anchor_handle(&self, id: EntityId) -> Option<VisualId> {
        self.anchor_handles.get(&id).copied()
    }

    pub fn control_handle(&self, id: EntityId, side: ControlSide) -> Option<VisualId> {
        self.control_handles.get(&(id, side)).copied()
    }

    pub fn guide_line(&self, id: EntityId, side: ControlSide) -> Option<VisualId> {
        self.guide_lines.get(&(id, side)).copied()
    }

    pub fn anchor_handle_count(&self) -> usize {
        self.anchor_handles.len()
    }

    pub fn control_handle_count(&self) -> usize {
        self.control_handles.len()
    }

    pub fn guide_line_count(&self) -> usize {
        self.guide_lines.len()
    }

    /// Control handles currently shown, as handle keys
    pub fn visible_controls(&self) -> impl Iterator<Item = HandleKey> + '_ {
        self.control_handles
            .keys()
            .map(|&(id, side)| HandleKey::Control(id, side))
    }

    // ===== VISUAL CONSTRUCTION =====

    /// The visual for an anchor: a circle when smooth, a square when corner
    pub fn anchor_visual(&self, anchor: &Anchor<WorldPoint>, selected: bool) -> Visual {
        let center = anchor.point.point();
        let (shape, inner, outer) = match anchor.typ {
            PointType::Smooth => (
                VisualShape::Circle {
                    center,
                    radius: self.config.anchor_radius,
                },
                theme::point::SMOOTH_INNER,
                theme::point::SMOOTH_OUTER,
            ),
            PointType::Corner => (
                VisualShape::Square {
                    center,
                    size: self.config.anchor_size,
                },
                theme::point::CORNER_INNER,
                theme::point::CORNER_OUTER,
            ),
        };

        let (fill, stroke, scale) = if selected {
            (
                theme::point::SELECTED_INNER,
                theme::point::SELECTED_OUTER,
                self.config.selected_scale,
            )
        } else {
            (inner, outer, 1.0)
        };

        Visual {
            shape,
            fill: Some(fill),
            stroke,
            stroke_width: theme::size::STROKE_WIDTH,
            dash: None,
            scale,
            exportable: false,
            selectable: false,
            draggable: true,
        }
    }

    fn control_visual(&self, position: Point) -> Visual {
        Visual {
            shape: VisualShape::Circle {
                center: position,
                radius: self.config.control_radius,
            },
            fill: Some(theme::point::CONTROL_INNER),
            stroke: theme::point::CONTROL_OUTER,
            stroke_width: theme::size::STROKE_WIDTH,
            dash: None,
            scale: 1.0,
            exportable: false,
            selectable: false,
            draggable: true,
        }
    }

    fn guide_visual(&self, from: Point, to: Point) -> Visual {
        Visual {
            shape: VisualShape::Line { from, to },
            fill: None,
            stroke: theme::guide::COLOR,
            stroke_width: theme::guide::WIDTH,
            dash: Some(self.config.guide_dash),
            scale: 1.0,
            exportable: false,
            selectable: false,
            draggable: false,
        }
    }

    // ===== ANCHOR HANDLES =====

    /// Spawn the visual for one anchor
    pub fn create_anchor_handle(
        &mut self,
        anchor: &Anchor<WorldPoint>,
        selected: bool,
        canvas: &mut dyn Canvas,
    ) {
        if let Some(old) = self.anchor_handles.remove(&anchor.id) {
            canvas.remove_visual(old);
        }
        let visual = canvas.add_visual(self.anchor_visual(anchor, selected));
        self.anchor_handles.insert(anchor.id, visual);
        canvas.request_render();
    }

    /// Restyle one anchor's visual in place (selection highlight, type)
    pub fn restyle_anchor_handle(
        &mut self,
        anchor: &Anchor<WorldPoint>,
        selected: bool,
        canvas: &mut dyn Canvas,
    ) {
        match self.anchor_handles.get(&anchor.id) {
            Some(&visual) => {
                canvas.update_visual(visual, self.anchor_visual(anchor, selected));
                canvas.request_render();
            }
            None => tracing::warn!("No handle for anchor {}", anchor.id),
        }
    }

    /// Remove one anchor's visual, and its control handles if shown
    pub fn remove_anchor_handle(&mut self, id: EntityId, canvas: &mut dyn Canvas) {
        if let Some(visual) = self.anchor_handles.remove(&id) {
            canvas.remove_visual(visual);
            canvas.request_render();
        }
        if self.control_handles.keys().any(|&(owner, _)| owner == id) {
            self.clear_control_handles(canvas);
        }
    }

    /// Move every anchor visual to its anchor's current world position
    pub fn update_anchor_handles(
        &mut self,
        path: &BezierPath,
        selected: Option<EntityId>,
        canvas: &mut dyn Canvas,
    ) {
        for anchor in path.world_anchors() {
            if let Some(&visual) = self.anchor_handles.get(&anchor.id) {
                let is_selected = selected == Some(anchor.id);
                canvas.update_visual(visual, self.anchor_visual(&anchor, is_selected));
            }
        }
        canvas.request_render();
    }

    /// Make anchor visuals match the path one-to-one
    ///
    /// Creates visuals for new anchors, removes visuals whose anchor is gone,
    /// then repositions the rest.
    pub fn sync_anchor_handles(
        &mut self,
        path: &BezierPath,
        selected: Option<EntityId>,
        canvas: &mut dyn Canvas,
    ) {
        let anchors = path.world_anchors();
        let orphans: Vec<EntityId> = self
            .anchor_handles
            .keys()
            .filter(|id| !anchors.iter().any(|a| a.id == **id))
            .copied()
            .collect();
        for id in orphans {
            self.remove_anchor_handle(id, canvas);
        }

        for anchor in &anchors {
            if !self.anchor_handles.contains_key(&anchor.id) {
                self.create_anchor_handle(anchor, selected == Some(anchor.id), canvas);
            }
        }

        self.update_anchor_handles(path, selected, canvas);
    }

    // ===== CONTROL HANDLES AND GUIDE LINES =====

    /// Spawn control handles and guide lines for one anchor
    ///
    /// Any control handles shown for another anchor are removed first.
    pub fn create_control_handles(
        &mut self,
        path: &BezierPath,
        id: EntityId,
        canvas: &mut dyn Canvas,
    ) {
        self.clear_control_handles(canvas);

        let Some(anchor) = path.world_anchor(id) else {
            tracing::warn!("Cannot show control handles: anchor {} not found", id);
            return;
        };

        let origin = anchor.point.point();
        for side in SIDES {
            let Some(cp) = anchor.control(side) else {
                continue;
            };
            // Guide first so the handle is drawn above it
            let guide = canvas.add_visual(self.guide_visual(origin, cp.point()));
            self.guide_lines.insert((id, side), guide);
            let handle = canvas.add_visual(self.control_visual(cp.point()));
            self.control_handles.insert((id, side), handle);
        }
        canvas.request_render();
    }

    /// Move one anchor's control handles to their current positions
    ///
    /// If a control point appeared or disappeared the handles are recreated.
    pub fn update_control_handles(
        &mut self,
        path: &BezierPath,
        id: EntityId,
        canvas: &mut dyn Canvas,
    ) {
        let Some(anchor) = path.world_anchor(id) else {
            return;
        };

        let shape_changed = SIDES.iter().any(|&side| {
            anchor.control(side).is_some() != self.control_handles.contains_key(&(id, side))
        });
        if shape_changed {
            self.create_control_handles(path, id, canvas);
            return;
        }

        for side in SIDES {
            let visual = self.control_handles.get(&(id, side));
            if let (Some(cp), Some(&visual)) = (anchor.control(side), visual) {
                canvas.update_visual(visual, self.control_visual(cp.point()));
            }
        }
        canvas.request_render();
    }

    /// Redraw the dashed lines from an anchor to its control points
    pub fn update_guide_lines(&mut self, path: &BezierPath, id: EntityId, canvas: &mut dyn Canvas) {
        let Some(anchor) = path.world_anchor(id) else {
            return;
        };
        let origin = anchor.point.point();
        for side in SIDES {
            let visual = self.guide_lines.get(&(id, side));
            if let (Some(cp), Some(&visual)) = (anchor.control(side), visual) {
                canvas.update_visual(visual, self.guide_visual(origin, cp.point()));
            }
        }
        canvas.request_render();
    }

    /// Remove all control handles and guide lines
    pub fn clear_control_handles(&mut self, canvas: &mut dyn Canvas) {
        if self.control_handles.is_empty() && self.guide_lines.is_empty() {
            return;
        }
        for (_, visual) in std::mem::take(&mut self.control_handles) {
            canvas.remove_visual(visual);
        }
        for (_, visual) in std::mem::take(&mut self.guide_lines) {
            canvas.remove_visual(visual);
        }
        canvas.request_render();
    }

    /// Remove every visual this manager created
    pub fn clear_handles(&mut self, canvas: &mut dyn Canvas) {
        self.clear_control_handles(canvas);
        for (_, visual) in std::mem::take(&mut self.anchor_handles) {
            canvas.remove_visual(visual);
        }
        canvas.request_render();
    }
}
