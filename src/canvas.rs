// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! The host canvas seam.
//!
//! The editor never draws pixels. It asks the host to add, move and remove
//! simple shapes (circles, squares, lines) and to schedule a render. Hosts
//! implement [`Canvas`]; [`SceneCanvas`] is an in-memory implementation used
//! by the headless driver and the tests.

use kurbo::Point;
use peniko::Color;
use std::collections::BTreeMap;

/// Host-assigned identifier for a visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualId(pub u64);

/// Geometry of a visual, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualShape {
    Circle { center: Point, radius: f64 },
    Square { center: Point, size: f64 },
    Line { from: Point, to: Point },
}

impl VisualShape {
    /// The point the shape is positioned by (a line's far end)
    pub fn position(&self) -> Point {
        match *self {
            VisualShape::Circle { center, .. } => center,
            VisualShape::Square { center, .. } => center,
            VisualShape::Line { to, .. } => to,
        }
    }
}

/// A shape plus the styling and interaction flags the host needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub shape: VisualShape,
    pub fill: Option<Color>,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Dash pattern `[on, off]` for dashed strokes
    pub dash: Option<[f64; 2]>,
    /// Uniform scale around the shape's position
    pub scale: f64,
    /// Whether the visual belongs in exported artwork
    pub exportable: bool,
    /// Whether the host's normal selection and hit testing applies
    pub selectable: bool,
    /// Whether the host should deliver drag callbacks for it
    pub draggable: bool,
}

/// Host primitives consumed by the editor
pub trait Canvas {
    fn add_visual(&mut self, visual: Visual) -> VisualId;

    /// Replace a visual in place; unknown ids are ignored
    fn update_visual(&mut self, id: VisualId, visual: Visual);

    /// Remove a visual; unknown ids are ignored
    fn remove_visual(&mut self, id: VisualId);

    fn request_render(&mut self);
}

/// In-memory canvas that records visuals and render requests
#[derive(Debug, Default, Clone)]
pub struct SceneCanvas {
    visuals: BTreeMap<VisualId, Visual>,
    next_id: u64,
    render_requests: usize,
}

impl SceneCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visual(&self, id: VisualId) -> Option<&Visual> {
        self.visuals.get(&id)
    }

    pub fn visuals(&self) -> impl Iterator<Item = (&VisualId, &Visual)> {
        self.visuals.iter()
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Number of visuals that are lines (guide lines)
    pub fn line_count(&self) -> usize {
        self.visuals
            .values()
            .filter(|v| matches!(v.shape, VisualShape::Line { .. }))
            .count()
    }

    pub fn render_requests(&self) -> usize {
        self.render_requests
    }
}

impl Canvas for SceneCanvas {
    fn add_visual(&mut self, visual: Visual) -> VisualId {
        self.next_id += 1;
        let id = VisualId(self.next_id);
        self.visuals.insert(id, visual);
        id
    }

    fn update_visual(&mut self, id: VisualId, visual: Visual) {
        if let Some(slot) = self.visuals.get_mut(&id) {
            *slot = visual;
        }
    }

    fn remove_visual(&mut self, id: VisualId) {
        self.visuals.remove(&id);
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }
}
