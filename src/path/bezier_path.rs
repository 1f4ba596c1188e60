// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable bezier path object.
//!
//! A `BezierPath` owns an open anchor list plus the affine transform the host
//! applies to the object as a whole. The anchors live in exactly one
//! coordinate space at a time, recorded by [`PathPoints`]: world space when
//! idle, local space (with the transform snapshot used to get there) while
//! an edit session is active.
//!
//! Curve geometry is rebuilt from the anchors into a cached `BezPath` and the
//! host's path-data string after every mutation. Geometry is always expressed
//! in the object's local frame; the host draws it through the transform.

use super::path_data;
use super::point::{Anchor, LocalPoint, WorldPoint};
use crate::error::EditError;
use crate::geometry;
use crate::model::EntityId;
use crate::settings;
use kurbo::{Affine, BezPath};
use std::collections::HashSet;

/// The anchor list together with the coordinate space it is stored in
#[derive(Debug, Clone, PartialEq)]
pub enum PathPoints {
    /// Canvas coordinates, the resting state
    World(Vec<Anchor<WorldPoint>>),
    /// Object-local coordinates, used while editing
    Local {
        /// The transform in effect when the local values were last related
        /// to world space. Every world position during editing is derived
        /// from this one matrix.
        matrix: Affine,
        anchors: Vec<Anchor<LocalPoint>>,
    },
}

impl PathPoints {
    pub fn len(&self) -> usize {
        match self {
            PathPoints::World(anchors) => anchors.len(),
            PathPoints::Local { anchors, .. } => anchors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_local(&self) -> bool {
        matches!(self, PathPoints::Local { .. })
    }

    /// Anchor ids in path order
    pub fn ids(&self) -> Vec<EntityId> {
        match self {
            PathPoints::World(anchors) => anchors.iter().map(|a| a.id).collect(),
            PathPoints::Local { anchors, .. } => anchors.iter().map(|a| a.id).collect(),
        }
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        match self {
            PathPoints::World(anchors) => anchors.iter().position(|a| a.id == id),
            PathPoints::Local { anchors, .. } => anchors.iter().position(|a| a.id == id),
        }
    }
}

/// A path object made of cubic segments between consecutive anchors
#[derive(Debug, Clone)]
pub struct BezierPath {
    /// Unique identifier for this path
    pub id: EntityId,

    /// The host object's transform
    transform: Affine,

    pub(crate) points: PathPoints,

    /// Anchor highlighted by the active edit session, if any
    pub(crate) selected_anchor_id: Option<EntityId>,

    /// Cached local-frame geometry
    bezier: BezPath,

    /// Cached host path data (`M x y C ...`)
    path_data: String,

    /// Set on every rebuild, cleared by the host via `take_dirty`
    dirty: bool,
}

impl BezierPath {
    /// Create a path from world-space anchors with an identity transform
    pub fn new(anchors: Vec<Anchor<WorldPoint>>) -> Result<Self, EditError> {
        Self::with_transform(anchors, Affine::IDENTITY)
    }

    /// Create a path from world-space anchors and the object's transform
    pub fn with_transform(
        anchors: Vec<Anchor<WorldPoint>>,
        transform: Affine,
    ) -> Result<Self, EditError> {
        validate_anchors(&anchors)?;
        if !is_invertible(transform) {
            return Err(EditError::SingularTransform);
        }

        let mut path = Self {
            id: EntityId::next(),
            transform,
            points: PathPoints::World(anchors),
            selected_anchor_id: None,
            bezier: BezPath::new(),
            path_data: String::new(),
            dirty: false,
        };
        path.rebuild();
        Ok(path)
    }

    /// The host object's current transform
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Whether the anchors are currently stored in local space
    pub fn is_edit_mode(&self) -> bool {
        self.points.is_local()
    }

    pub fn points(&self) -> &PathPoints {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn selected_anchor_id(&self) -> Option<EntityId> {
        self.selected_anchor_id
    }

    /// World-space view of every anchor
    ///
    /// In local space each coordinate is mapped through the stored matrix
    /// snapshot. The path itself is not modified.
    pub fn world_anchors(&self) -> Vec<Anchor<WorldPoint>> {
        match &self.points {
            PathPoints::World(anchors) => anchors.clone(),
            PathPoints::Local { matrix, anchors } => {
                anchors.iter().map(|a| a.to_world(*matrix)).collect()
            }
        }
    }

    /// World-space view of a single anchor
    pub fn world_anchor(&self, id: EntityId) -> Option<Anchor<WorldPoint>> {
        match &self.points {
            PathPoints::World(anchors) => anchors.iter().find(|a| a.id == id).cloned(),
            PathPoints::Local { matrix, anchors } => anchors
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.to_world(*matrix)),
        }
    }

    /// Local-space view of every anchor
    pub fn local_anchors(&self) -> Vec<Anchor<LocalPoint>> {
        match &self.points {
            PathPoints::World(anchors) => {
                let inverse = self.transform.inverse();
                anchors.iter().map(|a| a.to_local(inverse)).collect()
            }
            PathPoints::Local { anchors, .. } => anchors.clone(),
        }
    }

    /// The rebuilt geometry in the object's local frame
    pub fn bezpath(&self) -> &BezPath {
        &self.bezier
    }

    /// The rebuilt geometry in the host's path-data notation
    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    /// Report and clear the dirty flag set by the last rebuild
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Set the host object's transform
    ///
    /// Singular matrices are rejected. In local space the matrix snapshot
    /// follows the new transform, so world positions are re-derived from the
    /// unchanged local coordinates.
    pub fn set_transform(&mut self, transform: Affine) -> Result<(), EditError> {
        if !is_invertible(transform) {
            tracing::warn!("Rejected singular transform {:?}", transform.as_coeffs());
            return Err(EditError::SingularTransform);
        }
        self.transform = transform;
        if let PathPoints::Local { matrix, .. } = &mut self.points {
            *matrix = transform;
        }
        Ok(())
    }

    /// The matrix snapshot and mutable local anchors, if in local space
    pub(crate) fn local_mut(&mut self) -> Option<(Affine, &mut Vec<Anchor<LocalPoint>>)> {
        match &mut self.points {
            PathPoints::Local { matrix, anchors } => Some((*matrix, anchors)),
            PathPoints::World(_) => None,
        }
    }

    /// Rebuild cached geometry from the current anchors
    ///
    /// Geometry is a pure function of the anchor list (and, in world space,
    /// the transform), so calling this repeatedly yields identical output.
    pub fn rebuild(&mut self) {
        let anchors = self.local_anchors();
        self.bezier = build_bezpath(&anchors);
        self.path_data = path_data::to_path_data(&anchors);
        self.dirty = true;
        tracing::trace!("Rebuilt path {}: {}", self.id, self.path_data);
    }
}

/// Build a `BezPath` from consecutive anchors
pub(crate) fn build_bezpath(anchors: &[Anchor<LocalPoint>]) -> BezPath {
    let mut bez = BezPath::new();
    let Some(first) = anchors.first() else {
        return bez;
    };
    bez.move_to(first.point.0);
    for pair in anchors.windows(2) {
        let seg = geometry::segment_between(&pair[0], &pair[1]);
        bez.curve_to(seg.p1, seg.p2, seg.p3);
    }
    bez
}

/// Enforce the anchor-count and unique-id invariants
pub(crate) fn validate_anchors<P>(anchors: &[Anchor<P>]) -> Result<(), EditError> {
    if anchors.len() < 2 {
        return Err(EditError::TooFewAnchors {
            count: anchors.len(),
        });
    }
    let mut seen = HashSet::new();
    for anchor in anchors {
        if !seen.insert(anchor.id) {
            return Err(EditError::DuplicateAnchorId(anchor.id));
        }
    }
    Ok(())
}

pub(crate) fn is_invertible(transform: Affine) -> bool {
    let det = transform.determinant();
    det.is_finite() && det.abs() > settings::numeric::MIN_DETERMINANT
}
