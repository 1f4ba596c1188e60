// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Moving a path's anchors between world and local space.
//!
//! While a path is edited its anchors are stored in local space and world
//! positions are derived from them through the matrix snapshot. Local values
//! are the durable source, so repeated transform events never accumulate
//! floating-point drift in the anchors themselves.

use crate::path::{BezierPath, PathPoints};

impl BezierPath {
    /// Convert every anchor and control point from world to local space
    ///
    /// Reads the transform once and keeps it as the snapshot. Returns `false`
    /// (and changes nothing) if the anchors are already local.
    pub fn to_local(&mut self) -> bool {
        let PathPoints::World(anchors) = &self.points else {
            tracing::debug!("Path {} already in local space", self.id);
            return false;
        };

        let matrix = self.transform();
        let inverse = matrix.inverse();
        let anchors = anchors.iter().map(|a| a.to_local(inverse)).collect();
        self.points = PathPoints::Local { matrix, anchors };
        tracing::debug!("Path {} -> local space", self.id);
        true
    }

    /// Convert every anchor and control point from local to world space
    ///
    /// Uses the matrix snapshot. Returns `false` if already in world space.
    pub fn to_world(&mut self) -> bool {
        let PathPoints::Local { matrix, anchors } = &self.points else {
            tracing::debug!("Path {} already in world space", self.id);
            return false;
        };

        let anchors = anchors.iter().map(|a| a.to_world(*matrix)).collect();
        self.points = PathPoints::World(anchors);
        tracing::debug!("Path {} -> world space", self.id);
        true
    }
}
