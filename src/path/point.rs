// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchors, their control points, and the coordinate-space tags.
//!
//! A coordinate is wrapped in either [`WorldPoint`] (canvas space) or
//! [`LocalPoint`] (the path object's untransformed frame). An [`Anchor`] is
//! generic over that tag, so an anchor list is always entirely in one space
//! and converting between spaces is an explicit map through an `Affine`.

use crate::model::EntityId;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in canvas (world) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint(pub Point);

/// A point in the path object's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint(pub Point);

/// Common access to a tagged coordinate.
pub trait SpacePoint: Copy + fmt::Debug {
    fn point(self) -> Point;
    fn from_point(point: Point) -> Self;

    fn translate(self, delta: Vec2) -> Self {
        Self::from_point(self.point() + delta)
    }
}

impl SpacePoint for WorldPoint {
    fn point(self) -> Point {
        self.0
    }

    fn from_point(point: Point) -> Self {
        Self(point)
    }
}

impl SpacePoint for LocalPoint {
    fn point(self) -> Point {
        self.0
    }

    fn from_point(point: Point) -> Self {
        Self(point)
    }
}

impl WorldPoint {
    /// Map into local space with the inverse of the object transform
    pub fn to_local(self, inverse: Affine) -> LocalPoint {
        LocalPoint(inverse * self.0)
    }
}

impl LocalPoint {
    /// Map into world space with the object transform
    pub fn to_world(self, transform: Affine) -> WorldPoint {
        WorldPoint(transform * self.0)
    }
}

/// Smoothness of an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    /// Control points stay directionally opposite across the anchor
    Smooth,
    /// Control points move independently
    Corner,
}

impl PointType {
    pub fn toggled(self) -> Self {
        match self {
            PointType::Smooth => PointType::Corner,
            PointType::Corner => PointType::Smooth,
        }
    }

    pub fn is_smooth(self) -> bool {
        matches!(self, PointType::Smooth)
    }
}

/// Which of an anchor's two control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlSide {
    /// `controlPoint1`, the incoming handle
    In,
    /// `controlPoint2`, the outgoing handle
    Out,
}

impl ControlSide {
    pub fn opposite(self) -> Self {
        match self {
            ControlSide::In => ControlSide::Out,
            ControlSide::Out => ControlSide::In,
        }
    }
}

impl fmt::Display for ControlSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlSide::In => f.write_str("cp1"),
            ControlSide::Out => f.write_str("cp2"),
        }
    }
}

/// An on-curve anchor and its optional control points
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor<P> {
    /// Stable identifier, generated once at creation
    pub id: EntityId,

    /// The anchor position
    pub point: P,

    pub typ: PointType,

    /// Incoming handle (`controlPoint1`)
    pub control_point1: Option<P>,

    /// Outgoing handle (`controlPoint2`)
    pub control_point2: Option<P>,
}

impl<P: SpacePoint> Anchor<P> {
    /// A new anchor without control points
    pub fn new(point: P, typ: PointType) -> Self {
        Self {
            id: EntityId::next(),
            point,
            typ,
            control_point1: None,
            control_point2: None,
        }
    }

    pub fn with_controls(mut self, control_point1: Option<P>, control_point2: Option<P>) -> Self {
        self.control_point1 = control_point1;
        self.control_point2 = control_point2;
        self
    }

    pub fn control(&self, side: ControlSide) -> Option<P> {
        match side {
            ControlSide::In => self.control_point1,
            ControlSide::Out => self.control_point2,
        }
    }

    pub fn control_mut(&mut self, side: ControlSide) -> &mut Option<P> {
        match side {
            ControlSide::In => &mut self.control_point1,
            ControlSide::Out => &mut self.control_point2,
        }
    }

    /// Outgoing tangent point for a segment starting here
    ///
    /// A missing handle collapses onto the anchor.
    pub fn outgoing(&self) -> Point {
        self.control_point2.unwrap_or(self.point).point()
    }

    /// Incoming tangent point for a segment ending here
    pub fn incoming(&self) -> Point {
        self.control_point1.unwrap_or(self.point).point()
    }

    /// Move the anchor and both handles by the same delta
    pub fn translate(&mut self, delta: Vec2) {
        self.point = self.point.translate(delta);
        self.control_point1 = self.control_point1.map(|cp| cp.translate(delta));
        self.control_point2 = self.control_point2.map(|cp| cp.translate(delta));
    }

    /// Convert every coordinate of this anchor, keeping id and type
    pub fn map<Q>(&self, mut f: impl FnMut(P) -> Q) -> Anchor<Q> {
        Anchor {
            id: self.id,
            point: f(self.point),
            typ: self.typ,
            control_point1: self.control_point1.map(&mut f),
            control_point2: self.control_point2.map(&mut f),
        }
    }
}

impl Anchor<WorldPoint> {
    pub fn to_local(&self, inverse: Affine) -> Anchor<LocalPoint> {
        self.map(|p| p.to_local(inverse))
    }
}

impl Anchor<LocalPoint> {
    pub fn to_world(&self, transform: Affine) -> Anchor<WorldPoint> {
        self.map(|p| p.to_world(transform))
    }
}
