// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction: the editable representation of a bezier curve.
//!
//! A [`BezierPath`] is an open sequence of [`Anchor`]s joined by cubic
//! segments. Each segment `a -> b` uses `a.control_point2` and
//! `b.control_point1`, falling back to the anchor itself where a handle is
//! missing. Paths convert to `kurbo::BezPath` and to the host's path-data
//! notation, and round-trip through JSON in world coordinates.

pub mod bezier_path;
pub mod path_data;
pub mod persist;
pub mod point;

pub use bezier_path::{BezierPath, PathPoints};
pub use point::{Anchor, ControlSide, LocalPoint, PointType, SpacePoint, WorldPoint};
