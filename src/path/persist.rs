// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! JSON form of a path object.
//!
//! Anchors are stored verbatim (`id`, `x`, `y`, `type`, `controlPoint1`,
//! `controlPoint2`) in world coordinates. A path that is mid-edit is written
//! with world values derived from its matrix snapshot, so saving never
//! captures local coordinates and never disturbs the session.

use super::bezier_path::BezierPath;
use super::point::{Anchor, PointType, WorldPoint};
use crate::error::EditError;
use crate::model::EntityId;
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Xy {
    x: f64,
    y: f64,
}

impl From<WorldPoint> for Xy {
    fn from(p: WorldPoint) -> Self {
        Self { x: p.0.x, y: p.0.y }
    }
}

impl From<Xy> for WorldPoint {
    fn from(p: Xy) -> Self {
        WorldPoint(Point::new(p.x, p.y))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAnchor {
    id: u64,
    x: f64,
    y: f64,
    #[serde(rename = "type")]
    typ: PointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_point1: Option<Xy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_point2: Option<Xy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedPath {
    id: u64,
    /// Affine coefficients `[a, b, c, d, e, f]`
    #[serde(default = "identity_coeffs")]
    transform: [f64; 6],
    anchors: Vec<PersistedAnchor>,
}

fn identity_coeffs() -> [f64; 6] {
    Affine::IDENTITY.as_coeffs()
}

impl BezierPath {
    /// Serialize the path with world-space anchors
    pub fn to_json(&self) -> Result<String, EditError> {
        let anchors = self
            .world_anchors()
            .into_iter()
            .map(|a| PersistedAnchor {
                id: a.id.raw(),
                x: a.point.0.x,
                y: a.point.0.y,
                typ: a.typ,
                control_point1: a.control_point1.map(Xy::from),
                control_point2: a.control_point2.map(Xy::from),
            })
            .collect();

        let record = PersistedPath {
            id: self.id.raw(),
            transform: self.transform().as_coeffs(),
            anchors,
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Load a path written by [`BezierPath::to_json`]
    ///
    /// The loaded path is in world space and has no selection.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        let record: PersistedPath = serde_json::from_str(json)?;
        let anchors: Vec<Anchor<WorldPoint>> = record
            .anchors
            .into_iter()
            .map(|a| Anchor {
                id: EntityId::from_raw(a.id),
                point: WorldPoint(Point::new(a.x, a.y)),
                typ: a.typ,
                control_point1: a.control_point1.map(WorldPoint::from),
                control_point2: a.control_point2.map(WorldPoint::from),
            })
            .collect();

        let mut path = BezierPath::with_transform(anchors, Affine::new(record.transform))?;
        path.id = EntityId::from_raw(record.id);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 7,
        "anchors": [
            { "id": 11, "x": 0, "y": 0, "type": "corner", "controlPoint2": { "x": 10, "y": 0 } },
            { "id": 12, "x": 30, "y": 0, "type": "smooth",
              "controlPoint1": { "x": 20, "y": 0 }, "controlPoint2": { "x": 40, "y": 0 } },
            { "id": 13, "x": 60, "y": 0, "type": "corner" }
        ]
    }"#;

    #[test]
    fn loads_verbatim_fields() {
        let path = BezierPath::from_json(SAMPLE).unwrap();
        assert_eq!(path.id.raw(), 7);
        assert_eq!(path.transform(), Affine::IDENTITY);
        assert!(!path.is_edit_mode());

        let anchors = path.world_anchors();
        assert_eq!(anchors.len(), 3);
        assert_eq!(anchors[1].id.raw(), 12);
        assert_eq!(anchors[1].typ, PointType::Smooth);
        assert_eq!(anchors[1].control_point1, Some(WorldPoint(Point::new(20.0, 0.0))));
        assert_eq!(anchors[2].control_point1, None);
    }

    #[test]
    fn new_ids_do_not_collide_with_loaded_ones() {
        let path = BezierPath::from_json(SAMPLE).unwrap();
        let fresh = EntityId::next();
        assert!(path.world_anchors().iter().all(|a| a.id != fresh));
        assert!(fresh.raw() > 13);
    }

    #[test]
    fn round_trips_through_json() {
        let path = BezierPath::from_json(SAMPLE).unwrap();
        let json = path.to_json().unwrap();
        assert!(json.contains("\"controlPoint1\""));
        assert!(json.contains("\"type\": \"smooth\""));

        let again = BezierPath::from_json(&json).unwrap();
        assert_eq!(again.world_anchors(), path.world_anchors());
        assert_eq!(again.path_data(), path.path_data());
    }

    #[test]
    fn rejects_invalid_records() {
        let one = r#"{ "id": 1, "anchors": [ { "id": 2, "x": 0, "y": 0, "type": "corner" } ] }"#;
        assert!(matches!(
            BezierPath::from_json(one),
            Err(EditError::TooFewAnchors { count: 1 })
        ));
        assert!(matches!(BezierPath::from_json("{"), Err(EditError::Json(_))));
        let singular = r#"{ "id": 1, "transform": [0, 0, 0, 0, 0, 0], "anchors": [
            { "id": 2, "x": 0, "y": 0, "type": "corner" },
            { "id": 3, "x": 1, "y": 0, "type": "corner" } ] }"#;
        assert!(matches!(
            BezierPath::from_json(singular),
            Err(EditError::SingularTransform)
        ));
    }
}
