// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing the host's path-data notation.
//!
//! The host accepts geometry as `M x y C cx1 cy1, cx2 cy2, x y ...`: one
//! absolute move followed by one absolute cubic per segment. Reading also
//! accepts `L x y`, stored as a segment whose handles collapse onto its
//! anchors, and implicit repetition of the last command.

use super::bezier_path::BezierPath;
use super::point::{Anchor, PointType, SpacePoint, WorldPoint};
use crate::error::EditError;
use crate::geometry;
use crate::settings;
use kurbo::Point;
use std::fmt::Write;

/// Write anchors as path data
pub fn to_path_data<P: SpacePoint>(anchors: &[Anchor<P>]) -> String {
    let mut out = String::new();
    let Some(first) = anchors.first() else {
        return out;
    };
    let p = first.point.point();
    let _ = write!(out, "M {} {}", p.x, p.y);

    for pair in anchors.windows(2) {
        let seg = geometry::segment_between(&pair[0], &pair[1]);
        let _ = write!(
            out,
            " C {} {}, {} {}, {} {}",
            seg.p1.x, seg.p1.y, seg.p2.x, seg.p2.y, seg.p3.x, seg.p3.y
        );
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

fn tokenize(data: &str) -> Result<Vec<Token>, EditError> {
    let chars: Vec<char> = data.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() || c == ',' {
            i += 1;
            continue;
        }
        if c.is_ascii_alphabetic() {
            tokens.push(Token::Command(c));
            i += 1;
            continue;
        }

        let start = i;
        if c == '-' || c == '+' {
            i += 1;
        }
        while i < chars.len() {
            let d = chars[i];
            let after_exponent = i > start && matches!(chars[i - 1], 'e' | 'E');
            if d.is_ascii_digit() || d == '.' || d == 'e' || d == 'E' {
                i += 1;
            } else if (d == '-' || d == '+') && after_exponent {
                i += 1;
            } else {
                break;
            }
        }
        let text: String = chars[start..i].iter().collect();
        let value = text
            .parse::<f64>()
            .map_err(|_| EditError::InvalidPathData(format!("bad number '{text}'")))?;
        tokens.push(Token::Number(value));
    }

    Ok(tokens)
}

/// Read path data into world-space anchors
///
/// Anchors come back as corners unless both handles are present and
/// collinear on opposite sides, in which case they are smooth.
pub fn parse_path_data(data: &str) -> Result<Vec<Anchor<WorldPoint>>, EditError> {
    let tokens = tokenize(data)?;
    let mut iter = tokens.into_iter().peekable();
    let mut anchors: Vec<Anchor<WorldPoint>> = Vec::new();
    let mut command = None;

    while let Some(token) = iter.peek().copied() {
        if let Token::Command(c) = token {
            iter.next();
            command = Some(c);
        }
        let Some(cmd) = command else {
            return Err(EditError::InvalidPathData("missing initial M".into()));
        };

        match cmd {
            'M' => {
                if !anchors.is_empty() {
                    return Err(EditError::InvalidPathData(
                        "only one subpath is supported".into(),
                    ));
                }
                let p = Point::new(next_number(&mut iter)?, next_number(&mut iter)?);
                anchors.push(Anchor::new(WorldPoint(p), PointType::Corner));
                // Extra coordinate pairs after M are line segments
                command = Some('L');
            }
            'L' => {
                if anchors.is_empty() {
                    return Err(EditError::InvalidPathData("missing initial M".into()));
                }
                let p = Point::new(next_number(&mut iter)?, next_number(&mut iter)?);
                anchors.push(Anchor::new(WorldPoint(p), PointType::Corner));
            }
            'C' => {
                let Some(prev) = anchors.last_mut() else {
                    return Err(EditError::InvalidPathData("missing initial M".into()));
                };
                let cp1 = Point::new(next_number(&mut iter)?, next_number(&mut iter)?);
                let cp2 = Point::new(next_number(&mut iter)?, next_number(&mut iter)?);
                let end = Point::new(next_number(&mut iter)?, next_number(&mut iter)?);

                if cp1 != prev.point.0 {
                    prev.control_point2 = Some(WorldPoint(cp1));
                }
                let mut anchor = Anchor::new(WorldPoint(end), PointType::Corner);
                if cp2 != end {
                    anchor.control_point1 = Some(WorldPoint(cp2));
                }
                anchors.push(anchor);
            }
            other => {
                return Err(EditError::InvalidPathData(format!(
                    "unsupported command '{other}'"
                )));
            }
        }
    }

    for anchor in &mut anchors {
        if handles_are_opposite(anchor) {
            anchor.typ = PointType::Smooth;
        }
    }

    Ok(anchors)
}

fn next_number(iter: &mut impl Iterator<Item = Token>) -> Result<f64, EditError> {
    match iter.next() {
        Some(Token::Number(n)) => Ok(n),
        other => Err(EditError::InvalidPathData(format!(
            "expected number, found {other:?}"
        ))),
    }
}

fn handles_are_opposite<P: SpacePoint>(anchor: &Anchor<P>) -> bool {
    let (Some(cp1), Some(cp2)) = (anchor.control_point1, anchor.control_point2) else {
        return false;
    };
    let a = cp1.point() - anchor.point.point();
    let b = cp2.point() - anchor.point.point();
    let scale = a.hypot() * b.hypot();
    if scale < settings::numeric::EPSILON {
        return false;
    }
    a.cross(b).abs() <= 1e-6 * scale && a.dot(b) < 0.0
}

impl BezierPath {
    /// Create a world-space path from host path data
    pub fn from_path_data(data: &str) -> Result<Self, EditError> {
        BezierPath::new(parse_path_data(data)?)
    }
}
