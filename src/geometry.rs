// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Cubic bezier math used by the editor.
//!
//! Pure functions over `kurbo` points: Bernstein evaluation, the first
//! derivative, de Casteljau subdivision, a sampled closest-point search and
//! smooth-handle alignment. Nothing in here knows about sessions, handles or
//! coordinate spaces.

use crate::path::{Anchor, SpacePoint};
use crate::settings;
use kurbo::{CubicBez, Point, Vec2};

/// Evaluate the cubic at parameter `t` in [0, 1]
pub fn evaluate_cubic_bezier(t: f64, p0: Point, cp1: Point, cp2: Point, p1: Point) -> Point {
    let s = 1.0 - t;
    let a = s * s * s;
    let b = 3.0 * s * s * t;
    let c = 3.0 * s * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * cp1.x + c * cp2.x + d * p1.x,
        a * p0.y + b * cp1.y + c * cp2.y + d * p1.y,
    )
}

/// First derivative of the cubic at parameter `t`
pub fn tangent_cubic_bezier(t: f64, p0: Point, cp1: Point, cp2: Point, p1: Point) -> Vec2 {
    let s = 1.0 - t;
    let a = 3.0 * s * s;
    let b = 6.0 * s * t;
    let c = 3.0 * t * t;
    a * (cp1 - p0) + b * (cp2 - cp1) + c * (p1 - cp2)
}

/// The two halves of a cubic split at some parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    /// Covers `[0, t]` of the original
    pub left: CubicBez,
    /// Covers `[t, 1]` of the original
    pub right: CubicBez,
}

/// Split the cubic at `t` with de Casteljau's construction
///
/// `left.p3 == right.p0` is the on-curve point at `t`, and `left.p2`,
/// `left.p3`, `right.p1` are collinear, so the split point joins smoothly.
pub fn subdivide_cubic_bezier(t: f64, p0: Point, cp1: Point, cp2: Point, p1: Point) -> Subdivision {
    let ab = p0.lerp(cp1, t);
    let bc = cp1.lerp(cp2, t);
    let cd = cp2.lerp(p1, t);
    let abc = ab.lerp(bc, t);
    let bcd = bc.lerp(cd, t);
    let abcd = abc.lerp(bcd, t);

    Subdivision {
        left: CubicBez::new(p0, ab, abc, abcd),
        right: CubicBez::new(abcd, bcd, cd, p1),
    }
}

/// Nearest sampled point on a single cubic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub t: f64,
    pub point: Point,
    pub distance: f64,
}

/// Approximate the point on the cubic nearest to `query`
///
/// Two uniform passes: a coarse pass over the whole segment, then a finer
/// pass restricted to one coarse step either side of the coarse winner. This
/// is a sampling heuristic, good to pointer precision, not a root solve.
pub fn find_closest_point_on_cubic_bezier(
    query: Point,
    p0: Point,
    cp1: Point,
    cp2: Point,
    p1: Point,
) -> ClosestPoint {
    let coarse = settings::closest::COARSE_STEPS;
    let refine = settings::closest::REFINE_STEPS;
    let eval = |t: f64| evaluate_cubic_bezier(t, p0, cp1, cp2, p1);

    let mut best_t = 0.0;
    let mut best_dist_sq = f64::INFINITY;
    for i in 0..=coarse {
        let t = i as f64 / coarse as f64;
        let dist_sq = (eval(t) - query).hypot2();
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best_t = t;
        }
    }

    let window = 1.0 / coarse as f64;
    let lo = (best_t - window).max(0.0);
    let hi = (best_t + window).min(1.0);
    for j in 0..=refine {
        let t = lo + (hi - lo) * (j as f64 / refine as f64);
        let dist_sq = (eval(t) - query).hypot2();
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best_t = t;
        }
    }

    ClosestPoint {
        t: best_t,
        point: eval(best_t),
        distance: best_dist_sq.sqrt(),
    }
}

/// Nearest point over all segments of an anchor list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathHit {
    /// Index of the segment's start anchor
    pub segment_index: usize,
    pub t: f64,
    pub point: Point,
    pub distance: f64,
}

/// The cubic between two consecutive anchors
///
/// Uses `from.controlPoint2` and `to.controlPoint1`, each falling back to its
/// own anchor when absent.
pub fn segment_between<P: SpacePoint>(from: &Anchor<P>, to: &Anchor<P>) -> CubicBez {
    CubicBez::new(
        from.point.point(),
        from.outgoing(),
        to.incoming(),
        to.point.point(),
    )
}

/// Find the closest point on an open anchor list
///
/// Returns `None` for fewer than two anchors. Ties keep the earlier segment.
pub fn find_closest_point_on_path<P: SpacePoint>(
    query: Point,
    anchors: &[Anchor<P>],
) -> Option<PathHit> {
    let mut best: Option<PathHit> = None;

    for (segment_index, pair) in anchors.windows(2).enumerate() {
        let seg = segment_between(&pair[0], &pair[1]);
        let hit = find_closest_point_on_cubic_bezier(query, seg.p0, seg.p1, seg.p2, seg.p3);
        let closer = best.is_none_or(|b| hit.distance < b.distance);
        if closer {
            best = Some(PathHit {
                segment_index,
                t: hit.t,
                point: hit.point,
                distance: hit.distance,
            });
        }
    }

    best
}

/// Recompute `cp1` so it points away from `cp2` across `anchor`
///
/// With `maintain_lengths`, `cp1` keeps its own distance from the anchor and
/// only its direction changes. Otherwise, or when `cp2` sits on the anchor,
/// `cp1` becomes the point reflection of `cp2`.
pub fn align_control_handles(
    anchor: Point,
    cp1: Point,
    cp2: Point,
    maintain_lengths: bool,
) -> Point {
    let dir = cp2 - anchor;
    let len = dir.hypot();

    if !maintain_lengths || len < settings::numeric::EPSILON {
        return anchor - dir;
    }

    let keep = (cp1 - anchor).hypot();
    anchor - dir * (keep / len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurbo::{ParamCurve, ParamCurveDeriv};

    fn sample() -> CubicBez {
        CubicBez::new((10.0, 20.0), (40.0, 90.0), (120.0, -30.0), (150.0, 40.0))
    }

    fn assert_point_eq(a: Point, b: Point, eps: f64) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
    }

    #[test]
    fn evaluate_matches_kurbo() {
        let c = sample();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let ours = evaluate_cubic_bezier(t, c.p0, c.p1, c.p2, c.p3);
            assert_point_eq(ours, c.eval(t), 1e-9);
        }
    }

    #[test]
    fn evaluate_hits_endpoints() {
        let c = sample();
        assert_eq!(evaluate_cubic_bezier(0.0, c.p0, c.p1, c.p2, c.p3), c.p0);
        assert_eq!(evaluate_cubic_bezier(1.0, c.p0, c.p1, c.p2, c.p3), c.p3);
    }

    #[test]
    fn tangent_matches_kurbo_derivative() {
        let c = sample();
        let deriv = c.deriv();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let ours = tangent_cubic_bezier(t, c.p0, c.p1, c.p2, c.p3);
            let theirs = deriv.eval(t).to_vec2();
            assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-9);
            assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn subdivision_reproduces_original() {
        let c = sample();
        for &t in &[0.1, 0.25, 0.5, 0.77, 0.9] {
            let Subdivision { left, right } = subdivide_cubic_bezier(t, c.p0, c.p1, c.p2, c.p3);
            assert_eq!(left.p3, right.p0);
            for i in 0..=8 {
                let s = i as f64 / 8.0;
                assert_point_eq(left.eval(s), c.eval(s * t), 1e-9);
                assert_point_eq(right.eval(s), c.eval(t + s * (1.0 - t)), 1e-9);
            }
        }
    }

    #[test]
    fn subdivision_split_point_is_smooth() {
        let c = sample();
        let Subdivision { left, right } = subdivide_cubic_bezier(0.4, c.p0, c.p1, c.p2, c.p3);
        let a = left.p2 - left.p3;
        let b = right.p1 - right.p0;
        assert_abs_diff_eq!(a.cross(b), 0.0, epsilon = 1e-6);
        assert!(a.dot(b) < 0.0);
    }

    #[test]
    fn closest_point_on_straight_cubic_with_collapsed_handles() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(10.0, 0.0);
        for &x in &[0.0, 1.3, 2.5, 4.99, 6.1, 8.75, 10.0] {
            let query = Point::new(x, 0.0);
            let hit = find_closest_point_on_cubic_bezier(query, p0, p0, p1, p1);
            let on_curve = evaluate_cubic_bezier(hit.t, p0, p0, p1, p1);
            assert!((on_curve - query).hypot() < 1e-2, "x={x} t={}", hit.t);
            assert!(hit.distance < 1e-2);
        }
    }

    #[test]
    fn closest_point_reports_offset_distance() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(90.0, 0.0);
        let cp1 = Point::new(30.0, 0.0);
        let cp2 = Point::new(60.0, 0.0);
        let hit = find_closest_point_on_cubic_bezier(Point::new(45.0, 7.0), p0, cp1, cp2, p1);
        assert_abs_diff_eq!(hit.t, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.distance, 7.0, epsilon = 1e-6);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let c = sample();
        let hit = find_closest_point_on_cubic_bezier(Point::new(-100.0, 20.0), c.p0, c.p1, c.p2, c.p3);
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.point, c.p0);
    }

    #[test]
    fn closest_point_on_path_picks_nearest_segment() {
        use crate::path::{PointType, WorldPoint};
        let anchors = vec![
            Anchor::new(WorldPoint(Point::new(0.0, 0.0)), PointType::Corner),
            Anchor::new(WorldPoint(Point::new(100.0, 0.0)), PointType::Corner),
            Anchor::new(WorldPoint(Point::new(100.0, 100.0)), PointType::Corner),
        ];
        let hit = find_closest_point_on_path(Point::new(104.0, 50.0), &anchors).unwrap();
        assert_eq!(hit.segment_index, 1);
        assert_abs_diff_eq!(hit.point.x, 100.0, epsilon = 1e-9);
        assert!((hit.point.y - 50.0).abs() < 0.5);
    }

    #[test]
    fn closest_point_on_path_needs_two_anchors() {
        use crate::path::{PointType, WorldPoint};
        let anchors = vec![Anchor::new(WorldPoint(Point::ORIGIN), PointType::Corner)];
        assert!(find_closest_point_on_path(Point::ORIGIN, &anchors).is_none());
    }

    #[test]
    fn align_preserves_own_length() {
        let anchor = Point::new(0.0, 0.0);
        let cp1 = Point::new(-5.0, 0.0);
        let cp2 = Point::new(3.0, 4.0);
        let aligned = align_control_handles(anchor, cp1, cp2, true);

        assert_abs_diff_eq!((aligned - anchor).hypot(), 5.0, epsilon = 1e-9);
        let dir = (aligned - anchor).normalize();
        let expected = -(cp2 - anchor).normalize();
        assert_abs_diff_eq!(dir.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(dir.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn align_without_lengths_reflects() {
        let anchor = Point::new(10.0, 10.0);
        let aligned = align_control_handles(anchor, Point::new(0.0, 0.0), Point::new(13.0, 14.0), false);
        assert_point_eq(aligned, Point::new(7.0, 6.0), 1e-12);
    }

    #[test]
    fn align_with_zero_direction_is_identity_reflection() {
        let anchor = Point::new(2.0, 2.0);
        let aligned = align_control_handles(anchor, Point::new(9.0, 9.0), anchor, true);
        assert_eq!(aligned, anchor);
    }
}
