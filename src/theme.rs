// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and handle sizes
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic grays
// ============================================================================
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);

// ============================================================================
// GUIDE LINES (anchor to control point)
// ============================================================================
const GUIDE_LINE: Color = BASE_I;
const GUIDE_DASH_ON: f64 = 4.0;
const GUIDE_DASH_OFF: f64 = 4.0;
const GUIDE_WIDTH: f64 = 1.0;

// ============================================================================
// POINT COLORS
// ============================================================================

// Smooth anchors (circles) - BLUE
const SMOOTH_POINT_INNER: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const SMOOTH_POINT_OUTER: Color = Color::from_rgb8(0x44, 0x28, 0xec);

// Corner anchors (squares) - GREEN
const CORNER_POINT_INNER: Color = Color::from_rgb8(0x6a, 0xe7, 0x56);
const CORNER_POINT_OUTER: Color = Color::from_rgb8(0x20, 0x8e, 0x56);

// Control points - PURPLE
const CONTROL_POINT_INNER: Color = Color::from_rgb8(0xcc, 0x99, 0xff);
const CONTROL_POINT_OUTER: Color = Color::from_rgb8(0x99, 0x00, 0xff);

const SELECTED_POINT_INNER: Color = Color::from_rgb8(0xff, 0xee, 0x55);
const SELECTED_POINT_OUTER: Color = Color::from_rgb8(0xff, 0xaa, 0x33);

// ============================================================================
// SIZES (canvas units, before selection scale)
// ============================================================================
const ANCHOR_RADIUS: f64 = 5.0;
const ANCHOR_SIZE: f64 = 9.0;
const CONTROL_RADIUS: f64 = 3.5;
const HANDLE_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Dashed guide lines between an anchor and its control points
pub mod guide {
    use super::Color;
    pub const COLOR: Color = super::GUIDE_LINE;
    pub const DASH: [f64; 2] = [super::GUIDE_DASH_ON, super::GUIDE_DASH_OFF];
    pub const WIDTH: f64 = super::GUIDE_WIDTH;
}

/// Anchor and control handle colors
pub mod point {
    use super::Color;

    /// Smooth anchors (circles)
    pub const SMOOTH_INNER: Color = super::SMOOTH_POINT_INNER;
    pub const SMOOTH_OUTER: Color = super::SMOOTH_POINT_OUTER;

    /// Corner anchors (squares)
    pub const CORNER_INNER: Color = super::CORNER_POINT_INNER;
    pub const CORNER_OUTER: Color = super::CORNER_POINT_OUTER;

    /// Control points (small circles)
    pub const CONTROL_INNER: Color = super::CONTROL_POINT_INNER;
    pub const CONTROL_OUTER: Color = super::CONTROL_POINT_OUTER;

    /// The selected anchor, whatever its type
    pub const SELECTED_INNER: Color = super::SELECTED_POINT_INNER;
    pub const SELECTED_OUTER: Color = super::SELECTED_POINT_OUTER;
}

/// Handle sizes
pub mod size {
    /// Smooth anchor circle radius
    pub const ANCHOR_RADIUS: f64 = super::ANCHOR_RADIUS;

    /// Corner anchor square side
    pub const ANCHOR_SIZE: f64 = super::ANCHOR_SIZE;

    /// Control point circle radius
    pub const CONTROL_RADIUS: f64 = super::CONTROL_RADIUS;

    pub const STROKE_WIDTH: f64 = super::HANDLE_STROKE_WIDTH;
}
