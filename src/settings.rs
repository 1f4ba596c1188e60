// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Values
//! here are the defaults for `EditorConfig`, which can override them at
//! runtime.

// ============================================================================
// CLOSEST POINT SEARCH
// ============================================================================
/// Uniform samples taken over the whole segment in the coarse pass
const CLOSEST_COARSE_STEPS: usize = 20;

/// Uniform samples taken over the +-1/20 window around the coarse winner
const CLOSEST_REFINE_STEPS: usize = 100;

// ============================================================================
// HIT TESTING
// ============================================================================
/// Maximum distance (canvas units) between pointer and handle for a hit
const HIT_TOLERANCE: f64 = 8.0;

// ============================================================================
// SELECTION
// ============================================================================
/// Scale applied to the selected anchor's visual
const SELECTED_SCALE: f64 = 1.5;

/// Whether mirroring a smooth handle keeps the opposite handle's length
const MAINTAIN_HANDLE_LENGTHS: bool = true;

// ============================================================================
// NUDGE SETTINGS
// ============================================================================
/// Base nudge amount in canvas units (arrow key)
const NUDGE_BASE: f64 = 1.0;

/// Shift-arrow nudge amount in canvas units
const NUDGE_SHIFT: f64 = 10.0;

// ============================================================================
// NUMERICS
// ============================================================================
/// Vectors shorter than this are treated as zero length
const EPSILON: f64 = 1e-9;

/// Determinants smaller than this mark a transform as singular
const MIN_DETERMINANT: f64 = 1e-12;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Closest-point sampling parameters
pub mod closest {
    /// Coarse pass sample count (the window is +-1/COARSE_STEPS)
    pub const COARSE_STEPS: usize = super::CLOSEST_COARSE_STEPS;

    /// Refinement pass sample count
    pub const REFINE_STEPS: usize = super::CLOSEST_REFINE_STEPS;
}

/// Hit testing settings
pub mod hit {
    pub const TOLERANCE: f64 = super::HIT_TOLERANCE;
}

/// Selection settings
pub mod selection {
    pub const SELECTED_SCALE: f64 = super::SELECTED_SCALE;
    pub const MAINTAIN_HANDLE_LENGTHS: bool = super::MAINTAIN_HANDLE_LENGTHS;
}

/// Nudge amounts for arrow key anchor movement
pub mod nudge {
    /// Base nudge (arrow key alone)
    pub const BASE: f64 = super::NUDGE_BASE;

    /// Shift-arrow nudge
    pub const SHIFT: f64 = super::NUDGE_SHIFT;
}

/// Numeric guards
pub mod numeric {
    pub const EPSILON: f64 = super::EPSILON;
    pub const MIN_DETERMINANT: f64 = super::MIN_DETERMINANT;
}
