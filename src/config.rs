// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor configuration.
//!
//! Every field defaults to the compile-time value from `settings.rs` or
//! `theme.rs`, so a TOML file only needs the keys it wants to change.

use crate::error::EditError;
use crate::{settings, theme};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable handle sizes and interaction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Smooth anchor circle radius (canvas units)
    pub anchor_radius: f64,
    /// Corner anchor square side (canvas units)
    pub anchor_size: f64,
    /// Control point circle radius (canvas units)
    pub control_radius: f64,
    /// Scale applied to the selected anchor's visual
    pub selected_scale: f64,
    /// Maximum pointer distance for a handle hit (canvas units)
    pub hit_tolerance: f64,
    /// Guide line dash pattern `[on, off]`
    pub guide_dash: [f64; 2],
    /// Keep the opposite handle's length when mirroring a smooth anchor
    pub maintain_handle_lengths: bool,
    /// Arrow-key nudge distance
    pub nudge_base: f64,
    /// Shift-arrow nudge distance
    pub nudge_shift: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            anchor_radius: theme::size::ANCHOR_RADIUS,
            anchor_size: theme::size::ANCHOR_SIZE,
            control_radius: theme::size::CONTROL_RADIUS,
            selected_scale: settings::selection::SELECTED_SCALE,
            hit_tolerance: settings::hit::TOLERANCE,
            guide_dash: theme::guide::DASH,
            maintain_handle_lengths: settings::selection::MAINTAIN_HANDLE_LENGTHS,
            nudge_base: settings::nudge::BASE,
            nudge_shift: settings::nudge::SHIFT,
        }
    }
}

impl EditorConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, EditError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded editor config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EditorConfig::from_toml_str("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = EditorConfig::from_toml_str(
            "hit_tolerance = 12.5\nmaintain_handle_lengths = false\nguide_dash = [2.0, 6.0]\n",
        )
        .unwrap();
        assert_eq!(config.hit_tolerance, 12.5);
        assert!(!config.maintain_handle_lengths);
        assert_eq!(config.guide_dash, [2.0, 6.0]);
        assert_eq!(config.anchor_radius, theme::size::ANCHOR_RADIUS);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(matches!(
            EditorConfig::from_toml_str("hit_tolerance = \"far\""),
            Err(EditError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            EditorConfig::load("/definitely/not/here.toml"),
            Err(EditError::Io(_))
        ));
    }
}
