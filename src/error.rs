// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by path construction and interactive editing.
//!
//! Interactive operations never panic on bad input: they log a diagnostic,
//! leave the session untouched and hand one of these back to the caller,
//! who is free to ignore it.

use crate::model::EntityId;
use crate::path::ControlSide;
use thiserror::Error;

/// Errors that can occur while building or editing a bezier path.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EditError {
    #[error("no path is being edited")]
    NoActiveSession,

    #[error("anchor {0} not found")]
    AnchorNotFound(EntityId),

    #[error("anchor {anchor} has no {side} control point")]
    MissingControlPoint { anchor: EntityId, side: ControlSide },

    #[error("a path needs at least 2 anchors, deleting would leave {count}")]
    MinimumAnchors { count: usize },

    #[error("a path needs at least 2 anchors, got {count}")]
    TooFewAnchors { count: usize },

    #[error("anchor id {0} appears more than once")]
    DuplicateAnchorId(EntityId),

    #[error("transform is not invertible")]
    SingularTransform,

    #[error("invalid path data: {0}")]
    InvalidPathData(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
