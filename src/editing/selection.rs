// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state of an edit session.
//!
//! At most one anchor is selected at a time. The state is a plain `Copy`
//! enum so transitions are explicit assignments.

use crate::model::EntityId;

/// Which anchor, if any, is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// One anchor selected; its control handles are visible
    AnchorSelected(EntityId),
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The selected anchor
    pub fn anchor(&self) -> Option<EntityId> {
        match *self {
            Selection::Idle => None,
            Selection::AnchorSelected(id) => Some(id),
        }
    }

    /// Check if a specific anchor is the selected one
    pub fn contains(&self, id: EntityId) -> bool {
        self.anchor() == Some(id)
    }
}
