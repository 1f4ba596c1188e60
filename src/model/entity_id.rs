// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for paths and anchors.
//!
//! Each `EntityId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs key the handle maps of an edit session and the anchor
//! lookups of a path. They are never reused within a process, so deleted
//! anchors leave no dangling handle keys behind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an entity (anchor, path)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Adopt an ID read back from persisted data.
    ///
    /// The global counter is advanced past `raw` so later calls to
    /// [`EntityId::next`] cannot hand out the same value.
    pub fn from_raw(raw: u64) -> Self {
        ENTITY_COUNTER.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }

    /// The raw numeric value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
