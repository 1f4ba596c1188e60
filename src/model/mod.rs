// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Data model shared across the editor

pub mod entity_id;

pub use entity_id::EntityId;
