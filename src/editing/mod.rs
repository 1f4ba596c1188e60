// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod handles;
pub mod selection;
pub mod session;
pub mod sync;

pub use handles::{HandleKey, HandleManager};
pub use selection::Selection;
pub use session::EditSession;
