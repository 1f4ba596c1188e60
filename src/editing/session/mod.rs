// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - interactive editing state for a single bezier path

mod hit_testing;
mod path_editing;


use super::handles::HandleManager;
use super::selection::Selection;
use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::error::EditError;
use crate::model::EntityId;
use crate::path::BezierPath;
use kurbo::Affine;

/// Editing session for one path at a time
///
/// While a path is active its anchors are held in local space, every anchor
/// has a handle visual on the canvas, and the selected anchor (if any) also
/// shows its control handles and guide lines. All visuals are created
/// through the canvas the session owns, and removed again by
/// [`EditSession::deactivate`].
#[derive(Debug)]
pub struct EditSession<C: Canvas> {
    canvas: C,

    config: EditorConfig,

    /// The path being edited, in local space
    path: Option<BezierPath>,

    handles: HandleManager,

    selection: Selection,

    /// Anchor under the pointer, used to tell anchor clicks from curve clicks
    hover_anchor: Option<EntityId>,
}

impl<C: Canvas> EditSession<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, EditorConfig::default())
    }

    pub fn with_config(canvas: C, config: EditorConfig) -> Self {
        Self {
            canvas,
            handles: HandleManager::new(config.clone()),
            config,
            path: None,
            selection: Selection::Idle,
            hover_anchor: None,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn handles(&self) -> &HandleManager {
        &self.handles
    }

    /// The path being edited
    pub fn path(&self) -> Option<&BezierPath> {
        self.path.as_ref()
    }

    /// Report and clear the active path's dirty flag
    pub fn take_dirty(&mut self) -> bool {
        self.path.as_mut().is_some_and(|p| p.take_dirty())
    }

    pub fn is_active(&self) -> bool {
        self.path.is_some()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_anchor_id(&self) -> Option<EntityId> {
        self.selection.anchor()
    }

    pub fn hover_anchor_id(&self) -> Option<EntityId> {
        self.hover_anchor
    }

    // ===== LIFECYCLE =====

    /// Start editing a path
    ///
    /// Any path already being edited is deactivated first and handed back.
    pub fn activate(&mut self, mut path: BezierPath) -> Option<BezierPath> {
        let previous = self.deactivate();

        path.to_local();
        path.selected_anchor_id = None;
        for anchor in path.world_anchors() {
            self.handles.create_anchor_handle(&anchor, false, &mut self.canvas);
        }
        path.rebuild();
        self.canvas.request_render();

        tracing::info!("Editing path {} ({} anchors)", path.id, path.len());
        self.path = Some(path);
        previous
    }

    /// Stop editing and return the path, converted back to world space
    ///
    /// Removes every visual the session created. Calling this with no active
    /// path only repeats the sweep.
    pub fn deactivate(&mut self) -> Option<BezierPath> {
        self.handles.clear_handles(&mut self.canvas);
        self.selection = Selection::Idle;
        self.hover_anchor = None;

        let mut path = self.path.take()?;
        path.selected_anchor_id = None;
        path.to_world();
        path.rebuild();
        tracing::info!("Finished editing path {}", path.id);
        Some(path)
    }

    // ===== TRANSFORM EVENTS =====

    /// The host changed the path object's transform
    ///
    /// World positions are re-derived from the stored local coordinates, the
    /// handles follow, and the geometry is rebuilt.
    pub fn on_transform(&mut self, transform: Affine) -> Result<(), EditError> {
        let Some(path) = self.path.as_mut() else {
            return no_session("on_transform");
        };
        path.set_transform(transform)?;
        path.rebuild();
        tracing::debug!("Path {} transform -> {:?}", path.id, transform.as_coeffs());
        self.refresh_handles();
        Ok(())
    }

    /// Reposition every anchor handle (and the selected anchor's controls)
    pub fn update_anchor_handles(&mut self) {
        if self.path.is_none() {
            tracing::debug!("update_anchor_handles: no active session");
            return;
        }
        self.refresh_handles();
    }

    fn refresh_handles(&mut self) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let selected = self.selection.anchor();
        self.handles
            .update_anchor_handles(path, selected, &mut self.canvas);
        if let Some(id) = selected {
            self.handles
                .update_control_handles(path, id, &mut self.canvas);
            self.handles.update_guide_lines(path, id, &mut self.canvas);
        }
    }
}

fn no_session<T>(operation: &str) -> Result<T, EditError> {
    tracing::warn!("{}: no active session", operation);
    Err(EditError::NoActiveSession)
}

fn anchor_not_found<T>(operation: &str, id: EntityId) -> Result<T, EditError> {
    tracing::warn!("{}: anchor {} not found", operation, id);
    Err(EditError::AnchorNotFound(id))
}
