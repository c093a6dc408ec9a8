//! # Compare State
//!
//! Manages the current session's comparison selection.
//!
//! ## Compare Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Compare State Operations                             │
//! │                                                                         │
//! │  Storefront Action        Facade Method            Engine Change        │
//! │  ─────────────────        ─────────────            ─────────────        │
//! │                                                                         │
//! │  Tap compare icon ──────► toggle() ──────────────► entity in/out        │
//! │                                                                         │
//! │  Remove from table ─────► remove() ──────────────► entity removed       │
//! │                                                                         │
//! │  Clear comparison ──────► clear() ───────────────► selection emptied    │
//! │                                                                         │
//! │  Render compare page ───► get_selection() ───────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use edumart_core::catalog::CatalogProvider;
use edumart_core::compare::{ComparisonSelector, ToggleAction};
use edumart_core::types::{ComparableEntity, EntityKind};
use edumart_core::MAX_COMPARE_ENTRIES;

use crate::error::SessionError;

/// Comparison response for the side-by-side view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Selected entities, insertion order preserved.
    pub entries: Vec<ComparableEntity>,

    /// Kind of the current selection (`None` when empty).
    pub kind: Option<EntityKind>,

    /// How many more entities can be added before the cap.
    pub remaining_slots: usize,

    /// What the triggering toggle did, when the response came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ToggleAction>,
}

impl CompareResponse {
    fn from_selector(compare: &ComparisonSelector, action: Option<ToggleAction>) -> Self {
        CompareResponse {
            entries: compare.selection().to_vec(),
            kind: compare.kind(),
            remaining_slots: MAX_COMPARE_ENTRIES - compare.len(),
            action,
        }
    }
}

/// Session-managed comparison state.
#[derive(Clone)]
pub struct CompareState {
    compare: Arc<Mutex<ComparisonSelector>>,
}

impl CompareState {
    /// Creates a new empty comparison state for a session.
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        CompareState {
            compare: Arc::new(Mutex::new(ComparisonSelector::new(catalog))),
        }
    }

    /// Executes a function with read access to the selector.
    pub fn with_compare<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ComparisonSelector) -> R,
    {
        let compare = self.compare.lock().expect("Compare mutex poisoned");
        f(&compare)
    }

    /// Executes a function with write access to the selector.
    pub fn with_compare_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ComparisonSelector) -> R,
    {
        let mut compare = self.compare.lock().expect("Compare mutex poisoned");
        f(&mut compare)
    }

    /// Gets the current selection for rendering.
    pub fn get_selection(&self) -> CompareResponse {
        debug!("get_selection");
        self.with_compare(|c| CompareResponse::from_selector(c, None))
    }

    /// Toggles an entity in or out of the comparison.
    ///
    /// ## Returns
    /// Updated selection on success; a structured [`SessionError`] when the
    /// engine refuses (cap reached, mixed kinds, stale id). The selection is
    /// unchanged on refusal.
    pub fn toggle(&self, entity_id: &str) -> Result<CompareResponse, SessionError> {
        debug!(entity_id = %entity_id, "toggle_compare");

        self.with_compare_mut(|compare| {
            let action = compare.toggle(entity_id)?;
            Ok(CompareResponse::from_selector(compare, Some(action)))
        })
    }

    /// Removes an entity from the comparison. Absent entities are a no-op.
    pub fn remove(&self, entity_id: &str) -> CompareResponse {
        debug!(entity_id = %entity_id, "remove_compare");

        self.with_compare_mut(|compare| {
            compare.remove(entity_id);
            CompareResponse::from_selector(compare, None)
        })
    }

    /// Clears the comparison selection.
    pub fn clear(&self) -> CompareResponse {
        debug!("clear_compare");

        self.with_compare_mut(|compare| {
            compare.clear();
            CompareResponse::from_selector(compare, None)
        })
    }
}
