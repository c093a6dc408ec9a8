//! # Comparison Selection
//!
//! Maintains a capped, homogeneous selection of schools or teachers for
//! side-by-side display.
//!
//! ## Selection States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Comparison Selector States                           │
//! │                                                                         │
//! │          toggle-add           toggle-add            toggle-add          │
//! │  ┌───────┐ ─────► ┌─────────────────────┐ ─────► ┌──────────┐          │
//! │  │ empty │        │   partial (1-3)     │        │ full (4) │          │
//! │  └───────┘ ◄───── └─────────────────────┘ ◄───── └──────────┘          │
//! │      ▲     remove     │          ▲         remove      │                │
//! │      │                │          │                     │                │
//! │      │                └── add/remove within [1,3] ─────┘                │
//! │      │                                                 │                │
//! │      └────────────────── clear() (from any state) ─────┘                │
//! │                                                                         │
//! │  A 5th distinct add is refused (CompareLimitReached), selection kept.   │
//! │  A mismatched kind is refused (KindMismatch), selection kept.           │
//! │  No terminal state: the selector is reusable for the whole session.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::CatalogProvider;
use crate::error::{CoreError, CoreResult};
use crate::types::{ComparableEntity, EntityKind};
use crate::MAX_COMPARE_ENTRIES;

// =============================================================================
// Toggle Action
// =============================================================================

/// What a successful [`ComparisonSelector::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// The entity was added to the selection.
    Added,
    /// The entity was removed from the selection.
    Removed,
}

// =============================================================================
// Comparison Selector
// =============================================================================

/// A bounded, ordered, homogeneous selection of entities for comparison.
///
/// ## Kind Policy
/// The selection is all-schools or all-teachers. An attempt to add the other
/// kind is **rejected** with [`CoreError::KindMismatch`] and the selection is
/// left untouched; clearing first is the supported way to switch. The
/// alternative (implicitly clearing and restarting with the new kind) would
/// throw away up to three picks on one tap, so the storefront asks instead.
///
/// ## Snapshots
/// Selected entities are stored as snapshots taken at toggle time, so the
/// comparison table keeps rendering consistently even if a profile is
/// delisted mid-session. Removal by id always works on the snapshot set.
pub struct ComparisonSelector {
    catalog: Arc<dyn CatalogProvider>,
    selected: Vec<ComparableEntity>,
}

impl ComparisonSelector {
    /// Creates an empty selector over an injected catalog provider.
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        ComparisonSelector {
            catalog,
            selected: Vec::new(),
        }
    }

    /// Toggles an entity in or out of the selection.
    ///
    /// ## Behavior
    /// - Already selected: removed, `Ok(Removed)`. Always succeeds, even if
    ///   the entity has since left the catalog.
    /// - Not selected: resolved via the provider, then appended if the
    ///   selection has room and the kind matches.
    /// - Two toggles of the same id always return the selection to its prior
    ///   state.
    ///
    /// ## Errors
    /// - [`CoreError::EntityNotFound`] - id does not resolve in the catalog
    /// - [`CoreError::CompareLimitReached`] - selection already holds
    ///   [`MAX_COMPARE_ENTRIES`]; state unchanged
    /// - [`CoreError::KindMismatch`] - entity kind differs from the current
    ///   members; state unchanged
    pub fn toggle(&mut self, entity_id: &str) -> CoreResult<ToggleAction> {
        if self.remove(entity_id) {
            return Ok(ToggleAction::Removed);
        }

        let entity = self
            .catalog
            .find_entity(entity_id)
            .ok_or_else(|| CoreError::EntityNotFound(entity_id.to_string()))?;

        if self.selected.len() >= MAX_COMPARE_ENTRIES {
            return Err(CoreError::CompareLimitReached {
                max: MAX_COMPARE_ENTRIES,
            });
        }

        if let Some(kind) = self.kind() {
            if kind != entity.kind {
                return Err(CoreError::KindMismatch {
                    selected: kind,
                    attempted: entity.kind,
                });
            }
        }

        self.selected.push(entity);
        Ok(ToggleAction::Added)
    }

    /// Removes an entity by id. Returns whether it was selected; removing an
    /// absent entity is a no-op, not an error.
    pub fn remove(&mut self, entity_id: &str) -> bool {
        let initial_len = self.selected.len();
        self.selected.retain(|e| e.id != entity_id);
        self.selected.len() != initial_len
    }

    /// Clears the selection unconditionally.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns the selected entities, insertion order preserved.
    pub fn selection(&self) -> &[ComparableEntity] {
        &self.selected
    }

    /// Checks if an entity is currently selected.
    pub fn contains(&self, entity_id: &str) -> bool {
        self.selected.iter().any(|e| e.id == entity_id)
    }

    /// The kind of the current members, or `None` when empty.
    pub fn kind(&self) -> Option<EntityKind> {
        self.selected.first().map(|e| e.kind)
    }

    /// Number of selected entities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Checks if the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Checks if the selection holds the maximum number of entries.
    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARE_ENTRIES
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn entity(id: &str, kind: EntityKind) -> ComparableEntity {
        ComparableEntity {
            id: id.to_string(),
            kind,
            name: format!("Entity {}", id),
            rating: 4.5,
            review_count: 100,
            location: None,
            headline: None,
        }
    }

    fn selector() -> ComparisonSelector {
        let catalog = Arc::new(StaticCatalog::new(
            Vec::new(),
            vec![
                entity("s1", EntityKind::School),
                entity("s2", EntityKind::School),
                entity("s3", EntityKind::School),
                entity("s4", EntityKind::School),
                entity("s5", EntityKind::School),
                entity("t1", EntityKind::Teacher),
            ],
        ));
        ComparisonSelector::new(catalog)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut compare = selector();

        assert_eq!(compare.toggle("s1").unwrap(), ToggleAction::Added);
        assert!(compare.contains("s1"));
        assert_eq!(compare.len(), 1);

        assert_eq!(compare.toggle("s1").unwrap(), ToggleAction::Removed);
        assert!(!compare.contains("s1"));
        assert!(compare.is_empty());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut compare = selector();
        compare.toggle("s1").unwrap();
        compare.toggle("s2").unwrap();

        let before: Vec<String> = compare.selection().iter().map(|e| e.id.clone()).collect();
        compare.toggle("s3").unwrap();
        compare.toggle("s3").unwrap();
        let after: Vec<String> = compare.selection().iter().map(|e| e.id.clone()).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_selection_preserves_insertion_order() {
        let mut compare = selector();
        compare.toggle("s3").unwrap();
        compare.toggle("s1").unwrap();
        compare.toggle("s2").unwrap();

        let ids: Vec<&str> = compare.selection().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s1", "s2"]);
    }

    #[test]
    fn test_fifth_add_is_refused_and_state_unchanged() {
        let mut compare = selector();
        for id in ["s1", "s2", "s3", "s4"] {
            compare.toggle(id).unwrap();
        }
        assert!(compare.is_full());

        let err = compare.toggle("s5").unwrap_err();
        assert!(matches!(err, CoreError::CompareLimitReached { max: 4 }));

        let ids: Vec<&str> = compare.selection().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
    }

    #[test]
    fn test_full_selection_still_allows_toggle_off() {
        let mut compare = selector();
        for id in ["s1", "s2", "s3", "s4"] {
            compare.toggle(id).unwrap();
        }

        // full → partial via toggle-off, then a different add fits again
        assert_eq!(compare.toggle("s2").unwrap(), ToggleAction::Removed);
        assert_eq!(compare.toggle("s5").unwrap(), ToggleAction::Added);
        assert!(compare.is_full());
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut compare = selector();
        compare.toggle("s1").unwrap();

        let err = compare.toggle("t1").unwrap_err();
        assert!(matches!(
            err,
            CoreError::KindMismatch {
                selected: EntityKind::School,
                attempted: EntityKind::Teacher,
            }
        ));
        assert_eq!(compare.len(), 1);
        assert_eq!(compare.kind(), Some(EntityKind::School));
    }

    #[test]
    fn test_clear_allows_switching_kind() {
        let mut compare = selector();
        compare.toggle("s1").unwrap();
        compare.clear();

        assert!(compare.is_empty());
        assert_eq!(compare.kind(), None);
        compare.toggle("t1").unwrap();
        assert_eq!(compare.kind(), Some(EntityKind::Teacher));
    }

    #[test]
    fn test_unknown_entity_reports_not_found() {
        let mut compare = selector();
        let err = compare.toggle("ghost").unwrap_err();
        assert!(matches!(err, CoreError::EntityNotFound(_)));
        assert!(compare.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut compare = selector();
        assert!(!compare.remove("s1"));

        compare.toggle("s1").unwrap();
        assert!(compare.remove("s1"));
        assert!(!compare.remove("s1"));
    }
}
