//! The ordered field list and the selection.
//!
//! Order is visual top-to-bottom layout order. All mutations are synchronous;
//! a read after any call returns reflects the new state.

use formsmith_fields::{FieldId, FieldInstance};
use tracing::{debug, warn};

/// Ordered field instances plus the currently selected one.
///
/// Invariant: no two elements share an id. Every mutation goes through the
/// methods below, which keep it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignerState {
    elements: Vec<FieldInstance>,
    selected: Option<FieldId>,
}

impl DesignerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing field list, e.g. decoded form content.
    ///
    /// Later duplicates of an id are dropped.
    pub fn from_elements(elements: Vec<FieldInstance>) -> Self {
        let mut state = Self::new();
        for instance in elements {
            let end = state.len();
            state.insert(end, instance);
        }
        state
    }

    pub fn elements(&self) -> &[FieldInstance] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current position of `id`.
    pub fn index_of(&self, id: &FieldId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldInstance> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.index_of(id).is_some()
    }

    /// Insert at `index`, shifting later elements right. `index` is clamped
    /// to `0..=len`.
    ///
    /// Returns `false` without changing anything if an instance with the same
    /// id is already placed.
    pub fn insert(&mut self, index: usize, instance: FieldInstance) -> bool {
        if self.contains(&instance.id) {
            warn!(id = %instance.id, "refusing to insert duplicate field id");
            return false;
        }
        let index = index.min(self.elements.len());
        debug!(id = %instance.id, kind = %instance.kind, index, "insert field");
        self.elements.insert(index, instance);
        true
    }

    /// Remove the instance with `id`. Idempotent: a missing id is a no-op.
    ///
    /// Removing the selected instance clears the selection.
    pub fn remove(&mut self, id: &FieldId) -> Option<FieldInstance> {
        let index = self.index_of(id)?;
        let removed = self.elements.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!(id = %id, index, "remove field");
        Some(removed)
    }

    /// Replace the attributes of the instance with `id`, keeping its position,
    /// id, and kind. Returns `false` if `id` is absent.
    pub fn replace(&mut self, id: &FieldId, instance: &FieldInstance) -> bool {
        match self.elements.iter_mut().find(|e| &e.id == id) {
            Some(existing) => {
                existing.attributes = instance.attributes.clone();
                debug!(id = %id, "replace field attributes");
                true
            }
            None => false,
        }
    }

    /// Set or clear the selection.
    ///
    /// Selecting an id that is not placed is allowed; [`Self::selected`] then
    /// returns `None` until that id appears.
    pub fn select(&mut self, id: Option<FieldId>) {
        self.selected = id;
    }

    /// The selected instance, if it is placed.
    pub fn selected(&self) -> Option<&FieldInstance> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_fields::{FieldKind, Registry};

    fn field(id: &str) -> FieldInstance {
        Registry::construct(FieldKind::Text, FieldId::from(id))
    }

    fn ids(state: &DesignerState) -> Vec<&str> {
        state.elements().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn insert_shifts_right() {
        let mut state = DesignerState::new();
        state.insert(0, field("a"));
        state.insert(1, field("c"));
        state.insert(1, field("b"));
        assert_eq!(ids(&state), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_clamps_index() {
        let mut state = DesignerState::new();
        state.insert(42, field("a"));
        state.insert(7, field("b"));
        assert_eq!(ids(&state), vec!["a", "b"]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut state = DesignerState::new();
        assert!(state.insert(0, field("a")));
        assert!(!state.insert(0, field("a")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = DesignerState::from_elements(vec![field("a"), field("b")]);
        assert!(state.remove(&FieldId::from("a")).is_some());
        let after_first = state.clone();
        assert!(state.remove(&FieldId::from("a")).is_none());
        assert_eq!(state, after_first);
    }

    #[test]
    fn remove_clears_matching_selection() {
        let mut state = DesignerState::from_elements(vec![field("a"), field("b")]);
        state.select(Some(FieldId::from("b")));
        state.remove(&FieldId::from("a"));
        assert_eq!(state.selected_id(), Some(&FieldId::from("b")));
        state.remove(&FieldId::from("b"));
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn replace_keeps_position_and_identity() {
        let mut state = DesignerState::from_elements(vec![field("a"), field("b"), field("c")]);
        let mut edited = field("b");
        edited.attributes.set("label", "Email");
        edited.kind = FieldKind::Number;

        assert!(state.replace(&FieldId::from("b"), &edited));
        let b = &state.elements()[1];
        assert_eq!(b.id.as_str(), "b");
        assert_eq!(b.kind, FieldKind::Text);
        assert_eq!(b.attributes.label(), Some("Email"));
    }

    #[test]
    fn replace_missing_is_noop() {
        let mut state = DesignerState::from_elements(vec![field("a")]);
        let before = state.clone();
        assert!(!state.replace(&FieldId::from("zz"), &field("zz")));
        assert_eq!(state, before);
    }

    #[test]
    fn orphaned_selection_reads_as_none() {
        let mut state = DesignerState::new();
        state.select(Some(FieldId::from("ghost")));
        assert!(state.selected().is_none());
        state.insert(0, field("ghost"));
        assert_eq!(state.selected().map(|e| e.id.as_str()), Some("ghost"));
    }

    #[test]
    fn from_elements_drops_duplicates() {
        let state = DesignerState::from_elements(vec![field("a"), field("a"), field("b")]);
        assert_eq!(ids(&state), vec!["a", "b"]);
    }
}
