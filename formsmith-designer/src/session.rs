//! The handle the host passes around while a form is open
//! for editing.
//!
//! A session owns its state outright, so independent sessions (one per open
//! form, or one per test) never share anything. It is created empty or from
//! stored content and discarded once its content has been saved elsewhere.

use formsmith_fields::{
    content, Attributes, FieldId, FieldInstance, FieldKind, FieldKindDescriptor, Registry,
};
use tracing::{debug, info};

use crate::error::{DesignerError, Result};
use crate::gesture::Gesture;
use crate::placement::{apply, DragOrigin, DropTarget, MutationCommand};
use crate::state::DesignerState;

/// One editing session over one form definition.
#[derive(Debug, Clone, Default)]
pub struct DesignerSession {
    state: DesignerState,
    gesture: Gesture,
}

impl DesignerSession {
    /// An empty designer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session on stored form content.
    pub fn load(stored: &str) -> Result<Self> {
        let fields = content::decode(stored)?;
        info!(fields = fields.len(), "designer session opened");
        Ok(Self {
            state: DesignerState::from_elements(fields),
            gesture: Gesture::new(),
        })
    }

    /// Serialize the current field list for saving.
    pub fn content(&self) -> Result<String> {
        Ok(content::encode(self.state.elements())?)
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    pub fn elements(&self) -> &[FieldInstance] {
        self.state.elements()
    }

    pub fn selected(&self) -> Option<&FieldInstance> {
        self.state.selected()
    }

    /// Kinds offered by the palette, in display order.
    pub fn palette(&self) -> impl Iterator<Item = &'static FieldKindDescriptor> {
        Registry::palette()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    // --- Gesture events ---

    pub fn pick_up(&mut self, origin: DragOrigin) {
        self.gesture.pick_up(origin);
    }

    pub fn hover(&mut self, target: Option<DropTarget>) {
        self.gesture.hover(target);
    }

    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Release the dragged token and apply what the drop means.
    ///
    /// Returns the id of the inserted or moved instance, or `None` if the
    /// drop changed nothing.
    pub fn release(&mut self) -> Result<Option<FieldId>> {
        let command = self.gesture.release(&self.state)?;
        self.execute(command)
    }

    /// Apply a command directly, bypassing the gesture machine.
    pub fn execute(&mut self, command: MutationCommand) -> Result<Option<FieldId>> {
        apply(&mut self.state, command)
    }

    // --- Direct edits ---

    /// Append a new instance of `kind`, as a palette drop on the canvas would.
    pub fn add(&mut self, kind: FieldKind) -> FieldId {
        let instance = Registry::construct(kind, FieldId::generate());
        let id = instance.id.clone();
        let end = self.state.len();
        self.state.insert(end, instance);
        id
    }

    /// Delete an instance. Idempotent.
    pub fn remove(&mut self, id: &FieldId) -> Option<FieldInstance> {
        self.state.remove(id)
    }

    /// Select an instance, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<&FieldId>) -> Result<()> {
        match id {
            Some(id) if !self.state.contains(id) => Err(DesignerError::instance_not_found(id)),
            _ => {
                self.state.select(id.cloned());
                Ok(())
            }
        }
    }

    /// Apply a properties panel edit to `id`.
    ///
    /// The attributes are checked against the kind first; on failure nothing
    /// changes. Applying select-field properties closes the panel by clearing
    /// the selection.
    pub fn update_properties(&mut self, id: &FieldId, attributes: Attributes) -> Result<()> {
        let current = self
            .state
            .get(id)
            .ok_or_else(|| DesignerError::instance_not_found(id))?;
        let kind = current.kind;
        Registry::check_properties(kind, &attributes)?;

        let updated = current.with_attributes(attributes);
        self.state.replace(id, &updated);
        if kind == FieldKind::Select {
            self.state.select(None);
        }
        debug!(id = %id, kind = %kind, "properties applied");
        Ok(())
    }
}
