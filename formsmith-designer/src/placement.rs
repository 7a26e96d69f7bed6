//! Placement engine: turns a finished drag gesture into a state mutation.
//!
//! Resolution is split in two so the decision can be tested without a
//! rendering harness:
//!
//! - [`resolve_gesture`] classifies a [`DragContext`] against the current state
//!   and returns a [`MutationCommand`]
//! - [`apply`] performs the command on a [`DesignerState`]
//!
//! The drop classification rules, first match wins:
//!
//! 1. palette token over the canvas: append a new instance
//! 2. palette token over an instance half: insert a new instance before
//!    (top) or after (bottom) that instance
//! 3. placed instance over a different instance half: move it there
//! 4. anything else: no mutation

use formsmith_fields::{FieldId, FieldKind, Registry};
use tracing::debug;

use crate::error::{DesignerError, Result};
use crate::state::DesignerState;

/// Which half of a target instance the pointer is over. Supplied by the
/// host's geometry (pointer Y against the target's midpoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// Offset from the target's index at which a dropped item lands.
    fn offset(self) -> usize {
        match self {
            Half::Top => 0,
            Half::Bottom => 1,
        }
    }
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOrigin {
    /// A palette button for a kind
    Palette(FieldKind),
    /// An instance already placed on the canvas
    Instance(FieldId),
}

/// Where the dragged token is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The canvas-level drop zone, not any specific instance
    Canvas,
    /// One half of a placed instance
    Instance { id: FieldId, half: Half },
}

impl DropTarget {
    pub fn instance(id: impl Into<FieldId>, half: Half) -> Self {
        Self::Instance {
            id: id.into(),
            half,
        }
    }
}

/// Per-gesture data: the dragged token and the current drop target, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragContext {
    pub origin: DragOrigin,
    pub target: Option<DropTarget>,
}

impl DragContext {
    pub fn new(origin: DragOrigin) -> Self {
        Self {
            origin,
            target: None,
        }
    }

    pub fn over(mut self, target: DropTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// The state mutation a resolved gesture asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationCommand {
    /// Construct a new instance of `kind` and insert it at `index`
    Insert { kind: FieldKind, index: usize },
    /// Move `id` next to `target`; the landing index is computed after `id`
    /// has been taken out
    Move {
        id: FieldId,
        target: FieldId,
        half: Half,
    },
    /// Nothing to do
    None,
}

/// Decide what a drop means. Pure: reads `state`, never changes it.
///
/// Fails only when a drop target id is not placed, which the host should never
/// produce since targets come from rendered instances.
pub fn resolve_gesture(ctx: &DragContext, state: &DesignerState) -> Result<MutationCommand> {
    let command = match (&ctx.origin, &ctx.target) {
        (DragOrigin::Palette(kind), Some(DropTarget::Canvas)) => MutationCommand::Insert {
            kind: *kind,
            index: state.len(),
        },
        (DragOrigin::Palette(kind), Some(DropTarget::Instance { id, half })) => {
            let index = state
                .index_of(id)
                .ok_or_else(|| DesignerError::instance_not_found(id))?;
            MutationCommand::Insert {
                kind: *kind,
                index: index + half.offset(),
            }
        }
        (DragOrigin::Instance(dragged), Some(DropTarget::Instance { id: target, half }))
            if dragged != target =>
        {
            if !state.contains(target) {
                return Err(DesignerError::instance_not_found(target));
            }
            if state.contains(dragged) {
                MutationCommand::Move {
                    id: dragged.clone(),
                    target: target.clone(),
                    half: *half,
                }
            } else {
                // Already handled by an earlier duplicate drop event.
                MutationCommand::None
            }
        }
        _ => MutationCommand::None,
    };

    debug!(?command, "resolved gesture");
    Ok(command)
}

/// Perform `command` on `state`. Returns the id of the inserted or moved
/// instance, or `None` when nothing changed.
pub fn apply(state: &mut DesignerState, command: MutationCommand) -> Result<Option<FieldId>> {
    match command {
        MutationCommand::Insert { kind, index } => {
            let instance = Registry::construct(kind, FieldId::generate());
            let id = instance.id.clone();
            state.insert(index, instance);
            Ok(Some(id))
        }
        MutationCommand::Move { id, target, half } => {
            // Dropping an instance onto itself leaves the order as it was.
            if id == target {
                return Ok(None);
            }
            let Some(origin) = state.index_of(&id) else {
                return Ok(None);
            };
            if !state.contains(&target) {
                return Err(DesignerError::instance_not_found(&target));
            }

            let selected = state.selected_id().cloned();
            let Some(snapshot) = state.remove(&id) else {
                return Ok(None);
            };
            // The removal may have shifted the target up by one.
            let Some(target_index) = state.index_of(&target) else {
                state.insert(origin, snapshot);
                state.select(selected);
                return Err(DesignerError::instance_not_found(&target));
            };
            state.insert(target_index + half.offset(), snapshot);
            state.select(selected);

            Ok(Some(id))
        }
        MutationCommand::None => Ok(None),
    }
}
