//! One pick-up-to-release drag interaction.
//!
//! ```text
//! idle --pick_up--> dragging --release--> (resolved) --> idle
//!                      |  ^
//!                      |  +-- hover (updates the drop target)
//!                      +--cancel--> idle
//! ```
//!
//! Resolution happens exactly once per gesture; the context is discarded
//! whatever the outcome. Cancelling never touches the designer state.

use tracing::{debug, trace};

use crate::error::Result;
use crate::placement::{resolve_gesture, DragContext, DragOrigin, DropTarget, MutationCommand};
use crate::state::DesignerState;

/// Where a gesture is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// Drives one drag at a time.
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    phase: GesturePhase,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// The live drag context, if dragging.
    pub fn context(&self) -> Option<&DragContext> {
        match &self.phase {
            GesturePhase::Dragging(ctx) => Some(ctx),
            GesturePhase::Idle => None,
        }
    }

    /// Start dragging `origin`. A gesture already in progress is abandoned.
    pub fn pick_up(&mut self, origin: DragOrigin) {
        if self.is_dragging() {
            debug!("pick-up while dragging, previous gesture abandoned");
        }
        trace!(?origin, "pick up");
        self.phase = GesturePhase::Dragging(DragContext::new(origin));
    }

    /// Update the drop target under the pointer. Ignored when idle.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let GesturePhase::Dragging(ctx) = &mut self.phase {
            ctx.target = target;
        }
    }

    /// End the gesture and decide what it means. Returns to idle even when
    /// resolution fails. Releasing while idle resolves to no mutation.
    pub fn release(&mut self, state: &DesignerState) -> Result<MutationCommand> {
        match std::mem::take(&mut self.phase) {
            GesturePhase::Dragging(ctx) => resolve_gesture(&ctx, state),
            GesturePhase::Idle => Ok(MutationCommand::None),
        }
    }

    /// Abandon the gesture with no effect.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            trace!("gesture cancelled");
        }
        self.phase = GesturePhase::Idle;
    }
}
