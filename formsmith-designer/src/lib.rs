//! Designer core for Formsmith
//!
//! A [`DesignerSession`] owns one form's editing state: the ordered list of
//! placed field instances and the current selection. Drag gestures flow
//! through a [`Gesture`] and are turned into a [`MutationCommand`] by
//! [`resolve_gesture`], a pure function over a [`DragContext`] and the current
//! state. No UI toolkit is involved; the host feeds pick-up, hover, release and
//! cancel events and re-reads the session afterwards.
//!
//! ## Basic Usage
//!
//! ```rust
//! use formsmith_designer::{DesignerSession, DragOrigin, DropTarget, Half};
//! use formsmith_fields::FieldKind;
//!
//! # fn example() -> formsmith_designer::Result<()> {
//! let mut session = DesignerSession::new();
//!
//! // Drag a text field from the palette onto the empty canvas
//! session.pick_up(DragOrigin::Palette(FieldKind::Text));
//! session.hover(Some(DropTarget::Canvas));
//! session.release()?;
//!
//! // Drop a checkbox under it
//! let first = session.elements()[0].id.clone();
//! session.pick_up(DragOrigin::Palette(FieldKind::Checkbox));
//! session.hover(Some(DropTarget::instance(first, Half::Bottom)));
//! session.release()?;
//!
//! assert_eq!(session.elements()[1].kind, FieldKind::Checkbox);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
pub mod gesture;
pub mod placement;
mod session;
pub mod state;

pub use error::{DesignerError, Result};
pub use gesture::{Gesture, GesturePhase};
pub use placement::{
    apply, resolve_gesture, DragContext, DragOrigin, DropTarget, Half, MutationCommand,
};
pub use session::DesignerSession;
pub use state::DesignerState;
