//! Forms: filling, validating, and submitting designed forms
//!
//! This crate sits between a rendered form and whatever stores forms and
//! their submissions.
//!
//! - [`pipeline`] validates collected values against a field list and, when
//!   every field passes, serializes them for submission
//! - [`FormFiller`] is the fill-side harness: it collects values, re-keys the
//!   render after a failed attempt, and allows one submit in flight at a time
//! - [`FormStore`] is the persistence contract; [`MemoryFormStore`] implements
//!   it in memory
//! - [`FormStats`] and [`SubmissionsTable`] derive the owner-facing views
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use formsmith_forms::{FormFiller, FormStore, MemoryFormStore, NewForm, OwnerScope};
//!
//! # async fn example() -> formsmith_forms::Result<()> {
//! let store = MemoryFormStore::new();
//! let owner = OwnerScope::user("user_1");
//!
//! let id = store.create_form(&owner, NewForm::new("Feedback", "")).await?;
//! store.publish_form(&owner, id).await?;
//! let token = store.get_form(&owner, id).await?.unwrap().share_token;
//!
//! let content = store.get_form_content_by_share_token(&token).await?;
//! let filler = FormFiller::open(token, &content)?;
//! let status = filler.submit(&store).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod filler;
mod memory;
pub mod pipeline;
mod stats;
mod store;
pub mod table;
mod types;
mod values;

pub use error::{FormsError, Result};
pub use filler::{FormFiller, SubmitStatus};
pub use memory::MemoryFormStore;
pub use pipeline::{InvalidFields, SubmissionOutcome};
pub use stats::FormStats;
pub use store::FormStore;
pub use table::SubmissionsTable;
pub use types::{
    FormId, FormRecord, FormShapeRules, FormWithSubmissions, NewForm, OwnerScope, ShareToken,
    SubmissionRecord,
};
pub use values::SubmissionValues;
