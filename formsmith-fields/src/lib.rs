//! Field kind registry and form content codec
//!
//! `formsmith-fields` owns the closed set of field kinds a form can contain.
//! Every kind is a self-contained bundle: default attributes, a constructor,
//! a validation predicate for submitted values, and a properties check for
//! designer edits. It knows nothing about drag gestures or persistence.
//!
//! # Architecture
//!
//! - **Closed tag set**: [`FieldKind`] is a plain enum; the registry is a lookup
//!   table indexed by the tag, so every lookup is total
//! - **Instances own their attributes**: [`Registry::construct`] hands out a fresh
//!   attribute map per call, never a shared one
//! - **Content is JSON text**: [`content::encode`] / [`content::decode`] turn a
//!   field list into the opaque string the persistence layer stores

pub mod content;
pub mod error;
pub mod kinds;
mod properties;
pub mod registry;
pub mod types;

pub use error::{FieldsError, Result};
pub use registry::{FieldKindDescriptor, Registry};
pub use types::{Attributes, Capabilities, FieldId, FieldInstance, FieldKind};
