//! Fill-side harness for a rendered form.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use formsmith_fields::{content, FieldId, FieldInstance};
use scopeguard::defer;
use tracing::{debug, info};

use crate::error::{FormsError, Result};
use crate::pipeline::{self, InvalidFields, SubmissionOutcome};
use crate::store::FormStore;
use crate::types::ShareToken;
use crate::values::SubmissionValues;

/// What a submit attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Some fields failed validation and nothing was sent. Re-render keyed by
    /// `render_key`, which changes on every rejected attempt.
    Rejected {
        invalid: InvalidFields,
        render_key: u64,
    },
    /// The store accepted the submission
    Submitted,
}

/// Collects values for one rendered form and submits them.
///
/// At most one submit is in flight at a time; a second call while the first
/// awaits the store fails with `SubmissionInFlight`. After a store error the
/// filler is left ready to try again.
#[derive(Debug)]
pub struct FormFiller {
    token: ShareToken,
    fields: Vec<FieldInstance>,
    values: SubmissionValues,
    invalid: RwLock<InvalidFields>,
    render_key: AtomicU64,
    in_flight: AtomicBool,
    submitted: AtomicBool,
}

impl FormFiller {
    /// Open the form content fetched for `token`.
    pub fn open(token: ShareToken, content: &str) -> Result<Self> {
        let fields = content::decode(content)?;
        Ok(Self::new(token, fields))
    }

    pub fn new(token: ShareToken, fields: Vec<FieldInstance>) -> Self {
        Self {
            token,
            fields,
            values: SubmissionValues::new(),
            invalid: RwLock::default(),
            render_key: AtomicU64::new(0),
            in_flight: AtomicBool::new(false),
            submitted: AtomicBool::new(false),
        }
    }

    pub fn token(&self) -> &ShareToken {
        &self.token
    }

    pub fn fields(&self) -> &[FieldInstance] {
        &self.fields
    }

    pub fn values(&self) -> &SubmissionValues {
        &self.values
    }

    pub fn set_value(&mut self, id: &FieldId, value: impl Into<String>) {
        self.values.set(id, value);
    }

    /// Whether the last rejected attempt flagged this field.
    pub fn is_invalid(&self, id: &FieldId) -> bool {
        self.invalid
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    /// Key for the rendered form; bumped on each rejected attempt.
    pub fn render_key(&self) -> u64 {
        self.render_key.load(Ordering::SeqCst)
    }

    /// True while a submit awaits the store. The submit control should be
    /// disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, store: &dyn FormStore) -> Result<SubmitStatus> {
        if self.is_submitted() {
            return Err(FormsError::AlreadySubmitted);
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(FormsError::SubmissionInFlight);
        }
        defer! {
            self.in_flight.store(false, Ordering::SeqCst);
        }

        match pipeline::prepare(&self.fields, &self.values)? {
            SubmissionOutcome::Invalid(invalid) => {
                let render_key = self.render_key.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(
                    token = %self.token,
                    invalid = invalid.len(),
                    render_key,
                    "submission rejected"
                );
                *self.invalid.write().unwrap_or_else(PoisonError::into_inner) = invalid.clone();
                Ok(SubmitStatus::Rejected {
                    invalid,
                    render_key,
                })
            }
            SubmissionOutcome::Ready(json) => {
                *self.invalid.write().unwrap_or_else(PoisonError::into_inner) =
                    InvalidFields::default();
                store.submit_form(&self.token, &json).await?;
                self.submitted.store(true, Ordering::SeqCst);
                info!(token = %self.token, "form submitted");
                Ok(SubmitStatus::Submitted)
            }
        }
    }
}
