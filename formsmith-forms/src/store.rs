//! The persistence contract forms are saved to and submitted through.

use async_trait::async_trait;

use crate::error::Result;
use crate::stats::FormStats;
use crate::types::{FormId, FormRecord, FormWithSubmissions, NewForm, OwnerScope, ShareToken};

/// Storage for forms and their submissions.
///
/// Owner-scoped operations fail with `Unauthenticated` for an anonymous
/// scope and only see forms that scope owns. Share-token operations need no
/// owner.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Create an empty, unpublished form. The name and description are
    /// checked against the store's shape rules.
    async fn create_form(&self, owner: &OwnerScope, form: NewForm) -> Result<FormId>;

    async fn get_form(&self, owner: &OwnerScope, id: FormId) -> Result<Option<FormRecord>>;

    async fn get_form_with_submissions(
        &self,
        owner: &OwnerScope,
        id: FormId,
    ) -> Result<Option<FormWithSubmissions>>;

    /// Overwrite the stored field list.
    async fn save_form_content(&self, owner: &OwnerScope, id: FormId, content: &str)
        -> Result<()>;

    /// One-way: there is no unpublish.
    async fn publish_form(&self, owner: &OwnerScope, id: FormId) -> Result<()>;

    /// Append a submission and bump the submission counter. Fails with
    /// `NotPublished` unless the form behind `token` is published.
    async fn submit_form(&self, token: &ShareToken, values: &str) -> Result<()>;

    /// Read a form's field list for filling. Every call counts as a visit.
    async fn get_form_content_by_share_token(&self, token: &ShareToken) -> Result<String>;

    /// Every form the owner has, newest first.
    async fn list_forms(&self, owner: &OwnerScope) -> Result<Vec<FormRecord>>;

    /// Visit and submission totals over the owner's forms.
    async fn stats(&self, owner: &OwnerScope) -> Result<FormStats> {
        let forms = self.list_forms(owner).await?;
        Ok(FormStats::aggregate(
            forms.iter().map(|form| (form.visits, form.submissions)),
        ))
    }
}
