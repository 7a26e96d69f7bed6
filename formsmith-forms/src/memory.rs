//! In-memory `FormStore`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use formsmith_fields::content;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{FormsError, Result};
use crate::store::FormStore;
use crate::types::{
    FormId, FormRecord, FormShapeRules, FormWithSubmissions, NewForm, OwnerScope, ShareToken,
    SubmissionRecord,
};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    forms: BTreeMap<FormId, FormRecord>,
    submissions: Vec<SubmissionRecord>,
}

impl Inner {
    fn owned_mut(&mut self, owner: &str, id: FormId) -> Result<&mut FormRecord> {
        self.forms
            .get_mut(&id)
            .filter(|form| form.owner == owner)
            .ok_or_else(|| FormsError::form_not_found(id))
    }

    fn by_token_mut(&mut self, token: &ShareToken) -> Result<&mut FormRecord> {
        self.forms
            .values_mut()
            .find(|form| &form.share_token == token)
            .ok_or_else(|| FormsError::ShareTokenNotFound {
                token: token.to_string(),
            })
    }
}

/// Forms and submissions held behind a tokio `RwLock`. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    rules: FormShapeRules,
    inner: RwLock<Inner>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom name/description bounds for `create_form`.
    pub fn with_rules(rules: FormShapeRules) -> Self {
        Self {
            rules,
            inner: RwLock::default(),
        }
    }

    pub fn rules(&self) -> &FormShapeRules {
        &self.rules
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create_form(&self, owner: &OwnerScope, form: NewForm) -> Result<FormId> {
        let owner = owner.require()?;
        self.rules.check(&form)?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = FormId(inner.next_id);
        inner.forms.insert(
            id,
            FormRecord {
                id,
                owner: owner.to_string(),
                name: form.name.trim().to_string(),
                description: form.description,
                content: content::EMPTY.to_string(),
                published: false,
                visits: 0,
                submissions: 0,
                share_token: ShareToken::generate(),
                created_at: Utc::now(),
            },
        );
        info!(id = %id, owner, "created form");
        Ok(id)
    }

    async fn get_form(&self, owner: &OwnerScope, id: FormId) -> Result<Option<FormRecord>> {
        let owner = owner.require()?;
        let inner = self.inner.read().await;
        Ok(inner.forms.get(&id).filter(|f| f.owner == owner).cloned())
    }

    async fn get_form_with_submissions(
        &self,
        owner: &OwnerScope,
        id: FormId,
    ) -> Result<Option<FormWithSubmissions>> {
        let owner = owner.require()?;
        let inner = self.inner.read().await;
        let Some(form) = inner.forms.get(&id).filter(|f| f.owner == owner) else {
            return Ok(None);
        };
        let submissions = inner
            .submissions
            .iter()
            .filter(|s| s.form_id == id)
            .cloned()
            .collect();
        Ok(Some(FormWithSubmissions {
            form: form.clone(),
            submissions,
        }))
    }

    async fn save_form_content(
        &self,
        owner: &OwnerScope,
        id: FormId,
        content: &str,
    ) -> Result<()> {
        let owner = owner.require()?;
        let mut inner = self.inner.write().await;
        let form = inner.owned_mut(owner, id)?;
        form.content = content.to_string();
        debug!(id = %id, bytes = content.len(), "saved form content");
        Ok(())
    }

    async fn publish_form(&self, owner: &OwnerScope, id: FormId) -> Result<()> {
        let owner = owner.require()?;
        let mut inner = self.inner.write().await;
        let form = inner.owned_mut(owner, id)?;
        form.published = true;
        info!(id = %id, token = %form.share_token, "published form");
        Ok(())
    }

    async fn submit_form(&self, token: &ShareToken, values: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        let form = inner.by_token_mut(token)?;
        if !form.published {
            warn!(token = %token, "submission to unpublished form");
            return Err(FormsError::NotPublished {
                token: token.to_string(),
            });
        }
        form.submissions += 1;
        let form_id = form.id;
        inner.submissions.push(SubmissionRecord {
            form_id,
            content: values.to_string(),
            created_at: Utc::now(),
        });
        info!(id = %form_id, "accepted submission");
        Ok(())
    }

    async fn get_form_content_by_share_token(&self, token: &ShareToken) -> Result<String> {
        let mut inner = self.inner.write().await;
        let form = inner.by_token_mut(token)?;
        form.visits += 1;
        debug!(id = %form.id, visits = form.visits, "form visited");
        Ok(form.content.clone())
    }

    async fn list_forms(&self, owner: &OwnerScope) -> Result<Vec<FormRecord>> {
        let owner = owner.require()?;
        let inner = self.inner.read().await;
        let mut forms: Vec<FormRecord> = inner
            .forms
            .values()
            .filter(|f| f.owner == owner)
            .cloned()
            .collect();
        forms.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(forms)
    }
}
