//! Form records, submissions, and the identifiers the store hands out.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{FormsError, Result};

/// Numeric id of a form, unique per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public identifier for filling a published form without signing in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn generate() -> Self {
        Self(Ulid::new().to_string().to_lowercase())
    }

    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who is calling an owner-scoped store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerScope(Option<String>);

impl OwnerScope {
    /// A signed-in user.
    pub fn user(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    /// Nobody signed in.
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// The user id, or `Unauthenticated`.
    pub fn require(&self) -> Result<&str> {
        self.0.as_deref().ok_or(FormsError::Unauthenticated)
    }
}

/// Input to `create_form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Length bounds a new form's name and description must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormShapeRules {
    pub name_min: usize,
    pub name_max: usize,
    pub description_max: usize,
}

impl Default for FormShapeRules {
    fn default() -> Self {
        Self {
            name_min: 4,
            name_max: 50,
            description_max: 200,
        }
    }
}

impl FormShapeRules {
    pub fn check(&self, form: &NewForm) -> Result<()> {
        let name_len = form.name.trim().chars().count();
        if name_len < self.name_min {
            return Err(FormsError::invalid_value(
                "name",
                format!("must be at least {} characters", self.name_min),
            ));
        }
        if name_len > self.name_max {
            return Err(FormsError::invalid_value(
                "name",
                format!("must be at most {} characters", self.name_max),
            ));
        }
        if form.description.chars().count() > self.description_max {
            return Err(FormsError::invalid_value(
                "description",
                format!("must be at most {} characters", self.description_max),
            ));
        }
        Ok(())
    }
}

/// A stored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    pub owner: String,
    pub name: String,
    pub description: String,
    /// Serialized field list, see `formsmith_fields::content`
    pub content: String,
    pub published: bool,
    pub visits: u64,
    pub submissions: u64,
    pub share_token: ShareToken,
    pub created_at: DateTime<Utc>,
}

/// One submitted set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub form_id: FormId,
    /// Serialized `SubmissionValues`
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A form together with every submission it has received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormWithSubmissions {
    pub form: FormRecord,
    pub submissions: Vec<SubmissionRecord>,
}
