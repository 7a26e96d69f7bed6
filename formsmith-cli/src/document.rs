//! Form definition files.
//!
//! A file holds the form's name, description, and its field list in the
//! same record shape the form store persists:
//!
//! ```json
//! { "name": "Feedback", "description": "", "fields": [ { "id": "...", "type": "TextField", "extraAttributes": { } } ] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use formsmith_designer::DesignerSession;
use formsmith_forms::{FormShapeRules, NewForm};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Serialize, Deserialize)]
struct FormFile {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "no_fields")]
    fields: Value,
}

fn no_fields() -> Value {
    Value::Array(Vec::new())
}

/// A form definition opened for editing.
pub struct FormDocument {
    pub name: String,
    pub description: String,
    pub session: DesignerSession,
}

impl FormDocument {
    /// A new, empty form. The name and description must satisfy `rules`.
    pub fn create(form: NewForm, rules: &FormShapeRules) -> anyhow::Result<Self> {
        rules.check(&form)?;
        Ok(Self {
            name: form.name.trim().to_string(),
            description: form.description,
            session: DesignerSession::new(),
        })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file: FormFile = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a form definition", path.display()))?;
        let session = DesignerSession::load(&file.fields.to_string())
            .with_context(|| format!("invalid fields in {}", path.display()))?;
        debug!(path = %path.display(), fields = session.elements().len(), "loaded form");
        Ok(Self {
            name: file.name,
            description: file.description,
            session,
        })
    }

    pub fn save(&self, path: &Path, pretty: bool) -> anyhow::Result<()> {
        let file = FormFile {
            name: self.name.clone(),
            description: self.description.clone(),
            fields: serde_json::from_str(&self.session.content()?)?,
        };
        let mut text = if pretty {
            serde_json::to_string_pretty(&file)?
        } else {
            serde_json::to_string(&file)?
        };
        text.push('\n');
        fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "saved form");
        Ok(())
    }

    /// Write a brand new file, refusing to clobber one unless `force`.
    pub fn save_new(&self, path: &Path, pretty: bool, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        self.save(path, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_fields::FieldKind;
    use tempfile::TempDir;

    #[test]
    fn test_create_checks_shape() {
        let rules = FormShapeRules::default();
        assert!(FormDocument::create(NewForm::new("No", ""), &rules).is_err());
        assert!(FormDocument::create(NewForm::new("Feedback", ""), &rules).is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");

        let mut doc =
            FormDocument::create(NewForm::new("Feedback", "Tell us"), &FormShapeRules::default())
                .unwrap();
        doc.session.add(FieldKind::Text);
        doc.session.add(FieldKind::Spacer);
        doc.save_new(&path, true, false).unwrap();
        assert!(doc.save_new(&path, true, false).is_err());

        let loaded = FormDocument::load(&path).unwrap();
        assert_eq!(loaded.name, "Feedback");
        assert_eq!(loaded.description, "Tell us");
        assert_eq!(loaded.session.elements(), doc.session.elements());
    }

    #[test]
    fn test_missing_fields_is_empty_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"name":"Feedback"}"#).unwrap();
        let doc = FormDocument::load(&path).unwrap();
        assert!(doc.session.elements().is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");
        fs::write(
            &path,
            r#"{"name":"Feedback","fields":[{"id":"a","type":"SliderField"}]}"#,
        )
        .unwrap();
        assert!(FormDocument::load(&path).is_err());
    }
}
