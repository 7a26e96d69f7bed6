//! Core field types: kind tags, instance ids, attribute maps, and instances.
//!
//! An instance serializes as `{"id", "type", "extraAttributes"}`; that record
//! shape is the persisted field-list encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ulid::Ulid;

/// Opaque, stable identity of one placed field instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an existing id string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The discriminant identifying a field widget type.
///
/// The set is closed: adding a kind means adding a variant here and a
/// descriptor in [`crate::kinds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "TextField")]
    Text,
    #[serde(rename = "TitleField")]
    Title,
    #[serde(rename = "SubTitleField")]
    SubTitle,
    #[serde(rename = "ParagraphField")]
    Paragraph,
    #[serde(rename = "SeparatorField")]
    Separator,
    #[serde(rename = "SpacerField")]
    Spacer,
    #[serde(rename = "NumberField")]
    Number,
    #[serde(rename = "TextAreaField")]
    TextArea,
    #[serde(rename = "DateField")]
    Date,
    #[serde(rename = "SelectField")]
    Select,
    #[serde(rename = "CheckboxField")]
    Checkbox,
}

impl FieldKind {
    /// Every kind, in palette order. Also the registry's table order.
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Text,
        FieldKind::Title,
        FieldKind::SubTitle,
        FieldKind::Paragraph,
        FieldKind::Separator,
        FieldKind::Spacer,
        FieldKind::Number,
        FieldKind::TextArea,
        FieldKind::Date,
        FieldKind::Select,
        FieldKind::Checkbox,
    ];

    /// The persisted tag string.
    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Text => "TextField",
            FieldKind::Title => "TitleField",
            FieldKind::SubTitle => "SubTitleField",
            FieldKind::Paragraph => "ParagraphField",
            FieldKind::Separator => "SeparatorField",
            FieldKind::Spacer => "SpacerField",
            FieldKind::Number => "NumberField",
            FieldKind::TextArea => "TextAreaField",
            FieldKind::Date => "DateField",
            FieldKind::Select => "SelectField",
            FieldKind::Checkbox => "CheckboxField",
        }
    }

    /// Position of this kind in [`FieldKind::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Whether this kind collects user input (as opposed to layout-only kinds).
    pub fn is_input(self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Number
                | FieldKind::TextArea
                | FieldKind::Date
                | FieldKind::Select
                | FieldKind::Checkbox
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Accepts the persisted tag (`TextField`) or the short name (`text`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FieldKind::ALL
            .into_iter()
            .find(|kind| {
                let tag = kind.tag().to_ascii_lowercase();
                tag == wanted || tag.trim_end_matches("field") == wanted
            })
            .ok_or_else(|| format!("unknown field kind: {s}"))
    }
}

/// Kind-specific key/value attributes of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// A list of strings, e.g. select options. Non-string entries are skipped.
    pub fn get_str_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The `required` flag shared by every input kind; absent means optional.
    pub fn required(&self) -> bool {
        self.get_bool("required").unwrap_or(false)
    }

    /// The `label` shared by every input kind.
    pub fn label(&self) -> Option<&str> {
        self.get_str("label")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }
}

/// Which surfaces a kind can render on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Preview inside the designer canvas
    pub designer: bool,
    /// Fillable widget on the published form
    pub fill: bool,
    /// Properties panel in the designer sidebar
    pub properties: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        designer: true,
        fill: true,
        properties: true,
    };
}

/// One placed, uniquely identified occurrence of a field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(
        rename = "extraAttributes",
        default,
        skip_serializing_if = "Attributes::is_empty"
    )]
    pub attributes: Attributes,
}

impl FieldInstance {
    pub fn new(id: FieldId, kind: FieldKind, attributes: Attributes) -> Self {
        Self {
            id,
            kind,
            attributes,
        }
    }

    /// Copy of this instance with `attributes` swapped in; id and kind are kept.
    pub fn with_attributes(&self, attributes: Attributes) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            attributes,
        }
    }
}
