//! Owner-facing listing of a form's submissions.
//!
//! One column per input field (layout kinds carry no values), one row per
//! submission.

use std::fmt;

use chrono::{DateTime, Utc};
use formsmith_fields::kinds::{checkbox, date};
use formsmith_fields::{FieldId, FieldInstance, FieldKind};
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::types::SubmissionRecord;
use crate::values::SubmissionValues;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: FieldId,
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    /// `dd/mm/yyyy`
    Date(String),
    Checkbox(bool),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Date(s) => f.write_str(s),
            Self::Checkbox(checked) => write!(f, "{checked}"),
            Self::Empty => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionsTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl SubmissionsTable {
    pub fn build(fields: &[FieldInstance], submissions: &[SubmissionRecord]) -> Result<Self> {
        let columns: Vec<Column> = fields
            .iter()
            .filter(|field| field.kind.is_input())
            .map(|field| Column {
                id: field.id.clone(),
                label: field.attributes.label().unwrap_or_default().to_string(),
                required: field.attributes.required(),
                kind: field.kind,
            })
            .collect();

        let rows = submissions
            .iter()
            .map(|submission| {
                let values = SubmissionValues::from_json(&submission.content)?;
                Ok(Row {
                    cells: columns.iter().map(|c| cell(c, &values)).collect(),
                    submitted_at: submission.created_at,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }

    /// Column labels followed by the submission time heading.
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.label.clone())
            .chain(std::iter::once("Submitted at".to_string()))
            .collect()
    }
}

fn cell(column: &Column, values: &SubmissionValues) -> Cell {
    let raw = values.get(&column.id);
    if raw.is_empty() {
        return Cell::Empty;
    }
    match column.kind {
        FieldKind::Date => match date::display(raw) {
            Ok(shown) => Cell::Date(shown),
            Err(e) => {
                warn!(id = %column.id, error = %e, "unreadable date in submission");
                Cell::Text(raw.to_string())
            }
        },
        FieldKind::Checkbox => Cell::Checkbox(checkbox::decode(raw)),
        _ => Cell::Text(raw.to_string()),
    }
}
