//! Command handlers. Each writes its report to `out` and returns the exit code.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use comfy_table::{presets::UTF8_FULL, Table};
use formsmith_designer::{DragOrigin, DropTarget, Half};
use formsmith_fields::{FieldId, FieldKind, Registry};
use formsmith_forms::{
    pipeline, NewForm, SubmissionOutcome, SubmissionRecord, SubmissionValues, SubmissionsTable,
};
use tracing::info;

use crate::cli::{Commands, HalfArg};
use crate::config::FormsmithConfig;
use crate::document::FormDocument;

/// Exit code for a form that fails `check` or values that fail `validate`.
pub const EXIT_INVALID: i32 = 1;

pub fn run(command: Commands, config: &FormsmithConfig, out: &mut dyn Write) -> anyhow::Result<i32> {
    match command {
        Commands::Kinds => kinds(out),
        Commands::New {
            file,
            name,
            description,
            force,
        } => new(&file, NewForm::new(name, description), force, config, out),
        Commands::Place {
            file,
            kind,
            over,
            half,
        } => place(&file, kind, over.zip(half), config, out),
        Commands::Move {
            file,
            id,
            over,
            half,
        } => move_field(&file, &id, &over, half.into(), config, out),
        Commands::Remove { file, id } => remove(&file, &id, config, out),
        Commands::Check { file } => check(&file, out),
        Commands::Validate { file, values } => validate(&file, &values, config, out),
        Commands::Table {
            file,
            submissions,
            json,
        } => table(&file, &submissions, json, config, out),
    }
}

fn kinds(out: &mut dyn Write) -> anyhow::Result<i32> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kind", "Name", "Label", "Input", "Properties"]);
    for descriptor in Registry::palette() {
        table.add_row(vec![
            descriptor.kind.tag().to_string(),
            short_name(descriptor.kind),
            descriptor.label.to_string(),
            yes_no(descriptor.kind.is_input()),
            yes_no(descriptor.capabilities.properties),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(0)
}

fn short_name(kind: FieldKind) -> String {
    kind.tag().trim_end_matches("Field").to_ascii_lowercase()
}

fn yes_no(flag: bool) -> String {
    let word = if flag { "yes" } else { "no" };
    word.to_string()
}

fn new(
    path: &Path,
    form: NewForm,
    force: bool,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let doc = FormDocument::create(form, &config.shape_rules())?;
    doc.save_new(path, config.pretty, force)?;
    info!(path = %path.display(), name = %doc.name, "created form");
    writeln!(out, "Created {}", path.display())?;
    Ok(0)
}

fn place(
    path: &Path,
    kind: FieldKind,
    over: Option<(String, HalfArg)>,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let mut doc = FormDocument::load(path)?;
    let target = match over {
        Some((id, half)) => {
            let id = existing(&doc, &id)?;
            DropTarget::instance(id, half.into())
        }
        None => DropTarget::Canvas,
    };

    doc.session.pick_up(DragOrigin::Palette(kind));
    doc.session.hover(Some(target));
    let Some(id) = doc.session.release()? else {
        bail!("nothing was placed");
    };
    doc.save(path, config.pretty)?;
    writeln!(out, "{id}")?;
    Ok(0)
}

fn move_field(
    path: &Path,
    id: &str,
    over: &str,
    half: Half,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let mut doc = FormDocument::load(path)?;
    let id = existing(&doc, id)?;
    let over = existing(&doc, over)?;

    doc.session.pick_up(DragOrigin::Instance(id.clone()));
    doc.session.hover(Some(DropTarget::instance(over, half)));
    doc.session.release()?;
    doc.save(path, config.pretty)?;

    let position = doc.session.state().index_of(&id).unwrap_or_default();
    writeln!(out, "{id} is now at position {}", position + 1)?;
    Ok(0)
}

fn remove(
    path: &Path,
    id: &str,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let mut doc = FormDocument::load(path)?;
    let id = existing(&doc, id)?;
    doc.session.remove(&id);
    doc.save(path, config.pretty)?;
    writeln!(out, "Removed {id}")?;
    Ok(0)
}

fn existing(doc: &FormDocument, id: &str) -> anyhow::Result<FieldId> {
    let id = FieldId::from(id);
    if !doc.session.state().contains(&id) {
        bail!("no field with id {id}");
    }
    Ok(id)
}

fn check(path: &Path, out: &mut dyn Write) -> anyhow::Result<i32> {
    let doc = FormDocument::load(path)?;
    let mut problems = 0;
    for field in doc.session.elements() {
        if let Err(e) = Registry::check_properties(field.kind, &field.attributes) {
            problems += 1;
            writeln!(out, "{} ({}): {e}", field.id, field.kind)?;
        }
    }
    if problems > 0 {
        writeln!(out, "{problems} field(s) with invalid properties")?;
        return Ok(EXIT_INVALID);
    }
    writeln!(out, "{}: {} field(s) OK", doc.name, doc.session.elements().len())?;
    Ok(0)
}

fn validate(
    path: &Path,
    values_path: &Path,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let doc = FormDocument::load(path)?;
    let text = fs::read_to_string(values_path)
        .with_context(|| format!("failed to read {}", values_path.display()))?;
    let values = SubmissionValues::from_json(&text)
        .with_context(|| format!("{} is not a JSON object of strings", values_path.display()))?;

    match pipeline::prepare(doc.session.elements(), &values)? {
        SubmissionOutcome::Invalid(invalid) => {
            for id in invalid.ids() {
                let label = doc
                    .session
                    .state()
                    .get(id)
                    .and_then(|field| field.attributes.label())
                    .unwrap_or_default();
                writeln!(out, "invalid: {id} {label}")?;
            }
            Ok(EXIT_INVALID)
        }
        SubmissionOutcome::Ready(json) => {
            if config.pretty {
                let value: serde_json::Value = serde_json::from_str(&json)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(out, "{json}")?;
            }
            Ok(0)
        }
    }
}

fn table(
    path: &Path,
    submissions_path: &Path,
    json: bool,
    config: &FormsmithConfig,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let doc = FormDocument::load(path)?;
    let text = fs::read_to_string(submissions_path)
        .with_context(|| format!("failed to read {}", submissions_path.display()))?;
    let submissions: Vec<SubmissionRecord> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a list of submissions", submissions_path.display()))?;
    let built = SubmissionsTable::build(doc.session.elements(), &submissions)?;

    if json {
        let rendered = if config.pretty {
            serde_json::to_string_pretty(&built)?
        } else {
            serde_json::to_string(&built)?
        };
        writeln!(out, "{rendered}")?;
        return Ok(0);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(built.headers());
    for row in &built.rows {
        let mut cells: Vec<String> = row.cells.iter().map(ToString::to_string).collect();
        cells.push(row.submitted_at.format("%d/%m/%Y %H:%M").to_string());
        table.add_row(cells);
    }
    writeln!(out, "{table}")?;
    Ok(0)
}
