//! CLI definition for the `formsmith` command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use formsmith_designer::Half;
use formsmith_fields::FieldKind;

/// Which half of the target field a drop lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HalfArg {
    /// Insert above the target
    Top,
    /// Insert below the target
    Bottom,
}

impl From<HalfArg> for Half {
    fn from(half: HalfArg) -> Self {
        match half {
            HalfArg::Top => Half::Top,
            HalfArg::Bottom => Half::Bottom,
        }
    }
}

/// Formsmith - design, check, and fill form definitions
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Design and check form definitions")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the field kinds available in the palette
    Kinds,
    /// Write a new, empty form definition
    New {
        /// Form file to create
        file: PathBuf,
        /// Form name
        #[arg(short, long)]
        name: String,
        /// Form description
        #[arg(long, default_value = "")]
        description: String,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Drop a new field from the palette onto the form
    Place {
        /// Form file
        file: PathBuf,
        /// Field kind tag (`TextField`) or short name (`text`)
        kind: FieldKind,
        /// Place relative to this field instead of at the end
        #[arg(long, requires = "half")]
        over: Option<String>,
        /// Which half of `--over` to drop on
        #[arg(long, value_enum)]
        half: Option<HalfArg>,
    },
    /// Drag a placed field to a new position
    Move {
        /// Form file
        file: PathBuf,
        /// Field to move
        id: String,
        /// Field to drop onto
        #[arg(long)]
        over: String,
        /// Which half of `--over` to drop on
        #[arg(long, value_enum)]
        half: HalfArg,
    },
    /// Remove a field
    Remove {
        /// Form file
        file: PathBuf,
        /// Field to remove
        id: String,
    },
    /// Decode the form and check every field's properties
    Check {
        /// Form file
        file: PathBuf,
    },
    /// Run the submission pipeline against a JSON object of values
    Validate {
        /// Form file
        file: PathBuf,
        /// JSON object mapping field id to value
        values: PathBuf,
    },
    /// Render submissions as a table
    Table {
        /// Form file
        file: PathBuf,
        /// JSON array of submission records
        submissions: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
