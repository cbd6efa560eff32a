//! Output format handling for wayfinder
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one record per line, for scripts

use std::fmt;
use std::str::FromStr;

use clap::builder::PossibleValue;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::WayfinderError;

/// Output format for wayfinder commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    /// Name accepted on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or(WayfinderError::UnknownFormat(wanted))
    }
}

// Lives beside the type: the orphan rule keeps it out of the CLI crate
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &OutputFormat::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
