use std::path::PathBuf;

use clap::Parser;
use dfa::{CompanionPolicy, ReportFormat};

pub const DEFAULT_LEVEL: &str = "secbase.lev";

/// User-specified command line parameters
#[derive(Debug, Parser)]
#[clap(name = "Dark Forces Analyzer", about)]
pub struct Args {
    /// Path to the level's .lev file. The .inf and .o files are looked up next to it.
    pub level: Vec<String>,

    #[clap(long, short = 'o', default_value = "dfa.txt")]
    /// Where to save the report.
    pub output: PathBuf,

    #[clap(long)]
    /// Only print the statistics, don't save them.
    pub no_save: bool,

    #[clap(long, value_enum, default_value_t)]
    pub format: ReportFormat,

    #[clap(long)]
    /// Analyze the level even if its .inf or .o file can't be opened.
    pub allow_missing: bool,
}

impl Args {
    /// The level path, with its words rejoined so unquoted paths with spaces work. `None` if
    /// no path was given.
    pub fn level_path(&self) -> Option<PathBuf> {
        (!self.level.is_empty()).then(|| PathBuf::from(self.level.join(" ")))
    }

    pub fn companion_policy(&self) -> CompanionPolicy {
        if self.allow_missing {
            CompanionPolicy::Degrade
        } else {
            CompanionPolicy::Require
        }
    }
}
