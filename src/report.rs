use std::{fs, path::Path};

use serde_derive::Serialize;

use crate::{
    error::{Error, Result},
    number::Number,
    stats::{Statistics, Value},
};

/// How statistics are rendered, both on the console and in the saved report.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `label: value` line per metric
    #[default]
    Text,
    /// An array of `[[metric]]` tables
    Toml,
}

impl ReportFormat {
    pub fn render(self, statistics: &Statistics) -> Result<String> {
        match self {
            ReportFormat::Text => Ok(render_text(statistics)),
            ReportFormat::Toml => render_toml(statistics),
        }
    }
}

pub fn render_text(statistics: &Statistics) -> String {
    statistics
        .iter()
        .map(|metric| format!("{metric}\n"))
        .collect()
}

#[derive(Serialize)]
struct Report<'a> {
    metric: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    key: &'a str,
    label: &'a str,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<Number>,
}

pub fn render_toml(statistics: &Statistics) -> Result<String> {
    let report = Report {
        metric: statistics
            .iter()
            .map(|metric| ReportEntry {
                key: metric.kind.key(),
                label: metric.kind.label(),
                value: metric.value.to_string(),
                number: match &metric.value {
                    Value::Texture(usage) => Some(usage.index.into()),
                    value => value.number(),
                },
            })
            .collect(),
    };

    Ok(toml::to_string(&report)?)
}

pub fn save(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::ReportWrite {
        path: path.to_owned(),
        source,
    })
}
