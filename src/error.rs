use std::{io, path::PathBuf};

use miette::Diagnostic;

use crate::source::FileKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("Could not open {kind} file `{}`", .path.display())]
    #[diagnostic(
        code(dfa::primary_file_missing),
        help("pass the path of an existing .lev file")
    )]
    PrimaryFileMissing {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not open companion {kind} file `{}`", .path.display())]
    #[diagnostic(
        code(dfa::companion_file_missing),
        help("run with --allow-missing to analyze the level without it")
    )]
    CompanionFileMissing {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),

    #[error("Could not write report to `{}`", .path.display())]
    #[diagnostic(code(dfa::report_write))]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not serialize report")]
    #[diagnostic(code(dfa::serialize))]
    Serialize(#[from] toml::ser::Error),
}

/// A directive whose content could not be understood. Parsing stops at the first one.
#[derive(Debug, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Malformed {file} file at line {line}: {kind} in '{text}'")]
#[diagnostic(code(dfa::format))]
pub struct FormatError {
    pub file: FileKind,
    pub line: usize,
    pub text: String,
    pub kind: FormatErrorKind,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    #[error("expected an integer after {directive}")]
    InvalidInteger { directive: &'static str },
    #[error("expected a number after {directive}")]
    InvalidFloat { directive: &'static str },
    #[error("expected a value after {directive}")]
    MissingValue { directive: &'static str },
    #[error("expected 3 flags, found {found}")]
    NotEnoughFlags { found: usize },
    #[error("{marker} is not followed by a value")]
    MissingMarkerValue { marker: &'static str },
    #[error("{directive} appears before any SECTOR")]
    NoCurrentSector { directive: &'static str },
}
