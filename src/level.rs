use log::{debug, info, warn};

use crate::{
    error::{Error, FormatError, Result},
    source::{self, FileKind, LevelPaths, SourceFile},
    stats::Statistics,
};

pub mod geometry;
pub mod objects;
pub mod parse;
pub mod script;
pub mod sector;
pub mod wall;

pub use self::{
    geometry::Geometry, objects::ObjectSummary, script::ScriptSummary, sector::Sector, wall::Wall,
};

/// What to do when the `.inf` or `.o` file next to the geometry file cannot be read.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum CompanionPolicy {
    /// Abort the run
    #[default]
    Require,
    /// Warn and analyze the level as if the file were empty
    Degrade,
}

/// The three parsed files of a level.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Level {
    pub geometry: Geometry,
    pub script: ScriptSummary,
    pub objects: ObjectSummary,
}

impl Level {
    /// Reads and parses all three files. The geometry file is always required.
    pub fn load(paths: &LevelPaths, companions: CompanionPolicy) -> Result<Self> {
        let geometry = read(FileKind::Geometry, paths).map_err(|source| {
            Error::PrimaryFileMissing {
                kind: FileKind::Geometry,
                path: paths.geometry.clone(),
                source,
            }
        })?;
        let geometry = Geometry::parse(&geometry.lines())?;

        let script = match read_companion(FileKind::Script, paths, companions)? {
            Some(file) => ScriptSummary::parse(&file.lines()),
            None => ScriptSummary::default(),
        };

        let objects = match read_companion(FileKind::Objects, paths, companions)? {
            Some(file) => ObjectSummary::parse(&file.lines())?,
            None => ObjectSummary::default(),
        };

        Ok(Self {
            geometry,
            script,
            objects,
        })
    }

    /// Parses a level from in-memory file contents.
    pub fn from_sources(geometry: &str, script: &str, objects: &str) -> Result<Self, FormatError> {
        Ok(Self {
            geometry: Geometry::parse(&source::lines(geometry))?,
            script: ScriptSummary::parse(&source::lines(script)),
            objects: ObjectSummary::parse(&source::lines(objects))?,
        })
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.geometry, &self.script, &self.objects)
    }
}

fn read(kind: FileKind, paths: &LevelPaths) -> std::io::Result<SourceFile> {
    let path = paths.get(kind);
    debug!("Reading {kind} file {}", path.display());

    let file = SourceFile::read(path)?;
    info!("Opened {} ({} lines)", file.path.display(), file.lines().len());

    Ok(file)
}

fn read_companion(
    kind: FileKind,
    paths: &LevelPaths,
    policy: CompanionPolicy,
) -> Result<Option<SourceFile>> {
    match (read(kind, paths), policy) {
        (Ok(file), _) => Ok(Some(file)),
        (Err(source), CompanionPolicy::Degrade) => {
            warn!(
                "Could not open {kind} file {} ({source}), treating it as empty",
                paths.get(kind).display()
            );
            Ok(None)
        }
        (Err(source), CompanionPolicy::Require) => Err(Error::CompanionFileMissing {
            kind,
            path: paths.get(kind).to_owned(),
            source,
        }),
    }
}
