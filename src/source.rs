use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::{Path, PathBuf},
};

/// The three files a Dark Forces level is made of.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FileKind {
    /// `.lev`: sectors, walls and textures
    Geometry,
    /// `.inf`: elevators, triggers and their stops
    Script,
    /// `.o`: object placement
    Objects,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Geometry => "lev",
            FileKind::Script => "inf",
            FileKind::Objects => "o",
        }
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FileKind::Geometry => write!(f, "LEV"),
            FileKind::Script => write!(f, "INF"),
            FileKind::Objects => write!(f, "O"),
        }
    }
}

/// A non-blank, trimmed line together with its 1-based position in the file.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Line<'s> {
    pub number: usize,
    pub text: &'s str,
}

impl<'s> Line<'s> {
    pub fn new(number: usize, text: &'s str) -> Self {
        Self { number, text }
    }
}

/// Splits `source` into the lines the parsers consume, skipping blank ones.
pub fn lines(source: &str) -> Vec<Line<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(i, text)| Line::new(i + 1, text.trim()))
        .filter(|line| !line.text.is_empty())
        .collect()
}

/// Locations of the three files of one level.
///
/// Only the geometry path is user-supplied, the other two sit next to it and
/// differ by extension.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LevelPaths {
    pub geometry: PathBuf,
    pub script: PathBuf,
    pub objects: PathBuf,
}

impl LevelPaths {
    pub fn from_geometry(path: impl Into<PathBuf>) -> Self {
        let geometry = path.into();

        Self {
            script: geometry.with_extension(FileKind::Script.extension()),
            objects: geometry.with_extension(FileKind::Objects.extension()),
            geometry,
        }
    }

    pub fn get(&self, kind: FileKind) -> &Path {
        match kind {
            FileKind::Geometry => &self.geometry,
            FileKind::Script => &self.script,
            FileKind::Objects => &self.objects,
        }
    }
}

/// A level file read whole into memory.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn read(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_owned(),
            text,
        })
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        lines(&self.text)
    }
}
