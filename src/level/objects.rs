use std::collections::BTreeMap;

use log::info;

use crate::{
    error::{FormatError, FormatErrorKind},
    level::parse::{self, Field},
    source::{FileKind, Line},
};

mod consts {
    pub const CLASS: &str = "CLASS:";
    pub const SECTOR: &str = "SEC:";

    pub const FRAME: &str = "FRAME";
    pub const SPRITE: &str = "SPRITE";
}

/// Running totals over an `.o` file.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ObjectSummary {
    pub object_count: usize,
    pub frame_count: usize,
    pub sprite_count: usize,
    /// Objects per sector index. Sectors without objects have no entry.
    pub sector_objects: BTreeMap<i32, usize>,
}

impl ObjectSummary {
    pub fn parse(lines: &[Line<'_>]) -> Result<Self, FormatError> {
        let mut summary = Self::default();

        for &line in lines {
            summary.apply(line)?;
        }

        info!("O: {} objects", summary.object_count);

        Ok(summary)
    }

    fn apply(&mut self, line: Line<'_>) -> Result<(), FormatError> {
        let upper = line.text.to_ascii_uppercase();

        let Some(rest) = parse::strip_keyword(&upper, consts::CLASS) else {
            return Ok(());
        };

        self.object_count += 1;

        match rest.split_whitespace().next() {
            Some(consts::FRAME) => self.frame_count += 1,
            Some(consts::SPRITE) => self.sprite_count += 1,
            _ => {}
        }

        if let Some((_, after)) = upper.split_once(consts::SECTOR) {
            let field = Field::new(FileKind::Objects, line, consts::SECTOR, after);

            let token = field.tokens().next().ok_or_else(|| {
                field.error(FormatErrorKind::MissingMarkerValue {
                    marker: consts::SECTOR,
                })
            })?;

            *self
                .sector_objects
                .entry(field.token_integer(token)?)
                .or_default() += 1;
        }

        Ok(())
    }
}
