use log::{info, trace};

use crate::{
    error::{FormatError, FormatErrorKind},
    level::{
        parse::{self, Field},
        sector::{self, Flags, Sector},
        wall::{self, TextureIndex, Wall},
    },
    source::{FileKind, Line},
};

pub mod consts;

/// Everything the statistics need from a `.lev` file.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Geometry {
    pub textures: Vec<String>,
    pub sectors: Vec<Sector>,
    pub walls: Vec<Wall>,
}

impl Geometry {
    pub fn parse(lines: &[Line<'_>]) -> Result<Self, FormatError> {
        let mut builder = GeometryBuilder::default();

        for &line in lines {
            builder.apply(line)?;
        }

        let geometry = builder.finish();

        info!(
            "LEV: {} sectors, {} textures, {} walls loaded",
            geometry.sectors.len(),
            geometry.textures.len(),
            geometry.walls.len()
        );

        Ok(geometry)
    }

    pub fn texture_name(&self, index: TextureIndex) -> Option<&str> {
        self.textures.get(index).map(String::as_str)
    }
}

struct Directive {
    keyword: &'static str,
    apply: fn(&mut GeometryBuilder, &Field<'_>) -> Result<(), FormatError>,
}

/// Checked in order, first match wins. No keyword is a prefix of another.
const DIRECTIVES: &[Directive] = &[
    Directive {
        keyword: consts::TEXTURE,
        apply: GeometryBuilder::texture,
    },
    Directive {
        keyword: consts::SECTOR,
        apply: GeometryBuilder::sector,
    },
    Directive {
        keyword: consts::NAME,
        apply: GeometryBuilder::name,
    },
    Directive {
        keyword: consts::AMBIENT,
        apply: GeometryBuilder::ambient,
    },
    Directive {
        keyword: consts::FLOOR_TEXTURE,
        apply: GeometryBuilder::floor_texture,
    },
    Directive {
        keyword: consts::FLOOR_ALTITUDE,
        apply: GeometryBuilder::floor_altitude,
    },
    Directive {
        keyword: consts::CEILING_TEXTURE,
        apply: GeometryBuilder::ceiling_texture,
    },
    Directive {
        keyword: consts::CEILING_ALTITUDE,
        apply: GeometryBuilder::ceiling_altitude,
    },
    Directive {
        keyword: consts::SECOND_ALTITUDE,
        apply: GeometryBuilder::second_altitude,
    },
    Directive {
        keyword: consts::FLAGS,
        apply: GeometryBuilder::flags,
    },
    Directive {
        keyword: consts::LAYER,
        apply: GeometryBuilder::layer,
    },
    Directive {
        keyword: consts::VERTEX,
        apply: GeometryBuilder::vertex,
    },
    Directive {
        keyword: consts::WALL,
        apply: GeometryBuilder::wall,
    },
];

/// Single forward pass over a `.lev` file. `current` is the sector being built; it is moved
/// into `sectors` when the next `SECTOR` starts or the input ends.
#[derive(Default)]
struct GeometryBuilder {
    textures: Vec<String>,
    sectors: Vec<Sector>,
    walls: Vec<Wall>,
    current: Option<Sector>,
}

impl GeometryBuilder {
    fn apply(&mut self, line: Line<'_>) -> Result<(), FormatError> {
        for directive in DIRECTIVES {
            if let Some(rest) = parse::strip_keyword(line.text, directive.keyword) {
                let field = Field::new(FileKind::Geometry, line, directive.keyword, rest);
                return (directive.apply)(self, &field);
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Geometry {
        self.close_sector();

        Geometry {
            textures: self.textures,
            sectors: self.sectors,
            walls: self.walls,
        }
    }

    fn close_sector(&mut self) {
        if let Some(sector) = self.current.take() {
            self.sectors.push(sector);
        }
    }

    fn current(&mut self, field: &Field<'_>) -> Result<&mut Sector, FormatError> {
        self.current.as_mut().ok_or_else(|| {
            field.error(FormatErrorKind::NoCurrentSector {
                directive: field.name(),
            })
        })
    }

    fn texture(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let name = field
            .rest
            .split_once(consts::COMMENT)
            .map_or(field.rest, |(name, _comment)| name);

        self.textures.push(name.trim().to_owned());
        Ok(())
    }

    fn sector(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        self.close_sector();

        trace!(
            "Sector #{} starts at line {}",
            self.sectors.len(),
            field.line.number
        );

        self.current = Some(Sector::new());
        Ok(())
    }

    fn name(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        self.current(field)?.name = Some(field.text().to_owned());
        Ok(())
    }

    fn ambient(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let light = field.integer()?;
        self.current(field)?.ambient_light = Some(light);
        Ok(())
    }

    fn floor_texture(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let index = field.first_integer()?;
        self.current(field)?.floor_texture = wall::texture_index(index);
        Ok(())
    }

    fn floor_altitude(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let altitude = field.real()?;
        self.current(field)?.floor_altitude = Some(sector::altitude(altitude));
        Ok(())
    }

    fn ceiling_texture(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let index = field.first_integer()?;
        self.current(field)?.ceiling_texture = wall::texture_index(index);
        Ok(())
    }

    fn ceiling_altitude(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let altitude = field.real()?;
        self.current(field)?.ceiling_altitude = Some(sector::altitude(altitude));
        Ok(())
    }

    fn second_altitude(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let altitude = field.real()?;
        self.current(field)?.second_altitude = Some(sector::altitude(altitude));
        Ok(())
    }

    fn flags(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let tokens: Vec<&str> = field.tokens().collect();

        let flags = match tokens[..] {
            [flags1, flags2, flags3, ..] => Flags {
                flags1: field.token_integer(flags1)?,
                flags2: field.token_integer(flags2)?,
                flags3: field.token_integer(flags3)?,
            },
            _ => {
                return Err(field.error(FormatErrorKind::NotEnoughFlags {
                    found: tokens.len(),
                }))
            }
        };

        self.current(field)?.flags = Some(flags);
        Ok(())
    }

    fn layer(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let layer = field.integer()?;
        self.current(field)?.layer = Some(layer);
        Ok(())
    }

    fn vertex(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        self.current(field)?.vertex_count += 1;
        Ok(())
    }

    fn wall(&mut self, field: &Field<'_>) -> Result<(), FormatError> {
        let wall = parse_wall(field)?;

        self.current(field)?.wall_count += 1;
        self.walls.push(wall);
        Ok(())
    }
}

/// Reads the texture markers of a `WALL` line. Each marker is looked up anywhere on the line
/// and takes the token right after it.
fn parse_wall(field: &Field<'_>) -> Result<Wall, FormatError> {
    let tokens: Vec<String> = field
        .line
        .text
        .split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect();

    let texture = |marker: &'static str| -> Result<Option<TextureIndex>, FormatError> {
        let Some(position) = tokens.iter().position(|token| token == marker) else {
            return Ok(None);
        };

        let value = tokens
            .get(position + 1)
            .ok_or_else(|| field.error(FormatErrorKind::MissingMarkerValue { marker }))?;

        Ok(wall::texture_index(field.token_integer(value)?))
    };

    Ok(Wall {
        mid_texture: texture(consts::wall::MID)?,
        top_texture: texture(consts::wall::TOP)?,
        bottom_texture: texture(consts::wall::BOTTOM)?,
        sign_texture: texture(consts::wall::SIGN)?,
    })
}
