use crate::level::wall::TextureIndex;

/// A sector as declared in the geometry file. Fields whose directive never appeared stay `None`.
///
/// Altitudes are stored negated: the file counts downwards, this struct counts upwards, so
/// `ceiling_altitude - floor_altitude` is the room height.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Sector {
    pub name: Option<String>,
    pub ambient_light: Option<i32>,

    pub floor_altitude: Option<f64>,
    pub ceiling_altitude: Option<f64>,
    pub second_altitude: Option<f64>,

    pub flags: Option<Flags>,
    pub layer: Option<i32>,

    pub floor_texture: Option<TextureIndex>,
    pub ceiling_texture: Option<TextureIndex>,

    pub vertex_count: usize,
    pub wall_count: usize,
}

impl Sector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_height(&self) -> Option<f64> {
        Some(self.ceiling_altitude? - self.floor_altitude?)
    }
}

/// The three raw flag words of a `FLAGS` directive.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Flags {
    pub flags1: i32,
    pub flags2: i32,
    pub flags3: i32,
}

/// Converts an altitude as written in the file to the upward-counting convention.
pub fn altitude(raw: f64) -> f64 {
    // Subtracting keeps a literal 0 at +0.0
    0.0 - raw
}
