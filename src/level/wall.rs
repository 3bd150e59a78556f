/// Position of a texture in the level's `TEXTURE:` list.
pub type TextureIndex = usize;

/// Converts a texture index as written in the file. Negative values (`-1` in practice) mean
/// the surface has no texture.
pub fn texture_index(raw: i32) -> Option<TextureIndex> {
    usize::try_from(raw).ok()
}

/// One edge of a sector, with its four independently optional surfaces.
///
/// Walls are not linked to the sector they belong to; only `Sector::wall_count` records
/// membership.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Wall {
    pub mid_texture: Option<TextureIndex>,
    pub top_texture: Option<TextureIndex>,
    pub bottom_texture: Option<TextureIndex>,
    pub sign_texture: Option<TextureIndex>,
}

impl Wall {
    pub fn has_sign(&self) -> bool {
        self.sign_texture.is_some()
    }
}
