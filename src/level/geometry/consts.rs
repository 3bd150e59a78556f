macro_rules! directives {
    ($($name:ident => $keyword:literal),* $(,)?) => {
        $(pub const $name: &str = $keyword;)*

        pub const ALL: &[&str] = &[
            $($name,)*
        ];
    };
}

// Matched as case-insensitive line prefixes. Trailing spaces and colons are part of the
// keyword: `WALL ` must not match the `WALLS 4` header.
directives! {
    TEXTURE => "TEXTURE:",
    SECTOR => "SECTOR ",
    NAME => "NAME ",
    AMBIENT => "AMBIENT ",
    FLOOR_TEXTURE => "FLOOR TEXTURE",
    FLOOR_ALTITUDE => "FLOOR ALTITUDE",
    CEILING_TEXTURE => "CEILING TEXTURE",
    CEILING_ALTITUDE => "CEILING ALTITUDE",
    SECOND_ALTITUDE => "SECOND ALTITUDE",
    FLAGS => "FLAGS",
    LAYER => "LAYER",
    VERTEX => "X:",
    WALL => "WALL ",
}

pub const COMMENT: char = '#';

pub mod wall {
    directives! {
        MID => "MID:",
        TOP => "TOP:",
        BOTTOM => "BOT:",
        SIGN => "SIGN:",
    }
}
