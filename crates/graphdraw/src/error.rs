use thiserror::Error;

use crate::template::RenderError;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("point ({x}, {y}) is outside the contribution graph")]
    PointOutOfBounds { x: i32, y: i32 },
    #[error("{width}x{height} glyph overflows the contribution graph at ({x}, {y})")]
    GlyphOverflow {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("unsupported character: {0:?}")]
    UnsupportedCharacter(char),
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),
    #[error("unknown font: {0}")]
    UnknownFont(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error("template rendering failed")]
    Template(#[source] RenderError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
