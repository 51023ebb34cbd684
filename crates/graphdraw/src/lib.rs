//! graphdraw: write text on a yearly contribution graph.
//! Features: 3x3/3x5 bitmap fonts, calendar-aware grid, preview and commit script generators.

pub mod calendar;
mod config;
mod error;
mod font;
pub mod generator;
mod glyph;
mod grid;
pub mod template;

pub use calendar::{days_in_year, initialize_grid, GitDate};
pub use config::{current_year, RenderConfig};
pub use error::{GraphError, Result};
pub use font::{text_to_glyphs, Font, FontFamily, Sentence, UnsupportedChar, FONT_3X3, FONT_3X5};
pub use generator::{Artifact, Generator, GeneratorKind, DEFAULT_COMMIT_DENSITY};
pub use glyph::{Glyph, Pixel};
pub use grid::{Cell, CellKind, Grid, Point, DAYS, LETTER_GAP, LETTER_GAP_MIN_WIDTH, WEEKS};
#[cfg(feature = "templates")]
pub use template::BuiltinTemplates;
pub use template::{TemplateData, TemplateRenderer};

// Test utilities
pub mod test_support;
