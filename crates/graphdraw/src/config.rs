use chrono::{Datelike, Utc};

use crate::{
    font::{FontFamily, UnsupportedChar},
    generator::DEFAULT_COMMIT_DENSITY,
    grid::Point,
};

/// Caller-selected knobs for one render request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub year: i32,
    pub font: FontFamily,
    /// Commits per occupied day; only the script template uses it.
    pub commit_density: u32,
    pub origin: Point,
    pub unsupported: UnsupportedChar,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            year: current_year(),
            font: FontFamily::default(),
            commit_density: DEFAULT_COMMIT_DENSITY,
            origin: Point::default(),
            unsupported: UnsupportedChar::default(),
        }
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
