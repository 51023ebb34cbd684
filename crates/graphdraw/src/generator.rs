use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    calendar::GitDate,
    config::RenderConfig,
    error::{GraphError, Result},
    font::{text_to_glyphs, Font, FontFamily, UnsupportedChar},
    grid::{CellKind, Grid, Point},
    template::{TemplateData, TemplateRenderer},
};

pub const DEFAULT_COMMIT_DENSITY: u32 = 80;

/// Display class name for every cell, row by row.
pub type CellClasses = Vec<Vec<&'static str>>;

pub fn cell_class(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Nil => "nilCell",
        CellKind::Empty => "emptyCell",
        CellKind::Occupied => "occupiedCell",
    }
}

pub fn cell_classes(grid: &Grid) -> CellClasses {
    grid.cells()
        .iter()
        .map(|row| row.iter().map(|c| cell_class(c.kind())).collect())
        .collect()
}

/// Dates of all occupied cells, ascending and without duplicates.
pub fn occupied_dates(grid: &Grid) -> Vec<GitDate> {
    let mut dates: Vec<GitDate> = grid
        .cells()
        .iter()
        .flatten()
        .filter(|c| c.is_occupied())
        .filter_map(|c| c.date())
        .collect();
    dates.sort();
    dates.dedup();
    dates
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Cell class matrix for a browsable preview.
    #[default]
    Preview,
    /// Sorted dates for a script that backdates commits.
    Script,
}

impl GeneratorKind {
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Preview => "preview",
            GeneratorKind::Script => "script",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preview" | "html" => Ok(GeneratorKind::Preview),
            "script" => Ok(GeneratorKind::Script),
            other => Err(GraphError::UnknownGenerator(other.to_string())),
        }
    }
}

/// Template-free output of a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    Preview(CellClasses),
    Script(Vec<GitDate>),
}

/// Paints text onto its own grid and derives one kind of artifact from it.
///
/// The grid is reset before every call, so one generator can be reused for
/// any number of messages without earlier text bleeding into later output.
pub struct Generator {
    kind: GeneratorKind,
    grid: Grid,
    font: &'static Font,
    unsupported: UnsupportedChar,
    origin: Point,
}

impl Generator {
    pub fn new(kind: GeneratorKind, grid: Grid) -> Self {
        Self {
            kind,
            grid,
            font: FontFamily::default().font(),
            unsupported: UnsupportedChar::default(),
            origin: Point::default(),
        }
    }

    /// Build a generator with a fresh grid for `config.year`.
    pub fn from_config(kind: GeneratorKind, config: &RenderConfig) -> Result<Self> {
        let mut generator = Self::new(kind, Grid::new(config.year)?);
        generator.set_font(config.font.font());
        generator.set_unsupported(config.unsupported);
        generator.set_origin(config.origin);
        Ok(generator)
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn font(&self) -> &'static Font {
        self.font
    }

    pub fn set_font(&mut self, font: &'static Font) {
        self.font = font;
    }

    pub fn set_unsupported(&mut self, policy: UnsupportedChar) {
        self.unsupported = policy;
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give the grid back, e.g. to reuse it for another generator.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Paint `text` and derive the artifact. On failure the grid is left unpainted.
    pub fn artifact(&mut self, text: &str) -> Result<Artifact> {
        self.grid.reset();
        let sentence = text_to_glyphs(self.font, text, self.unsupported)?;
        if let Err(err) = self.grid.place_sentence(&sentence, self.origin) {
            self.grid.reset();
            return Err(err);
        }
        debug!(
            kind = %self.kind,
            font = self.font.name(),
            glyphs = sentence.len(),
            occupied = self.grid.occupied_count(),
            "painted message"
        );
        Ok(match self.kind {
            GeneratorKind::Preview => Artifact::Preview(cell_classes(&self.grid)),
            GeneratorKind::Script => Artifact::Script(occupied_dates(&self.grid)),
        })
    }

    /// Paint `text` and feed the artifact through the matching named template.
    pub fn render<R>(&mut self, text: &str, commit_density: u32, renderer: &R) -> Result<Vec<u8>>
    where
        R: TemplateRenderer + ?Sized,
    {
        let artifact = self.artifact(text)?;
        let data = match &artifact {
            Artifact::Preview(cells) => TemplateData::Preview {
                cells,
                msg: text,
                commit_density,
            },
            Artifact::Script(dates) => TemplateData::Script {
                dates,
                commit_density,
            },
        };
        renderer
            .render(data.template_name(), &data)
            .map_err(GraphError::Template)
    }
}
