use chrono::Datelike;
use tracing::{debug, warn};

use crate::{
    calendar::{GitDate, YearWalk},
    error::{GraphError, Result},
    font::Sentence,
    glyph::Glyph,
};

/// Rows of the grid, one per weekday starting on Sunday.
pub const DAYS: usize = 7;
/// Columns of the grid, one per week.
pub const WEEKS: usize = 53;

/// Glyphs at least this wide are followed by [`LETTER_GAP`] blank columns.
///
/// The space glyph is a single column and stays tight against its neighbours.
pub const LETTER_GAP_MIN_WIDTH: usize = 3;
pub const LETTER_GAP: usize = 1;
/// Blank rows between two wrapped lines of text.
pub const LINE_GAP: usize = 1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Outside the grid's year.
    #[default]
    Nil,
    /// Inside the year, not painted.
    Empty,
    /// Painted by a glyph.
    Occupied,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    kind: CellKind,
    date: Option<GitDate>,
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Calendar date of the cell; `None` for cells that were never reached by the year.
    pub fn date(&self) -> Option<GitDate> {
        self.date
    }

    pub fn is_occupied(&self) -> bool {
        self.kind == CellKind::Occupied
    }
}

/// Grid-relative position: `x` is the week column, `y` the weekday row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A year of days laid out as 7 weekday rows by 53 week columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    year: i32,
    cells: [[Cell; WEEKS]; DAYS],
}

impl Grid {
    pub fn new(year: i32) -> Result<Self> {
        let mut cells = [[Cell::default(); WEEKS]; DAYS];
        let mut dropped = 0;
        for day in YearWalk::new(year)? {
            if day.x >= WEEKS {
                dropped += 1;
                continue;
            }
            let kind = if day.date.date().year() == year {
                CellKind::Empty
            } else {
                CellKind::Nil
            };
            cells[day.y][day.x] = Cell {
                kind,
                date: Some(day.date),
            };
        }
        if dropped > 0 {
            warn!(year, dropped, "year does not fit the grid, trailing days dropped");
        }
        debug!(year, "initialized contribution grid");
        Ok(Self { year, cells })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn cells(&self) -> &[[Cell; WEEKS]; DAYS] {
        &self.cells
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    pub fn occupied_count(&self) -> usize {
        self.iter_cells().filter(|c| c.is_occupied()).count()
    }

    pub fn is_painted(&self) -> bool {
        self.iter_cells().any(Cell::is_occupied)
    }

    fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// True when no cell of week column `x` lies outside the year.
    pub fn week_available(&self, x: usize) -> bool {
        self.cells
            .iter()
            .all(|row| row.get(x).is_some_and(|c| c.kind != CellKind::Nil))
    }

    /// Paint the ON pixels of `glyph` with its top-left corner at `origin`.
    ///
    /// Returns the origin that was actually used: when the first week of the year
    /// is partial, a glyph placed in column 0 is shifted one column right.
    pub fn place_glyph(&mut self, glyph: &Glyph, origin: Point) -> Result<Point> {
        let first_week = self.week_available(0);
        let last_week = self.week_available(WEEKS - 1);
        let (cols, rows) = (WEEKS as i32, DAYS as i32);

        if origin.x < 0 || origin.x > cols || origin.y < 0 || origin.y > rows {
            return Err(GraphError::PointOutOfBounds {
                x: origin.x,
                y: origin.y,
            });
        }

        let right = origin.x + glyph.width() as i32;
        let bottom = origin.y + glyph.height() as i32;
        if (!last_week && right >= cols - 1) || right > cols || bottom > rows {
            return Err(GraphError::GlyphOverflow {
                x: origin.x,
                y: origin.y,
                width: glyph.width(),
                height: glyph.height(),
            });
        }

        let mut origin = origin;
        if !first_week && origin.x <= 0 {
            origin.x += 1;
        }

        for (gx, gy) in glyph.on_pixels() {
            let x = origin.x as usize + gx;
            let y = origin.y as usize + gy;
            if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
                if cell.kind != CellKind::Nil {
                    cell.kind = CellKind::Occupied;
                }
            }
        }
        Ok(origin)
    }

    /// Paint a sentence left to right starting at `origin`, wrapping onto a new
    /// line below when the next glyph would run into the last usable column.
    pub fn place_sentence(&mut self, sentence: &Sentence<'_>, origin: Point) -> Result<()> {
        let glyphs = sentence.glyphs();
        let mut cursor = origin;
        for (i, glyph) in glyphs.iter().enumerate() {
            cursor = self.place_glyph(glyph, cursor)?;
            cursor.x += advance(glyph) as i32;

            if let Some(next) = glyphs.get(i + 1) {
                if cursor.x + next.width() as i32 >= WEEKS as i32 - 1 {
                    cursor.y += (glyph.height() + LINE_GAP) as i32;
                    cursor.x = 0;
                    debug!(y = cursor.y, "wrapping sentence onto a new line");
                }
            }
        }
        Ok(())
    }

    /// Turn every occupied cell back into an empty one. Dates are kept.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.kind == CellKind::Occupied {
                cell.kind = CellKind::Empty;
            }
        }
    }
}

/// Horizontal cursor advance after painting `glyph`.
pub fn advance(glyph: &Glyph) -> usize {
    if glyph.width() >= LETTER_GAP_MIN_WIDTH {
        glyph.width() + LETTER_GAP
    } else {
        glyph.width()
    }
}
