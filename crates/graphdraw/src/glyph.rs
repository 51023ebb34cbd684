/// A single bitmap cell of a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    Off,
    On,
}

impl Pixel {
    pub fn is_on(self) -> bool {
        self == Pixel::On
    }
}

/// Fixed-size bitmap for one character of one font.
///
/// Always holds exactly `width * height` row-major pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Glyph {
    /// Build a glyph from ASCII-art rows where `#` is ON and anything else is OFF.
    ///
    /// Rows shorter than the widest row are padded with OFF pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut pixels = Vec::with_capacity(width * height);
        for row in rows {
            let mut len = 0;
            for ch in row.chars() {
                pixels.push(if ch == '#' { Pixel::On } else { Pixel::Off });
                len += 1;
            }
            pixels.extend(std::iter::repeat(Pixel::Off).take(width - len));
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Number of columns (weeks) the glyph covers
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (weekdays) the glyph covers
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over `(x, y)` of every ON pixel, row by row.
    pub fn on_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_on())
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn on_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_on()).count()
    }
}
