use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    error::{GraphError, Result},
    glyph::Glyph,
};

/// Character to glyph mapping for one bitmap font.
///
/// Lookups are case-insensitive: text is upper-cased before it reaches the table,
/// so fonts only define `A`-`Z` and space.
#[derive(Clone, Debug)]
pub struct Font {
    name: String,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyphs: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a glyph from ASCII-art rows (`#` = on, `.` = off).
    pub fn add_raw_char(&mut self, ch: char, raw_rows: &[&str]) {
        self.add_glyph(ch, Glyph::from_rows(raw_rows));
    }

    pub fn add_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch.to_ascii_uppercase(), glyph);
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch.to_ascii_uppercase())
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

}

/// What to do with characters the font has no glyph for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedChar {
    /// Drop the character and keep going.
    #[default]
    Skip,
    /// Abort with [`GraphError::UnsupportedCharacter`].
    Fail,
}

/// Ordered glyphs for one piece of input text.
#[derive(Clone, Debug, Default)]
pub struct Sentence<'a> {
    glyphs: Vec<&'a Glyph>,
}

impl<'a> Sentence<'a> {
    pub fn new(glyphs: Vec<&'a Glyph>) -> Self {
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[&'a Glyph] {
        &self.glyphs
    }
}

/// Convert text to a sentence, preserving input order.
pub fn text_to_glyphs<'a>(
    font: &'a Font,
    text: &str,
    policy: UnsupportedChar,
) -> Result<Sentence<'a>> {
    let mut glyphs = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match font.glyph(ch) {
            Some(glyph) => glyphs.push(glyph),
            None if policy == UnsupportedChar::Fail => {
                return Err(GraphError::UnsupportedCharacter(ch));
            }
            None => debug!(font = font.name(), ?ch, "skipping unsupported character"),
        }
    }
    Ok(Sentence::new(glyphs))
}

/// The fonts shipped with the crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// 3 columns wide, 3 rows tall.
    Font3x3,
    /// 3 columns wide, 5 rows tall.
    #[default]
    Font3x5,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Font3x3, FontFamily::Font3x5];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Font3x3 => "3x3",
            FontFamily::Font3x5 => "3x5",
        }
    }

    pub fn font(self) -> &'static Font {
        match self {
            FontFamily::Font3x3 => &*FONT_3X3,
            FontFamily::Font3x5 => &*FONT_3X5,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "3x3" => Ok(FontFamily::Font3x3),
            "3x5" => Ok(FontFamily::Font3x5),
            other => Err(GraphError::UnknownFont(other.to_string())),
        }
    }
}

pub static FONT_3X3: Lazy<Font> = Lazy::new(|| {
    let mut font = Font::new("3x3");
    font.add_raw_char('A', &[".#.", "###", "#.#"]);
    font.add_raw_char('B', &["###", "###", "###"]);
    font.add_raw_char('C', &["###", "#..", "###"]);
    font.add_raw_char('D', &["##.", "#.#", "##."]);
    font.add_raw_char('E', &["###", "##.", "###"]);
    font.add_raw_char('F', &["###", "##.", "#.."]);
    font.add_raw_char('G', &["##.", "###", "###"]);
    font.add_raw_char('H', &["#.#", "###", "#.#"]);
    font.add_raw_char('I', &[".#.", ".#.", ".#."]);
    font.add_raw_char('J', &["..#", "#.#", "###"]);
    font.add_raw_char('K', &["#.#", "##.", "#.#"]);
    font.add_raw_char('L', &["#..", "#..", "###"]);
    font.add_raw_char('M', &["#.#", "###", "#.#"]);
    font.add_raw_char('N', &["..#", "###", "#.."]);
    font.add_raw_char('O', &[".#.", "#.#", ".#."]);
    font.add_raw_char('P', &["##.", "###", "#.."]);
    font.add_raw_char('Q', &[".#.", "#.#", ".##"]);
    font.add_raw_char('R', &["##.", "###", "#.#"]);
    font.add_raw_char('S', &[".##", ".#.", "##."]);
    font.add_raw_char('T', &["###", ".#.", ".#."]);
    font.add_raw_char('U', &["#.#", "#.#", "###"]);
    font.add_raw_char('V', &["#.#", "#.#", ".#."]);
    font.add_raw_char('W', &["#.#", "###", "###"]);
    font.add_raw_char('X', &["#.#", ".#.", "#.#"]);
    font.add_raw_char('Y', &["#.#", ".#.", ".#."]);
    font.add_raw_char('Z', &["##.", ".#.", ".##"]);
    font.add_raw_char(' ', &[".", ".", "."]);
    font
});

pub static FONT_3X5: Lazy<Font> = Lazy::new(|| {
    let mut font = Font::new("3x5");
    font.add_raw_char('A', &[".#.", "#.#", "###", "#.#", "#.#"]);
    font.add_raw_char('B', &["##.", "#.#", "##.", "#.#", "##."]);
    font.add_raw_char('C', &[".##", "#..", "#..", "#..", ".##"]);
    font.add_raw_char('D', &["##.", "#.#", "#.#", "#.#", "##."]);
    font.add_raw_char('E', &["###", "#..", "##.", "#..", "###"]);
    font.add_raw_char('F', &["###", "#..", "##.", "#..", "#.."]);
    font.add_raw_char('G', &["###", "#..", "###", "#.#", "###"]);
    font.add_raw_char('H', &["#.#", "#.#", "###", "#.#", "#.#"]);
    font.add_raw_char('I', &["###", ".#.", ".#.", ".#.", "###"]);
    font.add_raw_char('J', &[".##", "..#", "..#", "#.#", "###"]);
    font.add_raw_char('K', &["#.#", "##.", "#..", "##.", "#.#"]);
    font.add_raw_char('L', &["#..", "#..", "#..", "#..", "###"]);
    font.add_raw_char('M', &["###", "###", "###", "#.#", "#.#"]);
    font.add_raw_char('N', &["#.#", "###", "###", "###", "#.#"]);
    font.add_raw_char('O', &[".#.", "#.#", "#.#", "#.#", ".#."]);
    font.add_raw_char('P', &["###", "#.#", "###", "#..", "#.."]);
    font.add_raw_char('Q', &["...", "###", "#.#", "###", "..#"]);
    font.add_raw_char('R', &["##.", "#.#", "##.", "#.#", "#.#"]);
    font.add_raw_char('S', &["###", "#..", ".#.", "..#", "###"]);
    font.add_raw_char('T', &["###", ".#.", ".#.", ".#.", ".#."]);
    font.add_raw_char('U', &["#.#", "#.#", "#.#", "#.#", "###"]);
    font.add_raw_char('V', &["#.#", "#.#", "#.#", ".#.", ".#."]);
    font.add_raw_char('W', &["#.#", "#.#", "###", "###", "###"]);
    font.add_raw_char('X', &["#.#", ".#.", ".#.", ".#.", "#.#"]);
    font.add_raw_char('Y', &["#.#", "#.#", ".#.", ".#.", ".#."]);
    font.add_raw_char('Z', &["###", "..#", ".#.", "#..", "###"]);
    font.add_raw_char(' ', &[".", ".", ".", ".", "."]);
    font
});
