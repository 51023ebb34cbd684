use graphdraw::{text_to_glyphs, Font, FontFamily, Glyph, GraphError, Pixel, UnsupportedChar};
use pretty_assertions::assert_eq;

#[test]
fn shipped_fonts_cover_alphabet_and_space() {
    for family in FontFamily::ALL {
        let font = family.font();
        for ch in ('A'..='Z').chain(std::iter::once(' ')) {
            assert!(font.has_char(ch), "{family} is missing {ch:?}");
        }
        assert_eq!(font.glyph_count(), 27);
    }
}

#[test]
fn glyph_sizes_match_family() {
    let font = FontFamily::Font3x3.font();
    let a = font.glyph('A').unwrap();
    assert_eq!((a.width(), a.height()), (3, 3));

    let font = FontFamily::Font3x5.font();
    let a = font.glyph('A').unwrap();
    assert_eq!((a.width(), a.height()), (3, 5));
    let space = font.glyph(' ').unwrap();
    assert_eq!((space.width(), space.height()), (1, 5));
    assert_eq!(space.on_count(), 0);
}

#[test]
fn lookup_is_case_insensitive() {
    let font = FontFamily::Font3x5.font();
    assert_eq!(font.glyph('q'), font.glyph('Q'));
    assert!(font.has_char('z'));
}

#[test]
fn raw_rows_become_pixels() {
    let mut font = Font::new("tiny");
    font.add_raw_char('x', &["#.", ".#"]);
    let glyph = font.glyph('X').unwrap();
    assert_eq!(glyph.pixels(), &[Pixel::On, Pixel::Off, Pixel::Off, Pixel::On][..]);
    assert_eq!(glyph.on_pixels().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
}

#[test]
fn text_keeps_order_and_skips_unknown_characters() {
    let font = FontFamily::Font3x5.font();
    let sentence = text_to_glyphs(font, "a-b!1 c", UnsupportedChar::Skip).unwrap();
    let expected = ['A', 'B', ' ', 'C'].map(|c| font.glyph(c).unwrap());
    assert_eq!(sentence.len(), 4);
    assert_eq!(sentence.glyphs(), &expected[..]);
    assert!(text_to_glyphs(font, "123", UnsupportedChar::Skip).unwrap().is_empty());
}

#[test]
fn strict_policy_rejects_unknown_characters() {
    let font = FontFamily::Font3x3.font();
    let err = text_to_glyphs(font, "HI!", UnsupportedChar::Fail).unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedCharacter('!')));
    assert!(text_to_glyphs(font, "hi there", UnsupportedChar::Fail).is_ok());
}

#[test]
fn font_family_from_name() {
    assert_eq!("3x3".parse::<FontFamily>().unwrap(), FontFamily::Font3x3);
    assert_eq!("3X5".parse::<FontFamily>().unwrap(), FontFamily::Font3x5);
    assert_eq!(FontFamily::default(), FontFamily::Font3x5);
    assert!(matches!(
        "5x7".parse::<FontFamily>(),
        Err(GraphError::UnknownFont(name)) if name == "5x7"
    ));
}

#[test]
fn ragged_rows_are_padded() {
    let glyph = Glyph::from_rows(&["#", "##", ""]);
    assert_eq!((glyph.width(), glyph.height()), (2, 3));
    assert_eq!(glyph.pixels().len(), 6);
    assert_eq!(glyph.on_pixels().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (1, 1)]);
}
