use super::*;

#[test]
fn every_printable_ascii_char_has_a_glyph() {
    for ch in ' '..='~' {
        assert!(glyph_rows(ch).is_some(), "missing glyph for {ch:?}");
    }
    assert!(glyph_rows('\n').is_none());
    assert!(glyph_rows('é').is_none());
}

#[test]
fn glyph_rows_fit_in_five_columns() {
    for ch in ' '..='~' {
        let rows = glyph_rows(ch).unwrap();
        assert!(rows.iter().all(|r| *r < 0b100000), "{ch:?} wider than 5");
    }
}

#[test]
fn space_is_blank_and_letters_are_not() {
    assert!(BitmapFont::with_scale(1).rasterize(' ').iter().all(|c| *c == 0));
    assert!(BitmapFont::with_scale(1).rasterize('W').contains(&255));
}

#[test]
fn rasterize_scales_blocks() {
    let font = BitmapFont::with_scale(3);
    let mask = font.rasterize('|');
    let w = (CELL_WIDTH * 3) as usize;
    assert_eq!(mask.len(), w * (CELL_HEIGHT * 3) as usize);
    // Column 2 of '|' becomes x in 6..9 at scale 3.
    for y in 0..(CELL_HEIGHT * 3) as usize {
        assert_eq!(&mask[y * w..y * w + w], &[0, 0, 0, 0, 0, 0, 255, 255, 255, 0, 0, 0, 0, 0, 0]);
    }
}

#[test]
fn unknown_chars_render_as_question_mark() {
    let font = BitmapFont::with_scale(2);
    assert_eq!(font.rasterize('€'), font.rasterize('?'));
}

#[test]
fn scale_tracks_pixel_size() {
    assert_eq!(BitmapFont::for_pixel_size(74.0).scale(), 7);
    assert_eq!(BitmapFont::for_pixel_size(34.0).scale(), 3);
    assert_eq!(BitmapFont::for_pixel_size(2.0).scale(), 1);
    assert_eq!(BitmapFont::for_pixel_size(f32::NAN).scale(), 1);
    assert_eq!(BitmapFont::with_scale(0).scale(), 1);
}
