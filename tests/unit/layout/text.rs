use super::*;
use crate::font::builtin;
use crate::foundation::core::Point;

fn ab_table() -> GlyphTable {
    let mut img = image::RgbaImage::from_pixel(5, 2, image::Rgba([255, 255, 255, 255]));
    img.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
    img.put_pixel(4, 1, image::Rgba([0, 0, 0, 255]));
    GlyphTable::from_image(&img, "ab", 2, 2).unwrap()
}

fn unit_style() -> TextStyle {
    TextStyle {
        x: 0.0,
        y: 0.0,
        size: 1.0,
        offset: 0.0,
        step: 1.0,
    }
}

#[test]
fn ab_scenario_places_two_dots() {
    let mut dots = DotSet::new();
    let added = add_text(&mut dots, "ab", &ab_table(), &unit_style()).unwrap();
    assert_eq!(added, 2);
    // spacing 3, anchors at -1.5 and 1.5, half cell 1x1, square origin offset -0.5 + 1
    assert_eq!(dots.as_slice(), &[Point::new(-2.0, 0.0), Point::new(2.0, 1.0)]);
}

#[test]
fn unknown_letters_take_a_blank_cell() {
    let mut dots = DotSet::new();
    add_text(&mut dots, "a?", &ab_table(), &unit_style()).unwrap();
    assert_eq!(dots.as_slice(), &[Point::new(-2.0, 0.0)]);

    dots.clear();
    assert_eq!(add_text(&mut dots, "??", &ab_table(), &unit_style()).unwrap(), 0);
    assert_eq!(add_text(&mut dots, "", &ab_table(), &unit_style()).unwrap(), 0);
    assert!(dots.is_empty());
}

#[test]
fn dot_count_matches_ink_times_samples() {
    let glyphs = builtin::glyph_table().unwrap();
    for (size, step) in [(15.0, 1.0), (4.0, 2.0), (5.0, 2.0), (3.0, 7.0)] {
        let style = TextStyle {
            size,
            step,
            ..TextStyle::default()
        };
        let text = "hello, world 42!";
        let ink: usize = text
            .chars()
            .map(|c| glyphs.ink_pixels(glyphs.char_index(c)).len())
            .sum();

        let mut dots = DotSet::new();
        let added = add_text(&mut dots, text, &glyphs, &style).unwrap();
        assert_eq!(added, ink * style.samples_per_square());
        assert_eq!(dots.len(), added);
    }
}

#[test]
fn samples_per_square_edges() {
    let style = |size, step| TextStyle {
        size,
        step,
        ..TextStyle::default()
    };
    assert_eq!(style(15.0, 1.0).samples_per_square(), 225);
    assert_eq!(style(4.0, 2.0).samples_per_square(), 4);
    assert_eq!(style(3.0, 7.0).samples_per_square(), 1);
    assert_eq!(style(0.5, 1.0).samples_per_square(), 0);
}

#[test]
fn fractional_sizes_and_steps_match_the_sample_count() {
    let glyphs = ab_table();
    for size_tenths in 10..=80 {
        for step_tenths in 10..=40 {
            let style = TextStyle {
                size: f64::from(size_tenths) / 10.0,
                step: f64::from(step_tenths) / 10.0,
                ..unit_style()
            };
            let mut dots = DotSet::new();
            let added = add_text(&mut dots, "a", &glyphs, &style).unwrap();
            assert_eq!(
                added,
                style.samples_per_square(),
                "size {} step {}",
                style.size,
                style.step
            );
        }
    }
}

#[test]
fn samples_stay_inside_their_square() {
    let style = TextStyle {
        size: 2.3,
        step: 1.3,
        ..unit_style()
    };
    let mut dots = DotSet::new();
    add_text(&mut dots, "a", &ab_table(), &style).unwrap();
    assert_eq!(dots.len(), 4);

    let min_x = dots.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = dots.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    assert!((max_x - min_x - 1.3).abs() < 1e-9);
}

#[test]
fn multi_byte_letters_resolve_to_their_cells() {
    // two 2x2 cells: 'а' inks (0,0), 'ё' inks (1,1)
    let mut img = image::RgbaImage::from_pixel(5, 2, image::Rgba([255, 255, 255, 255]));
    img.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
    img.put_pixel(4, 1, image::Rgba([0, 0, 0, 255]));
    let glyphs = GlyphTable::from_image(&img, "аё", 2, 2).unwrap();

    let mut dots = DotSet::new();
    let added = add_text(&mut dots, "ёа", &glyphs, &unit_style()).unwrap();
    assert_eq!(added, 2);
    assert_eq!(dots.as_slice(), &[Point::new(-1.0, 1.0), Point::new(1.0, 0.0)]);
}

#[test]
fn builtin_font_draws_cyrillic() {
    let glyphs = builtin::glyph_table().unwrap();
    let style = TextStyle {
        size: 1.0,
        ..TextStyle::default()
    };
    for word in ["привет", "ёж", "щука"] {
        let ink: usize = word
            .chars()
            .map(|c| glyphs.ink_pixels(glyphs.char_index(c)).len())
            .sum();
        assert!(ink > 0, "{word}");

        let mut dots = DotSet::new();
        assert_eq!(add_text(&mut dots, word, &glyphs, &style).unwrap(), ink);
    }
}

#[test]
fn symmetric_text_is_mirror_symmetric() {
    let glyphs = builtin::glyph_table().unwrap();
    let style = TextStyle {
        x: 40.0,
        y: -7.0,
        size: 3.0,
        offset: 1.0,
        step: 1.0,
    };
    let mut dots = DotSet::new();
    add_text(&mut dots, "xox", &glyphs, &style).unwrap();
    assert!(!dots.is_empty());

    // Squares are sampled from one unit inside their corner, which shifts the axis by
    // half a unit.
    let axis = style.x + 0.5;
    let key = |p: &Point| ((p.x * 4.0).round() as i64, (p.y * 4.0).round() as i64);
    let mut original: Vec<_> = dots.iter().map(key).collect();
    let mut mirrored: Vec<_> = dots
        .iter()
        .map(|p| key(&Point::new(2.0 * axis - p.x, p.y)))
        .collect();
    original.sort_unstable();
    mirrored.sort_unstable();
    assert_eq!(original, mirrored);
}

#[test]
fn add_text_appends() {
    let glyphs = ab_table();
    let mut dots = DotSet::new();
    add_text(&mut dots, "a", &glyphs, &unit_style()).unwrap();
    add_text(&mut dots, "b", &glyphs, &unit_style()).unwrap();
    assert_eq!(dots.len(), 2);
}

#[test]
fn rejects_step_below_one() {
    let style = TextStyle {
        step: 0.0,
        ..TextStyle::default()
    };
    let mut dots = DotSet::new();
    assert!(add_text(&mut dots, "ab", &ab_table(), &style).is_err());
    assert!(dots.is_empty());
}
