use crate::font::glyphs::GlyphTable;
use crate::foundation::error::DotsResult;

/// Cell width of the built-in font.
pub const CELL_WIDTH: u32 = 5;
/// Cell height of the built-in font (seven drawn rows plus one blank descender row).
pub const CELL_HEIGHT: u32 = 8;

// Bit 4 is the leftmost column.
const GLYPHS: &[(char, [u8; 7])] = &[
    ('a', [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
    ('b', [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]),
    ('c', [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('d', [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]),
    ('e', [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
    ('f', [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]),
    ('g', [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('h', [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
    ('i', [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('j', [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('k', [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
    ('l', [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('m', [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]),
    ('n', [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
    ('o', [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('p', [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
    ('q', [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]),
    ('r', [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
    ('s', [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]),
    ('t', [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]),
    ('u', [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]),
    ('v', [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('w', [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]),
    ('x', [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
    ('y', [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('z', [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('а', [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
    ('б', [0b01111, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('в', [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10001, 0b11110]),
    ('г', [0b00000, 0b00000, 0b11111, 0b10000, 0b10000, 0b10000, 0b10000]),
    ('д', [0b00000, 0b00000, 0b00110, 0b01010, 0b01010, 0b11111, 0b10001]),
    ('е', [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
    ('ё', [0b01010, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
    ('ж', [0b00000, 0b00000, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101]),
    ('з', [0b00000, 0b00000, 0b11110, 0b00001, 0b00110, 0b00001, 0b11110]),
    ('и', [0b00000, 0b00000, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001]),
    ('й', [0b01010, 0b00100, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001]),
    ('к', [0b00000, 0b00000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
    ('л', [0b00000, 0b00000, 0b00111, 0b01001, 0b01001, 0b01001, 0b10001]),
    ('м', [0b00000, 0b00000, 0b10001, 0b11011, 0b10101, 0b10001, 0b10001]),
    ('н', [0b00000, 0b00000, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
    ('о', [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('п', [0b00000, 0b00000, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001]),
    ('р', [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
    ('с', [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('т', [0b00000, 0b00000, 0b11111, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('у', [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('ф', [0b00000, 0b00100, 0b01110, 0b10101, 0b10101, 0b01110, 0b00100]),
    ('х', [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
    ('ц', [0b00000, 0b00000, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001]),
    ('ч', [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001]),
    ('ш', [0b00000, 0b00000, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111]),
    ('щ', [0b00000, 0b00000, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001]),
    ('ъ', [0b00000, 0b00000, 0b11000, 0b01000, 0b01110, 0b01001, 0b01110]),
    ('ы', [0b00000, 0b00000, 0b10001, 0b10001, 0b11101, 0b10011, 0b11101]),
    ('ь', [0b00000, 0b00000, 0b10000, 0b10000, 0b11110, 0b10001, 0b11110]),
    ('э', [0b00000, 0b00000, 0b01110, 0b10001, 0b00111, 0b10001, 0b01110]),
    ('ю', [0b00000, 0b00000, 0b10010, 0b10101, 0b11101, 0b10101, 0b10010]),
    ('я', [0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00101, 0b11001]),
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('(', [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]),
    (')', [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
];

/// Alphabet covered by the built-in atlas, in cell order.
pub fn alphabet() -> String {
    GLYPHS.iter().map(|(c, _)| *c).collect()
}

/// Render the built-in glyphs into an atlas image: black ink on white, one blank
/// separator column after every cell.
pub fn atlas() -> image::RgbaImage {
    let advance = CELL_WIDTH + 1;
    let width = GLYPHS.len() as u32 * advance;
    let mut img = image::RgbaImage::from_pixel(width, CELL_HEIGHT, image::Rgba([255; 4]));
    for (i, (_, rows)) in GLYPHS.iter().enumerate() {
        let x0 = i as u32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..CELL_WIDTH {
                if bits & (1 << (CELL_WIDTH - 1 - col)) != 0 {
                    img.put_pixel(x0 + col, row as u32, image::Rgba([0, 0, 0, 255]));
                }
            }
        }
    }
    img
}

/// Glyph table for the built-in font.
pub fn glyph_table() -> DotsResult<GlyphTable> {
    GlyphTable::from_image(&atlas(), &alphabet(), CELL_WIDTH, CELL_HEIGHT)
}

#[cfg(test)]
#[path = "../../tests/unit/font/builtin.rs"]
mod tests;
