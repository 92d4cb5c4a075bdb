//! Built-in 5x7 bitmap font
//!
//! Covers ASCII letters (lowercase draws as uppercase), digits and common
//! punctuation. Anything else renders as a hollow box and is reported by
//! `missing_glyphs`.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells (glyph plus one blank column)
pub const ADVANCE: u32 = 6;
/// Vertical distance between lines in cells
pub const LINE_HEIGHT: u32 = 9;

/// Cell size in pixels for a given font size (font size = pixel height of one line box)
#[inline]
pub fn cell_size(font_size: f32) -> f32 {
    (font_size / 8.0).max(1.0)
}

/// Rows of a glyph, top to bottom; bit 4 is the leftmost column
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        ' ' => [0, 0, 0, 0, 0, 0, 0],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        ';' => [0, 0b01100, 0b01100, 0, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '+' => [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0],
        '=' => [0, 0, 0b11111, 0, 0b11111, 0, 0],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '%' => [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '\'' => [0b01100, 0b00100, 0b01000, 0, 0, 0, 0],
        '"' => [0b01010, 0b01010, 0b01010, 0, 0, 0, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        '*' => [0, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '|' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        _ => return None,
    };
    Some(rows)
}

/// Characters in `text` that have no glyph, in order of first appearance
pub fn missing_glyphs(text: &str) -> Vec<char> {
    let mut missing = Vec::new();
    for c in text.chars() {
        if c.is_whitespace() || glyph(c).is_some() || missing.contains(&c) {
            continue;
        }
        missing.push(c);
    }
    missing
}

/// Width in pixels of the widest line of `text`
pub fn measure(text: &str, font_size: f32) -> f32 {
    let cell = cell_size(font_size);
    text.lines()
        .map(|line| {
            let count = line.chars().count() as f32;
            if count == 0.0 {
                0.0
            } else {
                (count * ADVANCE as f32 - 1.0) * cell
            }
        })
        .fold(0.0, f32::max)
}

/// Tessellate `text` with its top-left corner at `pos`
pub fn text(text: &str, pos: Vec2, font_size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let cell = cell_size(font_size);
    let mut vertices = Vec::new();
    let mut cursor = pos;

    for c in text.chars() {
        if c == '\n' {
            cursor.x = pos.x;
            cursor.y += LINE_HEIGHT as f32 * cell;
            continue;
        }

        match glyph(c) {
            Some(rows) => glyph_runs(&rows, cursor, cell, color, &mut vertices),
            None => vertices.extend(shapes::rect_lines(
                cursor,
                Vec2::new(GLYPH_WIDTH as f32, GLYPH_HEIGHT as f32) * cell,
                cell,
                color,
            )),
        }
        cursor.x += ADVANCE as f32 * cell;
    }

    vertices
}

/// Emit one quad per horizontal run of lit cells
fn glyph_runs(rows: &[u8; 7], origin: Vec2, cell: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    for (row, bits) in rows.iter().enumerate() {
        let mut col = 0;
        while col < GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                col += 1;
                continue;
            }
            let start = col;
            while col < GLYPH_WIDTH && bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                col += 1;
            }
            let pos = origin + Vec2::new(start as f32, row as f32) * cell;
            let size = Vec2::new((col - start) as f32, 1.0) * cell;
            out.extend(shapes::rect(pos, size, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph('z').is_some());
    }

    #[test]
    fn test_missing_glyphs_reports_unique_chars() {
        let missing = missing_glyphs("Unicode: 中文 中 ✓ ok");
        assert_eq!(missing, vec!['中', '文', '✓']);
        assert!(missing_glyphs("SCORE: 100 (WAVE 2)").is_empty());
    }

    #[test]
    fn test_measure_uses_longest_line() {
        let cell = cell_size(16.0);
        assert_eq!(measure("AB", 16.0), 11.0 * cell);
        assert_eq!(measure("A\nABC", 16.0), 17.0 * cell);
        assert_eq!(measure("", 16.0), 0.0);
    }

    #[test]
    fn test_text_merges_runs() {
        // '-' is a single run of five cells: one quad
        assert_eq!(text("-", Vec2::ZERO, 8.0, [1.0; 4]).len(), 6);
        // 'I' has runs on every row: top and bottom bars plus five stems
        assert_eq!(text("I", Vec2::ZERO, 8.0, [1.0; 4]).len(), 7 * 6);
        assert!(text(" ", Vec2::ZERO, 8.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_unknown_glyph_draws_box() {
        assert_eq!(text("中", Vec2::ZERO, 8.0, [1.0; 4]).len(), 24);
    }
}
