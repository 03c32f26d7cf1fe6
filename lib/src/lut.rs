//! Glyph palette lookup
//!
//! Characters are ordered from the emptiest (space) to the densest (full
//! block), so a brighter pixel always lands on an equal or denser glyph.

/// Fill characters ordered by visual density
///
/// 20 levels: ASCII punctuation ramp, shade blocks, then left partial blocks
/// growing to a full block.
pub const PALETTE: [char; 20] = [
    ' ', // 0: emptiest
    '.',
    ':',
    ';',
    '+',
    '*',
    '%',
    'S',
    '#',
    '░', // light shade
    '▒', // medium shade
    '▓', // dark shade
    '▏',
    '▎',
    '▍',
    '▌',
    '▋',
    '▊',
    '▉',
    '█', // 19: full block
];

/// Highest valid palette index
pub const MAX_INDEX: usize = PALETTE.len() - 1;

/// Map a gamma-corrected brightness to a palette index
///
/// `floor(level * 19)`, clamped to `[0, 19]`. NaN maps to 0.
pub fn palette_index(level: f64) -> usize {
    let scaled = (level * MAX_INDEX as f64).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    (scaled as usize).min(MAX_INDEX)
}

/// Get the palette character for a gamma-corrected brightness in [0.0, 1.0]
pub fn glyph(level: f64) -> char {
    PALETTE[palette_index(level)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_twenty_unique_symbols() {
        assert_eq!(PALETTE.len(), 20);
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_glyph_darkest() {
        assert_eq!(glyph(0.0), ' ');
    }

    #[test]
    fn test_glyph_brightest() {
        assert_eq!(glyph(1.0), '█');
        assert_eq!(palette_index(1.0), MAX_INDEX);
    }

    #[test]
    fn test_palette_index_clamps_out_of_range() {
        assert_eq!(palette_index(-0.3), 0);
        assert_eq!(palette_index(1.0000001), MAX_INDEX);
        assert_eq!(palette_index(7.5), MAX_INDEX);
        assert_eq!(palette_index(f64::NAN), 0);
    }

    #[test]
    fn test_palette_index_is_monotonic() {
        let mut last = 0;
        for step in 0..=1000 {
            let idx = palette_index(step as f64 / 1000.0);
            assert!(idx >= last);
            last = idx;
        }
    }

    #[test]
    fn test_palette_index_floors() {
        // 0.5 * 19 = 9.5
        assert_eq!(palette_index(0.5), 9);
        assert_eq!(glyph(0.5), '░');
    }
}
