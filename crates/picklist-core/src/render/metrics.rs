/// Helvetica advance widths (1/1000 em) for printable ASCII, 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

/// Whether the character can be drawn with the built-in Helvetica face.
pub fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Width of `text` in the same unit as `font_size`.
///
/// Callers must check `is_printable` first; other characters count as zero.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .filter(|c| is_printable(*c))
        .map(|c| HELVETICA_WIDTHS[c as usize - 0x20] as u32)
        .sum();
    units as f32 * font_size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width() {
        assert!((text_width("10", 12.0) - 2.0 * 556.0 * 12.0 / 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_table_lines_up_with_ascii() {
        assert_eq!(HELVETICA_WIDTHS[('A' as usize) - 0x20], 667);
        assert_eq!(HELVETICA_WIDTHS[('a' as usize) - 0x20], 556);
        assert_eq!(HELVETICA_WIDTHS[('~' as usize) - 0x20], 584);
    }

    #[test]
    fn test_printable_range() {
        assert!(is_printable('Z'));
        assert!(is_printable(' '));
        assert!(!is_printable('\n'));
        assert!(!is_printable('é'));
    }
}
