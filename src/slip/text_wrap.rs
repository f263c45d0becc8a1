const POINT_IN_MM: f32 = 25.4 / 72.0;

/// Advance widths of Helvetica for printable ASCII (from ` ` to `~`), in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ` ` to `/`
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // `0` to `9`
    278, 278, 584, 584, 584, 556, 1015, // `:` to `@`
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // `A` to `Z`
    278, 278, 278, 469, 556, 333, // `[` to `` ` ``
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, // `a` to `z`
    334, 260, 334, 584, // `{` to `~`
];
const DEFAULT_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - ' ' as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` printed in Helvetica, in millimetres.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * font_size * POINT_IN_MM
}

/// Split `text` into lines no wider than `max_width` millimetres.
/// Words are kept whole unless a single word is wider than a line.
pub fn split_text_to_size(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let fits = |candidate: &str| text_width(candidate, font_size) <= max_width;
    let mut lines = vec![];
    let mut current_line = String::new();

    for word in text.split(' ') {
        let candidate = if current_line.is_empty() {
            word.to_owned()
        } else {
            format!("{current_line} {word}")
        };
        if fits(&candidate) {
            current_line = candidate;
            continue;
        }

        if !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if fits(word) {
            current_line = word.to_owned();
        } else {
            for c in word.chars() {
                current_line.push(c);
                if !fits(&current_line) && current_line.chars().count() > 1 {
                    current_line.pop();
                    lines.push(std::mem::take(&mut current_line));
                    current_line.push(c);
                }
            }
        }
    }
    lines.push(current_line);

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT_SIZE: f32 = 15.0;

    #[test]
    fn should_measure_text() {
        // 10 digits of 556 units at 15pt
        let expected = 5.56 * 15.0 * 25.4 / 72.0;

        assert!((text_width("0123456789", FONT_SIZE) - expected).abs() < 0.001);
        assert_eq!(0.0, text_width("", FONT_SIZE));
    }

    #[test]
    fn should_keep_short_text_on_one_line() {
        let lines = split_text_to_size("Booth No: Room 1", FONT_SIZE, 130.0);

        assert_eq!(vec!["Booth No: Room 1".to_owned()], lines);
    }

    #[test]
    fn should_keep_default_booth_label_on_one_line() {
        let text = "Booth No: 264 Z. P. School,, Room No. 1, Khochivada";

        let lines = split_text_to_size(text, FONT_SIZE, 130.0);

        assert_eq!(vec![text.to_owned()], lines);
    }

    #[test]
    fn should_wrap_long_booth_label() {
        let text = "Booth No: 264 Z. P. School,, Room No. 1, Khochivada, Taluka Palghar";

        let lines = split_text_to_size(text, FONT_SIZE, 130.0);

        assert_eq!(
            vec![
                "Booth No: 264 Z. P. School,, Room No. 1, Khochivada,".to_owned(),
                "Taluka Palghar".to_owned()
            ],
            lines
        );
        assert!(lines.iter().all(|line| text_width(line, FONT_SIZE) <= 130.0));
    }

    #[test]
    fn should_split_word_wider_than_a_line() {
        let word = "W".repeat(30);

        let lines = split_text_to_size(&word, FONT_SIZE, 50.0);

        assert!(lines.len() > 1);
        assert_eq!(word, lines.concat());
        assert!(lines.iter().all(|line| text_width(line, FONT_SIZE) <= 50.0));
    }

    #[test]
    fn should_return_a_single_empty_line_for_empty_text() {
        assert_eq!(vec![String::new()], split_text_to_size("", FONT_SIZE, 130.0));
    }
}
