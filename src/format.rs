//! # Text Formatting
//!
//! Fixed-width padding, Brazilian number formatting and document masks.
//!
//! Everything here is pure and total. Mask functions never fail: on a wrong
//! digit count they return an empty string (or the bare digits, see each
//! function), and callers treat that as "omit the field".
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`currency`] | `1234.5` | `1.234,50` |
//! | [`mask_cnpj`] | `11222333000181` | `11.222.333/0001-81` |
//! | [`mask_cpf`] | `12345678901` | `123.456.789-01` |
//! | [`mask_phone`] | `11987654321` | `(11) 98765-4321` |
//! | [`mask_zip`] | `01310100` | `01310-100` |

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Which side of the text receives the fill characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSide {
    /// Fill on the left (right-aligned text).
    Left,
    /// Fill on the right (left-aligned text).
    Right,
}

/// Clip `text` to `width` characters, then pad it to exactly `width`.
///
/// ## Example
///
/// ```
/// use danfce::format::{pad, PadSide};
///
/// assert_eq!(pad("42", 5, '0', PadSide::Left), "00042");
/// assert_eq!(pad("ESPRESSO DUPLO", 8, ' ', PadSide::Right), "ESPRESSO");
/// ```
pub fn pad(text: &str, width: usize, fill: char, side: PadSide) -> String {
    let clipped: String = text.chars().take(width).collect();
    let missing = width - clipped.chars().count();
    let filler: String = std::iter::repeat_n(fill, missing).collect();

    match side {
        PadSide::Left => filler + &clipped,
        PadSide::Right => clipped + &filler,
    }
}

/// Format a value the Brazilian way: `.` groups thousands, `,` separates decimals.
///
/// The sign is dropped; callers print `+`/`-` themselves. Rounds half away
/// from zero.
pub fn currency(value: Decimal, decimals: u32) -> String {
    let mut rounded = value
        .abs()
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    let text = rounded.to_string();

    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{},{}", group_thousands(int_part), frac_part),
        None => group_thousands(&text),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Keep only ASCII digits.
pub fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// `NN.NNN.NNN/NNNN-NN`, or empty unless exactly 14 digits remain.
pub fn mask_cnpj(text: &str) -> String {
    let d = digits(text);
    if d.len() != 14 {
        return String::new();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// `NNN.NNN.NNN-NN`; any other length comes back as bare digits.
pub fn mask_cpf(text: &str) -> String {
    let d = digits(text);
    if d.len() != 11 {
        return d;
    }
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// Landline (10 digits) or mobile (11 digits) phone; empty otherwise.
pub fn mask_phone(text: &str) -> String {
    let d = digits(text);
    match d.len() {
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        _ => String::new(),
    }
}

/// CEP `NNNNN-NNN`; any other length comes back as bare digits.
pub fn mask_zip(text: &str) -> String {
    let d = digits(text);
    if d.len() != 8 {
        return d;
    }
    format!("{}-{}", &d[0..5], &d[5..8])
}

/// Split the access key into space-separated groups of four.
///
/// ```
/// use danfce::format::mask_access_key;
///
/// assert_eq!(mask_access_key("35240112345678000190"), "3524 0112 3456 7800 0190");
/// ```
pub fn mask_access_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    chars
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greedy word wrap of free text at `width` characters.
///
/// `;` and `|` act as paragraph separators and produce a blank line.
/// A word longer than `width` is hard-broken into `width`-sized pieces.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    wrap_lines(&text.replace([';', '|'], "\n\n"), width)
}

/// Greedy word wrap that leaves punctuation alone; only `\n` breaks a line.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim(), width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    if paragraph.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let word_len = chars.len();
        let word: String = chars.into_iter().collect();
        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word));
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
}

/// Render an NFC-e timestamp (`2024-03-15T14:30:00-03:00`) as `15/03/2024 14:30:00`.
///
/// The wall-clock time of the timestamp's own offset is kept. Values that
/// are not ISO-8601 are returned trimmed and unchanged.
pub fn format_timestamp(value: &str) -> String {
    const LAYOUT: &str = "%d/%m/%Y %H:%M:%S";

    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(LAYOUT).to_string();
    }
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format(LAYOUT).to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_always_exact_width() {
        let samples = ["", "a", "ÇÃO", "exactly10!", "this one is much longer than the width"];
        for width in 1..=20 {
            for text in samples {
                for side in [PadSide::Left, PadSide::Right] {
                    let out = pad(text, width, '.', side);
                    assert_eq!(out.chars().count(), width, "pad({text:?}, {width})");
                }
            }
        }
    }

    #[test]
    fn test_pad_sides() {
        assert_eq!(pad("7", 3, '0', PadSide::Left), "007");
        assert_eq!(pad("UN", 3, ' ', PadSide::Right), "UN ");
        assert_eq!(pad("CAFÉ COM LEITE", 4, ' ', PadSide::Left), "CAFÉ");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(Decimal::new(1234567891, 3), 2), "1.234.567,89");
        assert_eq!(currency(Decimal::new(500, 2), 2), "5,00");
        assert_eq!(currency(Decimal::new(-1050, 2), 2), "10,50");
        assert_eq!(currency(Decimal::new(5, 3), 2), "0,01");
        assert_eq!(currency(Decimal::ZERO, 2), "0,00");
        assert_eq!(currency(Decimal::new(999, 0), 2), "999,00");
        assert_eq!(currency(Decimal::new(12345, 1), 0), "1.235");
    }

    #[test]
    fn test_mask_cnpj() {
        assert_eq!(mask_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(mask_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
        assert_eq!(mask_cnpj("1122233300018"), "");
        assert_eq!(mask_cnpj("112223330001811"), "");
        assert_eq!(mask_cnpj(""), "");
    }

    #[test]
    fn test_mask_cpf() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
        assert_eq!(mask_cpf("1234"), "1234");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(mask_phone("(11) 3333-4444"), "(11) 3333-4444");
        assert_eq!(mask_phone("123"), "");
    }

    #[test]
    fn test_mask_zip() {
        assert_eq!(mask_zip("01310100"), "01310-100");
        assert_eq!(mask_zip("01310-100"), "01310-100");
        assert_eq!(mask_zip("0131"), "0131");
    }

    #[test]
    fn test_mask_access_key() {
        let key = "35240111222333000181650010000001231000001234";
        assert_eq!(key.len(), 44);
        let masked = mask_access_key(key);
        let groups: Vec<&str> = masked.split(' ').collect();
        assert_eq!(groups.len(), 11);
        assert!(groups.iter().all(|g| g.len() == 4));
        assert_eq!(groups.concat(), key);
    }

    #[test]
    fn test_word_wrap_respects_width() {
        let text = "Trocas somente com apresentacao deste cupom em ate sete dias corridos";
        for width in 5..40 {
            for line in word_wrap(text, width) {
                assert!(line.chars().count() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn test_word_wrap_keeps_words_whole() {
        let lines = word_wrap("volte sempre obrigado", 12);
        assert_eq!(lines, vec!["volte sempre", "obrigado"]);
    }

    #[test]
    fn test_word_wrap_breaks_oversized_word() {
        let lines = word_wrap("ab abcdefghij cd", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij", "cd"]);
    }

    #[test]
    fn test_word_wrap_paragraph_separators() {
        let lines = word_wrap("Pedido 42; Mesa 7|Obrigado", 48);
        assert_eq!(lines, vec!["Pedido 42", "", "Mesa 7", "", "Obrigado"]);
    }

    #[test]
    fn test_wrap_lines_keeps_separators() {
        assert_eq!(
            wrap_lines("BAR DO ZE; FILIAL 2 LTDA", 48),
            vec!["BAR DO ZE; FILIAL 2 LTDA"]
        );
        assert_eq!(
            wrap_lines("https://x.gov.br/q?p=1|2|3", 12),
            vec!["https://x.go", "v.br/q?p=1|2", "|3"]
        );
    }

    #[test]
    fn test_word_wrap_empty() {
        assert!(word_wrap("", 10).is_empty());
        assert!(word_wrap(" ; ", 10).is_empty());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-15T14:30:05-03:00"),
            "15/03/2024 14:30:05"
        );
        assert_eq!(format_timestamp("2024-03-15T14:30:05"), "15/03/2024 14:30:05");
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("ontem"), "ontem");
    }
}
