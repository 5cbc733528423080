// ABOUTME: Leading numeric expression scanner for ingredient lines
// ABOUTME: Handles integers, decimals, fractions, unicode fractions, mixed numbers, and ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unicode vulgar fractions and their values
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

fn vulgar_value(c: char) -> Option<f64> {
    VULGAR_FRACTIONS
        .iter()
        .find_map(|(fraction, value)| (*fraction == c).then_some(*value))
}

const fn is_fraction_slash(c: char) -> bool {
    matches!(c, '/' | '⁄')
}

const fn is_range_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—')
}

/// Byte cursor over the text being scanned
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos > start
    }

    fn take_digits(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        &self.text[start..self.pos]
    }
}

/// Result of scanning a single number
struct Scanned {
    value: f64,
    /// Plain integer with no fractional part, eligible to start a mixed number
    whole: bool,
}

/// Scan one number: `2`, `1.5`, `.5`, `1/2`, `½`, `1½`
fn scan_number(cursor: &mut Cursor<'_>) -> Option<Scanned> {
    let start = cursor.pos;

    if let Some(value) = cursor.peek().and_then(vulgar_value) {
        cursor.bump();
        return Some(Scanned {
            value,
            whole: false,
        });
    }

    let integer = cursor.take_digits();

    if cursor.peek() == Some('.') && cursor.peek_second().is_some_and(|c| c.is_ascii_digit()) {
        cursor.bump();
        cursor.take_digits();
        let literal = &cursor.text[start..cursor.pos];
        return literal.parse::<f64>().ok().map(|value| Scanned {
            value,
            whole: false,
        });
    }

    if integer.is_empty() {
        cursor.pos = start;
        return None;
    }

    let Ok(whole) = integer.parse::<f64>() else {
        cursor.pos = start;
        return None;
    };

    if cursor.peek().is_some_and(is_fraction_slash)
        && cursor.peek_second().is_some_and(|c| c.is_ascii_digit())
    {
        cursor.bump();
        let denominator = cursor.take_digits().parse::<f64>().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(Scanned {
            value: whole / denominator,
            whole: false,
        });
    }

    if let Some(fraction) = cursor.peek().and_then(vulgar_value) {
        cursor.bump();
        return Some(Scanned {
            value: whole + fraction,
            whole: false,
        });
    }

    Some(Scanned { value: whole, whole: true })
}

/// Scan a fraction-only term following a whole number ("1 1/2", "1 ½")
fn scan_mixed_fraction(cursor: &mut Cursor<'_>) -> Option<f64> {
    let start = cursor.pos;
    if !cursor.skip_whitespace() {
        return None;
    }
    match scan_number(cursor) {
        Some(Scanned { value, whole: false }) if value < 1.0 => Some(value),
        _ => {
            cursor.pos = start;
            None
        }
    }
}

/// Scan a number optionally followed by a mixed fraction
fn scan_amount(cursor: &mut Cursor<'_>) -> Option<f64> {
    let first = scan_number(cursor)?;
    if first.whole {
        if let Some(fraction) = scan_mixed_fraction(cursor) {
            return Some(first.value + fraction);
        }
    }
    Some(first.value)
}

/// Consume a range upper bound ("-4", " to 4"); the bound itself is discarded
fn skip_range_upper_bound(cursor: &mut Cursor<'_>) {
    let start = cursor.pos;
    cursor.skip_whitespace();

    let has_separator = if cursor.peek().is_some_and(is_range_dash) {
        cursor.bump();
        true
    } else if cursor.rest().starts_with("to ") || cursor.rest().starts_with("to\t") {
        cursor.bump();
        cursor.bump();
        true
    } else {
        false
    };

    if has_separator {
        cursor.skip_whitespace();
        if scan_amount(cursor).is_some() {
            return;
        }
    }
    cursor.pos = start;
}

/// Parse a leading numeric expression
///
/// Returns the quantity and the text after it. Ranges collapse to their lower
/// bound. Returns `None` when the text does not start with a usable number.
#[must_use]
pub fn parse_leading_quantity(text: &str) -> Option<(f64, &str)> {
    let mut cursor = Cursor::new(text.trim_start());
    let value = scan_amount(&mut cursor)?;
    if !value.is_finite() {
        return None;
    }
    skip_range_upper_bound(&mut cursor);
    Some((value, cursor.rest()))
}

/// Render a quantity with at most two decimals and no trailing zeros
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    let rounded = (quantity * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
