//! Numeric parsing for screening sheet cells.
//!
//! The sheets come out of pt-BR spreadsheets: "." is a thousands separator,
//! "," the decimal point, with optional "%" suffixes and "R$"/"US$" markers.
//! A cell that cannot be read as a number parses to [`MISSING`], so every
//! downstream sort and comparison stays plain numeric ordering with no
//! missing-ness branching.

/// Canonical sentinel for a missing or unparsable numeric cell.
pub const MISSING: f64 = f64::NEG_INFINITY;

/// Sentinel used where missing cells must sort last in ascending order.
pub const MISSING_LAST: f64 = f64::INFINITY;

/// Parse a locale-formatted numeric cell.
///
/// Currency markers, percent signs and whitespace are stripped, thousands
/// dots removed, the decimal comma swapped for a point. Anything that still
/// fails to parse as a finite number (absent cell, empty string, stray text,
/// literal "inf"/"nan") yields [`MISSING`].
pub fn parse_decimal(raw: Option<&str>) -> f64 {
    let Some(text) = raw else {
        return MISSING;
    };

    let text = text.replace("US$", "").replace("R$", "").replace('$', "");
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' => {}
            '.' => {} // thousands separator
            ',' => cleaned.push('.'),
            '\u{2212}' => cleaned.push('-'), // typographic minus from spreadsheet exports
            c if c.is_whitespace() => {}
            c => cleaned.push(c),
        }
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => MISSING,
    }
}

/// [`parse_decimal`], with the missing sentinel remapped so that missing
/// cells sort last in ascending order. Same parse, different sentinel sign.
pub fn parse_decimal_ascending(raw: Option<&str>) -> f64 {
    let value = parse_decimal(raw);
    if value == MISSING {
        MISSING_LAST
    } else {
        value
    }
}
