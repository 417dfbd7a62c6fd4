//! Schema normalization: raw pasted text to the canonical record set.
//!
//! Splits the pasted blob into tab-separated rows, maps whichever of the two
//! sheet schemas is active into one canonical row shape, and extracts the
//! typed numeric fields through the locale parser. Individual bad cells
//! degrade to the missing sentinel; short rows are right-padded; only an
//! input without a header row plus at least one data row is rejected.

pub mod columns;

use tracing::debug;
use uuid::Uuid;

use crate::models::{LayoutConfig, ScreenerError, ScreenerMode, ScreenerResult, StockRecord};
use crate::parser::parse_decimal;

use columns::{
    ColumnMap, NETO_COLUMNS, NETO_HEADERS, SIMPLIFIED_COLUMN_COUNT, SIMPLIFIED_HIDDEN_COLUMNS,
    SIMPLIFIED_MARKER, SIMPLIFIED_REMAP, STANDARD_COLUMNS, STANDARD_HEADERS,
    STANDARD_PRICE_DIFF_COLUMN, STANDARD_PROFILE_COLUMN,
};

/// Normalize a pasted sheet into records, headers and layout metadata.
/// Records come back unranked; `analysis::normalize_and_rank` is the full
/// pipeline.
pub fn normalize(raw_text: &str, mode: ScreenerMode) -> Result<ScreenerResult, ScreenerError> {
    let rows = split_rows(raw_text);
    if rows.len() < 2 {
        return Err(ScreenerError::MalformedInput);
    }

    let result = match mode {
        ScreenerMode::Standard => normalize_standard(rows),
        ScreenerMode::Neto => normalize_neto(rows),
    };
    debug!(
        records = result.records.len(),
        %mode,
        "normalized screening sheet"
    );
    Ok(result)
}

/// Split pasted text into rows of cells. The reader is configured as a raw
/// tab-splitter: no header handling, no quoting, rows of any width.
fn split_rows(raw_text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    reader
        .records()
        .filter_map(Result::ok)
        .map(|record| record.iter().map(str::to_string).collect())
        .collect()
}

fn normalize_standard(mut rows: Vec<Vec<String>>) -> ScreenerResult {
    let header_row = rows.remove(0);
    let simplified = header_row
        .first()
        .map(|cell| cell.trim().eq_ignore_ascii_case(SIMPLIFIED_MARKER))
        .unwrap_or(false);

    let records: Vec<StockRecord> = rows
        .into_iter()
        .map(|row| {
            let row = if simplified {
                remap_simplified(row)
            } else {
                pad(row, STANDARD_HEADERS.len())
            };
            build_record(row, &STANDARD_COLUMNS)
        })
        .collect();

    let initial_hidden_columns = if simplified {
        SIMPLIFIED_HIDDEN_COLUMNS.to_vec()
    } else {
        Vec::new()
    };

    ScreenerResult {
        records,
        headers: STANDARD_HEADERS.iter().map(|h| h.to_string()).collect(),
        initial_hidden_columns,
        layout: LayoutConfig {
            sticky_columns: vec![0, STANDARD_COLUMNS.company, STANDARD_COLUMNS.ticker],
            ticker_column: STANDARD_COLUMNS.ticker,
            company_column: STANDARD_COLUMNS.company,
            status_column: Some(1),
            general_rank_column: Some(0),
        },
    }
}

fn normalize_neto(rows: Vec<Vec<String>>) -> ScreenerResult {
    // the input's own header row is discarded; the 21-column set is fixed
    let records: Vec<StockRecord> = rows
        .into_iter()
        .skip(1)
        .map(|row| build_record(pad(row, NETO_HEADERS.len()), &NETO_COLUMNS))
        .collect();

    ScreenerResult {
        records,
        headers: NETO_HEADERS.iter().map(|h| h.to_string()).collect(),
        initial_hidden_columns: Vec::new(),
        layout: LayoutConfig {
            sticky_columns: vec![NETO_COLUMNS.company, NETO_COLUMNS.ticker],
            ticker_column: NETO_COLUMNS.ticker,
            company_column: NETO_COLUMNS.company,
            status_column: None,
            general_rank_column: None,
        },
    }
}

/// Translate a simplified 21-column row into the canonical 33-column shape:
/// copy the mapped columns, synthesize the profile link from the ticker, and
/// back-fill the formatted price-vs-fair percent.
fn remap_simplified(row: Vec<String>) -> Vec<String> {
    let row = pad(row, SIMPLIFIED_COLUMN_COUNT);
    let mut out = vec![String::new(); STANDARD_HEADERS.len()];
    for &(src, dst) in &SIMPLIFIED_REMAP {
        out[dst] = row[src].clone();
    }

    let ticker = out[STANDARD_COLUMNS.ticker].trim().to_lowercase();
    if !ticker.is_empty() {
        out[STANDARD_PROFILE_COLUMN] = format!("https://statusinvest.com.br/acoes/{ticker}");
    }

    let current = parse_decimal(Some(out[STANDARD_COLUMNS.current_price].as_str()));
    let fair = parse_decimal(Some(out[STANDARD_COLUMNS.fair_price].as_str()));
    out[STANDARD_PRICE_DIFF_COLUMN] = format_percent(derive_price_diff(current, fair));

    out
}

/// Build the typed record from a canonical-shape row through one schema's
/// column table.
fn build_record(raw: Vec<String>, map: &ColumnMap) -> StockRecord {
    let cell = |idx: usize| raw.get(idx).map(String::as_str);
    let text = |idx: usize| cell(idx).unwrap_or_default().trim().to_string();

    let ticker = text(map.ticker);
    let current_price = parse_decimal(cell(map.current_price));
    let fair_price = parse_decimal(cell(map.fair_price));
    let price_diff_percent = match map.price_diff {
        Some(idx) => parse_decimal(cell(idx)),
        None => derive_price_diff(current_price, fair_price),
    };

    let id = if ticker.is_empty() {
        format!("row-{}", Uuid::new_v4())
    } else {
        ticker.clone()
    };

    StockRecord {
        id,
        company: text(map.company),
        sector: text(map.sector),
        pl_projected: parse_decimal(cell(map.pl_projected)),
        pl_deviation: parse_decimal(cell(map.pl_deviation)),
        dividend_yield: parse_decimal(cell(map.dividend_yield)),
        margin_of_safety: parse_decimal(cell(map.margin_of_safety)),
        cagr: parse_decimal(cell(map.cagr)),
        debt_to_ebitda: parse_decimal(cell(map.debt_to_ebitda)),
        current_price,
        fair_price,
        price_diff_percent,
        ticker,
        raw,
        rank_pl: 0,
        rank_deviation: 0,
        rank_dividend_yield: 0,
        rank_margin: 0,
        rank_cagr: 0,
        rank_debt: 0,
        rank_total: 0,
        rank_general: 0,
    }
}

/// Percent distance of the current price from the fair price. Zero when
/// either input is missing or the fair price is not positive.
fn derive_price_diff(current: f64, fair: f64) -> f64 {
    if current.is_finite() && fair.is_finite() && fair > 0.0 {
        (current - fair) / fair * 100.0
    } else {
        0.0
    }
}

/// Two-decimal percent string in the sheet locale ("," as decimal point).
fn format_percent(value: f64) -> String {
    format!("{:.2}%", value).replace('.', ",")
}

fn pad(mut row: Vec<String>, width: usize) -> Vec<String> {
    if row.len() < width {
        row.resize(width, String::new());
    }
    row
}
