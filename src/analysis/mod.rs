//! Multi-factor fundamental ranking.
//!
//! Each of six metrics is ranked independently with its own sort direction,
//! the six ranks are summed into a total, and the total is ranked again (by
//! the same procedure) into the general rank. Missing values never win a
//! rank through the sign of their sentinel: both infinities sort as worst
//! for whichever direction is active. Ties keep input order.

use tracing::info;

use crate::models::{ScreenerError, ScreenerMode, ScreenerResult, StockRecord};
use crate::normalizer::{self, columns};

/// Sort direction of a ranked metric: which end of the scale ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The six ranked metrics with their declared directions.
#[derive(Debug, Clone, Copy)]
pub enum Metric {
    /// Lower valuation multiple ranks better.
    PlProjected,
    /// Smaller (or negative) deviation from the historical average ranks better.
    PlDeviation,
    /// Higher yield ranks better.
    DividendYield,
    /// Higher margin of safety ranks better.
    MarginOfSafety,
    /// Higher growth ranks better.
    Cagr,
    /// Lower leverage ranks better.
    DebtToEbitda,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::PlProjected,
        Metric::PlDeviation,
        Metric::DividendYield,
        Metric::MarginOfSafety,
        Metric::Cagr,
        Metric::DebtToEbitda,
    ];

    pub fn direction(self) -> SortDirection {
        match self {
            Metric::PlProjected | Metric::PlDeviation | Metric::DebtToEbitda => {
                SortDirection::Ascending
            }
            Metric::DividendYield | Metric::MarginOfSafety | Metric::Cagr => {
                SortDirection::Descending
            }
        }
    }

    pub fn value(self, record: &StockRecord) -> f64 {
        match self {
            Metric::PlProjected => record.pl_projected,
            Metric::PlDeviation => record.pl_deviation,
            Metric::DividendYield => record.dividend_yield,
            Metric::MarginOfSafety => record.margin_of_safety,
            Metric::Cagr => record.cagr,
            Metric::DebtToEbitda => record.debt_to_ebitda,
        }
    }

    fn assign(self, record: &mut StockRecord, rank: usize) {
        match self {
            Metric::PlProjected => record.rank_pl = rank,
            Metric::PlDeviation => record.rank_deviation = rank,
            Metric::DividendYield => record.rank_dividend_yield = rank,
            Metric::MarginOfSafety => record.rank_margin = rank,
            Metric::Cagr => record.rank_cagr = rank,
            Metric::DebtToEbitda => record.rank_debt = rank,
        }
    }
}

/// The full pipeline: normalize the pasted sheet, then rank the records.
/// This is the single entry point the UI shell consumes.
pub fn normalize_and_rank(
    raw_text: &str,
    mode: ScreenerMode,
) -> Result<ScreenerResult, ScreenerError> {
    let mut result = normalizer::normalize(raw_text, mode)?;
    rank(&mut result.records);
    info!(records = result.records.len(), %mode, "processed screening sheet");
    Ok(result)
}

/// Rank the record set in place: six metric ranks, the total, the general
/// rank, the display-row write-back, and finally the default display order
/// (price-vs-fair percent ascending, missing last).
pub fn rank(records: &mut [StockRecord]) {
    for metric in Metric::ALL {
        let keys: Vec<f64> = records
            .iter()
            .map(|r| sort_key(metric.value(r), metric.direction()))
            .collect();
        for (record, position) in records.iter_mut().zip(rank_positions(&keys)) {
            metric.assign(record, position);
        }
    }

    for record in records.iter_mut() {
        record.rank_total = record.metric_ranks().iter().sum();
    }

    // the general rank is a seventh application of the same procedure,
    // over the total, ascending
    let keys: Vec<f64> = records
        .iter()
        .map(|r| sort_key(r.rank_total as f64, SortDirection::Ascending))
        .collect();
    for (record, position) in records.iter_mut().zip(rank_positions(&keys)) {
        record.rank_general = position;
    }

    for record in records.iter_mut() {
        apply_rank_cells(record);
    }

    records.sort_by(|a, b| {
        sort_key(a.price_diff_percent, SortDirection::Ascending)
            .total_cmp(&sort_key(b.price_diff_percent, SortDirection::Ascending))
    });
}

/// Direction-adjusted sort key. Finite values keep (or flip) their order;
/// both missing sentinels land at the worst end for the active direction.
fn sort_key(value: f64, direction: SortDirection) -> f64 {
    if !value.is_finite() {
        return f64::INFINITY;
    }
    match direction {
        SortDirection::Ascending => value,
        SortDirection::Descending => -value,
    }
}

/// Stable positional ranking: 1-based rank per input index. Equal keys keep
/// input order.
fn rank_positions(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));

    let mut ranks = vec![0; keys.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// The computed rank values in display-column write order: general, P/L,
/// deviation, DY, margin, CAGR, debt, total. Defined for every record
/// regardless of its row shape.
pub fn rank_cells(record: &StockRecord) -> [usize; 8] {
    [
        record.rank_general,
        record.rank_pl,
        record.rank_deviation,
        record.rank_dividend_yield,
        record.rank_margin,
        record.rank_cagr,
        record.rank_debt,
        record.rank_total,
    ]
}

/// Write the rank cells into the display row. Only rows with the standard
/// 33-column shape carry rank columns; neto rows keep their ranks on the
/// typed record alone.
fn apply_rank_cells(record: &mut StockRecord) {
    if record.raw.len() < columns::STANDARD_HEADERS.len() {
        return;
    }
    let values = rank_cells(record);
    for (&column, value) in columns::STANDARD_RANK_COLUMNS.iter().zip(values) {
        record.raw[column] = value.to_string();
    }
}
