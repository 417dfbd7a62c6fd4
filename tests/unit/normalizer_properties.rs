//! Normalizer properties: schema detection, remap, fixed headers, failure.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use rust_screener::models::{ScreenerError, ScreenerMode};
use rust_screener::normalize_and_rank;
use rust_screener::normalizer::columns::NETO_HEADERS;

use crate::common::fixtures;

#[test]
fn test_malformed_input_in_both_modes() {
    for mode in [ScreenerMode::Standard, ScreenerMode::Neto] {
        assert_matches!(
            normalize_and_rank("", mode),
            Err(ScreenerError::MalformedInput)
        );
        assert_matches!(
            normalize_and_rank("a single line", mode),
            Err(ScreenerError::MalformedInput)
        );
    }
}

#[test]
fn test_neto_mode_always_emits_the_fixed_header_set() {
    let inputs = [
        "Empresa\tTicker\nAcme\tACM3",
        "some\tcompletely\tdifferent\theader\nAcme\tACM3",
        "x\ny", // single-cell rows
    ];
    for input in inputs {
        let result = normalize_and_rank(input, ScreenerMode::Neto).unwrap();
        assert_eq!(result.headers, NETO_HEADERS.to_vec(), "input {input:?}");
        assert_eq!(result.headers.len(), 21);
    }
}

#[test]
fn test_simplified_remap_example_row() {
    // minimal 21-column "Empresa..." row through standard mode
    let row = fixtures::simplified_row(
        "Acme",
        "ACM3",
        "Setor",
        "10",
        "\u{2212}5%",
        "20%",
        "1,5",
        "5%",
        "R$10,00",
        "R$12,00",
        "20%",
    );
    let input = format!("{}\n{}", fixtures::simplified_header(), row);
    let result = normalize_and_rank(&input, ScreenerMode::Standard).unwrap();

    assert_eq!(result.initial_hidden_columns, vec![1, 27]);
    let record = &result.records[0];
    assert_eq!(record.ticker, "ACM3");
    assert_eq!(record.company, "Acme");
    assert!((record.price_diff_percent - (-16.67)).abs() < 0.01);
}

#[test]
fn test_full_standard_input_passes_through_with_nothing_hidden() {
    let rows = vec![
        fixtures::standard_row("ACM3", "Acme", "-5,00%"),
        fixtures::standard_row("BET4", "Beta", "3,00%"),
    ];
    let result =
        normalize_and_rank(&fixtures::standard_sheet(&rows), ScreenerMode::Standard).unwrap();

    assert!(result.initial_hidden_columns.is_empty());
    assert_eq!(result.records.len(), 2);
    for record in &result.records {
        assert_eq!(record.raw.len(), result.headers.len());
    }
}

#[test]
fn test_layout_metadata_per_mode() {
    let standard = normalize_and_rank(
        &fixtures::simplified_sheet(2),
        ScreenerMode::Standard,
    )
    .unwrap();
    assert_eq!(standard.layout.sticky_columns, vec![0, 9, 10]);
    assert_eq!(standard.layout.ticker_column, 10);
    assert_eq!(standard.layout.company_column, 9);
    assert_eq!(standard.layout.status_column, Some(1));
    assert_eq!(standard.layout.general_rank_column, Some(0));

    let neto = normalize_and_rank("h\nAcme\tACM3", ScreenerMode::Neto).unwrap();
    assert_eq!(neto.layout.sticky_columns, vec![0, 1]);
    assert_eq!(neto.layout.ticker_column, 1);
    assert_eq!(neto.layout.company_column, 0);
    assert_eq!(neto.layout.status_column, None);
    assert_eq!(neto.layout.general_rank_column, None);
}
