//! Ranking engine properties over the full pipeline: permutations, rank-sum
//! consistency, direction correctness, missing-worst, default ordering.

use pretty_assertions::assert_eq;
use test_log::test;

use rust_screener::models::{ScreenerMode, StockRecord};
use rust_screener::normalize_and_rank;

use crate::common::fixtures;

fn assert_permutation(ranks: Vec<usize>) {
    let n = ranks.len();
    let mut sorted = ranks;
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=n).collect::<Vec<_>>());
}

#[test]
fn test_all_rank_columns_are_permutations() {
    for n in [1, 2, 7, 40] {
        let sheet = fixtures::simplified_sheet(n);
        let result = normalize_and_rank(&sheet, ScreenerMode::Standard).unwrap();
        let records = &result.records;

        assert_permutation(records.iter().map(|r| r.rank_pl).collect());
        assert_permutation(records.iter().map(|r| r.rank_deviation).collect());
        assert_permutation(records.iter().map(|r| r.rank_dividend_yield).collect());
        assert_permutation(records.iter().map(|r| r.rank_margin).collect());
        assert_permutation(records.iter().map(|r| r.rank_cagr).collect());
        assert_permutation(records.iter().map(|r| r.rank_debt).collect());
        assert_permutation(records.iter().map(|r| r.rank_general).collect());
    }
}

#[test]
fn test_rank_total_is_the_exact_sum() {
    let result =
        normalize_and_rank(&fixtures::simplified_sheet(25), ScreenerMode::Standard).unwrap();
    for record in &result.records {
        let sum = record.rank_pl
            + record.rank_deviation
            + record.rank_dividend_yield
            + record.rank_margin
            + record.rank_cagr
            + record.rank_debt;
        assert_eq!(record.rank_total, sum);
        assert!(record.rank_total >= 6);
        assert!(record.rank_total <= 6 * result.records.len());
    }
}

#[test]
fn test_direction_correctness_for_all_six_metrics() {
    // two rows with strictly better values for "good" on every metric:
    // lower P/L, lower deviation, higher DY, higher margin, higher CAGR,
    // lower debt
    let good = fixtures::simplified_row(
        "Good", "GOOD3", "Setor", "5,0", "-10%", "15%", "0,5", "9%", "R$ 10,00", "R$ 20,00",
        "50%",
    );
    let bad = fixtures::simplified_row(
        "Bad", "BADD3", "Setor", "20,0", "12%", "2%", "4,0", "1%", "R$ 30,00", "R$ 20,00",
        "10%",
    );
    let input = format!("{}\n{}\n{}", fixtures::simplified_header(), good, bad);
    let result = normalize_and_rank(&input, ScreenerMode::Standard).unwrap();

    let find = |ticker: &str| -> &StockRecord {
        result.records.iter().find(|r| r.ticker == ticker).unwrap()
    };
    let good = find("GOOD3");
    let bad = find("BADD3");

    assert!(good.rank_pl < bad.rank_pl);
    assert!(good.rank_deviation < bad.rank_deviation);
    assert!(good.rank_dividend_yield < bad.rank_dividend_yield);
    assert!(good.rank_margin < bad.rank_margin);
    assert!(good.rank_cagr < bad.rank_cagr);
    assert!(good.rank_debt < bad.rank_debt);
    assert_eq!(good.rank_total, 6);
    assert_eq!(good.rank_general, 1);
    assert_eq!(bad.rank_general, 2);
}

#[test]
fn test_missing_values_rank_worst_for_both_directions() {
    // row "NONE3" leaves every metric cell empty
    let rows = [
        fixtures::simplified_row(
            "Full", "FULL3", "Setor", "8,0", "-2%", "5%", "1,0", "4%", "R$ 10,00", "R$ 12,00",
            "15%",
        ),
        fixtures::simplified_row("None", "NONE3", "Setor", "", "", "", "", "", "", "", ""),
        fixtures::simplified_row(
            "Part", "PART3", "Setor", "9,0", "1%", "7%", "2,0", "3%", "R$ 11,00", "R$ 12,00",
            "8%",
        ),
    ];
    let input = format!("{}\n{}", fixtures::simplified_header(), rows.join("\n"));
    let result = normalize_and_rank(&input, ScreenerMode::Standard).unwrap();
    let missing = result.records.iter().find(|r| r.ticker == "NONE3").unwrap();

    // worst of three on every metric, ascending and descending alike
    assert_eq!(missing.rank_pl, 3);
    assert_eq!(missing.rank_deviation, 3);
    assert_eq!(missing.rank_dividend_yield, 3);
    assert_eq!(missing.rank_margin, 3);
    assert_eq!(missing.rank_cagr, 3);
    assert_eq!(missing.rank_debt, 3);
}

#[test]
fn test_default_order_is_price_diff_ascending_with_missing_last() {
    let rows = vec![
        fixtures::standard_row("POS4", "Positive", "12,00%"),
        fixtures::standard_row("MISS3", "Missing", "not a number"),
        fixtures::standard_row("NEG3", "Negative", "-20,00%"),
        fixtures::standard_row("ZERO3", "Zero", "0,00%"),
    ];
    let result =
        normalize_and_rank(&fixtures::standard_sheet(&rows), ScreenerMode::Standard).unwrap();

    let order: Vec<&str> = result.records.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(order, vec!["NEG3", "ZERO3", "POS4", "MISS3"]);

    let diffs: Vec<f64> = result
        .records
        .iter()
        .map(|r| r.price_diff_percent)
        .filter(|d| d.is_finite())
        .collect();
    let mut sorted = diffs.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(diffs, sorted);
}

#[test]
fn test_write_back_fills_the_standard_rank_cells() {
    let rows = vec![
        fixtures::standard_row("ACM3", "Acme", "-5,00%"),
        fixtures::standard_row("BET4", "Beta", "3,00%"),
    ];
    let result =
        normalize_and_rank(&fixtures::standard_sheet(&rows), ScreenerMode::Standard).unwrap();

    for record in &result.records {
        let expected = [
            record.rank_general,
            record.rank_pl,
            record.rank_deviation,
            record.rank_dividend_yield,
            record.rank_margin,
            record.rank_cagr,
            record.rank_debt,
            record.rank_total,
        ];
        for (&column, value) in fixtures::rank_columns().iter().zip(expected) {
            assert_eq!(record.raw[column], value.to_string());
        }
        // the status column between the rank cells is untouched
        assert_eq!(record.raw[1], "c1");
    }
}

#[test]
fn test_neto_rows_keep_ranks_off_the_display_row() {
    let input = "h\nAcme\tACM3\tSetor\nBeta\tBET4\tSetor";
    let result = normalize_and_rank(input, ScreenerMode::Neto).unwrap();

    for record in &result.records {
        assert!(record.rank_general >= 1);
        assert_eq!(record.raw[0], record.company); // no rank written at 0
    }
}
